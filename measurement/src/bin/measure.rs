/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use log::info;

use measurement::{MeasurementSystem, UnitError};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// SmartM Measurement Demo
///
/// Defines a simple dimension and some free-standing units, then
/// parses quantities against them and prints each quantity with the
/// dimension of its unit.
struct Args {
    #[clap(long, default_value = "length")]
    /// Name of the simple dimension to define.
    dimension: String,
    #[clap(long, default_value = "l")]
    /// Symbol of the simple dimension.
    dimension_symbol: String,
    #[clap(long, default_value = "meter")]
    /// Name of the dimension's base unit.
    base_unit: String,
    #[clap(long, default_value = "m")]
    /// Symbol of the dimension's base unit.
    base_unit_symbol: String,
    #[clap(
        long = "unit",
        value_name = "NAME:SYMBOL",
        value_parser = parse_unit_arg
    )]
    /// Register a free-standing unit. Can be given multiple times.
    units: Vec<(String, String)>,
    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase verbosity. Can be given multiple times.
    verbose: u8,
    #[clap(default_value = "45.9 m")]
    /// The quantities to parse, e.g. "45.9 m".
    quantities: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => simplelog::LevelFilter::Off,
        1 => simplelog::LevelFilter::Error,
        2 => simplelog::LevelFilter::Warn,
        3 => simplelog::LevelFilter::Info,
        4 => simplelog::LevelFilter::Debug,
        5.. => simplelog::LevelFilter::Trace,
    };

    if let Err(e) = simplelog::TermLogger::init(
        log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = measure(&args) {
        eprintln!("Error: {}", e);
        process::exit(1)
    }
}

fn measure(args: &Args) -> Result<(), UnitError> {
    let mut system = MeasurementSystem::new();

    system.create_simple_dimension(
        &args.dimension,
        &args.dimension_symbol,
        &args.base_unit,
        &args.base_unit_symbol,
    )?;
    for (name, symbol) in &args.units {
        system.create_unit(name.as_str(), symbol.as_str());
    }
    info!(
        "registered {} unit(s) in {} dimension(s)",
        system.units().count(),
        system.simple_dimensions().count()
    );

    for input in &args.quantities {
        let quantity = system.parse_quantity(input)?;
        match system.dimension_of(quantity.unit())? {
            Some(dimension) => println!("{}\t{}", quantity, dimension),
            None => println!("{}\t-", quantity),
        }
    }

    Ok(())
}

fn parse_unit_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once(':') {
        Some((name, symbol)) if !name.is_empty() && !symbol.is_empty() => {
            Ok((name.to_string(), symbol.to_string()))
        }
        _ => Err(format!("expected NAME:SYMBOL, got {:?}", arg)),
    }
}
