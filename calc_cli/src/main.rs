//! # Vertex CLI Application
//!
//! Command-line front end for `calc_core`.
//!
//! ```text
//! calc_cli run --input request.json     # one tagged calculation request
//! calc_cli import beams.csv             # beam checks from a sheet
//! calc_cli methods                      # factor tables per design method
//! ```
//!
//! Results are printed to stdout as JSON. Engine errors are printed to
//! stderr as the structured `CalcError` JSON; the exit code is 1 on any
//! failure.

mod logger;
mod settings;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_core::design::import_beam_rows;
use calc_core::loads::LoadType;
use calc_core::{CalcError, CalculationItem, DesignMethod};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use settings::CliSettings;

#[derive(Debug, Parser)]
#[command(name = "calc_cli")]
#[command(about = "Structural design calculations from JSON requests and CSV sheets")]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging from the engine
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one calculation request (reads stdin when no file is given)
    Run {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Run beam checks for every row of a CSV sheet (first row is a header)
    Import { file: PathBuf },
    /// Print the load and resistance factors of each design method
    Methods,
}

fn print_json<T: Serialize>(value: &T, settings: &CliSettings) -> Result<()> {
    let text = if settings.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn read_request(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read request from stdin")?;
            Ok(buffer)
        }
    }
}

fn run_request(input: Option<&Path>, settings: &CliSettings) -> Result<()> {
    let request = read_request(input)?;
    let item: CalculationItem = serde_json::from_str(&request).map_err(CalcError::from)?;
    tracing::info!(calculator = item.calc_type(), "running calculation");

    let output = item
        .calculate()
        .with_context(|| format!("{} calculation failed", item.calc_type()))?;
    print_json(&output, settings)
}

fn read_sheet(path: &Path, settings: &CliSettings) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(settings.import.delimiter_byte()?)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn import_sheet(path: &Path, settings: &CliSettings) -> Result<()> {
    let rows = read_sheet(path, settings)?;
    tracing::info!(rows = rows.len(), "sheet loaded");

    let result = import_beam_rows(&rows).with_context(|| format!("failed to import {}", path.display()))?;
    if result.count + 1 < rows.len() {
        tracing::warn!(
            skipped = rows.len() - 1 - result.count,
            "some rows were skipped; run with --verbose for details"
        );
    }
    print_json(&result, settings)
}

/// Factor tables per method, each with the load types it combines.
fn method_tables() -> Vec<Value> {
    DesignMethod::ALL
        .iter()
        .map(|method| {
            let factors = method.load_factors();
            let loads: Vec<_> = LoadType::ALL
                .iter()
                .map(|load| {
                    json!({
                        "code": load.code(),
                        "description": load.description(),
                        "variable": load.is_variable(),
                        "factor": factors.factor(*load),
                    })
                })
                .collect();
            json!({
                "method": method,
                "combination": factors,
                "equation": factors.equation(),
                "loads": loads,
                "resistance_factor": method.resistance_factor(),
            })
        })
        .collect()
}

fn print_methods(settings: &CliSettings) -> Result<()> {
    print_json(&method_tables(), settings)
}

fn execute(cli: &Cli) -> Result<()> {
    let settings = CliSettings::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Run { input } => run_request(input.as_deref(), &settings),
        Command::Import { file } => import_sheet(file, &settings),
        Command::Methods => print_methods(&settings),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            match err.downcast_ref::<CalcError>() {
                Some(calc_err) => match serde_json::to_string(calc_err) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("error: {calc_err}"),
                },
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_global_flags() {
        let cli = Cli::try_parse_from(["calc_cli", "run", "--input", "req.json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Run { input } => assert_eq!(input, Some(PathBuf::from("req.json"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_import() {
        let cli = Cli::try_parse_from(["calc_cli", "--config", "vertex.toml", "import", "beams.csv"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("vertex.toml")));
        assert!(matches!(cli.command, Command::Import { .. }));
    }

    #[test]
    fn test_method_tables_list_load_types() {
        let tables = method_tables();
        assert_eq!(tables.len(), DesignMethod::ALL.len());

        let sp24 = &tables[0];
        assert_eq!(sp24["method"], "SP24");
        let loads = sp24["loads"].as_array().unwrap();
        assert_eq!(loads.len(), 3);
        assert_eq!(loads[0]["code"], "G");
        assert_eq!(loads[0]["description"], "Permanent load");
        assert_eq!(loads[0]["variable"], false);
        assert_eq!(loads[2]["description"], "Short-term variable load");
        assert_eq!(loads[2]["variable"], true);
        assert!((loads[0]["factor"].as_f64().unwrap() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_engine_error_survives_context() {
        let err: anyhow::Error = anyhow::Error::new(CalcError::EmptySheet).context("importing beams.csv");
        assert_eq!(err.downcast_ref::<CalcError>(), Some(&CalcError::EmptySheet));
    }
}
