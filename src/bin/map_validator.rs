//! Map Validator CLI
//!
//! Validates a single tile-map file and prints the result as JSON.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use map_validator::{render, OutputFormat, TileMap, ValidatorConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: map-validator <map-json-file>";

#[derive(Parser)]
#[command(name = "map-validator")]
#[command(about = "Check a tile map's declared dimensions against its tiles")]
#[command(version)]
struct Cli {
    /// Path to the map JSON file
    map: Option<PathBuf>,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,

    /// Extra config file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Anything after the map path is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(map_path) = cli.map.clone() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    if !cli.rest.is_empty() {
        debug!(ignored = cli.rest.len(), "Ignoring arguments after the map path");
    }

    let format = match output_format(&cli) {
        Ok(format) => format,
        Err(e) => {
            println!("Error loading config: {e:#}");
            std::process::exit(1);
        }
    };

    let map = match TileMap::load(&map_path) {
        Ok(map) => map,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let result = map.validate();
    info!(
        path = %map_path.display(),
        valid = result.is_valid(),
        errors = result.error_count(),
        "Validated map"
    );

    match render(&result, format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            println!("Error encoding result: {e}");
            std::process::exit(1);
        }
    }

    std::process::exit(result.exit_code());
}

fn output_format(cli: &Cli) -> anyhow::Result<OutputFormat> {
    if cli.compact {
        return Ok(OutputFormat::Compact);
    }
    let config = ValidatorConfig::load_from(cli.config.as_deref())
        .context("failed to read validator configuration")?;
    Ok(config.output.format)
}
