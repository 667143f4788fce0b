//! `cave-map`: generate a cave from the command line
//!
//! Run with: cave-map --seed 42 --width 80 --height 40 --json cave.json

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cave_map::prelude::*;
use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cave-map")]
#[command(about = "Generate a connected cave map with cellular automata")]
struct Args {
    /// TOML file with generation parameters (defaults for anything missing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed (uses a random seed if neither this nor the config sets one)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Map width in tiles
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Map height in tiles
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Write the tile map as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the preview and report, log warnings only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every pipeline stage
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("could not serialize map: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) {
    let default_level = if args.quiet {
        "warn"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = build_config(args)?;
    let output = generate_cave(&config)?;

    if !args.quiet {
        print!("{}", output.grid);
        println!();
        println!("{}", output.report);
    }

    if let Some(path) = &args.json {
        write_json(&output.map, path)?;
        info!(path = %path.display(), "wrote tile map");
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
///
/// Validation is left to generation, so a flag can repair a bad file value.
fn build_config(args: &Args) -> Result<CaveConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&content)?
        }
        None => CaveConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    Ok(config)
}

fn write_json(map: &TileMap, path: &Path) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(map)?;
    fs::write(path, json).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
