//! dgen: generate one BSP dungeon map and print it
//!
//! ```text
//! dgen --width 80 --height 40 --seed 42 --genre fantasy --stats
//! dgen --config level.json --rng chacha --format json
//! ```

mod logger;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use strum::Display;
use thiserror::Error;

use dgen_core::{ConfigError, Generator, GeneratorConfig, Genre, Passes};
use dgen_rng::{DungeonRng, GameRng, Isaac64};

use crate::report::Report;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Config file error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Random engine behind the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RngKind {
    /// ISAAC64, reproduces recorded maps
    #[default]
    Isaac,
    /// ChaCha8
    Chacha,
}

impl RngKind {
    fn build(self, seed: u64) -> Box<dyn DungeonRng> {
        match self {
            RngKind::Isaac => Box::new(Isaac64::new(seed)),
            RngKind::Chacha => Box::new(GameRng::new(seed)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Format {
    #[default]
    Ascii,
    Json,
}

/// BSP dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dgen")]
#[command(author, version, about = "Generate a rooms-and-corridors dungeon map", long_about = None)]
struct Args {
    /// Map width in tiles
    #[arg(long)]
    width: Option<usize>,

    /// Map height in tiles
    #[arg(long)]
    height: Option<usize>,

    /// Seed; a random one is picked (and logged) when omitted
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Tile theme: generic, fantasy, scifi, horror, cyberpunk, postapoc
    #[arg(short = 'g', long)]
    genre: Option<String>,

    /// Minimum splittable region size
    #[arg(long)]
    min_size: Option<i32>,

    /// Maximum room width/height
    #[arg(long)]
    max_size: Option<i32>,

    /// Random engine
    #[arg(long, value_enum, default_value_t = RngKind::Isaac)]
    rng: RngKind,

    /// JSON file holding a generator configuration; flags override its fields
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Draw secret walls as 'S' instead of wall
    #[arg(long)]
    reveal_secrets: bool,

    /// Print statistics below the ASCII map
    #[arg(long)]
    stats: bool,

    /// Skip the door pass
    #[arg(long)]
    no_doors: bool,

    /// Skip the secret-wall pass
    #[arg(long)]
    no_secrets: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: &Path) -> Result<GeneratorConfig, CliError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Start from the config file (or defaults) and apply command-line overrides.
fn build_config(args: &Args) -> Result<GeneratorConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            load_config(path)?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(min_size) = args.min_size {
        config.min_size = min_size;
    }
    if let Some(max_size) = args.max_size {
        config.max_size = max_size;
    }
    if let Some(genre) = &args.genre {
        config.genre = Genre::from_id(genre);
    }
    if args.no_doors {
        config.passes.remove(Passes::DOORS);
    }
    if args.no_secrets {
        config.passes.remove(Passes::SECRETS);
    }

    config.validate()?;
    Ok(config)
}

/// Generate and format one map.
fn render(args: &Args, config: &GeneratorConfig, seed: u64) -> Result<String, CliError> {
    let mut generator = Generator::with_config(config, args.rng.build(seed))?;
    let (root, grid) = generator.generate();
    let report = Report::new(seed, args.rng, config, &root, &grid);

    Ok(match args.format {
        Format::Ascii => report.to_ascii(args.reveal_secrets, args.stats),
        Format::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    logger::init(args.verbose)?;
    let config = build_config(args)?;
    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    log::info!(
        "generating {}x{} {} map with {} seed {}",
        config.width,
        config.height,
        config.genre,
        args.rng,
        seed
    );

    let output = render(args, &config, seed)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dgen: {e}");
            ExitCode::FAILURE
        }
    }
}
