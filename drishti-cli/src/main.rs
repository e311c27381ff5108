//! Drishti - camera localization from visible shop names
//!
//! Command line front end for the offline index build and for queries:
//!
//! - `stats`: rasterize a venue and report the label distribution
//! - `build-index`: sweep every corridor origin and write the index
//! - `locate`: look up the poses matching recognized shop names
//! - `render`: draw the venue (and its label grid) as SVG

mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use drishti::DrishtiConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::Result;

#[derive(Parser)]
#[command(name = "drishti")]
#[command(version, about = "Estimate camera pose from the shop names visible in a photo")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file (defaults to configs/drishti.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rasterize the venue and log grid statistics
    Stats {
        /// Shop annotation file
        #[arg(long)]
        shops: PathBuf,

        /// Corridor annotation file
        #[arg(long)]
        corridors: Option<PathBuf>,
    },

    /// Build the signature index offline
    BuildIndex {
        /// Shop annotation file
        #[arg(long)]
        shops: PathBuf,

        /// Corridor annotation file (index origins)
        #[arg(long)]
        corridors: PathBuf,

        /// Output index file
        #[arg(short, long, default_value = "index.json")]
        output: PathBuf,
    },

    /// Look up candidate poses for an observation
    Locate {
        /// Index file written by build-index
        #[arg(long)]
        index: PathBuf,

        /// Recorded recognizer response for the photo
        #[arg(long, conflicts_with = "shop")]
        detections: Option<PathBuf>,

        /// Photo to recognize (sent to the live recognizer unless --detections is given)
        #[arg(long, conflicts_with = "shop")]
        photo: Option<PathBuf>,

        /// Recognizer API key (overrides recognizer.api_key)
        #[arg(long)]
        api_key: Option<String>,

        /// Observed shop name (repeatable)
        #[arg(long = "shop")]
        shop: Vec<String>,

        /// Write an SVG of the candidates
        #[arg(long, requires = "shops")]
        render: Option<PathBuf>,

        /// Shop annotation file for rendering
        #[arg(long)]
        shops: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the venue as SVG
    Render {
        /// Shop annotation file
        #[arg(long)]
        shops: PathBuf,

        /// Corridor annotation file
        #[arg(long)]
        corridors: Option<PathBuf>,

        /// Output SVG file
        #[arg(short, long, default_value = "map.svg")]
        output: PathBuf,

        /// Skip the rasterized grid background
        #[arg(long)]
        no_grid: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<DrishtiConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            DrishtiConfig::load(path)?
        }
        None => DrishtiConfig::load_default()?,
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.verbose {
        0 => "drishti=info,drishti_cli=info",
        1 => "drishti=debug,drishti_cli=debug",
        _ => "drishti=trace,drishti_cli=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    info!("Drishti v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Stats { shops, corridors } => commands::stats(&config, &shops, corridors.as_deref()),
        Commands::BuildIndex {
            shops,
            corridors,
            output,
        } => commands::build_index(&config, &shops, &corridors, &output),
        Commands::Locate {
            index,
            detections,
            photo,
            api_key,
            shop,
            render,
            shops,
            json,
        } => {
            let mut config = config;
            if let Some(key) = api_key {
                config.recognizer.api_key = key;
            }
            let observation = match (detections, photo) {
                (Some(path), photo) => commands::Observation::Recorded {
                    detections: path,
                    photo,
                },
                (None, Some(photo)) => commands::Observation::Photo(photo),
                (None, None) => commands::Observation::Names(shop),
            };
            let render = render.zip(shops);
            commands::locate(&config, &index, observation, render, json)
        }
        Commands::Render {
            shops,
            corridors,
            output,
            no_grid,
        } => commands::render(&config, &shops, corridors.as_deref(), &output, !no_grid),
    }
}
