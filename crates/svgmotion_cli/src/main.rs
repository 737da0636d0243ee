//! svgmotion CLI
//!
//! Builds an SVG scene in memory and plays the lettering and tween demo on it.

mod config;
mod demo;
mod easings;
mod scene;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::SceneConfig;
use crate::scene::Scene;

#[derive(Parser)]
#[command(name = "svgmotion")]
#[command(about = "Letter-by-letter SVG text reveals and attribute tweens")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the demo sequence
    Run {
        /// Scene file, or a directory containing svgmotion.toml
        /// (default: ./svgmotion.toml if present, else the built-in scene)
        #[arg(short, long)]
        scene: Option<PathBuf>,

        /// Override the number of rect passes
        #[arg(long)]
        cycles: Option<u32>,

        /// Print the final SVG markup
        #[arg(long)]
        markup: bool,
    },

    /// Preview the easing table
    Easings {
        /// Samples per curve
        #[arg(short = 'n', long, default_value_t = 10)]
        samples: usize,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default scene file
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            scene,
            cycles,
            markup,
        } => cmd_run(scene, cycles, markup),
        Commands::Easings { samples, json } => easings::print_table(samples, json),
        Commands::Init { path } => cmd_init(path),
    }
}

fn cmd_run(scene_path: Option<PathBuf>, cycles: Option<u32>, markup: bool) -> Result<()> {
    let mut config = SceneConfig::load_or_default(scene_path.as_deref(), Path::new("."))?;
    if let Some(cycles) = cycles {
        config.timing.rect_cycles = cycles;
    }
    let scene = Scene::build(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start the animation runtime")?;
    let report = runtime.block_on(demo::run(&scene, &config.timing))?;

    tracing::info!(
        reveals = report.reveals,
        rect_cycles = report.rect_cycles,
        "done"
    );
    if markup {
        println!("{}", scene.to_markup());
    }
    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    let target = SceneConfig::write_default(&path)?;
    tracing::info!("Created {}", target.display());
    Ok(())
}
