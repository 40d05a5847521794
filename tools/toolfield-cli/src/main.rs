//! Toolfield CLI: render and inspect decorative particle fields.
//!
//! Usage:
//!   toolfield render [OPTIONS]     Render a frame sequence to PNG files
//!   toolfield simulate [OPTIONS]   Integrate a field headlessly and report
//!   toolfield live [OPTIONS]       Run the live frame loop for a while
//!   toolfield count                Element count for a viewport
//!   toolfield themes               List built-in themes
//!   toolfield config               Show or initialise the config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use toolfield_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "toolfield",
    about = "Animated tool and hardware backgrounds, rendered offline",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a frame sequence to numbered PNG files
    Render {
        /// Theme name (tools, hardware)
        #[arg(short, long)]
        theme: Option<String>,

        /// Output width
        #[arg(long)]
        width: Option<u32>,

        /// Output height
        #[arg(long)]
        height: Option<u32>,

        /// Number of frames
        #[arg(short, long)]
        frames: Option<u64>,

        /// Layout seed
        #[arg(long)]
        seed: Option<u64>,

        /// JSONL script of pointer and resize events
        #[arg(long, conflicts_with = "orbit")]
        events: Option<PathBuf>,

        /// Circle the pointer around the centre this many times
        #[arg(long)]
        orbit: Option<f64>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Background color as hex (#rrggbb or #rrggbbaa)
        #[arg(long, default_value = "#faf8f4")]
        background: String,
    },

    /// Integrate a field without drawing and report its state
    Simulate {
        /// Theme name (tools, hardware)
        #[arg(short, long)]
        theme: Option<String>,

        /// Viewport width
        #[arg(long)]
        width: Option<f64>,

        /// Viewport height
        #[arg(long)]
        height: Option<f64>,

        /// Ticks to integrate
        #[arg(long, default_value = "600")]
        ticks: u64,

        /// Layout seed
        #[arg(long)]
        seed: Option<u64>,

        /// JSONL script of pointer and resize events
        #[arg(long)]
        events: Option<PathBuf>,

        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the live frame loop on an offscreen surface and report frame rate
    Live {
        /// Theme name (tools, hardware)
        #[arg(short, long)]
        theme: Option<String>,

        /// Viewport width
        #[arg(long)]
        width: Option<u32>,

        /// Viewport height
        #[arg(long)]
        height: Option<u32>,

        /// Target FPS
        #[arg(long)]
        fps: Option<u32>,

        /// How long to run (seconds)
        #[arg(long, default_value = "3.0")]
        secs: f64,
    },

    /// Show how many elements a viewport gets
    Count {
        /// Viewport width
        width: f64,

        /// Viewport height
        height: f64,

        /// Theme name (tools, hardware)
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// List built-in themes and their tuning
    Themes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file with --init
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    toolfield_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Render {
            theme,
            width,
            height,
            frames,
            seed,
            events,
            orbit,
            output,
            background,
        } => {
            commands::render::run(
                &config,
                commands::render::RenderArgs {
                    theme,
                    width,
                    height,
                    frames,
                    seed,
                    events,
                    orbit,
                    output,
                    background,
                },
            )
            .await
        }
        Commands::Simulate {
            theme,
            width,
            height,
            ticks,
            seed,
            events,
            json,
        } => commands::simulate::run(&config, theme, width, height, ticks, seed, events, json),
        Commands::Live {
            theme,
            width,
            height,
            fps,
            secs,
        } => commands::live::run(&config, theme, width, height, fps, secs).await,
        Commands::Count {
            width,
            height,
            theme,
        } => commands::count::run(&config, width, height, theme),
        Commands::Themes { json } => commands::themes::run(json),
        Commands::Config { init, force } => commands::config::run(&config, init, force),
    }
}
