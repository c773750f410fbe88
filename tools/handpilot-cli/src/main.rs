//! HandPilot CLI — replay and inspect recorded gesture sessions.
//!
//! Usage:
//!   handpilot replay <PATH>    Replay a session through the gesture pipeline
//!   handpilot info <PATH>      Show session information

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "handpilot",
    about = "Gesture virtual mouse: session replay and inspection",
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
    /// Replay a recorded session through the gesture pipeline
    Replay {
        /// Path to the session JSONL file
        path: PathBuf,

        /// Playback speed multiplier
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Skip frame timing and process as fast as possible
        #[arg(long)]
        instant: bool,

        /// Sensitivity mode: slow|normal|fast
        #[arg(long, default_value = "normal")]
        sensitivity: String,

        /// Custom sensitivity multiplier [0.1, 5.0], overrides the mode
        #[arg(long)]
        sensitivity_scale: Option<f64>,

        /// Write the gesture history to this JSON file after replay
        #[arg(long)]
        history_out: Option<PathBuf>,
    },

    /// Show session file information
    Info {
        /// Path to the session JSONL file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    handpilot_common::logging::init_logging(&handpilot_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Replay {
            path,
            speed,
            instant,
            sensitivity,
            sensitivity_scale,
            history_out,
        } => commands::replay::run(
            path,
            speed,
            instant,
            sensitivity,
            sensitivity_scale,
            history_out,
        ),
        Commands::Info { path } => commands::info::run(path),
    }
}
