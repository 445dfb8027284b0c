use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use questlog::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Questlog - check off daily tasks, claim experience, level up")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.questlog/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (commands are read from stdin)
    Play {
        /// Print events and snapshots as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the configured tasks
    Tasks,

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the session output
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        Some(Commands::Tasks) => {
            let config = Config::load(cli.config.as_deref())?;
            cli::tasks::tasks_command(&config)?;
        }
        Some(Commands::Play { json }) => {
            let config = Config::load(cli.config.as_deref())?;
            cli::play::play_command(&config, json)?;
        }
        None => {
            // Default: play in text mode
            let config = Config::load(cli.config.as_deref())?;
            cli::play::play_command(&config, false)?;
        }
    }

    Ok(())
}
