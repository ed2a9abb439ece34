use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fight_tracker::config::AppConfig;
use fight_tracker::models::Outcome;
use fight_tracker::session::commands::{self, Request};
use fight_tracker::session::{console, Session};
use fight_tracker::storage::ResultLog;

#[derive(Parser)]
#[command(name = "fight-tracker")]
#[command(about = "Track fighting game match results and who you beat or lose to most")]
#[command(version)]
struct Cli {
    /// Path to configuration file (used only if it exists)
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one match result
    Record {
        /// Match outcome: win or loss
        #[arg(long)]
        outcome: Outcome,

        /// Opponent name or roster number
        #[arg(long)]
        opponent: String,
    },

    /// Show who you lose to and beat most often
    Results {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete all recorded results
    Clear,

    /// List the selectable opponents
    Roster,

    /// Start an interactive session on the terminal
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    // Initialize tracing; logs go to stderr so stdout only carries results
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::debug!("Starting fight-tracker v{}", env!("CARGO_PKG_VERSION"));

    let log = ResultLog::from_config(&config.storage());
    tracing::debug!("Using result log at {:?}", log.path());
    let mut session = Session::new(log, config.roster.clone());

    let request = match cli.command {
        Commands::Record { outcome, opponent } => Request::Record { outcome, opponent },
        Commands::Results { json } => Request::Results { json },
        Commands::Clear => Request::Clear,
        Commands::Roster => Request::Roster,
        Commands::Interactive => {
            let stdin = io::stdin();
            console::run(&mut session, stdin.lock(), io::stdout())?;
            return Ok(());
        }
    };

    commands::execute(&mut session, request, io::stdout().lock())?;

    Ok(())
}
