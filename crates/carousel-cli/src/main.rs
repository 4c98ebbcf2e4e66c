use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A looping page carousel in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive carousel
    Run {
        /// Number of demo pages
        #[arg(short = 'n', long)]
        items: Option<usize>,
        /// Enable looping
        #[arg(long = "loop")]
        looping: bool,
        /// Enable autoplay (requires looping)
        #[arg(long)]
        autoplay: bool,
    },
    /// Drive a headless carousel and print page changes
    Simulate {
        /// Number of items in the dataset
        #[arg(short = 'n', long, default_value_t = 5)]
        items: usize,
        /// Enable looping
        #[arg(long = "loop")]
        looping: bool,
        /// Clone pages per side when looping
        #[arg(short, long)]
        pad: Option<usize>,
        /// Number of navigation steps
        #[arg(short, long, default_value_t = 8)]
        steps: usize,
        /// Navigate backwards
        #[arg(long)]
        prev: bool,
        /// Print one JSON object per step
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; the TUI owns the terminal, so it logs to a file
    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    let log_file = if interactive {
        dirs::cache_dir().map(|dir| dir.join("carousel").join("carousel.log"))
    } else {
        None
    };
    init_logging(&config.general.log_level, log_file.as_deref())?;

    match cli.command {
        Some(Commands::Run {
            items,
            looping,
            autoplay,
        }) => {
            let config = commands::run::apply_overrides(config, items, looping, autoplay);
            commands::run::run(Arc::new(config)).await
        }
        None => commands::run::run(Arc::new(config)).await,
        Some(Commands::Simulate {
            items,
            looping,
            pad,
            steps,
            prev,
            json,
        }) => {
            let options = commands::simulate::SimulateOptions {
                items,
                looping,
                pad,
                steps,
                prev,
                json,
            };
            commands::simulate::run(config, options).await
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Path => commands::config::path(),
        },
    }
}

fn init_logging(level: &str, file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
    Ok(())
}
