// petgal - terminal multi-search image gallery
//
// Fetches small batches of dog, cat, or sea pictures from three public
// image APIs and shows them in a terminal UI.
//
// Architecture:
// - Fetch worker (reqwest): calls the providers, normalizes responses
// - TUI (ratatui): category tabs, search box, card grid
// - Event system: mpsc channels connect the two tasks

mod cli;
mod config;
mod demo;
mod events;
mod gallery;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use events::{FetchOutcome, FetchRequest};
use gallery::fetch::GalleryFetcher;
use gallery::Category;
use logging::{LogBuffer, TuiLogLayer};
use std::io::Write;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --reset, --edit, --path)
    let cli = cli::Cli::parse();
    if cli::handle_cli(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    config.demo_mode |= cli.demo;

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // Initialize tracing with conditional output
    // In TUI mode: capture logs to the buffer (prevents garbling the display)
    // In headless mode: logs go to stderr, stdout stays clean for JSON output
    // File logging: optionally write daily-rotated JSON files as well
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("petgal={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's lifetime so file logs flush
    let _file_guard = init_tracing(&config, filter, log_buffer.clone());

    // One channel pair wires the UI (or headless driver) to the fetch worker
    let (request_tx, request_rx) = mpsc::channel::<FetchRequest>(16);
    let (outcome_tx, outcome_rx) = mpsc::channel::<FetchOutcome>(16);

    // Spawn the fetch worker (or the demo worker serving canned batches)
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE - serving canned batches");
        tokio::spawn(demo::run_demo_worker(request_rx, outcome_tx));
    } else {
        let fetcher = GalleryFetcher::new(&config)?;
        tokio::spawn(gallery::fetch::run_worker(fetcher, request_rx, outcome_tx));
    }

    if config.enable_tui {
        tracing::info!("Starting TUI");
        tui::run_tui(&config, log_buffer, request_tx, outcome_rx).await?;
    } else {
        tracing::info!("TUI disabled, running one headless fetch");
        run_headless(request_tx, outcome_rx).await?;
    }

    Ok(())
}

/// Set up the tracing subscriber; returns the appender guard when file
/// logging is active.
fn init_tracing(
    config: &Config,
    filter: EnvFilter,
    log_buffer: LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                );
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                // The file layer is built per branch: fmt::Layer is generic
                // over the subscriber it sits on, and the two stacks differ.
                if config.enable_tui {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                }
                return Some(guard);
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall through to non-file logging
            }
        }
    }

    if config.enable_tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    None
}

/// Headless mode: fetch one batch for the default category and print the
/// items as JSON lines on stdout.
async fn run_headless(
    request_tx: mpsc::Sender<FetchRequest>,
    mut outcome_rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let request = FetchRequest {
        seq: 1,
        category: Category::default(),
        query: String::new(),
    };
    request_tx.send(request).await?;

    let Some(outcome) = outcome_rx.recv().await else {
        anyhow::bail!("fetch worker exited before answering");
    };

    match outcome.result {
        Ok(items) => {
            let mut stdout = std::io::stdout().lock();
            for item in &items {
                serde_json::to_writer(&mut stdout, item)?;
                writeln!(stdout)?;
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("fetch failed: {}", e);
            std::process::exit(1);
        }
    }
}
