//! hidkvmd entry point.
//!
//! Wires together the configuration, the report sink, the writer task, and
//! the stdin event source, then waits for Ctrl-C or end of input.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config() + CLI overrides
//!  └─ GadgetWriter::open()  (or LoggingSink with --dry-run)
//!  └─ spawn_writer_task()   -- single owner of the device handle
//!  └─ spawn_stdin_source()  -- "down <keysym>" / "up <keysym>" lines
//!  └─ wait for Ctrl-C or EOF, then Shutdown -> release keys -> close device
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hidkvm_core::GadgetWriter;
use hidkvm_daemon::application::inject_keys::{InjectKeysUseCase, ReportSink};
use hidkvm_daemon::infrastructure::{
    config::{load_config, DEFAULT_CONFIG_PATH},
    dispatch::{spawn_writer_task, WriterCommand, EVENT_QUEUE_DEPTH},
    dry_run::LoggingSink,
    event_source::spawn_stdin_source,
};

/// Keyboard injection daemon for a USB HID gadget.
#[derive(Debug, Parser)]
#[command(name = "hidkvmd", version, about)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, env = "HIDKVM_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// HID gadget device node (overrides the config file).
    #[arg(long, env = "HIDKVM_DEVICE")]
    device: Option<PathBuf>,

    /// Log reports instead of writing them to the device.
    #[arg(long)]
    dry_run: bool,

    /// Log filter directive (overrides the config file; RUST_LOG wins over both).
    #[arg(long, env = "HIDKVM_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = load_config(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(device) = args.device {
        config.gadget.device_path = device;
    }
    if args.dry_run {
        config.gadget.dry_run = true;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!("hidkvmd starting");

    // ── Report sink ───────────────────────────────────────────────────────────
    let sink: Box<dyn ReportSink> = if config.gadget.dry_run {
        warn!("dry-run mode: reports are logged, not written");
        Box::new(LoggingSink::new())
    } else {
        let writer = GadgetWriter::open(&config.gadget.device_path)
            .context("HID gadget keyboard is not available")?;
        info!(device = %config.gadget.device_path.display(), "HID gadget keyboard opened");
        Box::new(writer)
    };

    // ── Writer task and event source ──────────────────────────────────────────
    let (tx, rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    let writer = spawn_writer_task(InjectKeysUseCase::new(sink), rx);
    let source_done = spawn_stdin_source(tx.clone());

    info!("hidkvmd ready; reading key events from stdin");

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!("failed to listen for Ctrl-C: {e}");
            }
            info!("shutdown signal received");
        }
        forwarded = source_done => {
            info!(forwarded = forwarded.unwrap_or(0), "event source finished");
        }
    }

    // The writer may already be gone if it panicked; the join below reports that.
    let _ = tx.send(WriterCommand::Shutdown).await;
    let stats = writer.await.context("writer task failed")?;

    info!(events = stats.events, dropped = stats.dropped, "hidkvmd stopped");
    Ok(())
}
