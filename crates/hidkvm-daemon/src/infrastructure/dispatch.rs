//! The single writer task.
//!
//! The gadget handle must only be written by one owner at a time.  Instead of
//! a mutex, the daemon funnels every key event through a bounded queue into
//! one task that owns the [`InjectKeysUseCase`] (and with it the sink).
//! Report writes block for the length of the retry loop, so the task runs on
//! the blocking thread pool.
//!
//! On [`WriterCommand::Shutdown`] or when every sender is dropped, the task
//! releases all held keys and closes the sink.

use hidkvm_core::GadgetError;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::application::{
    inject_keys::{InjectKeysUseCase, KeyEvent},
    keyboard_state::KeyChange,
};

/// Capacity of the key event queue.
pub const EVENT_QUEUE_DEPTH: usize = 64;

/// Message consumed by the writer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterCommand {
    /// A key transition to inject.
    Key(KeyEvent),
    /// Release all keys, close the device, and stop.
    Shutdown,
}

/// Counters reported when the writer task stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriterStats {
    /// Key events received.
    pub events: u64,
    /// Key events dropped because the report write failed.
    pub dropped: u64,
}

/// Drains `rx` until shutdown, then releases keys and closes the sink.
///
/// Must run outside an async context; it blocks on the queue.
pub fn run_writer_loop(
    mut use_case: InjectKeysUseCase,
    mut rx: mpsc::Receiver<WriterCommand>,
) -> WriterStats {
    let mut stats = WriterStats::default();

    while let Some(command) = rx.blocking_recv() {
        let event = match command {
            WriterCommand::Key(event) => event,
            WriterCommand::Shutdown => {
                debug!("writer task received shutdown");
                break;
            }
        };
        stats.events += 1;

        match use_case.handle_key_event(&event) {
            Ok(KeyChange::Changed | KeyChange::Unchanged) => {}
            Ok(KeyChange::Unmapped) => {
                debug!(keysym = %hex(event.keysym), "unmapped keysym ignored");
            }
            Ok(KeyChange::Overflow) => {
                warn!(keysym = %hex(event.keysym), "more than six keys held; press dropped");
            }
            Err(e) => {
                stats.dropped += 1;
                log_write_failure(&e, &event);
            }
        }
    }

    match use_case.release_all() {
        Ok(true) => debug!("released held keys"),
        Ok(false) => {}
        Err(e) => error!("failed to release held keys on shutdown: {e}"),
    }
    if use_case.close() {
        info!("HID gadget keyboard closed");
    }
    stats
}

fn hex(keysym: u32) -> String {
    format!("0x{keysym:04x}")
}

fn log_write_failure(err: &GadgetError, event: &KeyEvent) {
    let keysym = hex(event.keysym);
    match err {
        GadgetError::TransientWriteFailure { .. } => {
            warn!(%keysym, down = event.down, "key event dropped: {err}");
        }
        _ => error!(
            %keysym,
            down = event.down,
            errno = ?err.raw_os_error(),
            "key event dropped: {err}"
        ),
    }
}

/// Spawns [`run_writer_loop`] on the blocking thread pool.
pub fn spawn_writer_task(
    use_case: InjectKeysUseCase,
    rx: mpsc::Receiver<WriterCommand>,
) -> JoinHandle<WriterStats> {
    tokio::task::spawn_blocking(move || run_writer_loop(use_case, rx))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
