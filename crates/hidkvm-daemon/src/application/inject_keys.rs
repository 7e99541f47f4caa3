//! InjectKeysUseCase: turns remote key transitions into gadget reports.
//!
//! This use case sits at the application layer and delegates the device I/O
//! to a [`ReportSink`] trait object.  The real sink is the core
//! [`GadgetWriter`]; the dry-run sink lives in the infrastructure layer.

use std::io::Write;

use hidkvm_core::{GadgetError, GadgetWriter, HidReport};

use super::keyboard_state::{KeyChange, KeyboardState};

/// One key transition as delivered by the remote-display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// `true` for key-down, `false` for key-up.
    pub down: bool,
    /// RFB/X11 KeySym of the key.
    pub keysym: u32,
}

impl KeyEvent {
    /// A key-down event.
    pub fn down(keysym: u32) -> Self {
        Self { down: true, keysym }
    }

    /// A key-up event.
    pub fn up(keysym: u32) -> Self {
        Self {
            down: false,
            keysym,
        }
    }
}

/// Destination for keyboard reports.
///
/// Implementations are driven by one owner at a time, so methods take
/// `&mut self`.
pub trait ReportSink: Send {
    /// Delivers one complete report.
    fn write_report(&mut self, report: &HidReport) -> Result<(), GadgetError>;

    /// Releases the underlying resource.  Returns `true` if something was
    /// released.
    fn close(&mut self) -> bool;
}

impl<D: Write + Send> ReportSink for GadgetWriter<D> {
    fn write_report(&mut self, report: &HidReport) -> Result<(), GadgetError> {
        self.write(report)
    }

    fn close(&mut self) -> bool {
        GadgetWriter::close(self)
    }
}

/// The Inject Keys use case.
///
/// Owns the held-key state and the sink.  Each transition that changes the
/// state produces exactly one report write.
pub struct InjectKeysUseCase {
    sink: Box<dyn ReportSink>,
    state: KeyboardState,
}

impl InjectKeysUseCase {
    /// Creates a new use case writing to `sink`.
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self {
            sink,
            state: KeyboardState::new(),
        }
    }

    /// Handles a key transition from the remote display.
    ///
    /// Unmapped keys, repeats and overflowing presses produce no write.
    ///
    /// # Errors
    ///
    /// Returns [`GadgetError`] if the report write fails.  The held-key state
    /// keeps the transition, so the next successful write carries it.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Result<KeyChange, GadgetError> {
        let change = if event.down {
            self.state.press(event.keysym)
        } else {
            self.state.release(event.keysym)
        };
        if change == KeyChange::Changed {
            self.sink.write_report(&self.state.report())?;
        }
        Ok(change)
    }

    /// Releases every held key and modifier.
    ///
    /// Writes the empty report only if something was held.  Returns whether
    /// a report was written.
    ///
    /// # Errors
    ///
    /// Returns [`GadgetError`] if the report write fails.
    pub fn release_all(&mut self) -> Result<bool, GadgetError> {
        if !self.state.reset() {
            return Ok(false);
        }
        self.sink.write_report(&HidReport::empty())?;
        Ok(true)
    }

    /// Closes the sink.  Safe to call more than once.
    pub fn close(&mut self) -> bool {
        self.sink.close()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
