//! Dry-run report sink.
//!
//! Logs every report as hex instead of writing it to a device.  Useful on a
//! development machine without a bound HID gadget.

use hidkvm_core::{GadgetError, HidReport};
use tracing::info;

use crate::application::inject_keys::ReportSink;

/// A [`ReportSink`] that only logs.
#[derive(Debug, Default)]
pub struct LoggingSink {
    written: u64,
    closed: bool,
}

impl LoggingSink {
    /// Creates an open logging sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports logged so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

/// Formats report bytes as space-separated hex, e.g. `02 00 04 00 00 00 00 00`.
pub fn format_report(report: &HidReport) -> String {
    report
        .to_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl ReportSink for LoggingSink {
    fn write_report(&mut self, report: &HidReport) -> Result<(), GadgetError> {
        if self.closed {
            return Err(GadgetError::Closed);
        }
        self.written += 1;
        info!(report = %format_report(report), "dry-run HID report");
        Ok(())
    }

    fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hidkvm_core::HidKeyCode;

    #[test]
    fn test_format_report_is_lowercase_hex() {
        let report = HidReport::new(0x02, &[HidKeyCode::KeyA]);
        assert_eq!(format_report(&report), "02 00 04 00 00 00 00 00");
    }

    #[test]
    fn test_logging_sink_counts_reports() {
        let mut sink = LoggingSink::new();
        sink.write_report(&HidReport::empty()).unwrap();
        sink.write_report(&HidReport::empty()).unwrap();
        assert_eq!(sink.written(), 2);
    }

    #[test]
    fn test_logging_sink_close_is_idempotent_and_rejects_writes() {
        let mut sink = LoggingSink::new();

        assert!(sink.close());
        assert!(!sink.close());
        assert!(matches!(
            sink.write_report(&HidReport::empty()),
            Err(GadgetError::Closed)
        ));
    }
}
