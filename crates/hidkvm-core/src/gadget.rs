//! Writer for the USB HID gadget keyboard device node.
//!
//! The kernel exposes a bound HID gadget function as a character device
//! (conventionally `/dev/hidg0`).  Writing one 8-byte boot keyboard report to
//! it makes the USB host see a key state change.
//!
//! # Lifecycle
//!
//! A [`GadgetWriter`] is either *open* (it owns a device handle) or *closed*.
//! It is created open by [`GadgetWriter::open`] and becomes closed on
//! [`GadgetWriter::close`] or when it is dropped.  Closing twice is a no-op.
//!
//! # Retry policy
//!
//! The device node can be briefly busy while the host drains its queue
//! (`EAGAIN`) or while the function is disabled during re-enumeration
//! (`ESHUTDOWN`).  Those errors are retried by re-issuing the whole report,
//! up to [`WRITE_RETRY_MAX`] attempts in total.  Every other error fails
//! immediately.  There is no sleep between attempts.
//!
//! # Concurrency
//!
//! `write` takes `&mut self`; one owner issues writes sequentially.  Share a
//! writer between threads only behind a mutex or a single dedicated task.

use std::{
    fs::{File, OpenOptions},
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::report::{HidReport, REPORT_LEN};

/// Conventional device node of the first HID gadget function.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/hidg0";

/// Total number of write attempts made for one report under transient errors.
pub const WRITE_RETRY_MAX: u32 = 5;

/// Error type for gadget device operations.
#[derive(Debug, Error)]
pub enum GadgetError {
    /// The device node is missing or could not be opened read-write.
    #[error("HID gadget device {path} unavailable: {source}")]
    DeviceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every attempt hit a transient error (`EAGAIN` or `ESHUTDOWN`).
    #[error("HID gadget write still failing after {attempts} attempts: {source}")]
    TransientWriteFailure {
        attempts: u32,
        #[source]
        source: io::Error,
    },

    /// A non-transient write error, or a short write.
    #[error("HID gadget write failed: {source}")]
    WriteFailed {
        #[source]
        source: io::Error,
    },

    /// The writer was already closed.
    #[error("HID gadget device is closed")]
    Closed,
}

impl GadgetError {
    /// Returns the OS error code behind this error, if there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            GadgetError::DeviceUnavailable { source, .. }
            | GadgetError::TransientWriteFailure { source, .. }
            | GadgetError::WriteFailed { source } => source.raw_os_error(),
            GadgetError::Closed => None,
        }
    }
}

/// Returns `true` for write errors that are expected to clear on their own.
fn is_transient(err: &io::Error) -> bool {
    err.kind() == ErrorKind::WouldBlock || err.raw_os_error() == Some(libc::ESHUTDOWN)
}

/// Owns the gadget device handle and writes keyboard reports to it.
///
/// `D` is [`File`] in production; tests substitute any [`Write`] implementation.
pub struct GadgetWriter<D: Write = File> {
    device: Option<D>,
}

impl GadgetWriter<File> {
    /// Opens the gadget device node read-write.
    ///
    /// # Errors
    ///
    /// Returns [`GadgetError::DeviceUnavailable`] if the node does not exist
    /// or cannot be opened (gadget not bound, permissions).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GadgetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening HID gadget keyboard");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| GadgetError::DeviceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "HID gadget keyboard opened");
        Ok(Self::from_device(file))
    }
}

impl<D: Write> GadgetWriter<D> {
    /// Wraps an already-open device handle.
    pub fn from_device(device: D) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Returns `true` while the writer owns a device handle.
    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }

    /// Writes one report, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`GadgetError::Closed`] if the writer has been closed.
    /// - [`GadgetError::TransientWriteFailure`] after [`WRITE_RETRY_MAX`]
    ///   attempts that all failed with `EAGAIN` or `ESHUTDOWN`.
    /// - [`GadgetError::WriteFailed`] on any other error or a short write,
    ///   without retrying.
    pub fn write(&mut self, report: &HidReport) -> Result<(), GadgetError> {
        let device = self.device.as_mut().ok_or(GadgetError::Closed)?;
        let bytes = report.to_bytes();

        let mut attempt = 0;
        loop {
            attempt += 1;
            match device.write(&bytes) {
                Ok(n) if n == REPORT_LEN => {
                    trace!(attempt, report = ?bytes, "HID report written");
                    return Ok(());
                }
                Ok(n) => {
                    return Err(GadgetError::WriteFailed {
                        source: io::Error::new(
                            ErrorKind::WriteZero,
                            format!("short write: {n} of {REPORT_LEN} bytes"),
                        ),
                    });
                }
                Err(e) if is_transient(&e) => {
                    if attempt >= WRITE_RETRY_MAX {
                        return Err(GadgetError::TransientWriteFailure {
                            attempts: attempt,
                            source: e,
                        });
                    }
                    trace!(
                        attempt,
                        remaining = WRITE_RETRY_MAX - attempt,
                        error = %e,
                        "HID report write needs retry"
                    );
                }
                Err(e) => return Err(GadgetError::WriteFailed { source: e }),
            }
        }
    }

    /// Releases the device handle.
    ///
    /// Returns `true` if a handle was released, `false` if the writer was
    /// already closed.
    pub fn close(&mut self) -> bool {
        match self.device.take() {
            Some(device) => {
                drop(device);
                debug!("HID gadget keyboard closed");
                true
            }
            None => false,
        }
    }
}

impl<D: Write> Drop for GadgetWriter<D> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::hid::HidKeyCode;
    use mockall::mock;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    mock! {
        pub Device {}

        impl Write for Device {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
            fn flush(&mut self) -> io::Result<()>;
        }
    }

    fn key_a_report() -> HidReport {
        HidReport::new(0, &[HidKeyCode::KeyA])
    }

    fn errno(code: i32) -> io::Error {
        io::Error::from_raw_os_error(code)
    }

    /// Device that counts how many times it was dropped.
    struct CountingDevice {
        drops: Arc<AtomicUsize>,
    }

    impl Write for CountingDevice {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for CountingDevice {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    // ── write ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_write_healthy_device_succeeds_in_one_attempt() {
        // Arrange
        let expected = key_a_report().to_bytes();
        let mut device = MockDevice::new();
        device
            .expect_write()
            .withf(move |buf: &[u8]| buf == &expected[..])
            .times(1)
            .returning(|buf| Ok(buf.len()));
        let mut writer = GadgetWriter::from_device(device);

        // Act
        let result = writer.write(&key_a_report());

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_write_exhausts_retry_budget_on_eagain() {
        // Arrange
        let mut device = MockDevice::new();
        device
            .expect_write()
            .times(WRITE_RETRY_MAX as usize)
            .returning(|_| Err(errno(libc::EAGAIN)));
        let mut writer = GadgetWriter::from_device(device);

        // Act
        let err = writer.write(&key_a_report()).unwrap_err();

        // Assert
        match err {
            GadgetError::TransientWriteFailure { attempts, ref source } => {
                assert_eq!(attempts, WRITE_RETRY_MAX);
                assert_eq!(source.raw_os_error(), Some(libc::EAGAIN));
            }
            other => panic!("expected TransientWriteFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_write_exhausts_retry_budget_on_eshutdown() {
        let mut device = MockDevice::new();
        device
            .expect_write()
            .times(WRITE_RETRY_MAX as usize)
            .returning(|_| Err(errno(libc::ESHUTDOWN)));
        let mut writer = GadgetWriter::from_device(device);

        let err = writer.write(&key_a_report()).unwrap_err();

        assert!(matches!(err, GadgetError::TransientWriteFailure { .. }));
        assert_eq!(err.raw_os_error(), Some(libc::ESHUTDOWN));
    }

    #[test]
    fn test_write_recovers_after_transient_errors() {
        // Arrange – two EAGAIN, then success on the third attempt
        let mut calls = 0;
        let mut device = MockDevice::new();
        device.expect_write().times(3).returning(move |buf| {
            calls += 1;
            if calls < 3 {
                Err(errno(libc::EAGAIN))
            } else {
                Ok(buf.len())
            }
        });
        let mut writer = GadgetWriter::from_device(device);

        // Act / Assert
        assert!(writer.write(&key_a_report()).is_ok());
    }

    #[test]
    fn test_write_non_transient_error_fails_without_retry() {
        // Arrange
        let mut device = MockDevice::new();
        device
            .expect_write()
            .times(1)
            .returning(|_| Err(errno(libc::ENODEV)));
        let mut writer = GadgetWriter::from_device(device);

        // Act
        let err = writer.write(&key_a_report()).unwrap_err();

        // Assert
        assert!(matches!(err, GadgetError::WriteFailed { .. }));
        assert_eq!(err.raw_os_error(), Some(libc::ENODEV));
    }

    #[test]
    fn test_write_interrupted_is_not_retried() {
        let mut device = MockDevice::new();
        device
            .expect_write()
            .times(1)
            .returning(|_| Err(errno(libc::EINTR)));
        let mut writer = GadgetWriter::from_device(device);

        let err = writer.write(&key_a_report()).unwrap_err();

        assert!(matches!(err, GadgetError::WriteFailed { .. }));
    }

    #[test]
    fn test_short_write_is_a_failure() {
        let mut device = MockDevice::new();
        device.expect_write().times(1).returning(|_| Ok(3));
        let mut writer = GadgetWriter::from_device(device);

        let err = writer.write(&key_a_report()).unwrap_err();

        match err {
            GadgetError::WriteFailed { source } => {
                assert_eq!(source.kind(), ErrorKind::WriteZero)
            }
            other => panic!("expected WriteFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_write_after_close_returns_closed() {
        let mut device = MockDevice::new();
        device.expect_write().times(0);
        let mut writer = GadgetWriter::from_device(device);
        writer.close();

        let err = writer.write(&key_a_report()).unwrap_err();

        assert!(matches!(err, GadgetError::Closed));
        assert_eq!(err.raw_os_error(), None);
    }

    // ── open / close ──────────────────────────────────────────────────────────

    #[test]
    fn test_close_twice_releases_once() {
        // Arrange
        let drops = Arc::new(AtomicUsize::new(0));
        let mut writer = GadgetWriter::from_device(CountingDevice {
            drops: Arc::clone(&drops),
        });

        // Act
        let first = writer.close();
        let second = writer.close();

        // Assert
        assert!(first);
        assert!(!second);
        assert!(!writer.is_open());
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases_open_device() {
        let drops = Arc::new(AtomicUsize::new(0));
        {
            let writer = GadgetWriter::from_device(CountingDevice {
                drops: Arc::clone(&drops),
            });
            assert!(writer.is_open());
        }
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_after_close_does_not_release_again() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut writer = GadgetWriter::from_device(CountingDevice {
            drops: Arc::clone(&drops),
        });
        writer.close();
        drop(writer);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_open_missing_node_is_device_unavailable() {
        let path = std::env::temp_dir().join("hidkvm-no-such-dir").join("hidg9");

        let err = match GadgetWriter::open(&path) {
            Ok(_) => panic!("opening {} should fail", path.display()),
            Err(e) => e,
        };

        match err {
            GadgetError::DeviceUnavailable { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected DeviceUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_open_character_device_and_write() {
        let mut writer = GadgetWriter::open("/dev/null").expect("open /dev/null");
        assert!(writer.is_open());
        writer.write(&key_a_report()).expect("write to /dev/null");
        assert!(writer.close());
    }
}
