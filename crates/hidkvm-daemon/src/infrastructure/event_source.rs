//! Line-oriented key event source.
//!
//! The remote-display server normally hands key transitions to the daemon
//! through [`InjectKeysUseCase`](crate::application::inject_keys::InjectKeysUseCase).
//! For bring-up and scripted tests the daemon can also read them from stdin,
//! one per line:
//!
//! ```text
//! # comment
//! down 0xffe1      # Shift_L, hex keysym
//! down a           # single printable character
//! up 97            # decimal keysym
//! up 0xffe1
//! ```
//!
//! `#` starts a comment, so the `#` key itself is written as `0x23`.

use std::io::BufRead;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::application::inject_keys::KeyEvent;
use crate::infrastructure::dispatch::WriterCommand;

/// Error type for a malformed event line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("unknown direction {0:?}, expected \"down\" or \"up\"")]
    UnknownDirection(String),
    #[error("missing keysym")]
    MissingKeysym,
    #[error("invalid keysym {0:?}")]
    InvalidKeysym(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// Parses one event line.
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns [`EventParseError`] if the line is not `<down|up> <keysym>`.
pub fn parse_event_line(line: &str) -> Result<Option<KeyEvent>, EventParseError> {
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let mut parts = line.split_whitespace();
    let Some(direction) = parts.next() else {
        return Ok(None);
    };
    let down = match direction {
        "down" => true,
        "up" => false,
        other => return Err(EventParseError::UnknownDirection(other.to_string())),
    };
    let keysym = parse_keysym(parts.next().ok_or(EventParseError::MissingKeysym)?)?;
    if let Some(extra) = parts.next() {
        return Err(EventParseError::TrailingInput(extra.to_string()));
    }
    Ok(Some(KeyEvent { down, keysym }))
}

/// A single character is taken literally, so `5` is the key `5`, not keysym 5.
fn parse_keysym(token: &str) -> Result<u32, EventParseError> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_graphic() {
            return Ok(c as u32);
        }
    }
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|_| EventParseError::InvalidKeysym(token.to_string()))
}

/// Reads event lines from `reader` and forwards them to the writer task.
///
/// Malformed lines, including lines that are not valid UTF-8, are logged and
/// skipped.  Stops at end of input, on an I/O error, or when the writer task
/// has gone away.  Returns the number of events forwarded.
pub fn forward_events<R: BufRead>(reader: R, tx: &mpsc::Sender<WriterCommand>) -> usize {
    let mut forwarded = 0;
    for (index, raw) in reader.split(b'\n').enumerate() {
        let line_no = index + 1;
        let raw = match raw {
            Ok(raw) => raw,
            Err(e) => {
                warn!("event source read error: {e}");
                break;
            }
        };
        let Ok(line) = std::str::from_utf8(&raw) else {
            warn!(line = line_no, "skipping event line: not valid UTF-8");
            continue;
        };
        match parse_event_line(line) {
            Ok(Some(event)) => {
                if tx.blocking_send(WriterCommand::Key(event)).is_err() {
                    debug!("writer task gone; stopping event source");
                    break;
                }
                forwarded += 1;
            }
            Ok(None) => {}
            Err(e) => warn!(line = line_no, "skipping event line: {e}"),
        }
    }
    forwarded
}

/// Spawns a thread reading event lines from stdin.
///
/// The returned receiver fires with the forwarded count once stdin is
/// exhausted.  A plain thread is used because a blocking stdin read must not
/// hold up runtime shutdown.
pub fn spawn_stdin_source(tx: mpsc::Sender<WriterCommand>) -> oneshot::Receiver<usize> {
    let (done_tx, done_rx) = oneshot::channel();
    std::thread::spawn(move || {
        let forwarded = forward_events(std::io::stdin().lock(), &tx);
        let _ = done_tx.send(forwarded);
    });
    done_rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_decimal_and_character_keysyms() {
        assert_eq!(
            parse_event_line("down 0xffe1").unwrap(),
            Some(KeyEvent::down(0xFFE1))
        );
        assert_eq!(parse_event_line("up 97").unwrap(), Some(KeyEvent::up(97)));
        assert_eq!(
            parse_event_line("down 5").unwrap(),
            Some(KeyEvent::down('5' as u32))
        );
        assert_eq!(
            parse_event_line("  up   A  ").unwrap(),
            Some(KeyEvent::up('A' as u32))
        );
    }

    #[test]
    fn test_blank_lines_and_comments_are_skipped() {
        assert_eq!(parse_event_line("").unwrap(), None);
        assert_eq!(parse_event_line("   ").unwrap(), None);
        assert_eq!(parse_event_line("# just a comment").unwrap(), None);
        assert_eq!(
            parse_event_line("down 0xff0d # Return").unwrap(),
            Some(KeyEvent::down(0xFF0D))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_event_line("press a"),
            Err(EventParseError::UnknownDirection("press".to_string()))
        );
        assert_eq!(parse_event_line("down"), Err(EventParseError::MissingKeysym));
        assert_eq!(
            parse_event_line("down 0xzz"),
            Err(EventParseError::InvalidKeysym("0xzz".to_string()))
        );
        assert_eq!(
            parse_event_line("down a b"),
            Err(EventParseError::TrailingInput("b".to_string()))
        );
    }

    #[test]
    fn test_forward_events_skips_bad_lines() {
        // Arrange
        let input: &[u8] = b"down a\nbogus line\n\nup a\n";
        let (tx, mut rx) = mpsc::channel(8);

        // Act
        let forwarded = forward_events(input, &tx);
        drop(tx);

        // Assert
        assert_eq!(forwarded, 2);
        let mut received = Vec::new();
        while let Some(cmd) = rx.blocking_recv() {
            received.push(cmd);
        }
        assert_eq!(
            received,
            vec![
                WriterCommand::Key(KeyEvent::down('a' as u32)),
                WriterCommand::Key(KeyEvent::up('a' as u32)),
            ]
        );
    }

    #[test]
    fn test_forward_events_skips_invalid_utf8_and_keeps_reading() {
        // Arrange
        let input: &[u8] = b"down a\n\xff\xfe\nup a\r\n";
        let (tx, mut rx) = mpsc::channel(8);

        // Act
        let forwarded = forward_events(input, &tx);
        drop(tx);

        // Assert
        assert_eq!(forwarded, 2);
        assert_eq!(rx.blocking_recv(), Some(WriterCommand::Key(KeyEvent::down('a' as u32))));
        assert_eq!(rx.blocking_recv(), Some(WriterCommand::Key(KeyEvent::up('a' as u32))));
        assert_eq!(rx.blocking_recv(), None);
    }

    #[test]
    fn test_forward_events_stops_when_writer_is_gone() {
        let input: &[u8] = b"down a\nup a\n";
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        assert_eq!(forward_events(input, &tx), 0);
    }
}
