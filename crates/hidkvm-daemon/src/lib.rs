//! hidkvm-daemon library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the daemon do?
//!
//! The daemon runs on the KVM device that is plugged into the target
//! machine as a USB keyboard.  A remote-display server hands it one key
//! transition at a time (a KeySym and a down/up flag).  The daemon:
//!
//! 1. Translates the KeySym to a USB HID usage.
//! 2. Updates the set of held keys and modifiers.
//! 3. Writes the resulting 8-byte report to the HID gadget device node from
//!    a single dedicated writer task.

/// Application layer: use cases for key injection.
pub mod application;

/// Infrastructure layer: configuration, event sources, sinks, and the writer task.
pub mod infrastructure;
