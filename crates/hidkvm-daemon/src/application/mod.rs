//! Application layer use cases for the daemon.
//!
//! - **`keyboard_state`** – Tracks which keys and modifiers are held and
//!   builds the boot keyboard report from them.
//!
//! - **`inject_keys`** – Applies each remote key transition to the held-key
//!   state and pushes the resulting report to a `ReportSink`.  The sink is
//!   injected at construction time so tests never touch a device.

pub mod inject_keys;
pub mod keyboard_state;
