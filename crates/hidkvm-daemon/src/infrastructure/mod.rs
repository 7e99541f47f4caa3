//! Infrastructure layer for the daemon.
//!
//! Contains OS-facing adapters and process wiring.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `hidkvm_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`config`** – TOML configuration file with serde defaults.
//! - **`dispatch`** – The single writer task that owns the sink and drains
//!   the key event queue.
//! - **`dry_run`** – A `ReportSink` that logs reports instead of writing them.
//! - **`event_source`** – Line-oriented key event reader for diagnostics and
//!   scripted input.

pub mod config;
pub mod dispatch;
pub mod dry_run;
pub mod event_source;
