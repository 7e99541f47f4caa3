//! # hidkvm-core
//!
//! Keyboard injection core for an IP-KVM daemon that emulates a USB keyboard
//! through the Linux HID gadget driver.
//!
//! The crate has no network code and no async runtime.  It provides:
//!
//! - **`keymap`** – a pure, total translation from the KeySyms a remote-display
//!   client sends to USB HID Usage IDs.
//!
//! - **`report`** – the 8-byte boot keyboard report that is the whole wire
//!   contract with the gadget device.
//!
//! - **`gadget`** – the owner of the gadget device handle, which writes reports
//!   with a bounded retry on transient errors.
//!
//! The translator and the writer do not know about each other.  The daemon
//! composes them: translate, update the held-key state, write the report.

pub mod gadget;
pub mod keymap;
pub mod report;

pub use gadget::{GadgetError, GadgetWriter, DEFAULT_DEVICE_PATH, WRITE_RETRY_MAX};
pub use keymap::hid::HidKeyCode;
pub use keymap::{keysym_to_hid, modifier_for_keysym, KeyMapper};
pub use report::{HidReport, MAX_PRESSED_KEYS, REPORT_LEN};
