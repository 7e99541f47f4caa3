//! The 8-byte USB HID boot keyboard report.
//!
//! ```text
//! byte 0     modifier bitmask (LCtrl LShift LAlt LGUI RCtrl RShift RAlt RGUI)
//! byte 1     reserved, always 0
//! bytes 2-7  up to six pressed usages, zero padded
//! ```
//!
//! This layout is the entire wire contract with the gadget device node.

use crate::keymap::hid::HidKeyCode;

/// Length in bytes of a boot keyboard report.
pub const REPORT_LEN: usize = 8;

/// Maximum number of simultaneously pressed non-modifier keys.
pub const MAX_PRESSED_KEYS: usize = 6;

/// A boot keyboard report.
///
/// The reserved byte is not stored; [`HidReport::to_bytes`] always emits it
/// as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HidReport {
    modifiers: u8,
    keys: [u8; MAX_PRESSED_KEYS],
}

impl HidReport {
    /// The all-released report.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a report from a modifier byte and the pressed keys.
    ///
    /// Unknown usages and duplicates are skipped.  Keys beyond the sixth
    /// distinct one are ignored.
    pub fn new(modifiers: u8, pressed: &[HidKeyCode]) -> Self {
        let mut report = Self {
            modifiers,
            keys: [0; MAX_PRESSED_KEYS],
        };
        let mut len = 0;
        for key in pressed {
            let usage = key.as_u8();
            if len == MAX_PRESSED_KEYS {
                break;
            }
            if key.is_unknown() || report.keys[..len].contains(&usage) {
                continue;
            }
            report.keys[len] = usage;
            len += 1;
        }
        report
    }

    /// Returns the modifier bitmask.
    pub fn modifiers(&self) -> u8 {
        self.modifiers
    }

    /// Returns the six key slots, zero padded.
    pub fn keys(&self) -> &[u8; MAX_PRESSED_KEYS] {
        &self.keys
    }

    /// Returns `true` if no modifier and no key is pressed.
    pub fn is_empty(&self) -> bool {
        self.modifiers == 0 && self.keys.iter().all(|&k| k == 0)
    }

    /// Serialises the report in wire order.
    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[0] = self.modifiers;
        bytes[2..].copy_from_slice(&self.keys);
        bytes
    }
}
