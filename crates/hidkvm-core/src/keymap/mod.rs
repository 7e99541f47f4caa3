//! Key code translation from remote-display KeySyms to USB HID usages.
//!
//! The canonical representation is USB HID Usage IDs (page 0x07, Keyboard/Keypad),
//! which is what the gadget keyboard report carries.  Remote-display KeySyms
//! are translated at the point the key event enters the daemon.

pub mod hid;
pub mod keysym;
pub mod translate;

pub use hid::HidKeyCode;
pub use translate::{keysym_to_hid, modifier_for_keysym};

/// Unified key mapper providing the translation entry points.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates an RFB/X11 KeySym to a [`HidKeyCode`].
    ///
    /// Returns [`HidKeyCode::Unknown`] if no mapping exists for `keysym`.
    pub fn keysym_to_hid(keysym: u32) -> HidKeyCode {
        translate::keysym_to_hid(keysym)
    }

    /// Translates a modifier KeySym (Shift, Control, Alt, Super) to its
    /// modifier usage.
    ///
    /// Returns `None` if `keysym` is not a modifier.
    pub fn keysym_to_modifier(keysym: u32) -> Option<HidKeyCode> {
        translate::modifier_for_keysym(keysym)
    }
}
