//! KeySym to HID Usage ID translation for the gadget keyboard.
//!
//! [`keysym_to_hid`] is a total function: every `u32` yields exactly one
//! [`HidKeyCode`], with [`HidKeyCode::Unknown`] for anything outside the
//! table.  It never fails and holds no state, so it can be called from any
//! number of threads without synchronisation.
//!
//! # Lookup order
//!
//! The contiguous runs are checked before the exact-match table, in this
//! order, and the first hit wins:
//!
//! 1. letters `A`..`Z` / `a`..`z` (case folded by clearing bit 0x20)
//! 2. digits `1`..`9` (`0` is deliberately left to the table)
//! 3. `F1`..`F12`
//! 4. `KP_F1`..`KP_F4`, aliased onto `F1`..`F4`
//! 5. `KP_1`..`KP_9`
//! 6. the exact-match table
//!
//! # Shifted symbols
//!
//! A shifted symbol such as `!` maps to the same usage as its unshifted key
//! (`1`).  The Shift state travels in the report's modifier byte, which the
//! caller builds from the modifier keysyms it has seen; see
//! [`modifier_for_keysym`].

use super::hid::HidKeyCode;
use super::keysym::*;

/// Bit that distinguishes lower-case from upper-case ASCII letters.
const ASCII_CASE_BIT: u32 = 0x20;

/// Returns the usage `offset` positions after `base` in a contiguous run.
///
/// Callers guarantee `offset` keeps the result inside the run.
fn run(base: HidKeyCode, offset: u32) -> HidKeyCode {
    HidKeyCode::from_u8(base.as_u8() + offset as u8)
}

/// Translates a remote-display KeySym to a USB HID Usage ID.
///
/// Returns [`HidKeyCode::Unknown`] if the keysym has no mapping.  Callers
/// must not write a report for an unknown key.
///
/// # Panics
///
/// This function never panics.
pub fn keysym_to_hid(keysym: u32) -> HidKeyCode {
    match keysym {
        XK_UPPER_A..=XK_UPPER_Z | XK_LOWER_A..=XK_LOWER_Z => {
            run(HidKeyCode::KeyA, (keysym & !ASCII_CASE_BIT) - XK_UPPER_A)
        }
        XK_1..=XK_9 => run(HidKeyCode::Digit1, keysym - XK_1),
        XK_F1..=XK_F12 => run(HidKeyCode::F1, keysym - XK_F1),
        XK_KP_F1..=XK_KP_F4 => run(HidKeyCode::F1, keysym - XK_KP_F1),
        XK_KP_1..=XK_KP_9 => run(HidKeyCode::Numpad1, keysym - XK_KP_1),
        _ => lookup_table(keysym),
    }
}

/// Exact-match table for everything outside the contiguous runs.
fn lookup_table(keysym: u32) -> HidKeyCode {
    match keysym {
        // Shifted digits share the usage of the unshifted key.
        XK_EXCLAM => HidKeyCode::Digit1,
        XK_AT => HidKeyCode::Digit2,
        XK_NUMBERSIGN => HidKeyCode::Digit3,
        XK_DOLLAR => HidKeyCode::Digit4,
        XK_PERCENT => HidKeyCode::Digit5,
        XK_ASCIICIRCUM => HidKeyCode::Digit6,
        XK_AMPERSAND => HidKeyCode::Digit7,
        XK_ASTERISK => HidKeyCode::Digit8,
        XK_PARENLEFT => HidKeyCode::Digit9,
        XK_0 | XK_PARENRIGHT => HidKeyCode::Digit0,

        XK_RETURN => HidKeyCode::Enter,
        XK_ESCAPE => HidKeyCode::Escape,
        XK_BACKSPACE => HidKeyCode::Backspace,
        XK_TAB | XK_KP_TAB => HidKeyCode::Tab,
        XK_SPACE | XK_KP_SPACE => HidKeyCode::Space,

        // Punctuation pairs sharing one physical key.
        XK_MINUS | XK_UNDERSCORE => HidKeyCode::Minus,
        XK_PLUS | XK_EQUAL => HidKeyCode::Equal,
        XK_BRACKETLEFT | XK_BRACELEFT => HidKeyCode::BracketLeft,
        XK_BRACKETRIGHT | XK_BRACERIGHT => HidKeyCode::BracketRight,
        XK_BACKSLASH | XK_BAR => HidKeyCode::Backslash,
        XK_COLON | XK_SEMICOLON => HidKeyCode::Semicolon,
        XK_QUOTEDBL | XK_APOSTROPHE => HidKeyCode::Quote,
        XK_GRAVE | XK_ASCIITILDE => HidKeyCode::Backquote,
        XK_COMMA | XK_LESS => HidKeyCode::Comma,
        XK_PERIOD | XK_GREATER => HidKeyCode::Period,
        XK_SLASH | XK_QUESTION => HidKeyCode::Slash,

        XK_CAPS_LOCK => HidKeyCode::CapsLock,
        XK_PRINT => HidKeyCode::PrintScreen,
        XK_SCROLL_LOCK => HidKeyCode::ScrollLock,
        XK_PAUSE => HidKeyCode::Pause,
        XK_NUM_LOCK => HidKeyCode::NumLock,

        // Navigation and editing, with their keypad aliases.
        XK_INSERT | XK_KP_INSERT => HidKeyCode::Insert,
        XK_HOME | XK_KP_HOME => HidKeyCode::Home,
        XK_PAGE_UP | XK_KP_PAGE_UP => HidKeyCode::PageUp,
        XK_DELETE | XK_KP_DELETE => HidKeyCode::Delete,
        XK_END | XK_KP_END => HidKeyCode::End,
        XK_PAGE_DOWN | XK_KP_PAGE_DOWN => HidKeyCode::PageDown,
        XK_RIGHT | XK_KP_RIGHT => HidKeyCode::ArrowRight,
        XK_LEFT | XK_KP_LEFT => HidKeyCode::ArrowLeft,
        XK_DOWN | XK_KP_DOWN => HidKeyCode::ArrowDown,
        XK_UP | XK_KP_UP => HidKeyCode::ArrowUp,

        // Keypad-only operators.
        XK_KP_ENTER => HidKeyCode::NumpadEnter,
        XK_KP_EQUAL => HidKeyCode::NumpadEqual,
        XK_KP_MULTIPLY => HidKeyCode::NumpadMultiply,
        XK_KP_ADD => HidKeyCode::NumpadAdd,
        XK_KP_SUBTRACT => HidKeyCode::NumpadSubtract,
        XK_KP_DECIMAL => HidKeyCode::NumpadDecimal,
        XK_KP_DIVIDE => HidKeyCode::NumpadDivide,
        XK_KP_0 => HidKeyCode::Numpad0,

        _ => HidKeyCode::Unknown,
    }
}

/// Maps a modifier KeySym to its HID modifier usage.
///
/// Returns `None` for non-modifier keysyms.  [`keysym_to_hid`] returns
/// [`HidKeyCode::Unknown`] for all of these; modifiers are carried in the
/// report's modifier byte, not in a key slot.
pub fn modifier_for_keysym(keysym: u32) -> Option<HidKeyCode> {
    match keysym {
        XK_CONTROL_L => Some(HidKeyCode::ControlLeft),
        XK_CONTROL_R => Some(HidKeyCode::ControlRight),
        XK_SHIFT_L => Some(HidKeyCode::ShiftLeft),
        XK_SHIFT_R => Some(HidKeyCode::ShiftRight),
        XK_ALT_L | XK_META_L => Some(HidKeyCode::AltLeft),
        XK_ALT_R | XK_META_R | XK_ISO_LEVEL3_SHIFT => Some(HidKeyCode::AltRight),
        XK_SUPER_L => Some(HidKeyCode::MetaLeft),
        XK_SUPER_R => Some(HidKeyCode::MetaRight),
        _ => None,
    }
}
