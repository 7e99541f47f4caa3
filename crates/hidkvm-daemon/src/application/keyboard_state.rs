//! Held-key bookkeeping for the emulated keyboard.
//!
//! A boot keyboard report describes the *whole* keyboard state, not a single
//! transition.  Remote-display clients send one transition at a time, so the
//! daemon keeps the set of held keys and rebuilds the report after each one.
//!
//! # Rules
//!
//! - Modifier keysyms (Shift, Control, Alt, Super) set or clear their bit in
//!   the modifier byte.  They never occupy a key slot.
//! - Other keysyms are translated with [`KeyMapper::keysym_to_hid`].  Unmapped
//!   ones are ignored.
//! - At most [`MAX_PRESSED_KEYS`] keys are held.  A further press is dropped
//!   and reported as [`KeyChange::Overflow`].
//! - Because shifted symbols share the usage of their base key, a press of
//!   `!` followed by a release of `1` (which happens when Shift is let go
//!   first) releases the same slot.

use hidkvm_core::{HidKeyCode, HidReport, KeyMapper, MAX_PRESSED_KEYS};

/// Outcome of applying one key transition to [`KeyboardState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChange {
    /// The held-key set changed; a new report must be written.
    Changed,
    /// The transition did not change anything (repeat press, stray release).
    Unchanged,
    /// The keysym has no HID mapping.
    Unmapped,
    /// Six keys are already held; the press was dropped.
    Overflow,
}

/// Modifier bitmask plus the held non-modifier keys in press order.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    modifiers: u8,
    pressed: Vec<HidKeyCode>,
}

impl KeyboardState {
    /// Creates an all-released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a key-down transition.
    pub fn press(&mut self, keysym: u32) -> KeyChange {
        if let Some(bit) = modifier_bit(keysym) {
            if self.modifiers & bit != 0 {
                return KeyChange::Unchanged;
            }
            self.modifiers |= bit;
            return KeyChange::Changed;
        }

        let key = KeyMapper::keysym_to_hid(keysym);
        if key.is_unknown() {
            return KeyChange::Unmapped;
        }
        if self.pressed.contains(&key) {
            return KeyChange::Unchanged;
        }
        if self.pressed.len() == MAX_PRESSED_KEYS {
            return KeyChange::Overflow;
        }
        self.pressed.push(key);
        KeyChange::Changed
    }

    /// Applies a key-up transition.
    pub fn release(&mut self, keysym: u32) -> KeyChange {
        if let Some(bit) = modifier_bit(keysym) {
            if self.modifiers & bit == 0 {
                return KeyChange::Unchanged;
            }
            self.modifiers &= !bit;
            return KeyChange::Changed;
        }

        let key = KeyMapper::keysym_to_hid(keysym);
        if key.is_unknown() {
            return KeyChange::Unmapped;
        }
        match self.pressed.iter().position(|&k| k == key) {
            Some(index) => {
                self.pressed.remove(index);
                KeyChange::Changed
            }
            None => KeyChange::Unchanged,
        }
    }

    /// Builds the report describing the current state.
    pub fn report(&self) -> HidReport {
        HidReport::new(self.modifiers, &self.pressed)
    }

    /// Returns `true` if any key or modifier is held.
    pub fn any_held(&self) -> bool {
        self.modifiers != 0 || !self.pressed.is_empty()
    }

    /// Releases everything.  Returns `true` if anything was held.
    pub fn reset(&mut self) -> bool {
        let held = self.any_held();
        self.modifiers = 0;
        self.pressed.clear();
        held
    }
}

fn modifier_bit(keysym: u32) -> Option<u8> {
    KeyMapper::keysym_to_modifier(keysym).and_then(HidKeyCode::modifier_bit)
}
