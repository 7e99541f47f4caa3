//! X11 KeySym values as carried by RFB `KeyEvent` messages.
//!
//! Values are taken from X11/keysymdef.h.
//! Reference: https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/blob/master/include/X11/keysymdef.h
//!
//! # What is a KeySym? (for beginners)
//!
//! A remote-display client does not send physical key positions; it sends a
//! *KeySym*, a symbolic name for what the user typed.  Printable Latin-1
//! characters use their ASCII value (`XK_a` = 0x61, `XK_A` = 0x41) while
//! control and keypad keys live in the 0xFF00 page (`XK_Return` = 0xFF0D).
//!
//! Only the constants the translation table needs are listed here.

#![allow(missing_docs)]

// ── Latin-1 ───────────────────────────────────────────────────────────────────

pub const XK_SPACE: u32 = 0x0020;
pub const XK_EXCLAM: u32 = 0x0021;
pub const XK_QUOTEDBL: u32 = 0x0022;
pub const XK_NUMBERSIGN: u32 = 0x0023;
pub const XK_DOLLAR: u32 = 0x0024;
pub const XK_PERCENT: u32 = 0x0025;
pub const XK_AMPERSAND: u32 = 0x0026;
pub const XK_APOSTROPHE: u32 = 0x0027;
pub const XK_PARENLEFT: u32 = 0x0028;
pub const XK_PARENRIGHT: u32 = 0x0029;
pub const XK_ASTERISK: u32 = 0x002A;
pub const XK_PLUS: u32 = 0x002B;
pub const XK_COMMA: u32 = 0x002C;
pub const XK_MINUS: u32 = 0x002D;
pub const XK_PERIOD: u32 = 0x002E;
pub const XK_SLASH: u32 = 0x002F;
pub const XK_0: u32 = 0x0030;
pub const XK_1: u32 = 0x0031;
pub const XK_9: u32 = 0x0039;
pub const XK_COLON: u32 = 0x003A;
pub const XK_SEMICOLON: u32 = 0x003B;
pub const XK_LESS: u32 = 0x003C;
pub const XK_EQUAL: u32 = 0x003D;
pub const XK_GREATER: u32 = 0x003E;
pub const XK_QUESTION: u32 = 0x003F;
pub const XK_AT: u32 = 0x0040;
pub const XK_UPPER_A: u32 = 0x0041;
pub const XK_UPPER_Z: u32 = 0x005A;
pub const XK_BRACKETLEFT: u32 = 0x005B;
pub const XK_BACKSLASH: u32 = 0x005C;
pub const XK_BRACKETRIGHT: u32 = 0x005D;
pub const XK_ASCIICIRCUM: u32 = 0x005E;
pub const XK_UNDERSCORE: u32 = 0x005F;
pub const XK_GRAVE: u32 = 0x0060;
pub const XK_LOWER_A: u32 = 0x0061;
pub const XK_LOWER_Z: u32 = 0x007A;
pub const XK_BRACELEFT: u32 = 0x007B;
pub const XK_BAR: u32 = 0x007C;
pub const XK_BRACERIGHT: u32 = 0x007D;
pub const XK_ASCIITILDE: u32 = 0x007E;

// ── TTY function keys ─────────────────────────────────────────────────────────

pub const XK_BACKSPACE: u32 = 0xFF08;
pub const XK_TAB: u32 = 0xFF09;
pub const XK_RETURN: u32 = 0xFF0D;
pub const XK_PAUSE: u32 = 0xFF13;
pub const XK_SCROLL_LOCK: u32 = 0xFF14;
pub const XK_ESCAPE: u32 = 0xFF1B;
pub const XK_DELETE: u32 = 0xFFFF;

// ── Cursor control ────────────────────────────────────────────────────────────

pub const XK_HOME: u32 = 0xFF50;
pub const XK_LEFT: u32 = 0xFF51;
pub const XK_UP: u32 = 0xFF52;
pub const XK_RIGHT: u32 = 0xFF53;
pub const XK_DOWN: u32 = 0xFF54;
pub const XK_PAGE_UP: u32 = 0xFF55;
pub const XK_PAGE_DOWN: u32 = 0xFF56;
pub const XK_END: u32 = 0xFF57;

// ── Misc functions ────────────────────────────────────────────────────────────

pub const XK_PRINT: u32 = 0xFF61;
pub const XK_INSERT: u32 = 0xFF63;
pub const XK_NUM_LOCK: u32 = 0xFF7F;

// ── Keypad ────────────────────────────────────────────────────────────────────

pub const XK_KP_SPACE: u32 = 0xFF80;
pub const XK_KP_TAB: u32 = 0xFF89;
pub const XK_KP_ENTER: u32 = 0xFF8D;
pub const XK_KP_F1: u32 = 0xFF91;
pub const XK_KP_F4: u32 = 0xFF94;
pub const XK_KP_HOME: u32 = 0xFF95;
pub const XK_KP_LEFT: u32 = 0xFF96;
pub const XK_KP_UP: u32 = 0xFF97;
pub const XK_KP_RIGHT: u32 = 0xFF98;
pub const XK_KP_DOWN: u32 = 0xFF99;
pub const XK_KP_PAGE_UP: u32 = 0xFF9A;
pub const XK_KP_PAGE_DOWN: u32 = 0xFF9B;
pub const XK_KP_END: u32 = 0xFF9C;
pub const XK_KP_INSERT: u32 = 0xFF9E;
pub const XK_KP_DELETE: u32 = 0xFF9F;
pub const XK_KP_MULTIPLY: u32 = 0xFFAA;
pub const XK_KP_ADD: u32 = 0xFFAB;
pub const XK_KP_SUBTRACT: u32 = 0xFFAD;
pub const XK_KP_DECIMAL: u32 = 0xFFAE;
pub const XK_KP_DIVIDE: u32 = 0xFFAF;
pub const XK_KP_0: u32 = 0xFFB0;
pub const XK_KP_1: u32 = 0xFFB1;
pub const XK_KP_9: u32 = 0xFFB9;
pub const XK_KP_EQUAL: u32 = 0xFFBD;

// ── Function keys ─────────────────────────────────────────────────────────────

pub const XK_F1: u32 = 0xFFBE;
pub const XK_F12: u32 = 0xFFC9;

// ── Modifiers ─────────────────────────────────────────────────────────────────

pub const XK_SHIFT_L: u32 = 0xFFE1;
pub const XK_SHIFT_R: u32 = 0xFFE2;
pub const XK_CONTROL_L: u32 = 0xFFE3;
pub const XK_CONTROL_R: u32 = 0xFFE4;
pub const XK_CAPS_LOCK: u32 = 0xFFE5;
pub const XK_META_L: u32 = 0xFFE7;
pub const XK_META_R: u32 = 0xFFE8;
pub const XK_ALT_L: u32 = 0xFFE9;
pub const XK_ALT_R: u32 = 0xFFEA;
pub const XK_SUPER_L: u32 = 0xFFEB;
pub const XK_SUPER_R: u32 = 0xFFEC;
/// AltGr on most European layouts.
pub const XK_ISO_LEVEL3_SHIFT: u32 = 0xFE03;
