//! Key-event classification, decoupled from any event representation.
//!
//! The coordinator only ever sees a numeric key code; whether that code came
//! from a browser event, a test, or something else entirely is not its
//! concern.

pub const BACKSPACE: u32 = 8;
pub const DELETE: u32 = 46;

/// Keys that cannot change the text in the search box, so a search should
/// never fire for them: Tab, Shift, Ctrl, Alt, CapsLock, Space, PageUp,
/// PageDown, the arrow keys, and the Meta keys.
const IGNORED_KEY_CODES: &[u32] = &[9, 16, 17, 18, 20, 32, 33, 34, 37, 38, 39, 40, 91, 93];

/// Classification of a raw key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Modifier or navigation key; must not (re)start the debounce timer.
    Ignored,
    /// A key that may have changed the text.
    Qualifying {
        /// Backspace or Delete. The coordinator uses this for the
        /// emptied-search-box short-circuit.
        deletion: bool,
    },
}

pub fn classify(code: u32) -> KeyClass {
    if IGNORED_KEY_CODES.contains(&code) {
        KeyClass::Ignored
    } else {
        KeyClass::Qualifying {
            deletion: is_deletion(code),
        }
    }
}

pub fn is_deletion(code: u32) -> bool {
    code == BACKSPACE || code == DELETE
}
