//! Key to menu action mapping.

use crate::terminal::Key;

/// What a key press asks the console to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// `1`: prompt for a color and switch the light on
    EnableColor,
    /// `2`: switch the light off
    DisableColor,
    /// Escape: leave the loop (handled by the caller)
    Exit,
    /// Anything else: show the usage banner again
    Usage,
}

impl MenuAction {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Char('1') => Self::EnableColor,
            Key::Char('2') => Self::DisableColor,
            Key::Escape => Self::Exit,
            _ => Self::Usage,
        }
    }
}
