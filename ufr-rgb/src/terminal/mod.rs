// ufr-rgb/src/terminal/mod.rs

//! Keyboard input behind a small capability trait so the poll loop does not
//! depend on which terminal backend is active.

mod tty;
mod guard;
pub mod scripted;

pub use tty::{CrlfWriter, CrosstermTerminal};
pub use guard::RawMode;
pub use scripted::ScriptedTerminal;

use crate::Result;

/// A single key press as the menu sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    /// Any key without a character (arrows, function keys, ...)
    Other,
}

/// Terminal capabilities the console needs.
pub trait Terminal {
    /// Switch to unbuffered, no-echo key input.
    fn enter_raw_mode(&mut self) -> Result<()>;

    /// Undo `enter_raw_mode` and drop any input still pending.
    fn restore_mode(&mut self) -> Result<()>;

    /// Whether a key press is waiting. Never blocks.
    fn pending_input(&mut self) -> Result<bool>;

    /// Next key press, blocking until one arrives.
    fn read_key(&mut self) -> Result<Key>;

    /// One newline-terminated line of text, without the line terminator.
    fn read_line(&mut self) -> Result<String>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn enter_raw_mode(&mut self) -> Result<()> {
        (**self).enter_raw_mode()
    }
    fn restore_mode(&mut self) -> Result<()> {
        (**self).restore_mode()
    }
    fn pending_input(&mut self) -> Result<bool> {
        (**self).pending_input()
    }
    fn read_key(&mut self) -> Result<Key> {
        (**self).read_key()
    }
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}
