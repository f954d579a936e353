//! Scripted terminal used by tests: key presses and input lines are queued
//! up front and played back in order.

use std::collections::VecDeque;
use std::io;

use crate::terminal::{Key, Terminal};
use crate::{Error, Result};

/// Terminal double. Each entry of `events` answers one `pending_input`
/// check: `None` means "no key yet", `Some(key)` makes that key pending.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    pub events: VecDeque<Option<Key>>,
    pub lines: VecDeque<String>,
    pub enter_count: usize,
    pub restore_count: usize,
    pending: Option<Key>,
    raw: bool,
}

impl ScriptedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `n` empty input checks (one poll each in the session loop).
    pub fn idle(mut self, n: usize) -> Self {
        self.events.extend(std::iter::repeat_n(None, n));
        self
    }

    pub fn key(mut self, key: Key) -> Self {
        self.events.push_back(Some(key));
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }
}

impl Terminal for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> Result<()> {
        self.enter_count += 1;
        self.raw = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<()> {
        self.restore_count += 1;
        self.raw = false;
        self.pending = None;
        self.events.clear();
        Ok(())
    }

    fn pending_input(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        match self.events.pop_front() {
            Some(Some(key)) => {
                self.pending = Some(key);
                Ok(true)
            }
            Some(None) => Ok(false),
            None => Err(Error::Terminal("input script exhausted".into())),
        }
    }

    fn read_key(&mut self) -> Result<Key> {
        if let Some(key) = self.pending.take() {
            return Ok(key);
        }
        while let Some(ev) = self.events.pop_front() {
            if let Some(key) = ev {
                return Ok(key);
            }
        }
        Err(Error::Terminal("input script exhausted".into()))
    }

    fn read_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted line"))
        })
    }
}
