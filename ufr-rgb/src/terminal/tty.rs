//! Production terminal backed by `crossterm`.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::terminal::{Key, Terminal};
use crate::{Error, Result};

/// Keyboard through crossterm's event reader, lines through stdin.
#[derive(Debug, Default)]
pub struct CrosstermTerminal {
    pending: Option<Key>,
    raw: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Map a crossterm event to a menu key. Releases, repeats and non-key
/// events yield `None`. Ctrl+C maps to Escape since raw mode swallows SIGINT.
fn key_from_event(ev: Event) -> Option<Key> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = ev
    else {
        return None;
    };
    let key = match code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(key)
}

impl Terminal for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<()> {
        // Drain while still raw; cooked mode would hold partial lines back.
        self.pending = None;
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        disable_raw_mode()?;
        self.raw = false;
        Ok(())
    }

    fn pending_input(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(key) = key_from_event(event::read()?) {
                self.pending = Some(key);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn read_key(&mut self) -> Result<Key> {
        if let Some(key) = self.pending.take() {
            return Ok(key);
        }
        loop {
            if let Some(key) = key_from_event(event::read()?) {
                return Ok(key);
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        // Line input needs the terminal's own editing and echo.
        let was_raw = self.raw;
        if was_raw {
            disable_raw_mode()?;
        }
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line);
        if was_raw {
            enable_raw_mode()?;
        }
        if read? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Writer that expands `\n` to `\r\n`. Raw mode turns off the terminal's
/// output post-processing, so bare line feeds would not return the cursor.
#[derive(Debug)]
pub struct CrlfWriter<W: Write> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (i, chunk) in buf.split(|&b| b == b'\n').enumerate() {
            if i != 0 {
                self.inner.write_all(b"\r\n")?;
            }
            self.inner.write_all(chunk)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
