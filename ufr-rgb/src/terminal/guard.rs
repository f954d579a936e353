use std::ops::{Deref, DerefMut};

use log::{debug, warn};

use crate::terminal::Terminal;
use crate::Result;

/// Keeps a terminal in raw mode for as long as the guard lives. Dropping the
/// guard restores the terminal on every exit path, early returns included.
pub struct RawMode<T: Terminal> {
    inner: T,
}

impl<T: Terminal> RawMode<T> {
    pub fn enter(mut inner: T) -> Result<Self> {
        inner.enter_raw_mode()?;
        debug!("terminal in raw mode");
        Ok(Self { inner })
    }
}

impl<T: Terminal> Deref for RawMode<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Terminal> DerefMut for RawMode<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Terminal> Drop for RawMode<T> {
    fn drop(&mut self) {
        if let Err(e) = self.inner.restore_mode() {
            warn!("restoring terminal failed: {}", e);
        }
    }
}
