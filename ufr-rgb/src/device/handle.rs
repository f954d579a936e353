// ufr-rgb/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, info, warn};

use crate::card::{CardSnapshot, DlCardType};
use crate::device::dependencies::{MinimumVersions, check_dependencies};
use crate::transport::Transport;
use crate::types::RgbColor;
use crate::utils::{default_settle_delay, pause};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Owns the open reader connection and closes it exactly once, either via
/// [`ReaderHandle::close`] or on drop.
pub struct ReaderHandle {
    transport: Box<dyn Transport>,
    closed: bool,
}

impl ReaderHandle {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            closed: false,
        }
    }

    pub fn transport(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    /// Close the reader now and report the vendor status.
    pub fn close(mut self) -> Result<()> {
        self.close_once()
    }

    fn close_once(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        info!("closing reader");
        self.transport.close()
    }
}

impl Drop for ReaderHandle {
    fn drop(&mut self) {
        if let Err(e) = self.close_once() {
            warn!("closing reader failed: {}", e);
        }
    }
}

/// Device handle that enforces the open -> reset -> checked sequence at
/// compile time: polling and light control exist only on
/// `Device<Initialized>`.
pub struct Device<State = Uninitialized> {
    handle: ReaderHandle,
    settle_delay: Duration,
    minimum: MinimumVersions,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Wrap an already opened transport with default settings.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_settings(transport, default_settle_delay(), MinimumVersions::default())
    }

    pub(crate) fn with_settings(
        transport: Box<dyn Transport>,
        settle_delay: Duration,
        minimum: MinimumVersions,
    ) -> Self {
        Self {
            handle: ReaderHandle::new(transport),
            settle_delay,
            minimum,
            _state: PhantomData,
        }
    }

    /// Reset the reader, give it time to settle, then run the dependency
    /// check. On failure the reader is closed before the error returns.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        self.handle
            .transport()
            .reset()
            .map_err(|e| e.map_status(Error::Reset))?;
        pause(self.settle_delay);

        check_dependencies(self.handle.transport(), &self.minimum)?;
        info!("reader ready");

        Ok(Device {
            handle: self.handle,
            settle_delay: self.settle_delay,
            minimum: self.minimum,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// One `GetCardIdEx` round: the card in the field or `None`.
    pub fn poll(&mut self) -> Result<Option<CardSnapshot>> {
        self.handle.transport().card_id()
    }

    /// Classify the card currently in the field.
    pub fn card_type(&mut self) -> Result<DlCardType> {
        self.handle.transport().card_type()
    }

    /// Switch the RGB light on with the given color.
    pub fn set_rgb_light(&mut self, color: RgbColor) -> Result<()> {
        debug!("enable rgb light {:?}", color);
        self.handle.transport().rgb_light_control(color, true)
    }

    /// Switch the RGB light off. Always sends all-zero values.
    pub fn disable_rgb_light(&mut self) -> Result<()> {
        debug!("disable rgb light");
        self.handle.transport().rgb_light_control(RgbColor::OFF, false)
    }
}

impl<State> Device<State> {
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn minimum_versions(&self) -> &MinimumVersions {
        &self.minimum
    }

    /// Close the reader explicitly. Dropping the device has the same effect
    /// but discards the status.
    pub fn close(self) -> Result<()> {
        self.handle.close()
    }
}
