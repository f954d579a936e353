// ufr-rgb/src/device/builder.rs

use std::time::Duration;

use crate::device::dependencies::MinimumVersions;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::utils::default_settle_delay;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    settle_delay: Duration,
    minimum: MinimumVersions,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            settle_delay: default_settle_delay(),
            minimum: MinimumVersions::default(),
        }
    }

    /// Provide an already-opened transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Time to wait after the reset before talking to the reader again.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn minimum_versions(mut self, minimum: MinimumVersions) -> Self {
        self.minimum = minimum;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_settings(t, self.settle_delay, self.minimum)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
