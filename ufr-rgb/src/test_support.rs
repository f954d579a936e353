//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::card::{CardSnapshot, DlCardType};
use crate::device::{Device, DeviceBuilder, Initialized};
use crate::transport::{MockTransport, Transport};
use crate::types::{RgbColor, Version};
use crate::Result;

/// Transport wrapper that delegates into a shared MockTransport so a test
/// can inspect it after a Device took ownership (and after it was dropped).
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }
    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
    fn card_id(&mut self) -> Result<Option<CardSnapshot>> {
        self.inner.borrow_mut().card_id()
    }
    fn card_type(&mut self) -> Result<DlCardType> {
        self.inner.borrow_mut().card_type()
    }
    fn rgb_light_control(&mut self, color: RgbColor, enabled: bool) -> Result<()> {
        self.inner.borrow_mut().rgb_light_control(color, enabled)
    }
    fn library_version(&mut self) -> Result<Version> {
        self.inner.borrow_mut().library_version()
    }
    fn firmware_version(&mut self) -> Result<Version> {
        self.inner.borrow_mut().firmware_version()
    }
}

/// Share `mock` between the test and a boxed Transport trait object.
#[doc(hidden)]
pub fn shared_mock(mock: MockTransport) -> (Rc<RefCell<MockTransport>>, Box<dyn Transport>) {
    let inner = Rc::new(RefCell::new(mock));
    let boxed: Box<dyn Transport> = Box::new(SharedTransport::new(inner.clone()));
    (inner, boxed)
}

/// Convenience: a builder over `transport` with no settle delay.
#[doc(hidden)]
pub fn quick_builder(transport: Box<dyn Transport>) -> DeviceBuilder {
    DeviceBuilder::new()
        .with_transport(transport)
        .settle_delay(Duration::ZERO)
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// shared MockTransport.
#[doc(hidden)]
pub fn initialized_mock_device(
    mock: MockTransport,
) -> Result<(Rc<RefCell<MockTransport>>, Device<Initialized>)> {
    let (inner, boxed) = shared_mock(mock);
    let device = quick_builder(boxed).build_uninitialized()?.initialize()?;
    Ok((inner, device))
}
