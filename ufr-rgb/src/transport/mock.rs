// ufr-rgb/src/transport/mock.rs

use std::collections::VecDeque;

use crate::card::{CardSnapshot, DlCardType};
use crate::constants::{MIN_FIRMWARE_VERSION, MIN_LIBRARY_VERSION};
use crate::transport::traits::Transport;
use crate::types::{RgbColor, Status, Version};
use crate::{Error, Result};

/// Mock transport for unit tests. It records light control calls and plays
/// back queued poll results.
#[derive(Debug)]
pub struct MockTransport {
    /// Queued `card_id` answers; an empty queue means no card.
    pub polls: VecDeque<std::result::Result<Option<CardSnapshot>, Status>>,
    /// Answer for every `card_type` call.
    pub card_type: std::result::Result<DlCardType, Status>,
    pub reset_status: Status,
    pub rgb_status: Status,
    pub library_version: Version,
    pub firmware_version: Version,
    /// Record of `rgb_light_control` calls: (color, enabled)
    pub rgb_calls: Vec<(RgbColor, bool)>,
    pub reset_count: usize,
    pub close_count: usize,
    pub poll_count: usize,
    pub card_type_count: usize,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            polls: VecDeque::new(),
            card_type: Ok(DlCardType::MIFARE_CLASSIC_1K),
            reset_status: Status::OK,
            rgb_status: Status::OK,
            library_version: MIN_LIBRARY_VERSION,
            firmware_version: MIN_FIRMWARE_VERSION,
            rgb_calls: Vec::new(),
            reset_count: 0,
            close_count: 0,
            poll_count: 0,
            card_type_count: 0,
        }
    }

    pub fn push_card(&mut self, card: CardSnapshot) {
        self.polls.push_back(Ok(Some(card)));
    }

    pub fn push_no_card(&mut self) {
        self.polls.push_back(Ok(None));
    }

    pub fn push_poll_status(&mut self, status: Status) {
        self.polls.push_back(Err(status));
    }

    pub fn is_closed(&self) -> bool {
        self.close_count > 0
    }
}

impl Transport for MockTransport {
    fn reset(&mut self) -> Result<()> {
        self.reset_count += 1;
        self.reset_status.into_result()
    }

    fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        Ok(())
    }

    fn card_id(&mut self) -> Result<Option<CardSnapshot>> {
        self.poll_count += 1;
        match self.polls.pop_front() {
            Some(Ok(card)) => Ok(card),
            Some(Err(status)) => Err(Error::Status(status)),
            None => Ok(None),
        }
    }

    fn card_type(&mut self) -> Result<DlCardType> {
        self.card_type_count += 1;
        self.card_type.map_err(Error::Status)
    }

    fn rgb_light_control(&mut self, color: RgbColor, enabled: bool) -> Result<()> {
        self.rgb_calls.push((color, enabled));
        self.rgb_status.into_result()
    }

    fn library_version(&mut self) -> Result<Version> {
        Ok(self.library_version)
    }

    fn firmware_version(&mut self) -> Result<Version> {
        Ok(self.firmware_version)
    }
}
