// ufr-rgb/src/transport/traits.rs

use crate::card::{CardSnapshot, DlCardType};
use crate::types::{RgbColor, Version};
use crate::Result;

/// Transport trait abstracts the vendor reader API away from the device
/// lifecycle and the poll loop.
///
/// Every call blocks until the reader answers. A non-OK vendor status is
/// reported as `Error::Status`.
pub trait Transport {
    /// `ReaderReset`
    fn reset(&mut self) -> Result<()>;

    /// `ReaderClose`. Called at most once, by the owning handle.
    fn close(&mut self) -> Result<()>;

    /// `GetCardIdEx`: the card in the field, or `None` for `UFR_NO_CARD`.
    fn card_id(&mut self) -> Result<Option<CardSnapshot>>;

    /// `GetDlogicCardType` for the card currently in the field.
    fn card_type(&mut self) -> Result<DlCardType>;

    /// `UfrRgbLightControl`
    fn rgb_light_control(&mut self, color: RgbColor, enabled: bool) -> Result<()>;

    /// Version of the driver library in use.
    fn library_version(&mut self) -> Result<Version>;

    /// Version of the firmware running on the reader.
    fn firmware_version(&mut self) -> Result<Version>;
}
