//! Raw bindings to the parts of the uFCoder API this crate uses.

use std::os::raw::{c_char, c_void};

/// `UFR_STATUS`
pub type UfrStatus = u32;

#[link(name = "uFCoder")]
unsafe extern "C" {
    pub fn ReaderOpen() -> UfrStatus;
    pub fn ReaderOpenEx(
        reader_type: u32,
        port_name: *const c_char,
        port_interface: u32,
        arg: *mut c_void,
    ) -> UfrStatus;
    pub fn ReaderReset() -> UfrStatus;
    pub fn ReaderClose() -> UfrStatus;

    pub fn GetCardIdEx(sak: *mut u8, uid: *mut u8, uid_size: *mut u8) -> UfrStatus;
    pub fn GetDlogicCardType(card_type: *mut u8) -> UfrStatus;

    pub fn UfrRgbLightControl(
        red: u8,
        green: u8,
        blue: u8,
        intensity: u8,
        enable: u8,
    ) -> UfrStatus;

    pub fn GetDllVersion() -> u32;
    pub fn GetReaderFirmwareVersion(major: *mut u8, minor: *mut u8) -> UfrStatus;
    pub fn GetBuildNumber(build: *mut u8) -> UfrStatus;
}
