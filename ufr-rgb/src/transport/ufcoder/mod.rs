// ufr-rgb/src/transport/ufcoder/mod.rs

#![cfg(feature = "ufcoder")]

use std::ffi::CString;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::card::{CardSnapshot, DlCardType};
use crate::constants::MAX_UID_LEN;
use crate::transport::traits::Transport;
use crate::types::{RgbColor, Status, Version};
use crate::{Error, Result};

mod ffi;

/// The vendor library drives a single implicit reader per process.
static READER_OPEN: AtomicBool = AtomicBool::new(false);

/// How to locate the reader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// `ReaderOpen`: let the library probe the known ports.
    #[default]
    Auto,
    /// `ReaderOpenEx` with an explicit reader type and port.
    Explicit {
        reader_type: u32,
        port_name: String,
        port_interface: u32,
    },
}

/// Transport backed by the vendor uFCoder shared library. Feature-gated
/// behind `--features ufcoder`; linking needs `libuFCoder` on the library
/// search path.
#[derive(Debug)]
pub struct UfCoderTransport {
    closed: bool,
}

fn status(raw: ffi::UfrStatus) -> Status {
    Status::new(raw)
}

impl UfCoderTransport {
    /// Open the reader. A second open while one transport is alive fails
    /// with `Error::AlreadyOpen`.
    pub fn open(mode: &OpenMode) -> Result<Self> {
        if READER_OPEN.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyOpen);
        }

        let st = match mode {
            OpenMode::Auto => status(unsafe { ffi::ReaderOpen() }),
            OpenMode::Explicit {
                reader_type,
                port_name,
                port_interface,
            } => {
                let port = match CString::new(port_name.as_str()) {
                    Ok(port) => port,
                    Err(_) => {
                        READER_OPEN.store(false, Ordering::SeqCst);
                        return Err(Error::Config(format!(
                            "port name {:?} contains a NUL byte",
                            port_name
                        )));
                    }
                };
                // SAFETY: `port` outlives the call; the library copies it.
                status(unsafe {
                    ffi::ReaderOpenEx(
                        *reader_type,
                        port.as_ptr(),
                        *port_interface,
                        std::ptr::null_mut(),
                    )
                })
            }
        };
        debug!("ReaderOpen({:?}) -> {}", mode, st.describe());

        if let Err(e) = st.into_result() {
            READER_OPEN.store(false, Ordering::SeqCst);
            return Err(e);
        }
        Ok(Self { closed: false })
    }
}

impl Transport for UfCoderTransport {
    fn reset(&mut self) -> Result<()> {
        let st = status(unsafe { ffi::ReaderReset() });
        debug!("ReaderReset -> {}", st.describe());
        st.into_result()
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        let st = status(unsafe { ffi::ReaderClose() });
        debug!("ReaderClose -> {}", st.describe());
        self.closed = true;
        READER_OPEN.store(false, Ordering::SeqCst);
        st.into_result()
    }

    fn card_id(&mut self) -> Result<Option<CardSnapshot>> {
        let mut sak = 0u8;
        let mut uid = [0u8; MAX_UID_LEN];
        let mut uid_size = 0u8;
        // SAFETY: `uid` has room for the longest UID the API reports.
        let st = status(unsafe { ffi::GetCardIdEx(&mut sak, uid.as_mut_ptr(), &mut uid_size) });
        match st {
            Status::OK => {
                let len = (uid_size as usize).min(MAX_UID_LEN);
                Ok(Some(CardSnapshot::from_raw(sak, &uid[..len])?))
            }
            Status::NO_CARD => Ok(None),
            other => {
                debug!("GetCardIdEx -> {}", other.describe());
                Err(Error::Status(other))
            }
        }
    }

    fn card_type(&mut self) -> Result<DlCardType> {
        let mut card_type = 0u8;
        let st = status(unsafe { ffi::GetDlogicCardType(&mut card_type) });
        debug!("GetDlogicCardType -> {}", st.describe());
        st.into_result()?;
        Ok(DlCardType::new(card_type))
    }

    fn rgb_light_control(&mut self, color: RgbColor, enabled: bool) -> Result<()> {
        let st = status(unsafe {
            ffi::UfrRgbLightControl(
                color.red,
                color.green,
                color.blue,
                color.intensity,
                enabled as u8,
            )
        });
        debug!("UfrRgbLightControl({:?}, {}) -> {}", color, enabled, st.describe());
        st.into_result()
    }

    fn library_version(&mut self) -> Result<Version> {
        Ok(Version::from_packed(unsafe { ffi::GetDllVersion() }))
    }

    fn firmware_version(&mut self) -> Result<Version> {
        let (mut major, mut minor, mut build) = (0u8, 0u8, 0u8);
        status(unsafe { ffi::GetReaderFirmwareVersion(&mut major, &mut minor) }).into_result()?;
        status(unsafe { ffi::GetBuildNumber(&mut build) }).into_result()?;
        Ok(Version::new(major, minor, build as u16))
    }
}

impl Drop for UfCoderTransport {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
