// ufr-rgb/src/types.rs

use crate::constants::MAX_UID_LEN;
use crate::Error;
use std::convert::TryFrom;

/// SAK - Select Acknowledge byte returned during anti-collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
#[display(fmt = "0x{:02X}", _0)]
pub struct Sak(u8);

impl Sak {
    pub const fn new(sak: u8) -> Self {
        Self(sak)
    }
}

/// UID - Newtype Pattern (up to 10 bytes, length carried by the value)
///
/// Bytes past `len` are always zero so the derived equality compares only
/// the meaningful prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Colon separated upper case hex, e.g. `04:A1:B2:C3`
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_colon(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                max: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// Vendor status code (`UFR_STATUS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "0x{:08X}", _0)]
pub struct Status(u32);

impl Status {
    pub const OK: Self = Self(0x00);
    pub const COMMUNICATION_ERROR: Self = Self(0x01);
    pub const CHKSUM_ERROR: Self = Self(0x02);
    pub const READING_ERROR: Self = Self(0x03);
    pub const WRITING_ERROR: Self = Self(0x04);
    pub const BUFFER_OVERFLOW: Self = Self(0x05);
    pub const NO_CARD: Self = Self(0x08);
    pub const COMMAND_NOT_SUPPORTED: Self = Self(0x09);
    pub const PARAMETERS_ERROR: Self = Self(0x0F);
    pub const COMMUNICATION_BREAK: Self = Self(0x50);
    pub const CAN_NOT_OPEN_READER: Self = Self(0x52);
    pub const READER_NOT_SUPPORTED: Self = Self(0x53);
    pub const READER_OPENING_ERROR: Self = Self(0x54);
    pub const READER_PORT_NOT_OPENED: Self = Self(0x55);
    pub const CANT_CLOSE_READER_PORT: Self = Self(0x56);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u32 {
        self.0
    }

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// Symbolic name for the statuses this program cares about.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::OK => "UFR_OK",
            Self::COMMUNICATION_ERROR => "UFR_COMMUNICATION_ERROR",
            Self::CHKSUM_ERROR => "UFR_CHKSUM_ERROR",
            Self::READING_ERROR => "UFR_READING_ERROR",
            Self::WRITING_ERROR => "UFR_WRITING_ERROR",
            Self::BUFFER_OVERFLOW => "UFR_BUFFER_OVERFLOW",
            Self::NO_CARD => "UFR_NO_CARD",
            Self::COMMAND_NOT_SUPPORTED => "UFR_COMMAND_NOT_SUPPORTED",
            Self::PARAMETERS_ERROR => "UFR_PARAMETERS_ERROR",
            Self::COMMUNICATION_BREAK => "UFR_COMMUNICATION_BREAK",
            Self::CAN_NOT_OPEN_READER => "UFR_CAN_NOT_OPEN_READER",
            Self::READER_NOT_SUPPORTED => "UFR_READER_NOT_SUPPORTED",
            Self::READER_OPENING_ERROR => "UFR_READER_OPENING_ERROR",
            Self::READER_PORT_NOT_OPENED => "UFR_READER_PORT_NOT_OPENED",
            Self::CANT_CLOSE_READER_PORT => "UFR_CANT_CLOSE_READER_PORT",
            _ => return None,
        };
        Some(name)
    }

    /// Hex code followed by the symbolic name when there is one, for logs:
    /// `0x00000008 (UFR_NO_CARD)`.
    pub fn describe(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", self, name),
            None => self.to_string(),
        }
    }

    /// `Ok(())` for `UFR_OK`, `Error::Status` otherwise.
    pub fn into_result(self) -> crate::Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Status(self))
        }
    }
}

/// Color and intensity sent to the reader's RGB light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Percent, 0 - 100
    pub intensity: u8,
}

impl RgbColor {
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8, intensity: u8) -> Self {
        Self {
            red,
            green,
            blue,
            intensity,
        }
    }

    /// Build a color from operator supplied integers. Each value keeps only
    /// its low byte, so 300 becomes 44 and -1 becomes 255.
    pub fn from_truncated(red: i64, green: i64, blue: i64, intensity: i64) -> Self {
        Self::new(red as u8, green as u8, blue as u8, intensity as u8)
    }
}

/// Library or firmware version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display(fmt = "{}.{}.{}", major, minor, build)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub build: u16,
}

impl Version {
    pub const fn new(major: u8, minor: u8, build: u16) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Decode the packed value returned by `GetDllVersion`: major in the
    /// low byte, minor in the next byte, build in the high half word.
    pub fn from_packed(raw: u32) -> Self {
        Self {
            major: (raw & 0xff) as u8,
            minor: ((raw >> 8) & 0xff) as u8,
            build: (raw >> 16) as u16,
        }
    }
}

impl std::str::FromStr for Version {
    type Err = Error;

    /// Parse `major.minor.build`; a missing build defaults to 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::Config(format!("invalid version '{}'", s));
        let mut parts = s.trim().split('.');
        let major = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let minor = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let build = match parts.next() {
            Some(b) => b.parse().map_err(|_| bad())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(Self::new(major, minor, build))
    }
}

/// Deserialized from `"major.minor[.build]"`. An environment value such as
/// `5.1` reaches the deserializer as a number, so numbers are accepted too.
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::{self, Visitor};

        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a version like 5.0.1")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Version, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Version, E> {
                self.visit_str(&format!("{}.0", v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Version, E> {
                self.visit_str(&format!("{}.0", v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Version, E> {
                let s = v.to_string();
                if s.contains('.') {
                    self.visit_str(&s)
                } else {
                    self.visit_str(&format!("{}.0", s))
                }
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}
