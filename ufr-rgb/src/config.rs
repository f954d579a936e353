// ufr-rgb/src/config.rs

//! Runtime configuration. Defaults match the reader's documented timings;
//! `UFR_*` environment variables override them without a rebuild.
//!
//! | Variable                   | Field                  |
//! |----------------------------|------------------------|
//! | `UFR_PORT_NAME`            | explicit port, enables `ReaderOpenEx` |
//! | `UFR_READER_TYPE`          | reader type for `ReaderOpenEx` |
//! | `UFR_PORT_INTERFACE`       | port interface for `ReaderOpenEx` |
//! | `UFR_POLL_INTERVAL_MS`     | delay between card polls |
//! | `UFR_SETTLE_MS`            | delay after reader reset |
//! | `UFR_MIN_LIBRARY_VERSION`  | oldest accepted uFCoder |
//! | `UFR_MIN_FIRMWARE_VERSION` | oldest accepted firmware |

use std::time::Duration;

use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;

use crate::constants::{
    MIN_FIRMWARE_VERSION, MIN_LIBRARY_VERSION, POLL_INTERVAL_MS, RESET_SETTLE_MS,
};
use crate::device::MinimumVersions;
use crate::types::Version;
use crate::utils::ms;
use crate::{Error, Result};

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "UFR_";

/// Explicit port settings for `ReaderOpenEx`. Without them the library
/// probes for the reader on its own (`ReaderOpen`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSettings {
    pub reader_type: u32,
    pub port_name: String,
    pub port_interface: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: Option<PortSettings>,
    pub poll_interval: Duration,
    pub settle_delay: Duration,
    pub minimum_versions: MinimumVersions,
}

/// Flat view of the variables as figment extracts them.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Settings {
    port_name: Option<String>,
    reader_type: u32,
    port_interface: u32,
    poll_interval_ms: u64,
    settle_ms: u64,
    min_library_version: Version,
    min_firmware_version: Version,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port_name: None,
            reader_type: 0,
            port_interface: 0,
            poll_interval_ms: POLL_INTERVAL_MS,
            settle_ms: RESET_SETTLE_MS,
            min_library_version: MIN_LIBRARY_VERSION,
            min_firmware_version: MIN_FIRMWARE_VERSION,
        }
    }
}

impl From<Settings> for Config {
    fn from(s: Settings) -> Self {
        Self {
            port: s.port_name.map(|port_name| PortSettings {
                reader_type: s.reader_type,
                port_name,
                port_interface: s.port_interface,
            }),
            poll_interval: ms(s.poll_interval_ms),
            settle_delay: ms(s.settle_ms),
            minimum_versions: MinimumVersions {
                library: s.min_library_version,
                firmware: s.min_firmware_version,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Settings::default().into()
    }
}

impl Config {
    /// The provider stack `from_env` reads: the `UFR_*` variables.
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed(ENV_PREFIX))
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Defaults overridden by whatever `figment` provides. Malformed values
    /// are `Error::Config`.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let settings: Settings = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(settings.into())
    }
}
