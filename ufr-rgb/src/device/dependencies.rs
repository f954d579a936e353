//! Compatibility gate between the running library/firmware and the
//! versions this program was built against.

use log::{info, warn};

use crate::constants::{MIN_FIRMWARE_VERSION, MIN_LIBRARY_VERSION};
use crate::error::Component;
use crate::transport::Transport;
use crate::types::Version;
use crate::{Error, Result};

/// Oldest library and firmware versions accepted at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumVersions {
    pub library: Version,
    pub firmware: Version,
}

impl Default for MinimumVersions {
    fn default() -> Self {
        Self {
            library: MIN_LIBRARY_VERSION,
            firmware: MIN_FIRMWARE_VERSION,
        }
    }
}

fn require(component: Component, required: Version, found: Version) -> Result<()> {
    if found < required {
        warn!("{} {} is older than required {}", component, found, required);
        return Err(Error::Dependency {
            component,
            required,
            found,
        });
    }
    Ok(())
}

/// Check the library first, then the reader firmware.
pub fn check_dependencies(transport: &mut dyn Transport, minimum: &MinimumVersions) -> Result<()> {
    let library = transport.library_version()?;
    require(Component::Library, minimum.library, library)?;

    let firmware = transport.firmware_version()?;
    require(Component::Firmware, minimum.firmware, firmware)?;

    info!("uFCoder library {}, reader firmware {}", library, firmware);
    Ok(())
}
