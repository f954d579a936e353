// ufr-rgb/src/constants.rs
//! Common constants used across the crate

/// Longest UID a reader reports (triple size ISO 14443A)
pub const MAX_UID_LEN: usize = 10;

/// Settling time the reader needs after `ReaderReset`
pub const RESET_SETTLE_MS: u64 = 500;

/// Delay between two card polls
pub const POLL_INTERVAL_MS: u64 = 300;

/// Oldest uFCoder library this program was built against
pub const MIN_LIBRARY_VERSION: crate::Version = crate::Version::new(5, 0, 1);

/// Oldest reader firmware supporting `UfrRgbLightControl`
pub const MIN_FIRMWARE_VERSION: crate::Version = crate::Version::new(5, 0, 1);

/// Version shown in the usage banner
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of the usage banner box interior
pub const USAGE_WIDTH: usize = 48;
