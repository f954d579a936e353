// ufr-rgb/src/prelude.rs

pub use crate::card::{CardInfo, CardSnapshot, DlCardType, FieldTracker};
pub use crate::config::Config;
pub use crate::device::Device;
pub use crate::device::{DeviceBuilder, Initialized, Uninitialized};
pub use crate::session::{Session, run_console};
pub use crate::terminal::{Key, RawMode, Terminal};
pub use crate::transport::Transport;
pub use crate::{Error, Result, RgbColor, Sak, Status, Uid, Version};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_colon, ms};
