// ufr-rgb/src/device/mod.rs

pub mod builder;
pub mod dependencies;
pub mod handle;

pub use builder::DeviceBuilder;
pub use dependencies::{MinimumVersions, check_dependencies};
pub use handle::{Device, Initialized, ReaderHandle, Uninitialized};
