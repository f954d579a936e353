// ufr-rgb/src/lib.rs

//! ufr-rgb
//!
//! Card monitor and RGB light console for D-Logic uFR NFC readers. The
//! reader itself is driven by the vendor uFCoder library; this crate owns
//! the poll loop, change detection, menu and terminal handling around it.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod session;
pub mod terminal;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
