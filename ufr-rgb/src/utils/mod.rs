//! Utilities for ufr-rgb: small helpers for hex display and delays.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
