// ufr-rgb/src/error.rs

use thiserror::Error;

use crate::types::{Status, Version};

/// Which side of the reader a version requirement applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Component {
    #[display(fmt = "uFCoder library")]
    Library,
    #[display(fmt = "uFR firmware")]
    Firmware,
}

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("reader is already open")]
    AlreadyOpen,

    #[error("reader call failed, status is: {0}")]
    Status(Status),

    #[error("error while opening device, status is: {0}")]
    Open(Status),

    #[error("error while resetting device, status is: {0}")]
    Reset(Status),

    #[error("fatal error while trying to read card, status is: {0}")]
    CardRead(Status),

    #[error("{component} version {found} is older than the required {required}")]
    Dependency {
        component: Component,
        required: Version,
        found: Version,
    },

    #[error("invalid uid length: at most {max} bytes, got {actual}")]
    InvalidLength { max: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Re-tag a raw reader status with the stage that produced it. Errors
    /// that do not carry a status are returned unchanged.
    pub fn map_status(self, stage: impl FnOnce(Status) -> Error) -> Error {
        match self {
            Error::Status(status) => stage(status),
            other => other,
        }
    }

    /// Display text plus the status name, if this error carries a named
    /// status. Used for log lines.
    pub fn describe(&self) -> String {
        match self.status().and_then(|s| s.name()) {
            Some(name) => format!("{} ({})", self, name),
            None => self.to_string(),
        }
    }

    /// The vendor status carried by this error, if any.
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Status(s) | Error::Open(s) | Error::Reset(s) | Error::CardRead(s) => Some(*s),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
