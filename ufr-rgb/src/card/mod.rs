// ufr-rgb/src/card/mod.rs

use crate::types::{Sak, Uid};
use crate::Result;

mod dl_type;
mod info;
pub mod tracker;

pub use dl_type::DlCardType;
pub use info::CardInfo;
pub use tracker::FieldTracker;

/// Identity of the card currently in the reader's field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSnapshot {
    sak: Sak,
    uid: Uid,
}

impl CardSnapshot {
    pub fn new(sak: Sak, uid: Uid) -> Self {
        Self { sak, uid }
    }

    /// Build a snapshot from the raw values `GetCardIdEx` fills in.
    pub fn from_raw(sak: u8, uid: &[u8]) -> Result<Self> {
        Ok(Self::new(Sak::new(sak), Uid::try_from(uid)?))
    }

    pub fn sak(&self) -> Sak {
        self.sak
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn uid_len(&self) -> usize {
        self.uid.len()
    }
}
