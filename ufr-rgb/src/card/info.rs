use std::fmt;

use crate::card::{CardSnapshot, DlCardType};

/// A detected card together with the type the reader classified it as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    pub card_type: DlCardType,
    pub card: CardSnapshot,
}

impl CardInfo {
    pub fn new(card_type: DlCardType, card: CardSnapshot) -> Self {
        Self { card_type, card }
    }
}

/// `Card type: DL_NTAG_213, sak = 0x00, uid[7] = 04:..`
impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card type: {}, sak = {}, uid[{}] = {}",
            self.card_type,
            self.card.sak(),
            self.card.uid_len(),
            self.card.uid().to_hex()
        )
    }
}
