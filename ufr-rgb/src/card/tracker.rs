//! Card change detection across polls.
//!
//! The reader reports the card in the field on every poll. `FieldTracker`
//! turns that stream into "new card" events: one per card arrival, and one
//! whenever the identity in the field changes without an empty poll between.

use log::trace;

use crate::card::CardSnapshot;

/// Field-presence flag plus the last announced card.
#[derive(Debug, Clone, Default)]
pub struct FieldTracker {
    in_field: bool,
    previous: Option<CardSnapshot>,
}

impl FieldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one poll result. Returns `true` when `poll` is a new-card event
    /// that should be announced.
    ///
    /// `None` (no card) only clears the presence flag; the stored snapshot
    /// is kept but no longer suppresses the next announcement.
    pub fn observe(&mut self, poll: Option<&CardSnapshot>) -> bool {
        let Some(card) = poll else {
            if self.in_field {
                trace!("card left the field");
            }
            self.in_field = false;
            return false;
        };

        if self.in_field && self.previous.as_ref() == Some(card) {
            return false;
        }

        self.previous = Some(*card);
        self.in_field = true;
        true
    }

    pub fn in_field(&self) -> bool {
        self.in_field
    }

    pub fn previous(&self) -> Option<&CardSnapshot> {
        self.previous.as_ref()
    }
}
