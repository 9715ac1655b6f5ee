//! Runtime card state.

use serde::{Deserialize, Serialize};

use super::face::{Face, PairId};

/// A card on the board.
///
/// Identity is the card's position on the board, which the board tracks.
/// `matched` is permanent once set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Match key shared with exactly one other card.
    pub pair: PairId,

    /// What the card shows when revealed.
    pub face: Face,

    /// Whether the card is currently revealed.
    pub face_up: bool,

    /// Whether the card's pair has been found.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(pair: PairId, face: Face) -> Self {
        Self {
            pair,
            face,
            face_up: false,
            matched: false,
        }
    }

    /// Whether a flip on this card can have any effect.
    #[must_use]
    pub fn is_flippable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Whether two cards form a pair.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.pair == other.pair
    }
}
