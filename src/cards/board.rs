//! The board: a shuffled grid of paired cards.
//!
//! Uses an `im` vector so a `GameSession` holding the board clones in O(1).
//! The flip reducer takes sessions by value and hosts keep the previous
//! snapshot around cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::card::Card;
use super::face::{Face, PairId};
use super::shuffle::shuffled;
use crate::core::GameRng;

/// An ordered grid of `rows * cols` cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cards: Vector<Card>,
}

impl Board {
    /// Deal a fresh board.
    ///
    /// Each face becomes a pair (its index is the `PairId`), the `rows * cols`
    /// cards are shuffled and laid out in order. Dimensions are validated
    /// upstream; the tile count must be even and match the face count.
    #[must_use]
    pub fn deal(rows: usize, cols: usize, faces: &[Face], rng: &mut GameRng) -> Self {
        debug_assert!(rows * cols >= 2 && (rows * cols) % 2 == 0, "tile count must be even");
        debug_assert_eq!(faces.len() * 2, rows * cols, "one face per pair");

        let deck: Vec<Card> = faces
            .iter()
            .enumerate()
            .flat_map(|(i, face)| {
                let card = Card::new(PairId::new(i as u32), face.clone());
                [card.clone(), card]
            })
            .collect();

        let cards: Vector<Card> = shuffled(&deck, rng).into_iter().collect();
        debug!(rows, cols, pairs = faces.len(), "dealt board");

        Self { rows, cols, cards }
    }

    /// Build a board from cards already in position.
    ///
    /// Useful for replays and deterministic scenarios.
    #[must_use]
    pub fn arranged(rows: usize, cols: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        debug_assert_eq!(cards.len(), rows * cols, "card count must fill the grid");
        Self { rows, cols, cards }
    }

    /// Grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get the card at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Iterate over cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Positions holding the given pair.
    #[must_use]
    pub fn positions_of(&self, pair: PairId) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.pair == pair)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of revealed cards whose pair has not been found.
    #[must_use]
    pub fn unresolved_face_up(&self) -> usize {
        self.cards.iter().filter(|c| c.face_up && !c.matched).count()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    pub(crate) fn reveal(&mut self, position: usize) {
        if let Some(card) = self.cards.get_mut(position) {
            card.face_up = true;
        }
    }

    pub(crate) fn conceal(&mut self, position: usize) {
        if let Some(card) = self.cards.get_mut(position) {
            if !card.matched {
                card.face_up = false;
            }
        }
    }

    pub(crate) fn mark_matched(&mut self, position: usize) {
        if let Some(card) = self.cards.get_mut(position) {
            card.face_up = true;
            card.matched = true;
        }
    }
}
