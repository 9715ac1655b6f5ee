//! Card system: faces, cards, shuffling and the board.
//!
//! ## Key Types
//!
//! - `PairId`: Match key shared by exactly two cards
//! - `Face`: What a revealed card displays (image or emoji)
//! - `FaceSupply`: Strategy producing the faces for a deal
//! - `Card`: Runtime card state (face-up, matched)
//! - `Board`: Shuffled grid of cards

pub mod face;
pub mod card;
pub mod shuffle;
pub mod board;

pub use face::{Face, FaceSupply, PairId};
pub use card::Card;
pub use shuffle::shuffled;
pub use board::Board;
