//! Game rules that sit above the flip state machine.
//!
//! The flip reducer decides when a game is complete; `resolver` decides who
//! won and whether a sudden-death round is needed.

pub mod resolver;

pub use resolver::{evaluate, GameOutcome, Resolution};
