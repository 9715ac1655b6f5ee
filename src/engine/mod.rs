//! Game engine: session state, the flip reducer and the controller.
//!
//! ## Key Types
//!
//! - `GameSession`: One game from deal to outcome, a cheap-to-clone value
//! - `Effect`: Instruction for the host (reveal, cue, schedule a timer)
//! - `GameController`: Owns the session, its generation and the clock
//!
//! The reducer functions (`handle_flip`, `handle_unflip`, `set_paused`) are
//! pure; hosts that want to drive sessions directly can skip the controller.

pub mod scoreboard;
pub mod effects;
pub mod session;
pub mod flip;
pub mod clock;
pub mod controller;

pub use scoreboard::Scoreboard;
pub use effects::{Cue, Effect, UnflipToken};
pub use session::{FlipPhase, GameSession, TieBreaker};
pub use flip::{handle_flip, handle_unflip, set_paused};
pub use clock::GameClock;
pub use controller::GameController;
