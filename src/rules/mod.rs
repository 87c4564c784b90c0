//! Game rules: the board engine and its turn and game-over policy.
//!
//! `BoardEngine` is the only thing that mutates a board during play. It
//! owns the board outright; displays and input handlers see it through
//! queries and emitted events.

pub mod engine;

pub use engine::{
    BoardEngine, GameOutcome, LegalMoves, EXTRA_TURN_TEXT, GAME_OVER_TEXT, STEAL_TEXT,
};
