//! Core board types: players, spaces, board state, moves, configuration.
//!
//! Everything here is pure data and index arithmetic. Turn handling and
//! event emission live in `rules`.

pub mod error;
pub mod player;
pub mod space;
pub mod config;
pub mod action;
pub mod state;

pub use error::{EngineError, EngineResult, SpaceFault};
pub use player::{PlayerId, PlayerMap};
pub use space::{SpaceId, PITS_PER_PLAYER, SPACE_COUNT};
pub use config::{
    DisplayConfig, MancalaConfig, MAX_DISPLAY_VALUE, MAX_NOTIFICATION_WIDTH, MIN_NOTIFICATION_WIDTH,
};
pub use action::{Move, MoveKind, MoveRecord};
pub use state::{Board, BoardSnapshot};
