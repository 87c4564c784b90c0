//! # mancala-lcd
//!
//! A two-player Kalah-style Mancala engine for a character display and a
//! handful of buttons.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: One `BoardEngine` owns the board. There is no
//!    global game state; displays and input handlers are handed the engine
//!    or its events.
//!
//! 2. **Rules Without I/O**: The engine never writes to a display. Every
//!    change is emitted as a `BoardEvent`, in order, to an `EventSink`.
//!
//! 3. **As-Built Rules**: Game over is scored from the stores alone (no
//!    sweep of remaining pits) and ties go to player 1.
//!
//! ## Board
//!
//! ```text
//!        12 11 10  9  8  7
//!    13                      6
//!         0  1  2  3  4  5
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, spaces, board storage, moves, configuration, errors
//! - `events`: Board events and sinks
//! - `rules`: The board engine (sowing, capture, turns, game over)
//! - `display`: Character-display presentation layer
//! - `input`: Cursor and button-press routing

pub mod core;
pub mod events;
pub mod rules;
pub mod display;
pub mod input;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSnapshot, DisplayConfig, EngineError, EngineResult, MancalaConfig, Move,
    MoveKind, MoveRecord, PlayerId, PlayerMap, SpaceFault, SpaceId,
};

pub use crate::events::{BoardEvent, EventSink, NullSink};

pub use crate::rules::{BoardEngine, GameOutcome, LegalMoves};

pub use crate::display::{CharacterDisplay, Presenter, TextDisplay};

pub use crate::input::{Cursor, InputController, InputEvent, InputOutcome};
