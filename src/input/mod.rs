//! Input source: turns button presses into cursor moves and engine calls.
//!
//! Button polling and debouncing belong to the hardware driver. This module
//! starts from already-resolved `InputEvent`s.

pub mod cursor;
pub mod controller;

pub use cursor::Cursor;
pub use controller::{InputController, InputEvent, InputOutcome};
