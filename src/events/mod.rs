//! Board events and the sinks that consume them.
//!
//! The engine never touches a display. Each state change is reported as a
//! `BoardEvent`, in mutation order, to the engine's `EventSink`:
//!
//! - `SpaceChanged` for every write to a space (one per sown stone)
//! - `Notification` for transient messages ("Extra turn!", "Steal!")
//! - `TurnChanged` when the player to move flips
//! - `GameOver` once, when the engine becomes terminal

pub mod event;
pub mod sink;

pub use event::BoardEvent;
pub use sink::{EventSink, NullSink};
