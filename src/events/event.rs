//! Board event types.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, SpaceId};

/// Something the presentation layer needs to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A space now holds `value` stones.
    SpaceChanged { space: SpaceId, value: i64 },

    /// Transient message. Empty text clears the previous one.
    Notification { text: String },

    /// `player` is now to move.
    TurnChanged { player: PlayerId },

    /// Final store values and the winner.
    GameOver {
        store_one: i64,
        store_two: i64,
        winner: PlayerId,
    },
}

impl BoardEvent {
    /// The space this event writes, if any.
    #[must_use]
    pub fn space(&self) -> Option<SpaceId> {
        match self {
            BoardEvent::SpaceChanged { space, .. } => Some(*space),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, BoardEvent::GameOver { .. })
    }
}

impl std::fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardEvent::SpaceChanged { space, value } => write!(f, "{space} = {value}"),
            BoardEvent::Notification { text } if text.is_empty() => write!(f, "Notification cleared"),
            BoardEvent::Notification { text } => write!(f, "Notification: {text}"),
            BoardEvent::TurnChanged { player } => write!(f, "{player}'s turn"),
            BoardEvent::GameOver { store_one, store_two, winner } => {
                write!(f, "Game over {store_one}-{store_two}, {winner} wins")
            }
        }
    }
}
