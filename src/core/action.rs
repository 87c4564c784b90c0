//! Moves and move history.
//!
//! A `Move` is a player plus a pit relative to that player's row. The engine
//! works on absolute spaces; `Move::space` does the translation.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::player::PlayerId;
use super::space::{SpaceId, PITS_PER_PLAYER};

/// A requested move: sow `pit` (0-5, left to right as `player` faces it).
///
/// ```
/// use mancala_lcd::core::{Move, PlayerId};
///
/// let mv = Move::new(PlayerId::Two, 3).unwrap();
/// assert_eq!(mv.space().index(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    pub player: PlayerId,
    pit: u8,
}

#[derive(Deserialize)]
struct RawMove {
    player: PlayerId,
    pit: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = EngineError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.player, raw.pit)
    }
}

impl Move {
    /// Create a move, rejecting pits outside 0-5.
    pub fn new(player: PlayerId, pit: usize) -> EngineResult<Self> {
        if pit >= PITS_PER_PLAYER {
            return Err(EngineError::InvalidPit { pit: pit as i64 });
        }
        Ok(Self { player, pit: pit as u8 })
    }

    /// Player-relative pit index.
    #[must_use]
    pub const fn pit(self) -> usize {
        self.pit as usize
    }

    /// Absolute board space for this move.
    #[must_use]
    pub fn space(self) -> SpaceId {
        SpaceId::player_pit(self.player, self.pit)
    }
}

/// How a sowing pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Turn passes to the opponent (or the game ends).
    Normal,
    /// Last stone landed in the mover's store.
    ExtraTurn,
    /// Last stone landed in an empty own pit. `captured` stones went to the store.
    Capture { captured: i64 },
}

/// A completed `play_pit` call, kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player the move was played for.
    pub player: PlayerId,

    /// Space that was sown.
    pub space: SpaceId,

    /// Where the last stone landed.
    pub last: SpaceId,

    /// Stones lifted from `space`.
    pub sown: i64,

    pub kind: MoveKind,
}
