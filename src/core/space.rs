//! Space addressing: pure index arithmetic over the 14 board spaces.
//!
//! ```text
//!        12 11 10  9  8  7
//!    13                      6
//!         0  1  2  3  4  5
//! ```
//!
//! - 0-5: player 1's pits, 6: player 1's store
//! - 7-12: player 2's pits, 13: player 2's store
//!
//! Sowing walks upward through the indices and wraps from 13 to 0.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult, SpaceFault};
use super::player::PlayerId;

/// Number of spaces on the board.
pub const SPACE_COUNT: usize = 14;

/// Number of pits per player.
pub const PITS_PER_PLAYER: usize = 6;

/// A validated board space index in `0..14`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SpaceId(u8);

impl SpaceId {
    /// Player 1's store.
    pub const STORE_ONE: SpaceId = SpaceId(6);
    /// Player 2's store.
    pub const STORE_TWO: SpaceId = SpaceId(13);

    /// Validate a raw space index.
    pub fn new(raw: i64) -> EngineResult<Self> {
        if (0..SPACE_COUNT as i64).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(EngineError::out_of_range(raw))
        }
    }

    /// Validate a raw index that must name a pit, not a store.
    pub fn pit(raw: i64) -> EngineResult<Self> {
        let space = Self::new(raw)?;
        if space.is_store() {
            return Err(EngineError::InvalidSpace {
                space: raw,
                reason: SpaceFault::Store,
            });
        }
        Ok(space)
    }

    /// Translate a player-relative pit (0-5) into its absolute space.
    ///
    /// ```
    /// use mancala_lcd::core::{PlayerId, SpaceId};
    ///
    /// assert_eq!(SpaceId::for_player(PlayerId::One, 2).unwrap().index(), 2);
    /// assert_eq!(SpaceId::for_player(PlayerId::Two, 2).unwrap().index(), 9);
    /// ```
    pub fn for_player(player: PlayerId, pit: usize) -> EngineResult<Self> {
        if pit >= PITS_PER_PLAYER {
            return Err(EngineError::InvalidPit { pit: pit as i64 });
        }
        Ok(Self::player_pit(player, pit as u8))
    }

    /// Absolute space for a pit index already known to be in 0-5.
    pub(crate) const fn player_pit(player: PlayerId, pit: u8) -> Self {
        Self(Self::first_pit(player) as u8 + pit)
    }

    /// The store belonging to `player`.
    #[must_use]
    pub const fn store_of(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Self::STORE_ONE,
            PlayerId::Two => Self::STORE_TWO,
        }
    }

    /// The six pits belonging to `player`, in sowing order.
    pub fn pits_of(player: PlayerId) -> impl Iterator<Item = SpaceId> {
        let first = Self::first_pit(player);
        (first..first + PITS_PER_PLAYER).map(|i| SpaceId(i as u8))
    }

    /// Every space, 0 through 13.
    pub fn all() -> impl Iterator<Item = SpaceId> {
        (0..SPACE_COUNT as u8).map(SpaceId)
    }

    const fn first_pit(player: PlayerId) -> usize {
        match player {
            PlayerId::One => 0,
            PlayerId::Two => PITS_PER_PLAYER + 1,
        }
    }

    /// Raw index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_store(self) -> bool {
        self.0 == Self::STORE_ONE.0 || self.0 == Self::STORE_TWO.0
    }

    /// Which side of the board the space sits on. Stores belong to their player.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        if self.0 <= Self::STORE_ONE.0 {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    /// The pit directly across the board (indices sum to 12). `None` for stores.
    #[must_use]
    pub const fn opposite(self) -> Option<SpaceId> {
        if self.is_store() {
            None
        } else {
            Some(SpaceId(12 - self.0))
        }
    }

    /// Position within the owner's row (0-5). `None` for stores.
    #[must_use]
    pub const fn relative_pit(self) -> Option<usize> {
        if self.is_store() {
            None
        } else {
            Some(self.0 as usize - Self::first_pit(self.owner()))
        }
    }

    /// The next space in sowing order, wrapping 13 to 0.
    #[must_use]
    pub const fn next(self) -> SpaceId {
        SpaceId((self.0 + 1) % SPACE_COUNT as u8)
    }
}

impl TryFrom<i64> for SpaceId {
    type Error = EngineError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<SpaceId> for i64 {
    fn from(space: SpaceId) -> Self {
        i64::from(space.0)
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}
