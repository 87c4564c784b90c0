//! Board state: the 14 space counts.
//!
//! ## Board
//!
//! Plain storage with validation. It knows nothing about turns or events;
//! `BoardEngine` wraps it and reports every write.
//!
//! ## BoardSnapshot
//!
//! Read-only copy of the board plus the player to move, for rendering and
//! tests.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult, SpaceFault};
use super::player::{PlayerId, PlayerMap};
use super::space::{SpaceId, PITS_PER_PLAYER, SPACE_COUNT};

/// Stone counts for every space.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    spaces: [i64; SPACE_COUNT],
}

impl Board {
    /// Starting layout: `stones_per_pit` in each pit, empty stores.
    #[must_use]
    pub fn new(stones_per_pit: i64) -> Self {
        let mut spaces = [stones_per_pit; SPACE_COUNT];
        spaces[SpaceId::STORE_ONE.index()] = 0;
        spaces[SpaceId::STORE_TWO.index()] = 0;
        Self { spaces }
    }

    /// Stones in `space`.
    #[must_use]
    pub fn get(&self, space: SpaceId) -> i64 {
        self.spaces[space.index()]
    }

    /// Overwrite `space`. Negative counts are rejected without mutating.
    pub fn set(&mut self, space: SpaceId, count: i64) -> EngineResult<()> {
        if count < 0 {
            return Err(EngineError::InvalidSpace {
                space: space.into(),
                reason: SpaceFault::NegativeCount { count },
            });
        }
        self.spaces[space.index()] = count;
        Ok(())
    }

    /// Stones in `player`'s store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> i64 {
        self.get(SpaceId::store_of(player))
    }

    /// Both store values.
    #[must_use]
    pub fn stores(&self) -> PlayerMap<i64> {
        PlayerMap::new(|player| self.store(player))
    }

    /// `player`'s six pits, left to right as they face the board.
    #[must_use]
    pub fn pits(&self, player: PlayerId) -> [i64; PITS_PER_PLAYER] {
        let mut pits = [0; PITS_PER_PLAYER];
        for (slot, space) in pits.iter_mut().zip(SpaceId::pits_of(player)) {
            *slot = self.get(space);
        }
        pits
    }

    /// True when all six of `player`'s pits are empty. Stores are ignored.
    #[must_use]
    pub fn all_pits_empty(&self, player: PlayerId) -> bool {
        SpaceId::pits_of(player).all(|space| self.get(space) == 0)
    }

    /// Sum over all 14 spaces. Saturates at `i64::MAX`.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.checked_total().unwrap_or(i64::MAX)
    }

    /// Sum over all 14 spaces, or `None` if it does not fit in an `i64`.
    #[must_use]
    pub fn checked_total(&self) -> Option<i64> {
        self.spaces.iter().try_fold(0i64, |sum, &count| sum.checked_add(count))
    }

    /// Raw counts indexed by space.
    #[must_use]
    pub fn as_array(&self) -> &[i64; SPACE_COUNT] {
        &self.spaces
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Board contents and the player to move at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub spaces: [i64; SPACE_COUNT],
    pub current_player: PlayerId,
}

impl BoardSnapshot {
    /// Stones in `space`.
    #[must_use]
    pub fn get(&self, space: SpaceId) -> i64 {
        self.spaces[space.index()]
    }

    /// `player`'s six pits.
    #[must_use]
    pub fn pits(&self, player: PlayerId) -> [i64; PITS_PER_PLAYER] {
        let mut pits = [0; PITS_PER_PLAYER];
        for (slot, space) in pits.iter_mut().zip(SpaceId::pits_of(player)) {
            *slot = self.get(space);
        }
        pits
    }

    #[must_use]
    pub fn store(&self, player: PlayerId) -> i64 {
        self.get(SpaceId::store_of(player))
    }

    /// Saturates at `i64::MAX`.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.spaces.iter().fold(0, |sum, &count| sum.saturating_add(count))
    }
}
