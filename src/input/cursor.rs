//! Pit selection cursor.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, SpaceId, PITS_PER_PLAYER};

/// Selected pit (0-5) relative to whichever player is to move.
///
/// The index survives turn changes; the same relative pit is highlighted on
/// the new player's row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Move right, wrapping 5 to 0.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % PITS_PER_PLAYER;
        self.index
    }

    /// Move left, wrapping 0 to 5.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + PITS_PER_PLAYER - 1) % PITS_PER_PLAYER;
        self.index
    }

    /// Absolute space under the cursor for `player`.
    #[must_use]
    pub fn space(self, player: PlayerId) -> SpaceId {
        SpaceId::player_pit(player, self.index as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut cursor = Cursor::new();
        let seen: Vec<_> = (0..7).map(|_| cursor.next()).collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 0, 1]);
    }

    #[test]
    fn test_previous_wraps() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.previous(), 5);
        assert_eq!(cursor.previous(), 4);
        assert_eq!(cursor.next(), 5);
    }

    #[test]
    fn test_space_for_player() {
        let mut cursor = Cursor::new();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.space(PlayerId::One).index(), 2);
        assert_eq!(cursor.space(PlayerId::Two).index(), 9);
    }
}
