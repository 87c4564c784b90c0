//! Board layout on a 20x4 character grid.
//!
//! ```text
//!  col: 01234567890123456789
//! row 0: " 04 04 04  04 04 04"   player 2's pits, 12 down to 7
//! row 1: "00                00"  store 13 ... store 6
//! row 2: " 04 04 04  04 04 04"   player 1's pits, 0 up to 5
//! row 3: "Player 1's turn"
//! ```
//!
//! Each space is two characters wide. Anchors name the rightmost of the two.

use crate::core::{BoardSnapshot, PlayerId, SpaceId};

/// (column, row) of a display cell.
pub type Cell = (usize, usize);

/// Row carrying the stores and notifications.
pub const STORE_ROW: usize = 1;

/// Row carrying the turn line.
pub const TURN_ROW: usize = 3;

/// Cell holding the player digit in "Player N's turn".
pub const TURN_DIGIT_CELL: Cell = (7, TURN_ROW);

/// Width of a store cell, which offsets the notification area.
const STORE_WIDTH: usize = 2;

/// Zero-padded two-digit rendering of a stone count.
///
/// ```
/// use mancala_lcd::display::two_digits;
///
/// assert_eq!(two_digits(0), "00");
/// assert_eq!(two_digits(7), "07");
/// assert_eq!(two_digits(42), "42");
/// ```
#[must_use]
pub fn two_digits(value: i64) -> String {
    format!("{value:02}")
}

/// Rightmost cell of `player`'s relative pit `pit`.
#[must_use]
pub fn player_pit_anchor(player: PlayerId, pit: usize) -> Cell {
    // Pits are drawn in two groups of three with a two-space gap between.
    match player {
        PlayerId::One if pit < 3 => (pit * 3 + 2, 2),
        PlayerId::One => (pit * 3 + 3, 2),
        PlayerId::Two if pit < 3 => (18 - pit * 3, 0),
        PlayerId::Two => (17 - pit * 3, 0),
    }
}

/// Rightmost cell of any space.
#[must_use]
pub fn space_anchor(space: SpaceId) -> Cell {
    match space.relative_pit() {
        Some(pit) => player_pit_anchor(space.owner(), pit),
        None if space == SpaceId::STORE_ONE => (19, STORE_ROW),
        None => (1, STORE_ROW),
    }
}

/// First column of a centered notification of `len` characters.
#[must_use]
pub fn notification_column(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2 + STORE_WIDTH
}

fn pit_row(values: impl Iterator<Item = i64>) -> String {
    let cells: Vec<String> = values.map(two_digits).collect();
    format!(" {}  {}", cells[..3].join(" "), cells[3..].join(" "))
}

/// The four display lines for a snapshot.
#[must_use]
pub fn board_lines(snapshot: &BoardSnapshot) -> [String; 4] {
    let top = pit_row(snapshot.pits(PlayerId::Two).into_iter().rev());
    let bottom = pit_row(snapshot.pits(PlayerId::One).into_iter());
    let stores = format!(
        "{}{}{}",
        two_digits(snapshot.store(PlayerId::Two)),
        " ".repeat(16),
        two_digits(snapshot.store(PlayerId::One)),
    );
    let turn = format!("Player {}'s turn", snapshot.current_player.number());
    [top, stores, bottom, turn]
}
