//! Game and display configuration.
//!
//! `MancalaConfig` is built with chained `with_*` calls or parsed from JSON.
//! Both paths go through `validate`.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::space::PITS_PER_PLAYER;

/// Largest stone count a display cell can show.
pub const MAX_DISPLAY_VALUE: i64 = 99;

/// Narrowest notification area that still fits the engine's own messages.
pub const MIN_NOTIFICATION_WIDTH: usize = 11;

/// Cells between the two store columns of the board layout.
pub const MAX_NOTIFICATION_WIDTH: usize = 16;

/// Character display geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Characters per row.
    pub columns: usize,

    /// Number of rows.
    pub rows: usize,

    /// Longest notification that fits between the two store cells.
    pub notification_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 4,
            notification_width: 16,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MancalaConfig {
    /// Stones placed in each pit at game start.
    pub stones_per_pit: i64,

    /// Display geometry.
    pub display: DisplayConfig,
}

impl Default for MancalaConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: 4,
            display: DisplayConfig::default(),
        }
    }
}

impl MancalaConfig {
    /// Create the standard configuration (4 stones, 20x4 display).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: i64) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Set the display geometry.
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Total stones in play, conserved for the whole game.
    #[must_use]
    pub fn total_stones(&self) -> i64 {
        self.stones_per_pit * 2 * PITS_PER_PLAYER as i64
    }

    /// Reject configurations the board or display cannot represent.
    ///
    /// Every stone may end up in a single store, so the total has to fit in
    /// a two-digit cell.
    pub fn validate(&self) -> EngineResult<()> {
        if self.stones_per_pit < 1 {
            return Err(invalid(format!(
                "stones_per_pit must be positive, got {}",
                self.stones_per_pit
            )));
        }
        if self.total_stones() > MAX_DISPLAY_VALUE {
            return Err(invalid(format!(
                "{} stones cannot be shown in two digits",
                self.total_stones()
            )));
        }
        // The layout is anchored to the left 20 columns; extra columns stay blank.
        let DisplayConfig { columns, rows, notification_width } = self.display;
        if columns < 20 || rows < 4 {
            return Err(invalid(format!("display must be at least 20x4, got {columns}x{rows}")));
        }
        if !(MIN_NOTIFICATION_WIDTH..=MAX_NOTIFICATION_WIDTH).contains(&notification_width) {
            return Err(invalid(format!(
                "notification width must be {MIN_NOTIFICATION_WIDTH}-{MAX_NOTIFICATION_WIDTH}, got {notification_width}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidConfig { message }
}
