//! Event-driven board rendering.
//!
//! `Presenter` is an `EventSink`: install it as (part of) the engine's sink
//! and every board event becomes a minimal write to the display. Only the
//! two cells of a changed space are rewritten, so sowing shows up stone by
//! stone on slow hardware.

use tracing::trace;

use super::layout::{board_lines, notification_column, space_anchor, two_digits, STORE_ROW, TURN_DIGIT_CELL};
use super::lcd::CharacterDisplay;
use crate::core::{BoardSnapshot, DisplayConfig, PlayerId, SpaceId};
use crate::events::{BoardEvent, EventSink};

/// Renders board events onto a `CharacterDisplay`.
#[derive(Clone, Debug)]
pub struct Presenter<D> {
    display: D,
    config: DisplayConfig,
    /// Length of the notification currently on screen.
    notification_len: usize,
}

impl<D: CharacterDisplay> Presenter<D> {
    pub fn new(display: D, config: DisplayConfig) -> Self {
        Self {
            display,
            config,
            notification_len: 0,
        }
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Redraw everything from a snapshot. Call once before play starts.
    pub fn render_board(&mut self, snapshot: &BoardSnapshot) {
        self.display.clear();
        for (row, line) in board_lines(snapshot).iter().enumerate() {
            self.display.write_at(0, row, line);
        }
        self.notification_len = 0;
    }

    fn show_space(&mut self, space: SpaceId, value: i64) {
        let (column, row) = space_anchor(space);
        self.display.write_at(column - 1, row, &two_digits(value));
    }

    fn show_notification(&mut self, text: &str) {
        let width = self.config.notification_width;
        let len = text.chars().count();
        if len < self.notification_len {
            let old = self.notification_len;
            self.display
                .write_at(notification_column(old, width), STORE_ROW, &" ".repeat(old));
        }
        self.display.write_at(notification_column(len, width), STORE_ROW, text);
        self.notification_len = len;
    }

    fn show_turn(&mut self, player: PlayerId) {
        let (column, row) = TURN_DIGIT_CELL;
        self.display.write_at(column, row, &player.number().to_string());
    }

    fn show_game_over(&mut self, store_one: i64, store_two: i64, winner: PlayerId) {
        self.display.clear();
        let screen = format!(
            "Game over!\nScore {store_two} - {store_one}\n\nPlayer {} wins!",
            winner.number()
        );
        self.display.write_at(0, 0, &screen);
        self.notification_len = 0;
    }
}

impl<D: CharacterDisplay> EventSink for Presenter<D> {
    fn emit(&mut self, event: &BoardEvent) {
        trace!(%event, "Presenting");
        match event {
            BoardEvent::SpaceChanged { space, value } => self.show_space(*space, *value),
            BoardEvent::Notification { text } => self.show_notification(text),
            BoardEvent::TurnChanged { player } => self.show_turn(*player),
            BoardEvent::GameOver { store_one, store_two, winner } => {
                self.show_game_over(*store_one, *store_two, *winner);
            }
        }
    }
}
