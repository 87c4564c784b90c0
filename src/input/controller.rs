//! Input controller: owns the engine and routes resolved button presses.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cursor::Cursor;
use crate::core::{EngineError, PlayerId, SpaceId};
use crate::display::{player_pit_anchor, Cell};
use crate::events::EventSink;
use crate::rules::BoardEngine;

/// A debounced button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Cursor one pit to the right.
    Next,
    /// Cursor one pit to the left.
    Previous,
    /// Sow the pit under the cursor for the player to move.
    Confirm,
    /// Hand the turn over without moving.
    ForceSwitch,
}

/// What a press did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    CursorMoved { index: usize, cell: Cell },
    Played { space: SpaceId, last: SpaceId },
    TurnForced { player: PlayerId },
    /// The engine refused the call. Nothing changed.
    Rejected(EngineError),
}

/// Serializes input onto a single engine.
///
/// All engine calls go through `&mut self`, so at most one move is ever in
/// flight.
#[derive(Clone, Debug)]
pub struct InputController<S> {
    engine: BoardEngine<S>,
    cursor: Cursor,
}

impl<S: EventSink> InputController<S> {
    pub fn new(engine: BoardEngine<S>) -> Self {
        Self {
            engine,
            cursor: Cursor::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &BoardEngine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut BoardEngine<S> {
        &mut self.engine
    }

    pub fn into_engine(self) -> BoardEngine<S> {
        self.engine
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Display cell the cursor should sit on for the player to move.
    #[must_use]
    pub fn cursor_anchor(&self) -> Cell {
        player_pit_anchor(self.engine.current_player(), self.cursor.index())
    }

    pub fn handle(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Next => {
                let index = self.cursor.next();
                self.cursor_moved(index)
            }
            InputEvent::Previous => {
                let index = self.cursor.previous();
                self.cursor_moved(index)
            }
            InputEvent::Confirm => self.confirm(),
            InputEvent::ForceSwitch => match self.engine.switch_player() {
                Ok(player) => {
                    debug!(%player, "Turn forced");
                    InputOutcome::TurnForced { player }
                }
                Err(err) => reject(err),
            },
        }
    }

    fn cursor_moved(&self, index: usize) -> InputOutcome {
        InputOutcome::CursorMoved {
            index,
            cell: self.cursor_anchor(),
        }
    }

    fn confirm(&mut self) -> InputOutcome {
        let player = self.engine.current_player();
        let space = self.cursor.space(player);
        match self.engine.play_pit(player, space.into()) {
            Ok(last) => InputOutcome::Played { space, last },
            Err(err) => reject(err),
        }
    }
}

fn reject(err: EngineError) -> InputOutcome {
    warn!(error = %err, "Input rejected");
    InputOutcome::Rejected(err)
}
