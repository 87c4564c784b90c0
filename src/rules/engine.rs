//! The board engine: sowing, captures, extra turns, turn switching and
//! game-over detection.
//!
//! ## Move protocol
//!
//! `play_pit` lifts every stone from a pit and sows them one per space
//! going up the indices, wrapping 13 to 0 and skipping the opponent's
//! store. Where the last stone lands decides what happens next:
//!
//! - own store: extra turn, nothing else is checked
//! - own empty pit: capture that stone plus the mirror pit into the store
//! - anywhere else: nothing
//!
//! After a capture or a plain move the engine checks for game over and,
//! if play continues, hands the turn to the other player.
//!
//! ## Events
//!
//! Every space write is reported to the sink as it happens, so a display
//! can animate sowing stone by stone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::{
    Board, BoardSnapshot, EngineError, EngineResult, MancalaConfig, Move, MoveKind, MoveRecord,
    PlayerId, PlayerMap, SpaceId, PITS_PER_PLAYER,
};
use crate::events::{BoardEvent, EventSink};

/// Transient message shown when the mover earns another turn.
pub const EXTRA_TURN_TEXT: &str = "Extra turn!";
/// Transient message shown when a capture fires.
pub const STEAL_TEXT: &str = "Steal!";
/// Transient message shown when the game ends.
pub const GAME_OVER_TEXT: &str = "Game over!";

/// Moves available to the player to move. Never more than six.
pub type LegalMoves = SmallVec<[Move; PITS_PER_PLAYER]>;

/// Final result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Store values at the moment the game ended.
    pub scores: PlayerMap<i64>,
    pub winner: PlayerId,
}

impl GameOutcome {
    /// Score the game from store values alone. Player 2 wins only with a
    /// strictly higher store, so ties go to player 1.
    #[must_use]
    pub fn from_stores(scores: PlayerMap<i64>) -> Self {
        let winner = if scores[PlayerId::Two] > scores[PlayerId::One] {
            PlayerId::Two
        } else {
            PlayerId::One
        };
        Self { scores, winner }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// True when both stores hold the same count (reported as a player 1 win).
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.scores[PlayerId::One] == self.scores[PlayerId::Two]
    }
}

/// Owns the board and the turn, and reports every change to `S`.
///
/// ## Example
///
/// ```
/// use mancala_lcd::core::{MancalaConfig, PlayerId};
/// use mancala_lcd::events::BoardEvent;
/// use mancala_lcd::rules::BoardEngine;
///
/// let mut engine = BoardEngine::new(MancalaConfig::default(), Vec::<BoardEvent>::new()).unwrap();
///
/// // Four stones from pit 2 land in spaces 3, 4, 5 and the store.
/// let last = engine.play_pit(PlayerId::One, 2).unwrap();
/// assert_eq!(last.index(), 6);
/// assert_eq!(engine.current_player(), PlayerId::One);
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine<S = Vec<BoardEvent>> {
    config: MancalaConfig,
    board: Board,
    current_player: PlayerId,
    last_notification: String,
    outcome: Option<GameOutcome>,
    history: Vector<MoveRecord>,
    sink: S,
}

impl<S: EventSink> BoardEngine<S> {
    /// Start a game. Player 1 moves first.
    pub fn new(config: MancalaConfig, sink: S) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(config, sink))
    }

    /// Start a game with the standard 4-stone layout.
    pub fn with_sink(sink: S) -> Self {
        Self::build(MancalaConfig::default(), sink)
    }

    fn build(config: MancalaConfig, sink: S) -> Self {
        debug!(stones_per_pit = config.stones_per_pit, "New game");
        Self {
            board: Board::new(config.stones_per_pit),
            config,
            current_player: PlayerId::One,
            last_notification: String::new(),
            outcome: None,
            history: Vector::new(),
            sink,
        }
    }

    // === Queries ===

    /// Stones in `space`.
    pub fn get(&self, space: i64) -> EngineResult<i64> {
        Ok(self.board.get(SpaceId::new(space)?))
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn all_pits_empty(&self, player: PlayerId) -> bool {
        self.board.all_pits_empty(player)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            spaces: *self.board.as_array(),
            current_player: self.current_player,
        }
    }

    /// Sum of all spaces. Constant during play unless `set`/`add` are used.
    #[must_use]
    pub fn total_stones(&self) -> i64 {
        self.board.total()
    }

    /// Most recent notification text ("" once cleared).
    #[must_use]
    pub fn last_notification(&self) -> &str {
        &self.last_notification
    }

    /// Every completed `play_pit`, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &MancalaConfig {
        &self.config
    }

    /// Moves for the player to move: their non-empty pits.
    ///
    /// An extra turn can leave the mover with six empty pits before game
    /// over is detected. Sowing an empty pit is how play continues from
    /// there, so in that case all six pits are offered.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        if self.is_terminal() {
            return LegalMoves::new();
        }
        let player = self.current_player;
        let pits = (0..PITS_PER_PLAYER).filter_map(|pit| Move::new(player, pit).ok());
        if self.board.all_pits_empty(player) {
            pits.collect()
        } else {
            pits.filter(|mv| self.board.get(mv.space()) > 0).collect()
        }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Direct board mutation ===

    /// Overwrite `space` with `count` and report it.
    pub fn set(&mut self, space: i64, count: i64) -> EngineResult<()> {
        let space = SpaceId::new(space)?;
        self.ensure_in_progress()?;
        self.write(space, count)
    }

    /// `set(space, get(space) + delta)`.
    pub fn add(&mut self, space: i64, delta: i64) -> EngineResult<()> {
        let space = SpaceId::new(space)?;
        self.ensure_in_progress()?;
        self.deposit(space, delta)
    }

    /// Show a transient message. Empty text clears the previous one.
    pub fn notify(&mut self, text: impl Into<String>) -> EngineResult<()> {
        let text = text.into();
        let len = text.chars().count();
        let max = self.config.display.notification_width;
        if len > max {
            return Err(EngineError::InvalidNotification { len, max });
        }
        self.post_notification(text);
        Ok(())
    }

    // === Moves ===

    /// Sow a validated move.
    pub fn play(&mut self, mv: Move) -> EngineResult<SpaceId> {
        self.play_pit(mv.player, mv.space().into())
    }

    /// Sow every stone in absolute space `pit` on behalf of `player`.
    ///
    /// Returns the space where the last stone landed. Fails with
    /// `InvalidSpace` for stores and indices outside `0..=13`, and with
    /// `GameOver` once the game has ended; either way nothing is mutated.
    ///
    /// The pit is not checked against `player`'s row or the player to
    /// move. Callers enforce turn ownership.
    pub fn play_pit(&mut self, player: PlayerId, pit: i64) -> EngineResult<SpaceId> {
        let start = SpaceId::pit(pit)?;
        self.ensure_in_progress()?;
        // Every count written below is bounded by the board total.
        if self.board.checked_total().is_none() {
            return Err(EngineError::overflow(pit));
        }

        self.post_notification(String::new());

        let stones = self.board.get(start);
        self.write(start, 0)?;
        debug!(%player, space = start.index(), stones, "Sowing");

        let own_store = SpaceId::store_of(player);
        let opponent_store = SpaceId::store_of(player.opponent());
        let mut last = start;
        let mut remaining = stones;
        while remaining > 0 {
            last = last.next();
            if last == opponent_store {
                trace!(space = last.index(), "Skipping opponent store");
                continue;
            }
            self.deposit(last, 1)?;
            remaining -= 1;
        }

        let kind = if last == own_store {
            MoveKind::ExtraTurn
        } else if !last.is_store() && last.owner() == player && self.board.get(last) == 1 {
            MoveKind::Capture {
                captured: 1 + last.opposite().map_or(0, |mirror| self.board.get(mirror)),
            }
        } else {
            MoveKind::Normal
        };

        self.history.push_back(MoveRecord {
            player,
            space: start,
            last,
            sown: stones,
            kind,
        });

        match kind {
            MoveKind::ExtraTurn => {
                debug!(%player, "Extra turn");
                self.post_notification(EXTRA_TURN_TEXT.to_string());
                return Ok(last);
            }
            MoveKind::Capture { captured } => self.capture(player, last, captured)?,
            MoveKind::Normal => {}
        }

        if self.check_game_over().is_none() {
            self.switch_player()?;
        }
        Ok(last)
    }

    /// Move the stone in `landed` and everything in its mirror pit into
    /// `player`'s store.
    fn capture(&mut self, player: PlayerId, landed: SpaceId, captured: i64) -> EngineResult<()> {
        debug!(%player, space = landed.index(), captured, "Capture");
        self.post_notification(STEAL_TEXT.to_string());

        self.write(landed, 0)?;
        let store = SpaceId::store_of(player);
        self.deposit(store, captured)?;
        if let Some(mirror) = landed.opposite() {
            self.write(mirror, 0)?;
        }
        Ok(())
    }

    // === Turn and game-over policy ===

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) -> EngineResult<PlayerId> {
        self.ensure_in_progress()?;
        self.current_player = self.current_player.opponent();
        debug!(player = %self.current_player, "Turn changed");
        self.sink.emit(&BoardEvent::TurnChanged {
            player: self.current_player,
        });
        Ok(self.current_player)
    }

    /// End the game if either player's six pits are all empty.
    ///
    /// Scores are the store values as they stand. Stones left in the other
    /// player's pits are not moved into their store. Once the game has
    /// ended this keeps returning the same outcome without new events.
    pub fn check_game_over(&mut self) -> Option<GameOutcome> {
        if let Some(outcome) = &self.outcome {
            return Some(outcome.clone());
        }
        if !PlayerId::all().any(|player| self.board.all_pits_empty(player)) {
            return None;
        }

        let outcome = GameOutcome::from_stores(self.board.stores());
        let store_one = outcome.scores[PlayerId::One];
        let store_two = outcome.scores[PlayerId::Two];
        info!(store_one, store_two, winner = %outcome.winner, "Game over");

        self.post_notification(GAME_OVER_TEXT.to_string());
        self.sink.emit(&BoardEvent::GameOver {
            store_one,
            store_two,
            winner: outcome.winner,
        });
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> EngineResult<()> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    fn write(&mut self, space: SpaceId, count: i64) -> EngineResult<()> {
        self.board.set(space, count)?;
        trace!(space = space.index(), count, "Space changed");
        self.sink.emit(&BoardEvent::SpaceChanged { space, value: count });
        Ok(())
    }

    /// `write(space, get(space) + delta)` without wrapping on overflow.
    fn deposit(&mut self, space: SpaceId, delta: i64) -> EngineResult<()> {
        let count = self
            .board
            .get(space)
            .checked_add(delta)
            .ok_or_else(|| EngineError::overflow(space.into()))?;
        self.write(space, count)
    }

    /// Emit a notification already known to fit the display.
    fn post_notification(&mut self, text: String) {
        self.sink.emit(&BoardEvent::Notification { text: text.clone() });
        self.last_notification = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpaceFault;

    fn engine() -> BoardEngine {
        BoardEngine::with_sink(Vec::new())
    }

    fn space_events(events: &[BoardEvent]) -> Vec<(usize, i64)> {
        events
            .iter()
            .filter_map(|e| match e {
                BoardEvent::SpaceChanged { space, value } => Some((space.index(), *value)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.current_player(), PlayerId::One);
        assert_eq!(engine.total_stones(), 48);
        assert_eq!(engine.get(6), Ok(0));
        assert_eq!(engine.get(13), Ok(0));
        assert_eq!(engine.legal_moves().len(), 6);
        assert!(engine.sink().is_empty());
    }

    #[test]
    fn test_sowing_events_in_order() {
        let mut engine = engine();
        let last = engine.play_pit(PlayerId::One, 4).unwrap();

        assert_eq!(last.index(), 8);
        assert_eq!(
            space_events(engine.sink()),
            vec![(4, 0), (5, 5), (6, 1), (7, 5), (8, 5)]
        );
        assert_eq!(engine.current_player(), PlayerId::Two);
        assert_eq!(
            engine.sink().last(),
            Some(&BoardEvent::TurnChanged { player: PlayerId::Two })
        );
    }

    #[test]
    fn test_notification_cleared_first() {
        let mut engine = engine();
        engine.notify("Hello").unwrap();
        engine.play_pit(PlayerId::One, 0).unwrap();

        let notes: Vec<_> = engine
            .sink()
            .iter()
            .filter_map(|e| match e {
                BoardEvent::Notification { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(notes, vec!["Hello", ""]);
        assert_eq!(engine.last_notification(), "");
    }

    #[test]
    fn test_notify_rejects_long_text() {
        let mut engine = engine();
        let err = engine.notify("This is far too long").unwrap_err();
        assert_eq!(err, EngineError::InvalidNotification { len: 20, max: 16 });
        assert!(engine.sink().is_empty());
        assert_eq!(engine.last_notification(), "");
    }

    #[test]
    fn test_extra_turn_records_history() {
        let mut engine = engine();
        engine.play_pit(PlayerId::One, 2).unwrap();

        assert_eq!(engine.current_player(), PlayerId::One);
        assert_eq!(engine.last_notification(), EXTRA_TURN_TEXT);
        let record = engine.history().back().unwrap();
        assert_eq!(record.kind, MoveKind::ExtraTurn);
        assert_eq!(record.sown, 4);
        assert!(!engine.sink().iter().any(|e| matches!(e, BoardEvent::TurnChanged { .. })));
    }

    #[test]
    fn test_capture_event_order() {
        let mut engine = engine();
        engine.set(0, 1).unwrap();
        engine.set(1, 0).unwrap();
        engine.sink_mut().clear();

        let last = engine.play_pit(PlayerId::One, 0).unwrap();
        assert_eq!(last.index(), 1);
        assert_eq!(
            space_events(engine.sink()),
            vec![(0, 0), (1, 1), (1, 0), (6, 5), (11, 0)]
        );
        assert_eq!(
            engine.history().back().map(|r| r.kind),
            Some(MoveKind::Capture { captured: 5 })
        );
    }

    #[test]
    fn test_empty_pit_passes_turn() {
        let mut engine = engine();
        engine.set(3, 0).unwrap();
        engine.sink_mut().clear();

        let last = engine.play_pit(PlayerId::One, 3).unwrap();
        assert_eq!(last.index(), 3);
        assert_eq!(engine.get(3), Ok(0));
        assert_eq!(engine.current_player(), PlayerId::Two);
        assert_eq!(space_events(engine.sink()), vec![(3, 0)]);
    }

    #[test]
    fn test_set_and_add_validate() {
        let mut engine = engine();
        assert!(engine.set(-1, 0).unwrap_err().is_invalid_space());
        assert!(engine.set(2, -3).unwrap_err().is_invalid_space());
        assert!(engine.add(14, 1).unwrap_err().is_invalid_space());
        assert!(engine.add(2, -5).unwrap_err().is_invalid_space());
        assert_eq!(engine.get(2), Ok(4));

        engine.add(2, 3).unwrap();
        assert_eq!(engine.get(2), Ok(7));
    }

    #[test]
    fn test_add_reports_overflow() {
        let mut engine = engine();
        engine.set(0, i64::MAX).unwrap();
        let events_before = engine.sink().len();

        assert_eq!(
            engine.add(0, 1),
            Err(EngineError::InvalidSpace { space: 0, reason: SpaceFault::Overflow })
        );
        assert_eq!(engine.get(0), Ok(i64::MAX));
        assert_eq!(engine.sink().len(), events_before);

        engine.add(0, -1).unwrap();
        assert_eq!(engine.get(0), Ok(i64::MAX - 1));
    }

    #[test]
    fn test_play_rejects_overflowing_board() {
        let mut engine = engine();
        engine.set(6, i64::MAX).unwrap();
        engine.sink_mut().clear();

        assert_eq!(
            engine.play_pit(PlayerId::One, 5),
            Err(EngineError::InvalidSpace { space: 5, reason: SpaceFault::Overflow })
        );
        assert_eq!(engine.get(5), Ok(4));
        assert!(engine.sink().is_empty());
        assert!(engine.history().is_empty());
        assert_eq!(engine.total_stones(), i64::MAX);
    }

    #[test]
    fn test_switch_player() {
        let mut engine = engine();
        assert_eq!(engine.switch_player(), Ok(PlayerId::Two));
        assert_eq!(engine.switch_player(), Ok(PlayerId::One));
        assert_eq!(
            engine.sink().as_slice(),
            &[
                BoardEvent::TurnChanged { player: PlayerId::Two },
                BoardEvent::TurnChanged { player: PlayerId::One },
            ]
        );
    }

    #[test]
    fn test_terminal_engine_rejects_mutation() {
        let mut engine = engine();
        for pit in 7..=12 {
            engine.set(pit, 0).unwrap();
        }
        assert!(engine.check_game_over().is_some());
        assert!(engine.is_terminal());

        let events_before = engine.sink().len();
        assert_eq!(engine.play_pit(PlayerId::One, 0), Err(EngineError::GameOver));
        assert_eq!(engine.switch_player(), Err(EngineError::GameOver));
        assert_eq!(engine.set(0, 1), Err(EngineError::GameOver));
        assert!(engine.legal_moves().is_empty());

        // Checking again reports the same outcome without new events.
        assert!(engine.check_game_over().is_some());
        assert_eq!(engine.sink().len(), events_before);
    }

    #[test]
    fn test_outcome_tie_goes_to_player_one() {
        let outcome = GameOutcome::from_stores(PlayerMap::with_value(24));
        assert!(outcome.is_tie());
        assert!(outcome.is_winner(PlayerId::One));

        let outcome = GameOutcome::from_stores(PlayerMap::new(|p| i64::from(p.number())));
        assert!(!outcome.is_tie());
        assert_eq!(outcome.winner, PlayerId::Two);
    }

    #[test]
    fn test_legal_moves_after_extra_turn_empties_row() {
        let mut engine = engine();
        for pit in 0..=4 {
            engine.set(pit, 0).unwrap();
        }
        engine.set(5, 1).unwrap();

        // Last stone lands in the store: no game-over check on an extra turn.
        engine.play_pit(PlayerId::One, 5).unwrap();
        assert!(!engine.is_terminal());
        assert!(engine.all_pits_empty(PlayerId::One));
        assert_eq!(engine.legal_moves().len(), 6);

        // Sowing an empty pit ends it.
        engine.play_pit(PlayerId::One, 0).unwrap();
        assert!(engine.is_terminal());
    }

    #[test]
    fn test_new_validates_config() {
        let bad = MancalaConfig::default().with_stones_per_pit(0);
        assert!(BoardEngine::new(bad, Vec::<BoardEvent>::new()).is_err());

        let three = MancalaConfig::default().with_stones_per_pit(3);
        let engine = BoardEngine::new(three, Vec::<BoardEvent>::new()).unwrap();
        assert_eq!(engine.total_stones(), 36);
    }
}
