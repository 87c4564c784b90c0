//! Event sinks.
//!
//! A sink is the engine's only outbound channel. `Vec<BoardEvent>` records
//! everything (used heavily in tests); a tuple fans out to two sinks, e.g.
//! a presenter plus a recorder.

use super::event::BoardEvent;

/// Receives board events in the order they occur.
pub trait EventSink {
    fn emit(&mut self, event: &BoardEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &BoardEvent) {}
}

impl EventSink for Vec<BoardEvent> {
    fn emit(&mut self, event: &BoardEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &BoardEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: &BoardEvent) {
        (**self).emit(event);
    }
}

impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &BoardEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn turn(player: PlayerId) -> BoardEvent {
        BoardEvent::TurnChanged { player }
    }

    #[test]
    fn test_vec_records_in_order() {
        let mut log: Vec<BoardEvent> = Vec::new();
        log.emit(&turn(PlayerId::Two));
        log.emit(&turn(PlayerId::One));
        assert_eq!(log, vec![turn(PlayerId::Two), turn(PlayerId::One)]);
    }

    #[test]
    fn test_tuple_fans_out() {
        let mut pair = (Vec::new(), Vec::new());
        pair.emit(&turn(PlayerId::Two));
        assert_eq!(pair.0.len(), 1);
        assert_eq!(pair.0, pair.1);
    }

    #[test]
    fn test_borrowed_and_boxed_sinks() {
        fn feed<S: EventSink>(mut sink: S) {
            sink.emit(&turn(PlayerId::One));
        }

        let mut log: Vec<BoardEvent> = Vec::new();
        feed(&mut log);
        feed(Box::new(NullSink) as Box<dyn EventSink>);
        assert_eq!(log, vec![turn(PlayerId::One)]);
    }
}
