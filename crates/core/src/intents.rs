//! Intent queue - bounded buffer between the input adapter and a tick
//!
//! Raw key events are mapped to [`Intent`]s as they arrive and queued
//! here; the active simulation drains the queue once per tick. The queue
//! is a fixed-capacity buffer: input bursts beyond capacity are dropped,
//! never reallocated.

use arrayvec::ArrayVec;
use tui_arcade_types::Intent;

/// Most intents held between two ticks; excess pushes are dropped
pub const INTENT_QUEUE_CAP: usize = 16;

/// FIFO intent buffer written by the input adapter, drained by the tick
#[derive(Debug, Default, Clone)]
pub struct IntentQueue {
    slots: ArrayVec<Intent, INTENT_QUEUE_CAP>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent; returns false if the queue was full and it was dropped
    pub fn push(&mut self, intent: Intent) -> bool {
        self.slots.try_push(intent).is_ok()
    }

    /// Remove and return everything queued so far, in arrival order
    pub fn take_all(&mut self) -> ArrayVec<Intent, INTENT_QUEUE_CAP> {
        std::mem::take(&mut self.slots)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop everything queued (used when switching games)
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_types::Direction;

    #[test]
    fn test_drains_in_arrival_order() {
        let mut queue = IntentQueue::new();
        queue.push(Intent::MoveLeft);
        queue.push(Intent::Rotate);
        queue.push(Intent::MoveRight);

        let drained: Vec<Intent> = queue.take_all().into_iter().collect();
        assert_eq!(
            drained,
            vec![Intent::MoveLeft, Intent::Rotate, Intent::MoveRight]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_push_beyond_capacity_is_dropped() {
        let mut queue = IntentQueue::new();
        for _ in 0..INTENT_QUEUE_CAP {
            assert!(queue.push(Intent::Flap));
        }
        assert!(!queue.push(Intent::Flap));
        assert_eq!(queue.len(), INTENT_QUEUE_CAP);

        // The drop loses the newest intent, not the queued ones.
        let drained = queue.take_all();
        assert!(drained.iter().all(|i| *i == Intent::Flap));
    }

    #[test]
    fn test_clear_empties_queue() {
        let mut queue = IntentQueue::new();
        queue.push(Intent::Turn(Direction::Up));
        queue.push(Intent::Flip);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.take_all().len(), 0);
    }
}
