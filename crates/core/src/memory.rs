//! Memory simulation - eight cards, four pairs, five attempts
//!
//! The deck holds each label twice, shuffled at deal. A flip turns a card
//! face-up; the second flip of a pair either locks both as matched or
//! spends one attempt and schedules both to flip back 1000 ms later. The
//! revert timer runs on accumulated tick time, so this is the one
//! keyboard-driven game that still needs the frame clock. Four pairs wins,
//! zero attempts loses.

use arrayvec::ArrayVec;

use tui_arcade_types::{Direction, Event, Intent, MEMORY_ATTEMPTS, MEMORY_LABELS, MEMORY_REVEAL_MS};

use crate::intents::IntentQueue;
use crate::rng::SimpleRng;
use crate::sim::Events;

/// Cards per row in the 4x2 layout
pub const MEMORY_COLS: usize = 4;

/// Deck size: each label appears twice
pub const MEMORY_CARDS: usize = MEMORY_LABELS.len() * 2;

/// One card in the deck
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub label: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

/// A mismatched pair waiting to flip back down
#[derive(Debug, Clone, Copy)]
struct PendingRevert {
    first: usize,
    second: usize,
    remaining_ms: f32,
}

/// Memory game state
#[derive(Debug, Clone)]
pub struct MemorySim {
    cards: [Card; MEMORY_CARDS],
    cursor: usize,
    first_flip: Option<usize>,
    // Every pending pair keeps both cards face-up, so at most
    // MEMORY_CARDS / 2 reverts can coexist.
    reverts: ArrayVec<PendingRevert, { MEMORY_CARDS / 2 }>,
    attempts: u8,
    pairs: u8,
    won: bool,
    game_over: bool,
}

impl MemorySim {
    pub fn new(seed: u32) -> Self {
        let mut order: [usize; MEMORY_CARDS] = [0, 1, 2, 3, 4, 5, 6, 7];
        SimpleRng::new(seed).shuffle(&mut order);

        let mut cards = [Card {
            label: "",
            face_up: false,
            matched: false,
        }; MEMORY_CARDS];
        for (slot, idx) in order.iter().enumerate() {
            // Labels 0..3 twice: deck index / 2 picks the label.
            cards[slot].label = MEMORY_LABELS[idx / 2];
        }

        Self {
            cards,
            cursor: 0,
            first_flip: None,
            reverts: ArrayVec::new(),
            attempts: MEMORY_ATTEMPTS,
            pairs: 0,
            won: false,
            game_over: false,
        }
    }

    pub fn cards(&self) -> &[Card; MEMORY_CARDS] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn pairs(&self) -> u8 {
        self.pairs
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance one tick: run the revert timer, then apply queued flips
    pub fn tick(&mut self, elapsed_ms: f32, intents: &mut IntentQueue) -> Events {
        let mut events = Events::new();

        // Each mismatch runs its own timer; one expiring never delays another.
        let cards = &mut self.cards;
        self.reverts.retain(|pending| {
            pending.remaining_ms -= elapsed_ms;
            if pending.remaining_ms <= 0.0 {
                cards[pending.first].face_up = false;
                cards[pending.second].face_up = false;
                false
            } else {
                true
            }
        });

        for intent in intents.take_all() {
            if self.game_over {
                break;
            }
            match intent {
                Intent::Cursor(dir) => self.move_cursor(dir),
                Intent::Flip => self.flip(&mut events),
                _ => {}
            }
        }

        events
    }

    /// Cursor movement over the 4x2 grid, clamped at the edges
    fn move_cursor(&mut self, dir: Direction) {
        let row = self.cursor / MEMORY_COLS;
        let col = self.cursor % MEMORY_COLS;
        let (row, col) = match dir {
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(MEMORY_COLS - 1)),
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(MEMORY_CARDS / MEMORY_COLS - 1), col),
        };
        self.cursor = row * MEMORY_COLS + col;
    }

    /// Flip the card under the cursor; face-up and matched cards are no-ops
    fn flip(&mut self, events: &mut Events) {
        let idx = self.cursor;
        if self.cards[idx].face_up || self.cards[idx].matched {
            return;
        }
        self.cards[idx].face_up = true;

        let Some(first) = self.first_flip else {
            self.first_flip = Some(idx);
            return;
        };
        self.first_flip = None;

        if self.cards[first].label == self.cards[idx].label {
            self.cards[first].matched = true;
            self.cards[idx].matched = true;
            self.pairs += 1;
            events.push(Event::Scored {
                total: self.pairs as u32,
            });
            if self.pairs as usize == MEMORY_LABELS.len() {
                self.won = true;
                self.game_over = true;
                events.push(Event::GameOver {
                    score: self.pairs as u32,
                });
            }
        } else {
            self.attempts -= 1;
            self.reverts.push(PendingRevert {
                first,
                second: idx,
                remaining_ms: MEMORY_REVEAL_MS,
            });
            if self.attempts == 0 {
                self.game_over = true;
                events.push(Event::GameOver {
                    score: self.pairs as u32,
                });
            }
        }
    }
}
