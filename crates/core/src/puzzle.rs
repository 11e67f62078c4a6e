//! Sliding puzzle simulation - 3x3 grid, tiles 1-8 plus the empty slot
//!
//! A slide intent moves the tile adjacent to the empty slot into it: Left
//! slides the tile on the empty slot's right, Up slides the one below,
//! and so on. Legal slides swap and count one move; everything else is a
//! no-op. Solved order (1..8 reading across) is the terminal state. Deals
//! are a plain shuffle, so unsolvable arrangements are possible.

use tui_arcade_types::{Direction, Event, Intent, PUZZLE_SIDE};

use crate::intents::IntentQueue;
use crate::rng::SimpleRng;
use crate::sim::Events;

/// Total slots including the empty one
pub const PUZZLE_SLOTS: usize = (PUZZLE_SIDE as usize) * (PUZZLE_SIDE as usize);

/// Sliding puzzle game state; tile 0 is the empty slot
#[derive(Debug, Clone)]
pub struct PuzzleSim {
    tiles: [u8; PUZZLE_SLOTS],
    moves: u32,
    solved: bool,
}

impl PuzzleSim {
    pub fn new(seed: u32) -> Self {
        let mut tiles: [u8; PUZZLE_SLOTS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        SimpleRng::new(seed).shuffle(&mut tiles);
        let mut sim = Self {
            tiles,
            moves: 0,
            solved: false,
        };
        // A shuffle can deal the solved order; that run is over before it
        // starts, same as dealing it in the browser.
        sim.solved = sim.in_order();
        sim
    }

    /// Tiles row-major; 0 is the empty slot
    pub fn tiles(&self) -> &[u8; PUZZLE_SLOTS] {
        &self.tiles
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Advance one tick; the puzzle has no timed behavior, only intents
    pub fn tick(&mut self, _elapsed_ms: f32, intents: &mut IntentQueue) -> Events {
        let mut events = Events::new();
        for intent in intents.take_all() {
            if self.solved {
                break;
            }
            if let Intent::Slide(dir) = intent {
                self.try_slide(dir, &mut events);
            }
        }
        events
    }

    /// Slide the tile opposite `dir` of the empty slot into it
    fn try_slide(&mut self, dir: Direction, events: &mut Events) {
        let side = PUZZLE_SIDE as i16;
        let empty = self
            .tiles
            .iter()
            .position(|&t| t == 0)
            .unwrap_or(PUZZLE_SLOTS - 1);
        let (erow, ecol) = ((empty / side as usize) as i16, (empty % side as usize) as i16);

        // The moving tile sits on the opposite side of the empty slot.
        let (dx, dy) = dir.delta();
        let (trow, tcol) = (erow - dy, ecol - dx);
        if !(0..side).contains(&trow) || !(0..side).contains(&tcol) {
            return;
        }

        let tile = (trow * side + tcol) as usize;
        self.tiles.swap(empty, tile);
        self.moves += 1;

        if self.in_order() {
            self.solved = true;
            events.push(Event::GameOver { score: self.moves });
        }
    }

    fn in_order(&self) -> bool {
        self.tiles[..PUZZLE_SLOTS - 1]
            .iter()
            .enumerate()
            .all(|(i, &t)| t == i as u8 + 1)
    }
}
