//! Game union - one tagged type over the five simulations
//!
//! The loop driver owns exactly one [`Game`] and talks to it through a
//! uniform tick surface. Each variant carries its own typed state; there
//! is no string-keyed dispatch anywhere past the menu.

use arrayvec::ArrayVec;
use tui_arcade_types::{Event, GameKind};

use crate::flappy::FlappySim;
use crate::intents::IntentQueue;
use crate::memory::MemorySim;
use crate::puzzle::PuzzleSim;
use crate::snake::SnakeSim;
use crate::tetris::TetrisSim;

/// Events emitted by one tick; a tick never emits more than a handful
pub type Events = ArrayVec<Event, 4>;

/// What one tick produced: events plus whether the frame needs repainting
///
/// Snake repaints only when its gated step fires; every other game
/// repaints each frame.
#[derive(Debug, Clone, Default)]
pub struct Tick {
    pub events: Events,
    pub redraw: bool,
}

/// The closed set of running simulations
#[derive(Debug, Clone)]
pub enum Game {
    Snake(SnakeSim),
    Memory(MemorySim),
    Puzzle(PuzzleSim),
    Tetris(TetrisSim),
    Flappy(FlappySim),
}

impl Game {
    /// Build a fresh run of `kind`
    ///
    /// `snake_high` is the persisted high score; only the Snake variant
    /// reads it (to fold `max(previous, current)` at terminal time).
    pub fn new(kind: GameKind, seed: u32, snake_high: u32) -> Self {
        match kind {
            GameKind::Snake => Game::Snake(SnakeSim::new(seed, snake_high)),
            GameKind::Memory => Game::Memory(MemorySim::new(seed)),
            GameKind::Puzzle => Game::Puzzle(PuzzleSim::new(seed)),
            GameKind::Tetris => Game::Tetris(TetrisSim::new(seed)),
            GameKind::Flappy => Game::Flappy(FlappySim::new(seed)),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Game::Snake(_) => GameKind::Snake,
            Game::Memory(_) => GameKind::Memory,
            Game::Puzzle(_) => GameKind::Puzzle,
            Game::Tetris(_) => GameKind::Tetris,
            Game::Flappy(_) => GameKind::Flappy,
        }
    }

    /// Advance one tick with the elapsed frame time and queued intents
    pub fn tick(&mut self, elapsed_ms: f32, intents: &mut IntentQueue) -> Tick {
        match self {
            Game::Snake(sim) => {
                let (events, stepped) = sim.tick(elapsed_ms, intents);
                // The dying step still needs its final paint.
                let redraw = stepped || events.iter().any(|e| matches!(e, Event::GameOver { .. }));
                Tick { events, redraw }
            }
            Game::Memory(sim) => Tick {
                events: sim.tick(elapsed_ms, intents),
                redraw: true,
            },
            Game::Puzzle(sim) => Tick {
                events: sim.tick(elapsed_ms, intents),
                redraw: true,
            },
            Game::Tetris(sim) => Tick {
                events: sim.tick(elapsed_ms, intents),
                redraw: true,
            },
            Game::Flappy(sim) => Tick {
                events: sim.tick(elapsed_ms, intents),
                redraw: true,
            },
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Game::Snake(sim) => sim.score(),
            Game::Memory(sim) => sim.pairs() as u32,
            Game::Puzzle(sim) => sim.moves(),
            Game::Tetris(sim) => sim.score(),
            Game::Flappy(sim) => sim.score(),
        }
    }

    /// Whether the run reached its terminal state
    pub fn terminal(&self) -> bool {
        match self {
            Game::Snake(sim) => sim.game_over(),
            Game::Memory(sim) => sim.game_over(),
            Game::Puzzle(sim) => sim.solved(),
            Game::Tetris(sim) => sim.game_over(),
            Game::Flappy(sim) => sim.game_over(),
        }
    }
}
