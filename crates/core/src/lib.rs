//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the five game simulations and the plumbing they
//! share. It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces an identical run
//! - **Testable**: Every game rule is unit tested right beside it
//! - **Portable**: Can run headless, in tests, or behind any renderer
//! - **Fast**: Zero-allocation tick paths for the per-frame games
//!
//! # Module Structure
//!
//! - [`sim`]: the [`Game`] tagged union the loop driver owns
//! - [`intents`]: bounded FIFO queue between the input adapter and a tick
//! - [`rng`]: small LCG powering every random decision
//! - [`snake`]: wrap-around grid snake with the persisted high score
//! - [`tetris`]: falling piece, row sweep, matrix rotation
//! - [`flappy`]: per-frame gravity integration over scrolling pipes
//! - [`memory`]: card pairs with the timed mismatch revert
//! - [`puzzle`]: 3x3 sliding tiles
//!
//! # Tick Model
//!
//! Every simulation exposes `tick(elapsed_ms, &mut IntentQueue)`: the
//! driver calls it once per frame with the elapsed wall time and the
//! intents queued since the last frame. Interval-gated games (Snake,
//! Tetris) accumulate the elapsed time internally; Flappy integrates on
//! every call. Ticks return [`sim::Events`] describing what happened -
//! scoring, terminal, a new high score worth persisting.
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::intents::IntentQueue;
//! use tui_arcade_core::sim::Game;
//! use tui_arcade_types::{GameKind, Intent};
//!
//! let mut game = Game::new(GameKind::Tetris, 12345, 0);
//! let mut intents = IntentQueue::new();
//! intents.push(Intent::MoveLeft);
//! intents.push(Intent::Rotate);
//!
//! let tick = game.tick(16.0, &mut intents);
//! assert!(tick.redraw);
//! assert!(!game.terminal());
//! ```

pub mod flappy;
pub mod intents;
pub mod memory;
pub mod puzzle;
pub mod rng;
pub mod sim;
pub mod snake;
pub mod tetris;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use flappy::{FlappySim, Pipe};
pub use intents::{IntentQueue, INTENT_QUEUE_CAP};
pub use memory::{Card, MemorySim};
pub use puzzle::PuzzleSim;
pub use rng::SimpleRng;
pub use sim::{Events, Game, Tick};
pub use snake::SnakeSim;
pub use tetris::{Board, PieceKind, Shape, TetrisSim, Tetromino};
