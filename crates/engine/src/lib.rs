//! Run orchestration: the loop driver and high score persistence.
//!
//! The driver owns one simulation at a time and mediates between wall
//! clock, input intents, and the simulation tick. It is deliberately
//! free of any terminal concern so the whole lifecycle (menu, run,
//! game over, restart) can be unit tested with a fake clock.

pub mod driver;
pub mod scores;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use driver::{LoopDriver, Phase};
pub use scores::HighScoreStore;
