//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`]s for whichever game
//! is active, plus menu navigation. The mapping is pure; the bounded queue
//! the intents land in lives with the loop driver.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit, MenuNav};
