//! Terminal rendering layer for the arcade.
//!
//! This intentionally avoids ratatui widgets/layout and instead renders
//! into a simple framebuffer that is diffed and flushed to the terminal.
//! The canvas games paint logical pixels through [`PixelSurface`], which
//! packs two pixel rows per character cell with the upper-half-block
//! glyph; the card games draw character cells directly.
//!
//! Goals:
//! - Keep the simulation crates free of any terminal concern
//! - One stateless view per game, unit-testable against the framebuffer
//! - Precise diffing so a 60 FPS redraw writes only what changed

pub mod fb;
pub mod pixel;
pub mod renderer;
pub mod surface;
pub mod view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use pixel::{PixelSurface, Placement};
pub use renderer::{for_each_changed_run, TerminalRenderer};
pub use surface::{Image, Paint, Surface};
pub use view::{
    selected_kind, FlappyView, MemoryView, MenuView, PuzzleView, SnakeView, TetrisView, Viewport,
};
