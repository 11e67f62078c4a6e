//! Stateless per-game views.
//!
//! A view maps simulation state into a framebuffer and nothing else: no
//! I/O, no model mutation, fully unit-testable. The canvas games (Snake,
//! Tetris, Flappy) paint logical pixels through a [`PixelSurface`] and
//! compose; Memory and Puzzle draw character cells directly. Overlays
//! (`GAME OVER!`, the restart prompt) and HUD lines are plain text on
//! top, back-to-front: board first, actors second, text last.

mod flappy;
mod memory;
mod menu;
mod puzzle;
mod snake;
mod tetris;

pub use flappy::FlappyView;
pub use memory::MemoryView;
pub use menu::{selected_kind, MenuView};
pub use puzzle::PuzzleView;
pub use snake::SnakeView;
pub use tetris::TetrisView;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Dim style for HUD and hint lines.
pub(crate) fn hud_style() -> CellStyle {
    CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0))
}

/// A centered bold line, keeping whatever background is underneath.
pub(crate) fn overlay_center(fb: &mut FrameBuffer, y: u16, text: &str, fg: Rgb) {
    if y >= fb.height() {
        return;
    }
    let x = fb.width().saturating_sub(text.chars().count() as u16) / 2;
    fb.put_str_over(x, y, text, fg, true);
}

/// A centered dim line on black, for menu/HUD rows outside the canvas.
pub(crate) fn line_center(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    if y >= fb.height() {
        return;
    }
    let x = fb.width().saturating_sub(text.chars().count() as u16) / 2;
    fb.put_str(x, y, text, style);
}

/// Single-line box border used by the card games.
pub(crate) fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
