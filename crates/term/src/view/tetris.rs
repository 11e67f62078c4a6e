//! Tetris view: 300x600 logical canvas, 30 px blocks.

use tui_arcade_core::tetris::{PieceKind, TetrisSim};
use tui_arcade_core::types::{
    TETRIS_BLOCK_PX, TETRIS_CANVAS_H, TETRIS_CANVAS_W, TETRIS_COLS, TETRIS_ROWS,
};

use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::pixel::PixelSurface;
use crate::surface::{Paint, Surface};

use super::{hud_style, line_center, overlay_center, Viewport};

const MERGED_FILL: Rgb = Rgb::hex(0x444444);
const MERGED_STROKE: Rgb = Rgb::hex(0x222222);
const PIECE_STROKE: Rgb = Rgb::hex(0x000000);

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::hex(0x00f0f0),
        PieceKind::J => Rgb::hex(0x0000f0),
        PieceKind::L => Rgb::hex(0xf0a000),
        PieceKind::O => Rgb::hex(0xf0f000),
        PieceKind::S => Rgb::hex(0x00f000),
        PieceKind::T => Rgb::hex(0xa000f0),
        PieceKind::Z => Rgb::hex(0xf00000),
    }
}

pub struct TetrisView;

impl TetrisView {
    pub fn render_into(
        &self,
        sim: &TetrisSim,
        surface: &mut PixelSurface,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        surface.reset(TETRIS_CANVAS_W, TETRIS_CANVAS_H);

        for y in 0..TETRIS_ROWS as i8 {
            for x in 0..TETRIS_COLS as i8 {
                if sim.board().is_occupied(x, y) {
                    block(surface, x, y, MERGED_FILL, MERGED_STROKE);
                }
            }
        }

        let piece = sim.piece();
        let fill = piece_color(piece.kind());
        for (dx, dy) in piece.shape().cells() {
            let (x, y) = (piece.x() + dx, piece.y() + dy);
            if y >= 0 {
                block(surface, x, y, fill, PIECE_STROKE);
            }
        }

        let Some(placement) = surface.compose_into(fb) else {
            return;
        };

        let hud = format!("Score: {}", sim.score());
        line_center(fb, placement.y.saturating_sub(1), &hud, hud_style());

        if sim.game_over() {
            let mid = placement.y + placement.rows / 2;
            overlay_center(fb, mid.saturating_sub(1), "GAME OVER!", Rgb::hex(0xe74c3c));
            let score = format!("Your score: {}", sim.score());
            overlay_center(fb, mid, &score, Rgb::new(255, 255, 255));
            overlay_center(fb, mid + 1, "Press r to restart", Rgb::new(160, 160, 170));
        }
    }
}

fn block(surface: &mut PixelSurface, x: i8, y: i8, fill: Rgb, stroke: Rgb) {
    let px = x as f32 * TETRIS_BLOCK_PX as f32;
    let py = y as f32 * TETRIS_BLOCK_PX as f32;
    let edge = TETRIS_BLOCK_PX as f32;
    surface.set_fill(Paint::Solid(fill));
    surface.set_stroke(Paint::Solid(stroke));
    surface.fill_rect(px, py, edge, edge);
    surface.stroke_rect(px, py, edge, edge);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paints_active_piece() {
        let sim = TetrisSim::new(7);
        let mut surface = PixelSurface::new(0, 0);
        let mut fb = FrameBuffer::new(60, 40);
        TetrisView.render_into(&sim, &mut surface, Viewport::new(60, 40), &mut fb);

        let piece = sim.piece();
        let expected = piece_color(piece.kind());
        let (dx, dy) = piece.shape().cells()[0];
        let px = (piece.x() + dx) as u32 * TETRIS_BLOCK_PX + TETRIS_BLOCK_PX / 2;
        let py = (piece.y() + dy) as u32 * TETRIS_BLOCK_PX + TETRIS_BLOCK_PX / 2;
        assert_eq!(surface.pixel(px, py), expected);
    }

    #[test]
    fn test_each_kind_has_a_distinct_color() {
        let kinds = [
            PieceKind::I,
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ];
        for (i, &a) in kinds.iter().enumerate() {
            for &b in &kinds[i + 1..] {
                assert_ne!(piece_color(a), piece_color(b));
            }
        }
    }
}
