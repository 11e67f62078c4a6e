//! Sliding puzzle view: a 3x3 tile grid drawn in character cells.

use tui_arcade_core::puzzle::PuzzleSim;
use tui_arcade_core::types::PUZZLE_SIDE;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

use super::{draw_box, hud_style, line_center, overlay_center, Viewport};

const TILE_W: u16 = 7;
const TILE_H: u16 = 3;
const GAP: u16 = 1;

pub struct PuzzleView;

impl PuzzleView {
    pub fn render_into(&self, sim: &PuzzleSim, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let side = PUZZLE_SIDE as u16;
        let grid_w = side * TILE_W + (side - 1) * GAP;
        let grid_h = side * TILE_H + (side - 1) * GAP;
        if viewport.width < grid_w || viewport.height < grid_h + 2 {
            line_center(fb, 0, "Terminal too small", hud_style());
            return;
        }
        let ox = (viewport.width - grid_w) / 2;
        let oy = (viewport.height - grid_h) / 2;

        let hud = format!("Moves: {}", sim.moves());
        line_center(fb, oy.saturating_sub(2), &hud, hud_style());

        for (i, &tile) in sim.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let tx = ox + (i as u16 % side) * (TILE_W + GAP);
            let ty = oy + (i as u16 / side) * (TILE_H + GAP);
            let style = if sim.solved() {
                CellStyle::new(Rgb::hex(0x2ecc71), Rgb::new(0, 0, 0))
            } else {
                CellStyle::new(Rgb::new(200, 200, 210), Rgb::new(0, 0, 0))
            };
            draw_box(fb, tx, ty, TILE_W, TILE_H, style);
            let digit = (b'0' + tile) as char;
            fb.put_char(tx + TILE_W / 2, ty + TILE_H / 2, digit, style.bold());
        }

        if sim.solved() {
            overlay_center(fb, oy + grid_h + 1, "SOLVED!", Rgb::hex(0x2ecc71));
            overlay_center(fb, oy + grid_h + 2, "Press r to restart", Rgb::new(160, 160, 170));
        }
    }
}
