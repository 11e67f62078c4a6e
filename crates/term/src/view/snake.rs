//! Snake view: 400x400 logical canvas, 20 px grid.

use tui_arcade_core::snake::SnakeSim;
use tui_arcade_core::types::{SNAKE_CANVAS_H, SNAKE_CANVAS_W, SNAKE_GRID_PX};

use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::pixel::PixelSurface;
use crate::surface::{Paint, Surface};

use super::{hud_style, line_center, overlay_center, Viewport};

const APPLE_FILL: Rgb = Rgb::hex(0xe74c3c);
const APPLE_STROKE: Rgb = Rgb::hex(0xc0392b);
const HEAD_FILL: Rgb = Rgb::hex(0x2ecc71);
const HEAD_STROKE: Rgb = Rgb::hex(0x27ae60);
const BODY_FILL: Rgb = Rgb::hex(0x3498db);
const BODY_STROKE: Rgb = Rgb::hex(0x2980b9);

pub struct SnakeView;

impl SnakeView {
    /// Paint the simulation onto `surface`, compose into `fb`, then lay
    /// the HUD and any terminal overlay on top.
    pub fn render_into(
        &self,
        sim: &SnakeSim,
        surface: &mut PixelSurface,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        surface.reset(SNAKE_CANVAS_W as u32, SNAKE_CANVAS_H as u32);
        let edge = (SNAKE_GRID_PX - 1) as f32;

        let (ax, ay) = sim.apple();
        cell(surface, ax as f32, ay as f32, edge, APPLE_FILL, APPLE_STROKE);

        for (i, &(x, y)) in sim.cells().iter().enumerate() {
            let (f, s) = if i == 0 {
                (HEAD_FILL, HEAD_STROKE)
            } else {
                (BODY_FILL, BODY_STROKE)
            };
            cell(surface, x as f32, y as f32, edge, f, s);
        }

        let Some(placement) = surface.compose_into(fb) else {
            return;
        };

        let hud = format!("Score: {}   High Score: {}", sim.score(), sim.high_score());
        line_center(fb, placement.y.saturating_sub(1), &hud, hud_style());

        if sim.game_over() {
            let mid = placement.y + placement.rows / 2;
            overlay_center(fb, mid.saturating_sub(1), "GAME OVER!", APPLE_FILL);
            let score = format!("Your score: {}", sim.score());
            overlay_center(fb, mid, &score, Rgb::new(255, 255, 255));
            overlay_center(fb, mid + 1, "Press r to restart", Rgb::new(160, 160, 170));
        }
    }
}

fn cell(surface: &mut PixelSurface, x: f32, y: f32, edge: f32, fill: Rgb, stroke: Rgb) {
    surface.set_fill(Paint::Solid(fill));
    surface.set_stroke(Paint::Solid(stroke));
    surface.fill_rect(x, y, edge, edge);
    surface.stroke_rect(x, y, edge, edge);
}
