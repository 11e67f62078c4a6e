//! Flappy view: 250x400 logical canvas with a sprite bird.

use tui_arcade_core::flappy::FlappySim;
use tui_arcade_core::types::{
    FLAPPY_BIRD_SIZE, FLAPPY_BIRD_X, FLAPPY_CANVAS_H, FLAPPY_CANVAS_W, FLAPPY_PIPE_GAP,
    FLAPPY_PIPE_W,
};

use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::pixel::PixelSurface;
use crate::surface::{Image, Paint, Surface};

use super::{overlay_center, Viewport};

const SKY: Rgb = Rgb::hex(0x70c5ce);
const PIPE_FROM: Rgb = Rgb::hex(0x2e8b57);
const PIPE_TO: Rgb = Rgb::hex(0x3cb371);
const PIPE_STROKE: Rgb = Rgb::hex(0x1e6b47);

/// 8x8 bird sprite. `.` transparent, `y` body, `w` eye, `o` beak.
const BIRD_SPRITE: [&str; 8] = [
    "..yyyy..",
    ".yyyyyy.",
    "yyyyywwy",
    "yyyyywwy",
    "yyyyyyoo",
    ".yyyyyo.",
    "..yyyy..",
    "...yy...",
];

fn bird_image() -> Image {
    let mut pixels = Vec::with_capacity(64);
    for row in BIRD_SPRITE {
        for ch in row.chars() {
            pixels.push(match ch {
                'y' => Some(Rgb::hex(0xffd700)),
                'w' => Some(Rgb::hex(0xffffff)),
                'o' => Some(Rgb::hex(0xff8c00)),
                _ => None,
            });
        }
    }
    Image::new(8, 8, pixels)
}

pub struct FlappyView;

impl FlappyView {
    pub fn render_into(
        &self,
        sim: &FlappySim,
        surface: &mut PixelSurface,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        surface.reset(FLAPPY_CANVAS_W as u32, FLAPPY_CANVAS_H as u32);

        surface.set_fill(Paint::Solid(SKY));
        surface.fill_rect(0.0, 0.0, FLAPPY_CANVAS_W, FLAPPY_CANVAS_H);

        for pipe in sim.pipes() {
            surface.set_fill(Paint::LinearGradientX {
                x0: pipe.x,
                x1: pipe.x + FLAPPY_PIPE_W,
                from: PIPE_FROM,
                to: PIPE_TO,
            });
            surface.set_stroke(Paint::Solid(PIPE_STROKE));
            surface.fill_rect(pipe.x, 0.0, FLAPPY_PIPE_W, pipe.gap_y);
            surface.stroke_rect(pipe.x, 0.0, FLAPPY_PIPE_W, pipe.gap_y);
            let bottom_y = pipe.gap_y + FLAPPY_PIPE_GAP;
            let bottom_h = FLAPPY_CANVAS_H - bottom_y;
            surface.fill_rect(pipe.x, bottom_y, FLAPPY_PIPE_W, bottom_h);
            surface.stroke_rect(pipe.x, bottom_y, FLAPPY_PIPE_W, bottom_h);
        }

        surface.draw_image(
            &bird_image(),
            FLAPPY_BIRD_X,
            sim.bird_y(),
            FLAPPY_BIRD_SIZE,
            FLAPPY_BIRD_SIZE,
        );

        surface.set_fill(Paint::Solid(Rgb::hex(0x000000)));
        surface.fill_text(&format!("Score: {}", sim.score()), 10.0, 10.0);

        let Some(placement) = surface.compose_into(fb) else {
            return;
        };

        let mid = placement.y + placement.rows / 2;
        if !sim.started() && !sim.game_over() {
            overlay_center(fb, mid, "Press space to flap", Rgb::new(255, 255, 255));
        }
        if sim.game_over() {
            overlay_center(fb, mid.saturating_sub(1), "GAME OVER!", Rgb::hex(0xe74c3c));
            let score = format!("Your score: {}", sim.score());
            overlay_center(fb, mid, &score, Rgb::new(255, 255, 255));
            overlay_center(fb, mid + 1, "Press r to restart", Rgb::new(160, 160, 170));
        }
    }
}
