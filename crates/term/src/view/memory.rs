//! Memory view: a 4x2 card grid drawn in character cells.

use tui_arcade_core::memory::{MemorySim, MEMORY_COLS};
use tui_arcade_core::types::MEMORY_ATTEMPTS;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

use super::{draw_box, hud_style, line_center, overlay_center, Viewport};

const CARD_W: u16 = 8;
const CARD_H: u16 = 3;
const GAP: u16 = 1;

pub struct MemoryView;

impl MemoryView {
    pub fn render_into(&self, sim: &MemorySim, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let cols = MEMORY_COLS as u16;
        let rows = (sim.cards().len() as u16).div_ceil(cols);
        let grid_w = cols * CARD_W + (cols - 1) * GAP;
        let grid_h = rows * CARD_H + (rows - 1) * GAP;
        if viewport.width < grid_w || viewport.height < grid_h + 2 {
            line_center(fb, 0, "Terminal too small", hud_style());
            return;
        }
        let ox = (viewport.width - grid_w) / 2;
        let oy = (viewport.height - grid_h) / 2;

        let hud = format!(
            "Attempts: {}/{}   Pairs: {}/4",
            sim.attempts(),
            MEMORY_ATTEMPTS,
            sim.pairs()
        );
        line_center(fb, oy.saturating_sub(2), &hud, hud_style());

        for (i, card) in sim.cards().iter().enumerate() {
            let cx = ox + (i as u16 % cols) * (CARD_W + GAP);
            let cy = oy + (i as u16 / cols) * (CARD_H + GAP);

            let border = if i == sim.cursor() {
                CellStyle::new(Rgb::hex(0xf0f000), Rgb::new(0, 0, 0)).bold()
            } else if card.matched {
                CellStyle::new(Rgb::hex(0x2ecc71), Rgb::new(0, 0, 0))
            } else {
                CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0))
            };
            draw_box(fb, cx, cy, CARD_W, CARD_H, border);

            let (label, style) = if card.matched {
                (card.label, CellStyle::new(Rgb::hex(0x2ecc71), Rgb::new(0, 0, 0)))
            } else if card.face_up {
                (
                    card.label,
                    CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold(),
                )
            } else {
                ("?", hud_style())
            };
            let lx = cx + (CARD_W.saturating_sub(label.chars().count() as u16)) / 2;
            fb.put_str(lx, cy + CARD_H / 2, label, style);
        }

        if sim.game_over() {
            let (msg, color) = if sim.won() {
                ("YOU WIN!", Rgb::hex(0x2ecc71))
            } else {
                ("GAME OVER!", Rgb::hex(0xe74c3c))
            };
            overlay_center(fb, oy + grid_h + 1, msg, color);
            overlay_center(fb, oy + grid_h + 2, "Press r to restart", Rgb::new(160, 160, 170));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_cards_show_question_marks() {
        let sim = MemorySim::new(9);
        let mut fb = FrameBuffer::new(60, 20);
        MemoryView.render_into(&sim, Viewport::new(60, 20), &mut fb);
        let marks = fb.cells().iter().filter(|c| c.ch == '?').count();
        assert_eq!(marks, sim.cards().len());
    }

    #[test]
    fn test_small_viewport_degrades_to_notice() {
        let sim = MemorySim::new(9);
        let mut fb = FrameBuffer::new(20, 4);
        MemoryView.render_into(&sim, Viewport::new(20, 4), &mut fb);
        assert!(fb.cells().iter().any(|c| c.ch == 'T'));
        assert!(!fb.cells().iter().any(|c| c.ch == '?'));
    }
}
