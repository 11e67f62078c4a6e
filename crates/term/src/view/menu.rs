//! Game picker shown between runs.

use tui_arcade_core::types::{GameKind, GAME_KINDS};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

use super::{hud_style, line_center, Viewport};

pub struct MenuView;

impl MenuView {
    pub fn render_into(&self, selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        // Title, entry list, the selected game's description, key hints.
        let list_h = GAME_KINDS.len() as u16;
        let total = 2 + list_h + 2 + 2;
        let top = viewport.height.saturating_sub(total) / 2;

        let title = CellStyle::new(Rgb::hex(0xf0f000), Rgb::new(0, 0, 0)).bold();
        line_center(fb, top, "T U I  A R C A D E", title);

        for (i, kind) in GAME_KINDS.iter().enumerate() {
            let y = top + 2 + i as u16;
            let label = format!("{}. {}", i + 1, kind.title());
            if i == selected {
                let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
                let x = viewport.width.saturating_sub(label.len() as u16 + 2) / 2;
                fb.put_str(x, y, "▸ ", style);
                fb.put_str(x + 2, y, &label, style);
            } else {
                line_center(fb, y, &label, hud_style());
            }
        }

        if let Some(kind) = GAME_KINDS.get(selected) {
            line_center(fb, top + 2 + list_h + 1, kind.description(), hud_style());
        }
        line_center(
            fb,
            top + 2 + list_h + 3,
            "up/down select   enter play   q quit",
            hud_style(),
        );
    }
}

/// Kind under the cursor, if any.
pub fn selected_kind(selected: usize) -> Option<GameKind> {
    GAME_KINDS.get(selected).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_game() {
        let mut fb = FrameBuffer::new(80, 24);
        MenuView.render_into(0, Viewport::new(80, 24), &mut fb);
        let text: String = fb.cells().iter().map(|c| c.ch).collect();
        for kind in GAME_KINDS {
            let head = kind.title().split(' ').next().unwrap();
            assert!(text.contains(head), "missing {head}");
        }
        assert!(text.contains('▸'));
    }

    #[test]
    fn test_selected_kind_bounds() {
        assert_eq!(selected_kind(0), Some(GameKind::Snake));
        assert_eq!(selected_kind(4), Some(GameKind::Flappy));
        assert_eq!(selected_kind(5), None);
    }
}
