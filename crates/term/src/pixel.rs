//! PixelSurface: rasterizes logical canvas pixels into terminal cells.
//!
//! Each game draws onto its own logical canvas (300x600 for Tetris,
//! 400x400 for Snake, 250x400 for Flappy) through the [`Surface`] trait.
//! Composition scales that canvas to fit the viewport and packs two
//! pixel rows per character row using the upper-half-block glyph, with
//! the top pixel as foreground and the bottom as background. Text draws
//! are recorded during painting and overlaid as real glyphs at the scaled
//! position, so HUD text stays readable at any terminal size.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::{Image, Paint, Surface};

/// Upper half block: top pixel in fg, bottom pixel in bg.
const HALF_BLOCK: char = '\u{2580}';

/// Where a composed canvas landed inside the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

/// A recorded `fill_text` call, replayed as glyphs at compose time.
#[derive(Debug, Clone)]
struct TextDraw {
    x: f32,
    y: f32,
    text: String,
    color: Rgb,
}

/// An RGB pixel grid in logical canvas coordinates.
pub struct PixelSurface {
    width: u32,
    height: u32,
    background: Rgb,
    px: Vec<Rgb>,
    fill: Paint,
    stroke: Paint,
    texts: Vec<TextDraw>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let background = Rgb::new(16, 16, 24);
        Self {
            width,
            height,
            background,
            px: vec![background; (width * height) as usize],
            fill: Paint::Solid(Rgb::default()),
            stroke: Paint::Solid(Rgb::default()),
            texts: Vec::new(),
        }
    }

    /// Re-point the surface at a (possibly different) canvas and clear it.
    ///
    /// Views call this first, so one surface can be reused across games
    /// and frames without reallocating.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.px.clear();
        self.px.resize((width * height) as usize, self.background);
        self.texts.clear();
        self.fill = Paint::Solid(Rgb::default());
        self.stroke = Paint::Solid(Rgb::default());
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.px[(y as u32 * self.width + x as u32) as usize] = color;
    }

    /// Pixel at (x, y); the background outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        if x >= self.width || y >= self.height {
            return self.background;
        }
        self.px[(y * self.width + x) as usize]
    }

    fn paint_rect(&mut self, paint: Paint, x: f32, y: f32, w: f32, h: f32) {
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let x1 = (x + w).round() as i32;
        let y1 = (y + h).round() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, paint.at(px as f32));
            }
        }
    }

    /// Scale the canvas into the viewport and write terminal cells.
    ///
    /// Returns where the canvas landed, or `None` when the viewport is
    /// too small to hold a single cell (the defensive no-op case).
    pub fn compose_into(&self, fb: &mut FrameBuffer) -> Option<Placement> {
        if self.width == 0 || self.height == 0 || fb.width() == 0 || fb.height() == 0 {
            return None;
        }

        // One pixel per column, two per row; scale preserves aspect.
        let scale = (fb.width() as f32 / self.width as f32)
            .min((fb.height() as f32 * 2.0) / self.height as f32);
        let cols = ((self.width as f32 * scale) as u16).max(1).min(fb.width());
        let rows = ((self.height as f32 * scale / 2.0) as u16)
            .max(1)
            .min(fb.height());

        let ox = (fb.width() - cols) / 2;
        let oy = (fb.height() - rows) / 2;

        for cy in 0..rows {
            for cx in 0..cols {
                let sample = |py: f32| {
                    let sx = ((cx as f32 + 0.5) / scale) as u32;
                    let sy = (py / scale) as u32;
                    self.pixel(sx.min(self.width - 1), sy.min(self.height - 1))
                };
                let top = sample(cy as f32 * 2.0 + 0.5);
                let bottom = sample(cy as f32 * 2.0 + 1.5);

                let cell = if top == bottom {
                    CellStyle::new(top, top).into_cell(' ')
                } else {
                    CellStyle::new(top, bottom).into_cell(HALF_BLOCK)
                };
                fb.set(ox + cx, oy + cy, cell);
            }
        }

        // Text overlays land at the scaled cell position.
        for draw in &self.texts {
            let tx = ox + ((draw.x * scale) as u16).min(cols.saturating_sub(1));
            let ty = oy + ((draw.y * scale / 2.0) as u16).min(rows.saturating_sub(1));
            fb.put_str_over(tx, ty, &draw.text, draw.color, true);
        }

        Some(Placement {
            x: ox,
            y: oy,
            cols,
            rows,
        })
    }
}

impl Surface for PixelSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.paint_rect(Paint::Solid(self.background), x, y, w, h);
    }

    fn set_fill(&mut self, paint: Paint) {
        self.fill = paint;
    }

    fn set_stroke(&mut self, paint: Paint) {
        self.stroke = paint;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.paint_rect(self.fill, x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let paint = self.stroke;
        self.paint_rect(paint, x, y, w, 1.0);
        self.paint_rect(paint, x, y + h - 1.0, w, 1.0);
        self.paint_rect(paint, x, y, 1.0, h);
        self.paint_rect(paint, x + w - 1.0, y, 1.0, h);
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let tw = w.round() as i32;
        let th = h.round() as i32;
        for dy in 0..th {
            for dx in 0..tw {
                let sx = (dx as u32 * image.width()) / tw.max(1) as u32;
                let sy = (dy as u32 * image.height()) / th.max(1) as u32;
                if let Some(color) = image.pixel(sx, sy) {
                    self.put(x0 + dx, y0 + dy, color);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let color = self.fill.at(x);
        self.texts.push(TextDraw {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}
