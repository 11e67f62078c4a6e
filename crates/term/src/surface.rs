//! Surface: the 2D immediate-mode drawing contract the views paint to.
//!
//! This is the canvas op set the games were written against: rectangles
//! (filled and stroked), an image blit, text, and a fill style that is
//! either a solid color or a horizontal linear gradient. Coordinates are
//! logical pixels in each game's own canvas space; how those pixels reach
//! the terminal is the implementation's problem (see [`crate::pixel`]).

use crate::fb::Rgb;

/// A fill or stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    /// Horizontal gradient: `from` at `x0`, `to` at `x1`, clamped outside.
    LinearGradientX {
        x0: f32,
        x1: f32,
        from: Rgb,
        to: Rgb,
    },
}

impl Paint {
    /// Color of this paint at logical x.
    pub fn at(&self, x: f32) -> Rgb {
        match *self {
            Paint::Solid(c) => c,
            Paint::LinearGradientX { x0, x1, from, to } => {
                let t = if (x1 - x0).abs() < f32::EPSILON {
                    0.0
                } else {
                    ((x - x0) / (x1 - x0)).clamp(0.0, 1.0)
                };
                let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
                Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
            }
        }
    }
}

/// A small raster image; `None` pixels are transparent.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Option<Rgb>>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<Option<Rgb>>) -> Self {
        assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y * self.width + x) as usize]
    }
}

/// The immediate-mode 2D drawing surface the views consume.
///
/// Implementations must tolerate out-of-range coordinates by clipping;
/// the views never pre-validate. Painting never fails.
pub trait Surface {
    /// Reset a region to the surface background.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn set_fill(&mut self, paint: Paint);

    fn set_stroke(&mut self, paint: Paint);

    /// Fill a rectangle with the current fill paint.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Outline a rectangle (one logical pixel wide) with the current
    /// stroke paint.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Blit an image scaled to `w` x `h`.
    fn draw_image(&mut self, image: &Image, x: f32, y: f32, w: f32, h: f32);

    /// Draw text with the current fill paint; `(x, y)` is the top-left
    /// of the run in logical pixels.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}
