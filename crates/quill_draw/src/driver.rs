//! The draw capability set

use crate::color::{Color, ColorIndex};
use crate::error::Result;
use crate::font::{Font, FontIndex};
use crate::line_style::{effective_width, LineCap};

/// Mutable pen state carried across drawing calls within one session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PenState {
    pub color: Color,
    pub line_width: i32,
    pub cap: LineCap,
    pub font: Font,
    pub font_size: i32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 1,
            cap: LineCap::Butt,
            font: Font::default(),
            font_size: 14,
        }
    }
}

impl PenState {
    /// Apply a line-style change (flags, width, dash pattern).
    ///
    /// Dash patterns are accepted for interface compatibility but not carried:
    /// no backend renders them.
    pub fn set_line_style(&mut self, flags: u32, width: i32, _dashes: &[i32]) {
        self.line_width = effective_width(width);
        self.cap = LineCap::from_flags(flags);
    }
}

/// The fixed set of drawing operations a rendering backend implements.
///
/// Calls are strictly sequential within one session; every write-performing
/// operation reports sink failures instead of swallowing them. Metrics queries
/// (`text_width`, `line_height`, `descent`) reflect the currently set font.
pub trait DrawDriver {
    /// Emit an unfilled rectangle using the current stroke color and width.
    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()>;

    /// Emit a filled rectangle using the current fill color, no stroke.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()>;

    /// Emit a line segment with the current color, width, and cap.
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()>;

    /// Emit text at (x, y) in the current font and color. Empty text is a
    /// no-op.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<()>;

    /// Emit text rotated counter-clockwise by `angle` degrees around (x, y).
    fn draw_text_rotated(&mut self, text: &str, x: i32, y: i32, angle: i32) -> Result<()>;

    /// Replace the current pen color.
    fn set_color(&mut self, color: Color);

    /// Replace the current pen color by colormap lookup.
    fn set_color_index(&mut self, index: ColorIndex) {
        self.set_color(index.resolve());
    }

    /// Select the current font by toolkit index and point size.
    fn set_font(&mut self, index: FontIndex, size: i32);

    /// Set stroke width, cap style, and (ignored) dash pattern.
    fn set_line_style(&mut self, flags: u32, width: i32, dashes: &[i32]);

    /// Rendered width of `text` in the current font.
    fn text_width(&self, text: &str) -> f64;

    /// Line height of the current font.
    fn line_height(&self) -> i32;

    /// Descent of the current font.
    fn descent(&self) -> i32;
}
