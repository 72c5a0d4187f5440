//! Screen-backed driver
//!
//! The display driver is the toolkit's default rendering backend. In this
//! tooling workspace it runs headless: drawing calls update pen state and emit
//! nothing, but the font-metrics model is live and deterministic. Other
//! backends keep their font selection delegated here so width/height/descent
//! queries stay in sync with what the toolkit itself would measure.

use crate::color::Color;
use crate::driver::{DrawDriver, PenState};
use crate::error::Result;
use crate::font::{Font, FontFamily, FontIndex};

/// Minimal screen-backed [`DrawDriver`], owner of the font-metrics model
#[derive(Debug, Default)]
pub struct DisplayDriver {
    pen: PenState,
}

impl DisplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    /// Per-family advance width as a fraction of the point size
    fn advance_factor(family: FontFamily) -> f64 {
        match family {
            FontFamily::Helvetica => 0.5,
            FontFamily::Courier => 0.6,
            FontFamily::Times => 0.48,
        }
    }
}

impl DrawDriver for DisplayDriver {
    fn stroke_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32) -> Result<()> {
        Ok(())
    }

    fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32) -> Result<()> {
        Ok(())
    }

    fn line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) -> Result<()> {
        Ok(())
    }

    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32) -> Result<()> {
        Ok(())
    }

    fn draw_text_rotated(&mut self, _text: &str, _x: i32, _y: i32, _angle: i32) -> Result<()> {
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    fn set_font(&mut self, index: FontIndex, size: i32) {
        self.pen.font = Font::from_index(index);
        self.pen.font_size = size;
        tracing::trace!(index, size, "display font selected");
    }

    fn set_line_style(&mut self, flags: u32, width: i32, dashes: &[i32]) {
        self.pen.set_line_style(flags, width, dashes);
    }

    fn text_width(&self, text: &str) -> f64 {
        let factor = Self::advance_factor(self.pen.font.family);
        text.chars().count() as f64 * self.pen.font_size as f64 * factor
    }

    fn line_height(&self) -> i32 {
        // size plus 20% leading, floored
        self.pen.font_size + self.pen.font_size / 5
    }

    fn descent(&self) -> i32 {
        self.pen.font_size / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorIndex;

    #[test]
    fn metrics_track_font_selection() {
        let mut display = DisplayDriver::new();
        display.set_font(0, 10);
        assert_eq!(display.text_width("abcd"), 4.0 * 10.0 * 0.5);
        display.set_font(4, 10);
        assert_eq!(display.text_width("abcd"), 4.0 * 10.0 * 0.6);
        assert_eq!(display.line_height(), 12);
        assert_eq!(display.descent(), 2);
    }

    #[test]
    fn indexed_color_updates_pen() {
        let mut display = DisplayDriver::new();
        display.set_color_index(ColorIndex(1));
        assert_eq!(display.pen().color, Color::RED);
    }

    #[test]
    fn drawing_calls_are_silent_no_ops() {
        let mut display = DisplayDriver::new();
        display.fill_rect(0, 0, 10, 10).unwrap();
        display.line(0, 0, 5, 5).unwrap();
        display.draw_text("hi", 1, 1).unwrap();
    }
}
