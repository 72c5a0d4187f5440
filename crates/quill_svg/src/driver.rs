//! SVG-serializing draw driver

use std::io::Write;

use quill_draw::{
    Color, DisplayDriver, DrawDriver, FontIndex, PenState, Result,
};

use crate::escape::escape_text;

/// A [`DrawDriver`] that appends one SVG element per drawing call.
///
/// The driver keeps the session's pen state and embeds it inline into every
/// emitted element; no stylesheet or indirection is used, so the output stays
/// readable by generic SVG viewers. Font selection is mirrored into the
/// display driver, which owns the metrics model the toolkit queries.
pub struct SvgDriver<W: Write> {
    out: W,
    pen: PenState,
    display: DisplayDriver,
}

impl<W: Write> SvgDriver<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            pen: PenState::default(),
            display: DisplayDriver::new(),
        }
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    /// Close the document: emit the footer and flush the sink.
    pub(crate) fn close(mut self) -> Result<W> {
        self.out.write_all(b"</svg>\n")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn pen_rgb(&self) -> String {
        let Color { r, g, b } = self.pen.color;
        format!("rgb({},{},{})", r, g, b)
    }

    fn write_text_element(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        let font = self.pen.font;
        let weight = if font.bold { " font-weight=\"bold\"" } else { "" };
        let style = match font.slant() {
            Some(slant) => format!(" font-style=\"{}\"", slant),
            None => String::new(),
        };
        // textLength pins the rendered width so a viewer with different font
        // metrics does not reflow the line.
        let text_length = self.display.text_width(text) as i32;
        writeln!(
            self.out,
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\"{}{} font-size=\"{}\" \
             xml:space=\"preserve\" fill=\"{}\" textLength=\"{}\">{}</text>",
            x,
            y,
            font.family.name(),
            weight,
            style,
            self.pen.font_size,
            self.pen_rgb(),
            text_length,
            escape_text(text),
        )?;
        Ok(())
    }
}

impl<W: Write> DrawDriver for SvgDriver<W> {
    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
        writeln!(
            self.out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            x,
            y,
            w,
            h,
            self.pen_rgb(),
            self.pen.line_width,
        )?;
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
        writeln!(
            self.out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            x,
            y,
            w,
            h,
            self.pen_rgb(),
        )?;
        Ok(())
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        writeln!(
            self.out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
             style=\"stroke:{};stroke-width:{};stroke-linecap:{}\"/>",
            x1,
            y1,
            x2,
            y2,
            self.pen_rgb(),
            self.pen.line_width,
            self.pen.cap.name(),
        )?;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.write_text_element(text, x, y)
    }

    fn draw_text_rotated(&mut self, text: &str, x: i32, y: i32, angle: i32) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        // SVG rotation runs clockwise where the toolkit's runs counter-
        // clockwise, hence the negated angle.
        write!(
            self.out,
            "<g transform=\"translate({},{}) rotate({})\">",
            x, y, -angle
        )?;
        self.write_text_element(text, 0, 0)?;
        self.out.write_all(b"</g>\n")?;
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    fn set_font(&mut self, index: FontIndex, size: i32) {
        // Keep the display driver's metrics cache in sync before deriving the
        // SVG-facing family and style.
        self.display.set_font(index, size);
        self.pen.font = quill_draw::Font::from_index(index);
        self.pen.font_size = size;
    }

    fn set_line_style(&mut self, flags: u32, width: i32, dashes: &[i32]) {
        self.pen.set_line_style(flags, width, dashes);
    }

    fn text_width(&self, text: &str) -> f64 {
        self.display.text_width(text)
    }

    fn line_height(&self) -> i32 {
        self.display.line_height()
    }

    fn descent(&self) -> i32 {
        self.display.descent()
    }
}
