//! The SVG demo scene
//!
//! Renders the classic hello-world box through any [`DrawDriver`], so the same
//! scene can target the screen or an SVG file.

use quill_draw::{Color, ColorIndex, DrawDriver, Result, CAP_ROUND};

/// Draw the demo scene onto a canvas of `width` x `height` pixels.
pub fn draw_scene(driver: &mut dyn DrawDriver, width: i32, height: i32) -> Result<()> {
    // panel background
    driver.set_color_index(ColorIndex(7));
    driver.fill_rect(0, 0, width, height)?;

    // frame
    driver.set_color(Color::gray(96));
    driver.set_line_style(0, 2, &[]);
    driver.stroke_rect(1, 1, width - 2, height - 2)?;

    // underline
    driver.set_color(Color::new(0, 96, 160));
    driver.set_line_style(CAP_ROUND, 3, &[]);
    driver.line(20, height - 40, width - 20, height - 40)?;

    // bold italic headline, Helvetica bucket
    driver.set_font(3, 36);
    driver.set_color(Color::BLACK);
    driver.draw_text("Hello, World!", 20, height / 2)?;

    // rotated side label
    driver.set_font(0, 12);
    driver.set_color(Color::gray(96));
    driver.draw_text_rotated("quill", width - 12, height - 16, 90)?;

    Ok(())
}
