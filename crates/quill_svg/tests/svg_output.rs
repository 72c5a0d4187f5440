use quill_draw::{Color, ColorIndex, DrawDriver, CAP_ROUND, CAP_SQUARE};
use quill_svg::SvgSurface;

fn render<F>(width: i32, height: i32, draw: F) -> String
where
    F: FnOnce(&mut quill_svg::SvgDriver<Vec<u8>>),
{
    let mut surface = SvgSurface::new(width, height, Vec::new()).unwrap();
    draw(surface.driver_mut());
    String::from_utf8(surface.finish().unwrap()).unwrap()
}

#[test]
fn empty_session_yields_minimal_document() {
    let svg = render(340, 180, |_| {});
    assert!(svg.starts_with("<?xml version=\"1.0\""));
    assert!(svg.contains("<svg width=\"340px\" height=\"180px\" viewBox=\"0 0 340 180\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    // header and footer only
    assert!(!svg.contains("<rect"));
    assert!(!svg.contains("<text"));
}

#[test]
fn zero_sized_canvas_is_tolerated() {
    let svg = render(0, 0, |_| {});
    assert!(svg.contains("<svg width=\"0px\" height=\"0px\" viewBox=\"0 0 0 0\""));
}

#[test]
fn rect_attributes_pass_through_exactly() {
    let svg = render(100, 100, |d| {
        d.set_color(Color::new(10, 20, 30));
        d.stroke_rect(3, 7, 41, 59).unwrap();
        d.fill_rect(-2, 0, 0, 17).unwrap();
    });
    assert!(svg.contains(
        "<rect x=\"3\" y=\"7\" width=\"41\" height=\"59\" \
         fill=\"none\" stroke=\"rgb(10,20,30)\" stroke-width=\"1\"/>"
    ));
    // negative and zero sizes are emitted as given, not clamped
    assert!(svg.contains("<rect x=\"-2\" y=\"0\" width=\"0\" height=\"17\" fill=\"rgb(10,20,30)\"/>"));
}

#[test]
fn filled_rect_carries_no_stroke() {
    let svg = render(100, 100, |d| {
        d.fill_rect(1, 2, 3, 4).unwrap();
    });
    let fill_line = svg.lines().find(|l| l.starts_with("<rect")).unwrap();
    assert!(!fill_line.contains("stroke"));
}

#[test]
fn zero_line_width_renders_as_one() {
    let svg = render(100, 100, |d| {
        d.set_line_style(0, 0, &[]);
        d.line(0, 0, 50, 50).unwrap();
    });
    assert!(svg.contains("stroke-width:1;"));
}

#[test]
fn cap_flags_derive_square_over_round() {
    let svg = render(100, 100, |d| {
        d.set_line_style(CAP_SQUARE | CAP_ROUND, 2, &[]);
        d.line(0, 0, 10, 0).unwrap();
        d.set_line_style(CAP_ROUND, 2, &[]);
        d.line(0, 5, 10, 5).unwrap();
        d.set_line_style(0, 2, &[]);
        d.line(0, 9, 10, 9).unwrap();
    });
    let caps: Vec<&str> = svg
        .lines()
        .filter(|l| l.starts_with("<line"))
        .map(|l| {
            if l.contains("stroke-linecap:square") {
                "square"
            } else if l.contains("stroke-linecap:round") {
                "round"
            } else {
                "butt"
            }
        })
        .collect();
    assert_eq!(caps, vec!["square", "round", "butt"]);
}

#[test]
fn line_embeds_pen_state_at_call_time() {
    let svg = render(100, 100, |d| {
        d.set_color(Color::RED);
        d.set_line_style(0, 3, &[]);
        d.line(1, 2, 3, 4).unwrap();
        // later state changes must not affect the element already emitted
        d.set_color(Color::BLUE);
    });
    assert!(svg.contains(
        "<line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\" \
         style=\"stroke:rgb(255,0,0);stroke-width:3;stroke-linecap:butt\"/>"
    ));
}

#[test]
fn indexed_color_resolves_through_colormap() {
    let svg = render(100, 100, |d| {
        d.set_color_index(ColorIndex(4));
        d.fill_rect(0, 0, 1, 1).unwrap();
    });
    assert!(svg.contains("fill=\"rgb(0,0,255)\""));
}

#[test]
fn text_carries_font_state_and_width_hint() {
    let svg = render(200, 100, |d| {
        d.set_font(5, 20); // Courier bold
        d.set_color(Color::new(1, 2, 3));
        d.draw_text("Hello", 5, 50).unwrap();
    });
    let expected_length = (5.0 * 20.0 * 0.6) as i32;
    assert!(svg.contains("font-family=\"Courier\""));
    assert!(svg.contains("font-weight=\"bold\""));
    assert!(!svg.contains("font-style"));
    assert!(svg.contains("font-size=\"20\""));
    assert!(svg.contains("fill=\"rgb(1,2,3)\""));
    assert!(svg.contains(&format!("textLength=\"{}\"", expected_length)));
    assert!(svg.contains("xml:space=\"preserve\""));
    assert!(svg.contains(">Hello</text>"));
}

#[test]
fn times_italic_keeps_italic_keyword() {
    let svg = render(200, 100, |d| {
        d.set_font(10, 12); // Times italic
        d.draw_text("serif", 0, 0).unwrap();
    });
    assert!(svg.contains("font-family=\"Times\""));
    assert!(svg.contains("font-style=\"italic\""));
}

#[test]
fn helvetica_italic_becomes_oblique() {
    let svg = render(200, 100, |d| {
        d.set_font(2, 12);
        d.draw_text("slanted", 0, 0).unwrap();
    });
    assert!(svg.contains("font-style=\"oblique\""));
}

#[test]
fn rotated_text_negates_the_angle() {
    let svg = render(200, 200, |d| {
        d.draw_text_rotated("up", 30, 40, 90).unwrap();
    });
    assert!(svg.contains("<g transform=\"translate(30,40) rotate(-90)\">"));
    assert!(svg.contains("<text x=\"0\" y=\"0\""));
    assert!(svg.contains("</g>"));
}

#[test]
fn reserved_markup_characters_are_escaped() {
    let svg = render(200, 100, |d| {
        d.draw_text("a<b & c>d", 0, 0).unwrap();
    });
    assert!(svg.contains(">a&lt;b &amp; c&gt;d</text>"));
    assert!(!svg.contains(">a<b"));
}

#[test]
fn empty_text_is_a_no_op() {
    let svg = render(100, 100, |d| {
        d.draw_text("", 10, 10).unwrap();
        d.draw_text_rotated("", 10, 10, 45).unwrap();
    });
    assert!(!svg.contains("<text"));
    assert!(!svg.contains("<g "));
}

#[test]
fn metrics_are_proxied_from_the_display_driver() {
    let mut surface = SvgSurface::new(100, 100, Vec::new()).unwrap();
    let driver = surface.driver_mut();
    driver.set_font(8, 15); // Times
    assert_eq!(driver.text_width("abc"), 3.0 * 15.0 * 0.48);
    assert_eq!(driver.line_height(), 18);
    assert_eq!(driver.descent(), 3);
}

#[test]
fn write_failures_are_reported() {
    struct FailingSink;
    impl std::io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    assert!(SvgSurface::new(10, 10, FailingSink).is_err());
}
