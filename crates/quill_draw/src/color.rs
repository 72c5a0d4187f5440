//! Color types and the toolkit colormap

/// RGB color with u8 components, as carried in pen state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale color
    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

/// An index into the toolkit colormap
///
/// Widgets commonly carry indexed colors; backends resolve them to RGB through
/// [`ColorIndex::resolve`] before emitting anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorIndex(pub u8);

impl ColorIndex {
    /// Resolve an indexed color against the toolkit colormap.
    ///
    /// Layout: indices 0-7 are the standard palette, 8-31 are reserved and
    /// resolve to black, 32-55 are a 24-step gray ramp, and 56-255 form a
    /// 5x8x5 color cube.
    pub fn resolve(self) -> Color {
        match self.0 {
            0 => Color::BLACK,
            1 => Color::RED,
            2 => Color::GREEN,
            3 => Color::new(255, 255, 0),
            4 => Color::BLUE,
            5 => Color::new(255, 0, 255),
            6 => Color::new(0, 255, 255),
            7 => Color::WHITE,
            8..=31 => Color::BLACK,
            32..=55 => {
                let step = self.0 - 32;
                Color::gray((step as u16 * 255 / 23) as u8)
            }
            idx => {
                let idx = idx - 56;
                let r = idx / 40;
                let g = (idx / 5) % 8;
                let b = idx % 5;
                Color::new(
                    (r as u16 * 255 / 4) as u8,
                    (g as u16 * 255 / 7) as u8,
                    (b as u16 * 255 / 4) as u8,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_resolves() {
        assert_eq!(ColorIndex(0).resolve(), Color::BLACK);
        assert_eq!(ColorIndex(1).resolve(), Color::RED);
        assert_eq!(ColorIndex(7).resolve(), Color::WHITE);
    }

    #[test]
    fn gray_ramp_spans_black_to_white() {
        assert_eq!(ColorIndex(32).resolve(), Color::BLACK);
        assert_eq!(ColorIndex(55).resolve(), Color::WHITE);
        let mid = ColorIndex(44).resolve();
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }

    #[test]
    fn reserved_indices_fall_back_to_black() {
        for idx in 8..=31 {
            assert_eq!(ColorIndex(idx).resolve(), Color::BLACK);
        }
    }

    #[test]
    fn cube_corners() {
        assert_eq!(ColorIndex(56).resolve(), Color::BLACK);
        assert_eq!(ColorIndex(255).resolve(), Color::WHITE);
    }
}
