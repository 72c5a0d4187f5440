//! Line style flags and cap derivation

/// Round line-cap flag bit
pub const CAP_ROUND: u32 = 0x0200;
/// Square line-cap flag bit
pub const CAP_SQUARE: u32 = 0x0400;

/// Line cap style, as understood by every backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// Derive the cap from raw style flags.
    ///
    /// Square wins over round when both bits are set; with neither bit the
    /// cap falls back to butt.
    pub fn from_flags(flags: u32) -> Self {
        if flags & CAP_SQUARE != 0 {
            LineCap::Square
        } else if flags & CAP_ROUND != 0 {
            LineCap::Round
        } else {
            LineCap::Butt
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Normalize a requested stroke width.
///
/// Width 0 means "thinnest visible line"; vector output has no hairline
/// concept, so it renders as 1.
pub fn effective_width(width: i32) -> i32 {
    if width == 0 {
        1
    } else {
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_takes_precedence_over_round() {
        assert_eq!(LineCap::from_flags(CAP_SQUARE | CAP_ROUND), LineCap::Square);
        assert_eq!(LineCap::from_flags(CAP_SQUARE), LineCap::Square);
        assert_eq!(LineCap::from_flags(CAP_ROUND), LineCap::Round);
        assert_eq!(LineCap::from_flags(0), LineCap::Butt);
    }

    #[test]
    fn zero_width_normalizes_to_one() {
        assert_eq!(effective_width(0), 1);
        assert_eq!(effective_width(1), 1);
        assert_eq!(effective_width(7), 7);
    }
}
