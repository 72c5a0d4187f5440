//! Font model
//!
//! The toolkit addresses fonts by a small integer index: the index divided by
//! four selects the family, and the low two bits select bold/italic variants.

/// A raw toolkit font index
pub type FontIndex = i32;

/// The three families the toolkit ships with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
    Times,
}

impl FontFamily {
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Courier => "Courier",
            FontFamily::Times => "Times",
        }
    }
}

/// A resolved font: family plus weight/slant variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Font {
    pub family: FontFamily,
    pub bold: bool,
    pub italic: bool,
}

impl Font {
    /// Derive a font from a raw toolkit index.
    ///
    /// `index / 4` selects the family (0 Helvetica, 1 Courier, anything else
    /// Times); `index % 4` bit 0 sets bold, bit 1 sets italic.
    pub fn from_index(index: FontIndex) -> Self {
        let family = match index / 4 {
            0 => FontFamily::Helvetica,
            1 => FontFamily::Courier,
            _ => FontFamily::Times,
        };
        let variant = index % 4;
        Self {
            family,
            bold: variant == 1 || variant == 3,
            italic: variant >= 2,
        }
    }

    /// The slant keyword for this font, if any.
    ///
    /// Times carries a true italic face; the other families only have oblique
    /// variants.
    pub fn slant(&self) -> Option<&'static str> {
        if !self.italic {
            return None;
        }
        Some(match self.family {
            FontFamily::Times => "italic",
            _ => "oblique",
        })
    }
}
