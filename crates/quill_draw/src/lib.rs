//! Quill Drawing-Driver Abstraction
//!
//! This crate defines the fixed capability set a Quill rendering backend must
//! implement, plus the state types shared by all backends:
//!
//! - **`DrawDriver`**: the trait every backend implements (rects, lines, text,
//!   pen/font state, metrics queries)
//! - **Pen state**: current color, stroke width, line cap, font
//! - **`DisplayDriver`**: the minimal screen-backed variant; also the owner of
//!   the toolkit's font-metrics model that other backends proxy to
//!
//! Backends are selected at surface-creation time; there is no inheritance
//! hierarchy, only trait dispatch.

pub mod color;
pub mod display;
pub mod driver;
pub mod error;
pub mod font;
pub mod line_style;

pub use color::{Color, ColorIndex};
pub use display::DisplayDriver;
pub use driver::{DrawDriver, PenState};
pub use error::{DrawError, Result};
pub use font::{Font, FontFamily, FontIndex};
pub use line_style::{LineCap, CAP_ROUND, CAP_SQUARE};
