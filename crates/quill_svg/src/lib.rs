//! Quill SVG Surface
//!
//! Redirects the toolkit's drawing capability set into an SVG document instead
//! of the screen. A surface owns its output sink for the lifetime of one
//! rendering session:
//!
//! ```rust
//! use quill_draw::{Color, DrawDriver};
//! use quill_svg::SvgSurface;
//!
//! let mut surface = SvgSurface::new(340, 180, Vec::new()).unwrap();
//! let driver = surface.driver_mut();
//! driver.set_color(Color::RED);
//! driver.fill_rect(0, 0, 340, 180).unwrap();
//! let svg = surface.finish().unwrap();
//! assert!(String::from_utf8(svg).unwrap().contains("</svg>"));
//! ```
//!
//! Each call appends one element embedding the pen state at call time; nothing
//! is buffered or read back. Font metrics are proxied to the display driver so
//! the toolkit's own metrics stay authoritative.

pub mod driver;
pub mod escape;
pub mod surface;

pub use driver::SvgDriver;
pub use surface::SvgSurface;
