//! SVG drawing-surface session

use std::io::Write;

use quill_draw::Result;

use crate::driver::SvgDriver;

/// One SVG rendering session.
///
/// Creation writes the document header sized to the canvas extents; the
/// session is then driven through [`SvgSurface::driver_mut`] by a bounded
/// sequence of draw calls and torn down with [`SvgSurface::finish`], which
/// emits the closing tag and returns the sink. Surfaces are never reused.
pub struct SvgSurface<W: Write> {
    driver: Option<SvgDriver<W>>,
    width: i32,
    height: i32,
}

impl<W: Write> SvgSurface<W> {
    /// Open a session over `sink`, emitting the header for a canvas of
    /// `width` x `height` pixels.
    pub fn new(width: i32, height: i32, mut sink: W) -> Result<Self> {
        write!(
            sink,
            "<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"no\"?>\n\
             <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n\
             \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
             <svg width=\"{w}px\" height=\"{h}px\" viewBox=\"0 0 {w} {h}\"\n\
             xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n",
            w = width,
            h = height,
        )?;
        tracing::debug!(width, height, "svg session opened");
        Ok(Self {
            driver: Some(SvgDriver::new(sink)),
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn driver(&self) -> &SvgDriver<W> {
        self.driver.as_ref().expect("session already finished")
    }

    pub fn driver_mut(&mut self) -> &mut SvgDriver<W> {
        self.driver.as_mut().expect("session already finished")
    }

    /// Close the document and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        let driver = self.driver.take().expect("session already finished");
        let sink = driver.close()?;
        tracing::debug!("svg session closed");
        Ok(sink)
    }
}

impl<W: Write> Drop for SvgSurface<W> {
    fn drop(&mut self) {
        // Best-effort close for abandoned sessions; errors have nowhere to go
        // here, callers that care use finish().
        if let Some(driver) = self.driver.take() {
            let _ = driver.close();
        }
    }
}
