use crate::elements::canvas::Canvas;

/// Minimal document exposing the one element factory canvas code relies on.
#[derive(Clone, Copy, Debug, Default)]
pub struct Document;

impl Document {
    /// A new document.
    pub fn new() -> Self {
        Self
    }

    /// New empty canvas.
    pub fn create_canvas(&self) -> Canvas {
        Canvas::new()
    }
}

/// Shorthand for `Document::new().create_canvas()`.
pub fn create_canvas() -> Canvas {
    Document.create_canvas()
}
