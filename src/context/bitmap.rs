use crate::{bitmap::image_bitmap::ImageBitmap, elements::canvas::Canvas};

/// Context that swaps whole bitmaps into its canvas.
#[derive(Debug)]
pub struct ImageBitmapRenderingContext<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> ImageBitmapRenderingContext<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }

    /// The canvas this context draws into.
    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }

    /// Replace the canvas contents with `bitmap`, taking ownership of it.
    pub fn transfer_from_image_bitmap(&mut self, bitmap: ImageBitmap) {
        self.canvas.set_image_bitmap(bitmap);
    }
}
