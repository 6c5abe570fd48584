use crate::{
    bitmap::image_data::ImageData,
    elements::{canvas::Canvas, source::CanvasImageSource},
    foundation::{
        error::CleaveResult,
        geometry::{DirtyRect, Rect},
    },
};

/// 2D drawing context. Every call delegates to the canvas bitmap.
///
/// The context borrows its canvas mutably, so a canvas cannot be drawn
/// onto itself; copy it first.
#[derive(Debug)]
pub struct CanvasRenderingContext2d<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> CanvasRenderingContext2d<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }

    /// The canvas this context draws into.
    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }

    /// Draw the whole of `image` with its top-left corner at `(dx, dy)`.
    pub fn draw_image<'s>(
        &mut self,
        image: impl Into<CanvasImageSource<'s>>,
        dx: i64,
        dy: i64,
    ) -> CleaveResult<()> {
        let source = image.into().bitmap();
        self.canvas.image_bitmap_mut().draw_image(source, dx, dy)
    }

    /// Draw the `src` region of `image` into the same-sized `dst` region.
    pub fn draw_image_region<'s>(
        &mut self,
        image: impl Into<CanvasImageSource<'s>>,
        src: Rect,
        dst: Rect,
    ) -> CleaveResult<()> {
        let source = image.into().bitmap();
        self.canvas
            .image_bitmap_mut()
            .draw_image_region(source, src, dst)
    }

    /// See [`ImageBitmap::get_image_data`](crate::ImageBitmap::get_image_data).
    pub fn get_image_data(&self, sx: i64, sy: i64, sw: i64, sh: i64) -> CleaveResult<ImageData> {
        self.canvas.image_bitmap().get_image_data(sx, sy, sw, sh)
    }

    /// Write all of `data` at `(dx, dy)`.
    pub fn put_image_data(&mut self, data: &ImageData, dx: f64, dy: f64) -> CleaveResult<()> {
        self.canvas
            .image_bitmap_mut()
            .put_image_data(data, dx, dy, None)
    }

    /// Write the `dirty` part of `data`, keeping its offset relative to `(dx, dy)`.
    pub fn put_image_data_dirty(
        &mut self,
        data: &ImageData,
        dx: f64,
        dy: f64,
        dirty: DirtyRect,
    ) -> CleaveResult<()> {
        self.canvas
            .image_bitmap_mut()
            .put_image_data(data, dx, dy, Some(dirty))
    }

    /// Blank image data of the given size.
    pub fn create_image_data(&self, width: u32, height: u32) -> ImageData {
        ImageData::new(width, height)
    }

    /// Blank image data with the dimensions of `data`.
    pub fn create_image_data_like(&self, data: &ImageData) -> ImageData {
        ImageData::new(data.width(), data.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/canvas2d.rs"]
mod tests;
