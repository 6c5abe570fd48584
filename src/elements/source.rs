use crate::{
    bitmap::image_bitmap::ImageBitmap,
    elements::{canvas::Canvas, image::Image},
};

/// Anything that can be drawn with `drawImage`.
#[derive(Clone, Copy, Debug)]
pub enum CanvasImageSource<'a> {
    /// A canvas element.
    Canvas(&'a Canvas),
    /// An image element.
    Image(&'a Image),
    /// A bare bitmap.
    Bitmap(&'a ImageBitmap),
}

impl<'a> CanvasImageSource<'a> {
    /// The pixels that get drawn.
    pub fn bitmap(self) -> &'a ImageBitmap {
        match self {
            Self::Canvas(c) => c.image_bitmap(),
            Self::Image(i) => i.image_bitmap(),
            Self::Bitmap(b) => b,
        }
    }

    /// Intrinsic size: natural size for images, bitmap size otherwise.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Image(i) => (i.natural_width(), i.natural_height()),
            other => {
                let bitmap = other.bitmap();
                (bitmap.width(), bitmap.height())
            }
        }
    }
}

impl<'a> From<&'a Canvas> for CanvasImageSource<'a> {
    fn from(value: &'a Canvas) -> Self {
        Self::Canvas(value)
    }
}

impl<'a> From<&'a Image> for CanvasImageSource<'a> {
    fn from(value: &'a Image) -> Self {
        Self::Image(value)
    }
}

impl<'a> From<&'a ImageBitmap> for CanvasImageSource<'a> {
    fn from(value: &'a ImageBitmap) -> Self {
        Self::Bitmap(value)
    }
}
