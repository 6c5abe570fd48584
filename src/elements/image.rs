use crate::{
    bitmap::{
        image_bitmap::{BitmapInput, ImageBitmap},
        raw::RawImage,
    },
    foundation::error::CleaveResult,
};

/// Display attribute that [`Image::remove_attribute`] can clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// The `width` attribute.
    Width,
    /// The `height` attribute.
    Height,
}

/// Image element: a decoded bitmap plus optional display width/height.
///
/// When only one display dimension is set, the other follows the bitmap's
/// aspect ratio. Natural dimensions always come from the bitmap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    bitmap: ImageBitmap,
    width: Option<u32>,
    height: Option<u32>,
    /// Source locator; kept as metadata only, nothing is loaded from it.
    pub src: String,
}

impl Image {
    /// Image with an empty bitmap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Image over a raw image or an existing bitmap.
    pub fn from_input(input: impl Into<BitmapInput>) -> CleaveResult<Self> {
        Ok(Self {
            bitmap: ImageBitmap::from_input(input)?,
            ..Self::default()
        })
    }

    /// Images are decoded before construction, so they are always complete.
    pub fn complete(&self) -> bool {
        true
    }

    /// Bitmap width.
    pub fn natural_width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Bitmap height.
    pub fn natural_height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Natural width over natural height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.bitmap.width()) / f64::from(self.bitmap.height())
    }

    /// Display width: the attribute, else inferred from the height, else natural.
    pub fn width(&self) -> u32 {
        match (self.width, self.height) {
            (Some(w), _) => w,
            (None, Some(h)) => (f64::from(h) * self.aspect_ratio()).round() as u32,
            (None, None) => self.bitmap.width(),
        }
    }

    /// Display height: the attribute, else inferred from the width, else natural.
    pub fn height(&self) -> u32 {
        match (self.height, self.width) {
            (Some(h), _) => h,
            (None, Some(w)) => (f64::from(w) / self.aspect_ratio()).round() as u32,
            (None, None) => self.bitmap.height(),
        }
    }

    /// Set the width attribute. Negative, NaN and infinite values become 0.
    pub fn set_width(&mut self, value: f64) {
        self.width = Some(coerce_attribute(value));
    }

    /// Set the height attribute; see [`Image::set_width`].
    pub fn set_height(&mut self, value: f64) {
        self.height = Some(coerce_attribute(value));
    }

    /// Clear a display attribute.
    pub fn remove_attribute(&mut self, attr: Dimension) {
        match attr {
            Dimension::Width => self.width = None,
            Dimension::Height => self.height = None,
        }
    }

    /// Backing bitmap.
    pub fn image_bitmap(&self) -> &ImageBitmap {
        &self.bitmap
    }

    /// Replace the backing bitmap, returning the previous one.
    pub fn set_image_bitmap(&mut self, bitmap: ImageBitmap) -> ImageBitmap {
        std::mem::replace(&mut self.bitmap, bitmap)
    }

    /// Export the bitmap pixels.
    pub fn to_raw_image(&self) -> RawImage {
        self.bitmap.to_raw_image()
    }
}

// Negative, NaN and infinite values become 0.
fn coerce_attribute(value: f64) -> u32 {
    if value < 0.0 || !value.is_finite() {
        0
    } else {
        value.trunc() as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/elements/image.rs"]
mod tests;
