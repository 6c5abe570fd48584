use crate::{
    bitmap::{
        image_bitmap::{BitmapInput, ImageBitmap},
        raw::RawImage,
    },
    context::{bitmap::ImageBitmapRenderingContext, canvas2d::CanvasRenderingContext2d},
    foundation::error::CleaveResult,
};

/// Width a canvas falls back to for negative input.
pub const DEFAULT_CANVAS_WIDTH: u32 = 0;
/// Height a canvas falls back to for negative input.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 0;

/// Rendering context flavours a canvas can hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ContextKind {
    /// `"2d"`: [`CanvasRenderingContext2d`].
    #[serde(rename = "2d")]
    TwoD,
    /// `"bitmaprenderer"`: [`ImageBitmapRenderingContext`].
    #[serde(rename = "bitmaprenderer")]
    BitmapRenderer,
}

/// Options accepted when requesting a 2D context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Enable or disable the alpha channel of the canvas bitmap.
    pub alpha: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self { alpha: true }
    }
}

/// A context returned by [`Canvas::get_context`].
#[derive(Debug)]
pub enum RenderingContext<'a> {
    /// 2D drawing context.
    TwoD(CanvasRenderingContext2d<'a>),
    /// Bitmap renderer context.
    BitmapRenderer(ImageBitmapRenderingContext<'a>),
}

/// Canvas element backed by a single [`ImageBitmap`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Canvas {
    bitmap: ImageBitmap,
}

impl Canvas {
    /// Empty 0x0 canvas with alpha.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank, transparent canvas of the given size.
    pub fn with_size(width: u32, height: u32) -> CleaveResult<Self> {
        let mut bitmap = ImageBitmap::new();
        bitmap.resize(f64::from(width), f64::from(height))?;
        Ok(Self { bitmap })
    }

    /// Canvas over a raw image or an existing bitmap.
    pub fn from_input(input: impl Into<BitmapInput>) -> CleaveResult<Self> {
        Ok(Self {
            bitmap: ImageBitmap::from_input(input)?,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Set the width, discarding content. Negative values fall back to the
    /// default, infinities become 0 and fractions truncate.
    pub fn set_width(&mut self, value: f64) -> CleaveResult<()> {
        let width = coerce_canvas_dimension(value, DEFAULT_CANVAS_WIDTH);
        self.bitmap.resize(width, f64::from(self.bitmap.height()))
    }

    /// Set the height; see [`Canvas::set_width`].
    pub fn set_height(&mut self, value: f64) -> CleaveResult<()> {
        let height = coerce_canvas_dimension(value, DEFAULT_CANVAS_HEIGHT);
        self.bitmap.resize(f64::from(self.bitmap.width()), height)
    }

    /// Context of the requested kind. `options` only affects 2D contexts.
    pub fn get_context(
        &mut self,
        kind: ContextKind,
        options: Option<ContextOptions>,
    ) -> RenderingContext<'_> {
        match kind {
            ContextKind::TwoD => RenderingContext::TwoD(self.context_2d(options)),
            ContextKind::BitmapRenderer => RenderingContext::BitmapRenderer(self.bitmap_renderer()),
        }
    }

    /// 2D context over this canvas. `options.alpha` toggles the bitmap's
    /// alpha channel; disabling it resets every pixel to opaque.
    pub fn context_2d(&mut self, options: Option<ContextOptions>) -> CanvasRenderingContext2d<'_> {
        if let Some(options) = options {
            self.bitmap.set_alpha_enabled(options.alpha);
        }
        CanvasRenderingContext2d::new(self)
    }

    /// Bitmap renderer context over this canvas.
    pub fn bitmap_renderer(&mut self) -> ImageBitmapRenderingContext<'_> {
        ImageBitmapRenderingContext::new(self)
    }

    /// Backing bitmap.
    pub fn image_bitmap(&self) -> &ImageBitmap {
        &self.bitmap
    }

    /// Backing bitmap, mutably.
    pub fn image_bitmap_mut(&mut self) -> &mut ImageBitmap {
        &mut self.bitmap
    }

    /// Replace the backing bitmap, returning the previous one.
    pub fn set_image_bitmap(&mut self, bitmap: ImageBitmap) -> ImageBitmap {
        std::mem::replace(&mut self.bitmap, bitmap)
    }

    /// Export the current pixels.
    pub fn to_raw_image(&self) -> RawImage {
        self.bitmap.to_raw_image()
    }
}

fn coerce_canvas_dimension(value: f64, default: u32) -> f64 {
    if value < 0.0 {
        f64::from(default)
    } else if value.is_infinite() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/elements/canvas.rs"]
mod tests;
