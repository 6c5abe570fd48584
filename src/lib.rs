//! canvas-cleave emulates the browser Canvas/Image/ImageBitmap surface on
//! top of an in-memory pixel buffer, so code written against the 2D canvas
//! API can run without a browser.
//!
//! # Layers
//!
//! 1. **Bitmap engine** ([`ImageBitmap`]): parallel RGB and alpha planes,
//!    coordinate-addressed accessors, straight-alpha compositing,
//!    `drawImage` region copies and `getImageData`/`putImageData`.
//! 2. **Facade** ([`Canvas`], [`Image`], [`CanvasRenderingContext2d`]):
//!    canvas-shaped objects that delegate every pixel operation to the engine.
//! 3. **Codec bridge** ([`decode_raw_image`], [`save_raw_image`]): converts
//!    between encoded files and [`RawImage`] through the `image` crate.
//!
//! Geometry follows Canvas2D; two things deliberately do not: draws never
//! rescale (mismatched rectangles are an error) and alpha is never
//! premultiplied.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bitmap;
mod codec;
mod compose;
mod context;
mod elements;
mod foundation;

pub use bitmap::blend::{Rgb8, over};
pub use bitmap::image_bitmap::{BitmapInput, ImageBitmap};
pub use bitmap::image_data::ImageData;
pub use bitmap::raw::{RawImage, RawImageInfo};
pub use codec::{
    decode_raw_image, encode_png, load_raw_image, raw_from_dynamic, raw_to_dynamic,
    save_raw_image,
};
pub use compose::{VerticalAlign, overlay, tile_right};
pub use context::bitmap::ImageBitmapRenderingContext;
pub use context::canvas2d::CanvasRenderingContext2d;
pub use elements::canvas::{
    Canvas, ContextKind, ContextOptions, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    RenderingContext,
};
pub use elements::document::{Document, create_canvas};
pub use elements::image::{Dimension, Image};
pub use elements::source::CanvasImageSource;
pub use foundation::error::{CleaveError, CleaveResult};
pub use foundation::geometry::{DirtyRect, MAX_BITMAP_BYTES, Rect, dimension_from_f64};
