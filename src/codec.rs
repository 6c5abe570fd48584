//! Bridge between encoded image files and [`RawImage`].
//!
//! Decoding and encoding are delegated to the `image` crate; the bitmap
//! engine itself only ever sees packed raw pixels.

use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use image::{DynamicImage, ImageBuffer, ImageFormat};

use crate::{
    bitmap::raw::{self, RawImage, RawImageInfo},
    foundation::error::CleaveResult,
};

/// Decode encoded image bytes (PNG, JPEG, ...) into a raw image.
///
/// 8-bit gray, gray+alpha, RGB and RGBA keep their channel layout. Other
/// pixel formats are converted to RGBA8, or RGB8 when they carry no alpha.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_raw_image(bytes: &[u8]) -> CleaveResult<RawImage> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(raw_from_dynamic(img))
}

/// Read and decode an image file.
pub fn load_raw_image(path: impl AsRef<Path>) -> CleaveResult<RawImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_raw_image(&bytes)
}

/// Convert a decoded `image` buffer into a raw image.
pub fn raw_from_dynamic(img: DynamicImage) -> RawImage {
    let (width, height) = (img.width(), img.height());
    let (channels, data) = match img {
        DynamicImage::ImageLuma8(buf) => (1u8, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
        other => (3, other.to_rgb8().into_raw()),
    };
    tracing::debug!(width, height, channels, "decoded raw image");

    let mut info = RawImageInfo::new(width, height, channels);
    info.size = Some(data.len());
    RawImage::new(info, data)
}

/// Wrap a validated raw image as an `image` buffer.
pub fn raw_to_dynamic(raw: &RawImage) -> CleaveResult<DynamicImage> {
    let (width, height) = raw::validate(raw)?;
    let data = raw.data.clone();
    let img = match raw.info.channels {
        1 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        _ => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    };
    Ok(img.context("raw image buffer does not match its dimensions")?)
}

/// Encode a raw image as PNG bytes.
#[tracing::instrument(skip(raw), fields(width = raw.info.width, height = raw.info.height))]
pub fn encode_png(raw: &RawImage) -> CleaveResult<Vec<u8>> {
    let img = raw_to_dynamic(raw)?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write a raw image to `path`, picking the format from the extension.
/// Missing parent directories are created.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_raw_image(path: impl AsRef<Path>, raw: &RawImage) -> CleaveResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let img = raw_to_dynamic(raw)?;
    img.save(path)
        .with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/codec.rs"]
mod tests;
