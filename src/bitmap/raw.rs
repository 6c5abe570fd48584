use crate::foundation::error::{CleaveError, CleaveResult};

pub(crate) const GRAY8: usize = 1;
pub(crate) const GRAY8A: usize = 2;
pub(crate) const RGB24: usize = 3;
pub(crate) const RGB32: usize = 4;

/// Geometry and layout metadata for a [`RawImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawImageInfo {
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Interleaved samples per pixel: gray, gray+alpha, RGB or RGBA.
    pub channels: u8,
    /// Always `false` for images produced here; `true` is rejected on input.
    #[serde(default)]
    pub premultiplied: bool,
    /// Optional byte length of `data`, cross-checked on construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

impl RawImageInfo {
    /// Metadata for a tightly packed, straight-alpha image.
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        Self {
            width: i64::from(width),
            height: i64::from(height),
            channels,
            premultiplied: false,
            size: None,
        }
    }
}

/// Packed, uncompressed pixels plus metadata. This is the interchange format
/// between external decoders/encoders and [`ImageBitmap`](crate::ImageBitmap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    /// Geometry and layout.
    pub info: RawImageInfo,
    /// Packed samples, row-major.
    pub data: Vec<u8>,
}

impl RawImage {
    /// Pair metadata with its data; validated when consumed.
    pub fn new(info: RawImageInfo, data: Vec<u8>) -> Self {
        Self { info, data }
    }
}

/// Planes produced by unpacking a validated raw image.
pub(crate) struct UnpackedPlanes {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Vec<u8>,
    pub has_alpha: bool,
}

pub(crate) fn validate(raw: &RawImage) -> CleaveResult<(u32, u32)> {
    let RawImageInfo {
        width,
        height,
        channels,
        premultiplied,
        size,
    } = raw.info;

    if width < 0 || height < 0 {
        return Err(CleaveError::InvalidDimensions { width, height });
    }

    let expected = (width as u64)
        .checked_mul(height as u64)
        .and_then(|px| px.checked_mul(u64::from(channels)))
        .and_then(|n| usize::try_from(n).ok());
    match expected {
        Some(expected) if expected == raw.data.len() => {}
        Some(expected) => return Err(CleaveError::size_mismatch(expected, raw.data.len())),
        None => return Err(CleaveError::size_mismatch(usize::MAX, raw.data.len())),
    }

    if let Some(declared) = size
        && declared != raw.data.len()
    {
        return Err(CleaveError::SizeMetadataMismatch {
            declared,
            actual: raw.data.len(),
        });
    }

    if premultiplied {
        return Err(CleaveError::PremultipliedUnsupported);
    }

    if !(1..=4).contains(&channels) {
        return Err(CleaveError::UnsupportedChannelCount(channels));
    }

    let w = u32::try_from(width).map_err(|_| too_large(width, height))?;
    let h = u32::try_from(height).map_err(|_| too_large(width, height))?;
    Ok((w, h))
}

fn too_large(width: i64, height: i64) -> CleaveError {
    CleaveError::TooLarge {
        width: width as u64,
        height: height as u64,
        limit: crate::foundation::geometry::MAX_BITMAP_BYTES,
    }
}

/// Validate `raw` and split it into an RGB plane and an alpha plane.
pub(crate) fn unpack(raw: &RawImage) -> CleaveResult<UnpackedPlanes> {
    let (width, height) = validate(raw)?;
    let channels = usize::from(raw.info.channels);
    let size = raw.data.len() / channels;

    let mut rgb = vec![0u8; size * RGB24];
    let mut alpha = vec![255u8; size];

    let has_alpha = match channels {
        GRAY8 => {
            for (px, &g) in rgb.chunks_exact_mut(RGB24).zip(&raw.data) {
                px.fill(g);
            }
            false
        }
        GRAY8A => {
            for ((px, a), src) in rgb
                .chunks_exact_mut(RGB24)
                .zip(alpha.iter_mut())
                .zip(raw.data.chunks_exact(GRAY8A))
            {
                px.fill(src[0]);
                *a = src[1];
            }
            true
        }
        RGB24 => {
            rgb.copy_from_slice(&raw.data);
            false
        }
        RGB32 => {
            for ((px, a), src) in rgb
                .chunks_exact_mut(RGB24)
                .zip(alpha.iter_mut())
                .zip(raw.data.chunks_exact(RGB32))
            {
                px.copy_from_slice(&src[..RGB24]);
                *a = src[3];
            }
            true
        }
        n => return Err(CleaveError::UnsupportedChannelCount(n as u8)),
    };

    Ok(UnpackedPlanes {
        width,
        height,
        rgb,
        alpha,
        has_alpha,
    })
}

/// Interleave planes back into a packed 3- or 4-channel raw image.
pub(crate) fn pack(width: u32, height: u32, rgb: &[u8], alpha: Option<&[u8]>) -> RawImage {
    let channels = if alpha.is_some() { RGB32 } else { RGB24 };
    let data = match alpha {
        None => rgb.to_vec(),
        Some(alpha) => {
            let mut out = Vec::with_capacity(alpha.len() * RGB32);
            for (px, &a) in rgb.chunks_exact(RGB24).zip(alpha) {
                out.extend_from_slice(px);
                out.push(a);
            }
            out
        }
    };

    let mut info = RawImageInfo::new(width, height, channels as u8);
    info.size = Some(data.len());
    RawImage { info, data }
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/raw.rs"]
mod tests;
