use crate::{
    bitmap::raw::{RGB32, RawImage, RawImageInfo},
    foundation::error::{CleaveError, CleaveResult},
};

/// Rectangular RGBA8 snapshot, as produced by `getImageData` and consumed by
/// `putImageData`. Always 4 bytes per pixel regardless of the source bitmap's
/// alpha setting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageData {
    /// Transparent black image data of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * RGB32;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wrap an existing RGBA8 buffer. `data` must be `width * height * 4` bytes.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> CleaveResult<Self> {
        let expected = width as usize * height as usize * RGB32;
        if data.len() != expected {
            return Err(CleaveError::size_mismatch(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take the RGBA8 buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// RGBA at `(x, y)`; transparent black outside the image data.
    pub fn pixel(&self, x: i64, y: i64) -> [u8; 4] {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return [0; 4];
        }
        let o = (y as usize * self.width as usize + x as usize) * RGB32;
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    /// Export as a 4-channel raw image.
    pub fn to_raw_image(&self) -> RawImage {
        let mut info = RawImageInfo::new(self.width, self.height, RGB32 as u8);
        info.size = Some(self.data.len());
        RawImage::new(info, self.data.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/image_data.rs"]
mod tests;
