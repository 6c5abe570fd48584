use crate::{
    bitmap::raw::{self, RGB24, RawImage},
    foundation::{
        error::{CleaveError, CleaveResult},
        geometry::{MAX_BITMAP_BYTES, dimension_from_f64},
    },
};

const RGB_BLACK: [u8; 3] = [0, 0, 0];

/// Mutable RGB + alpha pixel buffer backing canvases and images.
///
/// Pixels live in two parallel row-major planes: 3 bytes per pixel of RGB
/// and 1 byte per pixel of alpha. Coordinates are unbounded: reads outside
/// the bitmap return black (opaque when alpha is disabled, transparent when
/// enabled) and writes outside it are dropped.
///
/// A bitmap is owned by exactly one caller at a time; every operation takes
/// `&self` or `&mut self` and none of them block or allocate beyond the
/// planes themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBitmap {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) rgb: Vec<u8>,
    pub(crate) alpha: Vec<u8>,
    pub(crate) has_alpha: bool,
    closed: bool,
}

/// Inputs accepted wherever a bitmap is adopted or built.
#[derive(Clone, Debug)]
pub enum BitmapInput {
    /// Unpack a raw image into a fresh bitmap.
    Raw(RawImage),
    /// Take ownership of an existing bitmap.
    Bitmap(ImageBitmap),
}

impl From<RawImage> for BitmapInput {
    fn from(value: RawImage) -> Self {
        Self::Raw(value)
    }
}

impl From<ImageBitmap> for BitmapInput {
    fn from(value: ImageBitmap) -> Self {
        Self::Bitmap(value)
    }
}

impl Default for ImageBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBitmap {
    /// Empty 0x0 bitmap with the alpha channel enabled.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            rgb: Vec::new(),
            alpha: Vec::new(),
            has_alpha: true,
            closed: false,
        }
    }

    /// Build a bitmap from a 1-4 channel raw image.
    pub fn from_raw(raw: &RawImage) -> CleaveResult<Self> {
        let planes = raw::unpack(raw)?;
        Ok(Self {
            width: planes.width,
            height: planes.height,
            rgb: planes.rgb,
            alpha: planes.alpha,
            has_alpha: planes.has_alpha,
            closed: false,
        })
    }

    /// Build from a raw image or adopt an existing bitmap.
    pub fn from_input(input: impl Into<BitmapInput>) -> CleaveResult<Self> {
        match input.into() {
            BitmapInput::Raw(raw) => Self::from_raw(&raw),
            BitmapInput::Bitmap(bitmap) => Ok(bitmap),
        }
    }

    /// Width in pixels; 0 once closed.
    pub fn width(&self) -> u32 {
        if self.closed { 0 } else { self.width }
    }

    /// Height in pixels; 0 once closed.
    pub fn height(&self) -> u32 {
        if self.closed { 0 } else { self.height }
    }

    /// Mark the bitmap as disposed. It reports a 0x0 size afterwards, so
    /// reads return sentinels and writes are dropped.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether [`ImageBitmap::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the alpha channel is enabled.
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Turn the alpha channel on. Existing plane contents become visible again.
    pub fn enable_alpha(&mut self) {
        self.has_alpha = true;
    }

    /// Turn the alpha channel off and reset every alpha sample to opaque.
    pub fn disable_alpha(&mut self) {
        self.has_alpha = false;
        self.alpha.fill(255);
    }

    /// Enable or disable alpha; see [`ImageBitmap::disable_alpha`].
    pub fn set_alpha_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable_alpha();
        } else {
            self.disable_alpha();
        }
    }

    /// Backing RGB plane, 3 bytes per pixel.
    pub fn rgb_data(&self) -> &[u8] {
        &self.rgb
    }

    /// Backing alpha plane, 1 byte per pixel.
    pub fn alpha_data(&self) -> &[u8] {
        &self.alpha
    }

    /// Resize to `width` x `height`, discarding all content.
    ///
    /// Negative, NaN and infinite inputs clamp to 0 and fractions truncate.
    /// Calling with the current dimensions is a no-op. Any other size leaves
    /// black pixels, transparent when alpha is enabled.
    pub fn resize(&mut self, width: f64, height: f64) -> CleaveResult<()> {
        let w = dimension_from_f64(width);
        let h = dimension_from_f64(height);

        let too_large = || CleaveError::TooLarge {
            width: w,
            height: h,
            limit: MAX_BITMAP_BYTES,
        };
        let size = w
            .checked_mul(h)
            .filter(|px| px.checked_mul(4).is_some_and(|b| b <= MAX_BITMAP_BYTES))
            .ok_or_else(too_large)?;
        let new_w = u32::try_from(w).map_err(|_| too_large())?;
        let new_h = u32::try_from(h).map_err(|_| too_large())?;
        let size = size as usize;

        if new_w == self.width && new_h == self.height {
            return Ok(());
        }

        let fill_alpha = if self.has_alpha { 0 } else { 255 };
        if size == self.alpha.len() {
            self.rgb.fill(0);
            self.alpha.fill(fill_alpha);
        } else {
            self.rgb = vec![0; size * RGB24];
            self.alpha = vec![fill_alpha; size];
        }
        self.width = new_w;
        self.height = new_h;
        Ok(())
    }

    /// Plane index of an in-bounds pixel, or `None` when outside the bitmap.
    pub(crate) fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// RGB at `(x, y)`; black outside the bitmap.
    pub fn get_rgb(&self, x: i64, y: i64) -> [u8; 3] {
        match self.index(x, y) {
            Some(i) => {
                let o = i * RGB24;
                [self.rgb[o], self.rgb[o + 1], self.rgb[o + 2]]
            }
            None => RGB_BLACK,
        }
    }

    /// Alpha at `(x, y)`. Always 255 with alpha disabled; 0 outside the
    /// bitmap when alpha is enabled.
    pub fn get_alpha(&self, x: i64, y: i64) -> u8 {
        if !self.has_alpha {
            return 255;
        }
        match self.index(x, y) {
            Some(i) => self.alpha[i],
            None => 0,
        }
    }

    /// Write RGB at `(x, y)`. `rgb` must hold exactly 3 components.
    pub fn set_rgb(&mut self, x: i64, y: i64, rgb: &[u8]) -> CleaveResult<()> {
        let rgb: [u8; 3] = rgb
            .try_into()
            .map_err(|_| CleaveError::component_count(3, rgb.len()))?;
        self.put_rgb(x, y, rgb);
        Ok(())
    }

    /// Scalar form of [`ImageBitmap::set_rgb`].
    pub fn set_rgb_components(&mut self, x: i64, y: i64, r: u8, g: u8, b: u8) {
        self.put_rgb(x, y, [r, g, b]);
    }

    /// Write alpha at `(x, y)`; ignored when alpha is disabled.
    pub fn set_alpha(&mut self, x: i64, y: i64, alpha: u8) {
        if !self.has_alpha {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.alpha[i] = alpha;
        }
    }

    pub(crate) fn put_rgb(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        if let Some(i) = self.index(x, y) {
            let o = i * RGB24;
            self.rgb[o..o + RGB24].copy_from_slice(&rgb);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/image_bitmap.rs"]
mod tests;
