use crate::{
    bitmap::{
        image_bitmap::ImageBitmap,
        image_data::ImageData,
        raw::{self, RGB24, RGB32, RawImage},
    },
    foundation::{
        error::{CleaveError, CleaveResult},
        geometry::{DirtyRect, MAX_BITMAP_BYTES, Rect, coordinate_from_f64},
    },
};

impl ImageBitmap {
    /// RGBA at `(x, y)`. Alpha reads 255 when the alpha channel is disabled.
    /// Outside the bitmap this is opaque black without alpha and transparent
    /// black with it.
    pub fn get_pixel(&self, x: i64, y: i64) -> [u8; 4] {
        let [r, g, b] = self.get_rgb(x, y);
        [r, g, b, self.get_alpha(x, y)]
    }

    /// Replace the RGBA pixel at `(x, y)`. `pixel` must hold 4 components;
    /// the alpha component is ignored when the alpha channel is disabled.
    pub fn set_pixel(&mut self, x: i64, y: i64, pixel: &[u8]) -> CleaveResult<()> {
        let pixel: [u8; 4] = pixel
            .try_into()
            .map_err(|_| CleaveError::component_count(4, pixel.len()))?;
        self.put_pixel(x, y, pixel);
        Ok(())
    }

    fn put_pixel(&mut self, x: i64, y: i64, [r, g, b, a]: [u8; 4]) {
        self.put_rgb(x, y, [r, g, b]);
        self.set_alpha(x, y, a);
    }

    /// Read a rectangle of RGBA pixels.
    ///
    /// Negative `width`/`height` select the rectangle extending left/up from
    /// `(sx, sy)`. Pixels outside the bitmap read as sentinels (see
    /// [`ImageBitmap::get_pixel`]).
    pub fn get_image_data(&self, sx: i64, sy: i64, width: i64, height: i64) -> CleaveResult<ImageData> {
        let r = Rect::new(sx, sy, width, height).normalized();
        if r.is_empty() {
            return Err(CleaveError::EmptyRegion);
        }

        let too_large = || CleaveError::TooLarge {
            width: r.width as u64,
            height: r.height as u64,
            limit: MAX_BITMAP_BYTES,
        };
        let w = u32::try_from(r.width).map_err(|_| too_large())?;
        let h = u32::try_from(r.height).map_err(|_| too_large())?;
        if u64::from(w) * u64::from(h) * RGB32 as u64 > MAX_BITMAP_BYTES {
            return Err(too_large());
        }

        let mut data = Vec::with_capacity(w as usize * h as usize * RGB32);
        for y in 0..r.height {
            for x in 0..r.width {
                let px = self.get_pixel(r.x.saturating_add(x), r.y.saturating_add(y));
                data.extend_from_slice(&px);
            }
        }
        ImageData::from_vec(w, h, data)
    }

    /// Write `data` with its origin at `(dx, dy)`, limited to the `dirty`
    /// rectangle of `data` (the whole of it when `None`).
    ///
    /// Pixels are replaced, not blended. Infinite arguments and negative
    /// dirty sizes are rejected; a destination entirely outside the bitmap
    /// is a no-op.
    pub fn put_image_data(
        &mut self,
        data: &ImageData,
        dx: f64,
        dy: f64,
        dirty: Option<DirtyRect>,
    ) -> CleaveResult<()> {
        let dirty = dirty.unwrap_or_else(|| {
            DirtyRect::new(0.0, 0.0, f64::from(data.width()), f64::from(data.height()))
        });

        for (name, value) in [
            ("dx", dx),
            ("dy", dy),
            ("dirtyX", dirty.x),
            ("dirtyY", dirty.y),
            ("dirtyWidth", dirty.width),
            ("dirtyHeight", dirty.height),
        ] {
            if value.is_infinite() {
                return Err(CleaveError::InvalidInfinity(name));
            }
        }
        if dirty.width < 0.0 || dirty.height < 0.0 {
            return Err(CleaveError::NegativeLength("dirty rectangle"));
        }

        let (dx, dy) = (coordinate_from_f64(dx), coordinate_from_f64(dy));
        let mut src = Rect::new(
            coordinate_from_f64(dirty.x),
            coordinate_from_f64(dirty.y),
            coordinate_from_f64(dirty.width),
            coordinate_from_f64(dirty.height),
        );

        // Clip the dirty rectangle to the image data.
        if src.x < 0 {
            src.width += src.x;
            src.x = 0;
        }
        if src.y < 0 {
            src.height += src.y;
            src.y = 0;
        }
        src.width = src.width.min(i64::from(data.width()) - src.x);
        src.height = src.height.min(i64::from(data.height()) - src.y);
        if src.width <= 0 || src.height <= 0 {
            return Ok(());
        }

        let mut dst = Rect::new(
            dx.saturating_add(src.x),
            dy.saturating_add(src.y),
            src.width,
            src.height,
        );
        if dst.misses(self.width(), self.height()) {
            return Ok(());
        }

        // Clip against the bitmap, moving the source origin along.
        if dst.x < 0 {
            src.x -= dst.x;
            dst.width += dst.x;
            dst.x = 0;
        }
        if dst.y < 0 {
            src.y -= dst.y;
            dst.height += dst.y;
            dst.y = 0;
        }
        dst.width = dst.width.min(i64::from(self.width()) - dst.x);
        dst.height = dst.height.min(i64::from(self.height()) - dst.y);

        for y in 0..dst.height {
            for x in 0..dst.width {
                let px = data.pixel(src.x + x, src.y + y);
                self.put_pixel(dst.x + x, dst.y + y, px);
            }
        }
        Ok(())
    }

    /// Pack the bitmap into a raw image: 3 channels without alpha, 4 with.
    pub fn to_raw_image(&self) -> RawImage {
        let size = self.width() as usize * self.height() as usize;
        let alpha = self.has_alpha.then(|| &self.alpha[..size]);
        raw::pack(self.width(), self.height(), &self.rgb[..size * RGB24], alpha)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/transfer.rs"]
mod tests;
