use crate::{
    bitmap::{blend, image_bitmap::ImageBitmap, raw::RGB24},
    foundation::{
        error::{CleaveError, CleaveResult},
        geometry::Rect,
    },
};

impl ImageBitmap {
    /// Composite one straight-alpha pixel onto `(x, y)`.
    ///
    /// `alpha` of `None` or 255 replaces the pixel and makes it opaque; 0
    /// leaves the bitmap untouched; anything in between blends with
    /// [`blend::over`]. Out-of-bounds draws are dropped.
    pub fn draw_pixel(&mut self, x: i64, y: i64, rgb: &[u8], alpha: Option<u8>) -> CleaveResult<()> {
        let rgb: [u8; 3] = rgb
            .try_into()
            .map_err(|_| CleaveError::component_count(3, rgb.len()))?;
        self.composite_pixel(x, y, rgb, alpha.unwrap_or(255));
        Ok(())
    }

    fn composite_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3], alpha: u8) {
        if alpha == 0 || self.index(x, y).is_none() {
            return;
        }
        if alpha == 255 {
            self.put_rgb(x, y, rgb);
            self.set_alpha(x, y, 255);
            return;
        }
        let (out, out_a) = blend::over(rgb, alpha, self.get_rgb(x, y), self.get_alpha(x, y));
        self.put_rgb(x, y, out);
        self.set_alpha(x, y, out_a);
    }

    /// Copy a horizontal strip of `width` pixels from `source` row `sy`
    /// starting at `sx` into this bitmap's row `dy` starting at `dx`.
    ///
    /// The strip is clipped on both ends against both bitmaps. Pixels are
    /// replaced, not blended; alpha is copied when this bitmap has alpha
    /// (opaque for sources without it).
    pub fn set_row(
        &mut self,
        source: &ImageBitmap,
        sx: i64,
        sy: i64,
        dx: i64,
        dy: i64,
        width: i64,
    ) {
        let (src_w, src_h) = (i64::from(source.width()), i64::from(source.height()));
        let (dst_w, dst_h) = (i64::from(self.width()), i64::from(self.height()));
        if width <= 0 || sy < 0 || sy >= src_h || dy < 0 || dy >= dst_h {
            return;
        }

        let shift = sx.saturating_neg().max(dx.saturating_neg()).max(0);
        let (sx, dx) = (sx.saturating_add(shift), dx.saturating_add(shift));
        let len = (width - shift).min(src_w - sx).min(dst_w - dx);
        if len <= 0 {
            return;
        }

        let (Some(si), Some(di)) = (source.index(sx, sy), self.index(dx, dy)) else {
            return;
        };
        let len = len as usize;

        self.rgb[di * RGB24..(di + len) * RGB24]
            .copy_from_slice(&source.rgb[si * RGB24..(si + len) * RGB24]);

        if self.has_alpha {
            let dst = &mut self.alpha[di..di + len];
            if source.has_alpha {
                dst.copy_from_slice(&source.alpha[si..si + len]);
            } else {
                dst.fill(255);
            }
        }
    }

    /// Draw all of `source` with its top-left corner at `(dx, dy)`.
    pub fn draw_image(&mut self, source: &ImageBitmap, dx: i64, dy: i64) -> CleaveResult<()> {
        let (w, h) = (i64::from(source.width()), i64::from(source.height()));
        self.draw_image_region(source, Rect::new(0, 0, w, h), Rect::new(dx, dy, w, h))
    }

    /// Draw the `src` rectangle of `source` into the `dst` rectangle.
    ///
    /// Both rectangles must have non-negative, identical sizes: scaling is
    /// not supported. Sources without alpha are copied row by row; sources
    /// with alpha are composited pixel by pixel.
    pub fn draw_image_region(
        &mut self,
        source: &ImageBitmap,
        src: Rect,
        dst: Rect,
    ) -> CleaveResult<()> {
        if src.width < 0 || src.height < 0 {
            return Err(CleaveError::NegativeLength("source rectangle"));
        }
        if dst.width < 0 || dst.height < 0 {
            return Err(CleaveError::NegativeLength("destination rectangle"));
        }
        if src.width != dst.width || src.height != dst.height {
            return Err(CleaveError::ResizeNotSupported {
                sw: src.width,
                sh: src.height,
                dw: dst.width,
                dh: dst.height,
            });
        }
        if dst.is_empty() || dst.misses(self.width(), self.height()) {
            return Ok(());
        }

        // Only the rows and columns that land inside this bitmap are visited.
        let (dst_w, dst_h) = (i64::from(self.width()), i64::from(self.height()));
        let rows = dst.y.saturating_neg().max(0)..src.height.min(dst_h.saturating_sub(dst.y));
        let cols = dst.x.saturating_neg().max(0)..src.width.min(dst_w.saturating_sub(dst.x));

        for y in rows {
            let ty = dst.y + y;
            let sy = src.y.saturating_add(y);

            if !source.has_alpha {
                self.set_row(source, src.x, sy, dst.x, ty, src.width);
                continue;
            }

            for x in cols.clone() {
                let sx = src.x.saturating_add(x);
                self.composite_pixel(
                    dst.x + x,
                    ty,
                    source.get_rgb(sx, sy),
                    source.get_alpha(sx, sy),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/draw.rs"]
mod tests;
