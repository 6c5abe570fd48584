/// Upper bound for a bitmap allocation, measured as 4 bytes per pixel.
pub const MAX_BITMAP_BYTES: u64 = 1 << 30;

/// Integer pixel rectangle. Width and height may be negative, meaning the
/// rectangle extends left/up from its origin.
///
/// Edge arithmetic saturates at the `i64` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Horizontal extent; negative extends left.
    pub width: i64,
    /// Vertical extent; negative extends up.
    pub height: i64,
}

impl Rect {
    /// Rectangle with origin `(x, y)` and the given extents.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Equivalent rectangle with non-negative width and height.
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.width < 0 {
            r.x = r.x.saturating_add(r.width);
            r.width = r.width.saturating_neg();
        }
        if r.height < 0 {
            r.y = r.y.saturating_add(r.height);
            r.height = r.height.saturating_neg();
        }
        r
    }

    /// True when either extent is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge, saturating at the `i64` range.
    pub fn right(self) -> i64 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at the `i64` range.
    pub fn bottom(self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// True when the (normalized) rectangle shares no pixel with `0..width x 0..height`.
    pub fn misses(self, width: u32, height: u32) -> bool {
        let r = self.normalized();
        r.x >= i64::from(width) || r.y >= i64::from(height) || r.right() <= 0 || r.bottom() <= 0
    }
}

/// Dirty rectangle for `putImageData`, in the canvas API's floating-point units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirtyRect {
    /// Left edge within the image data.
    pub x: f64,
    /// Top edge within the image data.
    pub y: f64,
    /// Width; must not be negative.
    pub width: f64,
    /// Height; must not be negative.
    pub height: f64,
}

impl DirtyRect {
    /// Dirty rectangle at `(x, y)` with the given size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Coerce a canvas-style numeric dimension: negative, NaN and infinite values
/// become 0, fractions truncate toward zero.
pub fn dimension_from_f64(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else {
        value.trunc() as u64
    }
}

/// Truncate a finite coordinate toward zero. NaN maps to 0.
pub(crate) fn coordinate_from_f64(value: f64) -> i64 {
    value.trunc() as i64
}

/// Clamp a blended channel value into a byte, rounding half to even.
pub(crate) fn clamp_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
