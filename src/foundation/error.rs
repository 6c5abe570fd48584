/// Convenience result type used across canvas-cleave.
pub type CleaveResult<T> = Result<T, CleaveError>;

/// Error taxonomy for bitmap construction, drawing and region transfer.
///
/// Out-of-bounds coordinates are never errors: reads yield sentinel pixels and
/// writes are dropped. Every variant here is a precondition violation at the
/// call that raised it.
#[derive(thiserror::Error, Debug)]
pub enum CleaveError {
    /// Negative width or height supplied for a raw image.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Declared width.
        width: i64,
        /// Declared height.
        height: i64,
    },

    /// Byte buffer length does not match the declared geometry.
    #[error("size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Length implied by width, height and channel count.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Raw image `size` metadata disagrees with the data length.
    #[error("size metadata mismatch: info.size is {declared}, data has {actual} bytes")]
    SizeMetadataMismatch {
        /// Value of `info.size`.
        declared: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Premultiplied-alpha raw images are not accepted.
    #[error("premultiplied alpha is not supported")]
    PremultipliedUnsupported,

    /// Raw image channel count outside 1..=4.
    #[error("source image must have 1-4 channels, got {0}")]
    UnsupportedChannelCount(u8),

    /// Requested allocation exceeds the bitmap memory ceiling.
    #[error("bitmap of {width}x{height} exceeds the {limit} byte memory limit")]
    TooLarge {
        /// Requested width.
        width: u64,
        /// Requested height.
        height: u64,
        /// Ceiling in bytes.
        limit: u64,
    },

    /// Pixel array of the wrong length handed to a setter.
    #[error("expected {expected} pixel components, got {actual}")]
    InvalidComponentCount {
        /// Required component count.
        expected: usize,
        /// Supplied component count.
        actual: usize,
    },

    /// `drawImage` source and destination rectangles differ in size.
    #[error("source and target draw rects must be equal in size ({sw}x{sh} vs {dw}x{dh})")]
    ResizeNotSupported {
        /// Source width.
        sw: i64,
        /// Source height.
        sh: i64,
        /// Destination width.
        dw: i64,
        /// Destination height.
        dh: i64,
    },

    /// Negative width or height where only non-negative lengths are allowed.
    #[error("negative length: {0}")]
    NegativeLength(&'static str),

    /// Zero-sized `getImageData` request.
    #[error("cannot request empty image data")]
    EmptyRegion,

    /// Infinite value supplied to `putImageData`.
    #[error("{0} must be finite")]
    InvalidInfinity(&'static str),

    /// Wrapped lower-level error from codecs or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CleaveError {
    /// Build a [`CleaveError::InvalidComponentCount`] value.
    pub fn component_count(expected: usize, actual: usize) -> Self {
        Self::InvalidComponentCount { expected, actual }
    }

    /// Build a [`CleaveError::SizeMismatch`] value.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
