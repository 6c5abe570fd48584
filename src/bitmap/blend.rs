use crate::foundation::geometry::clamp_u8;

/// One RGB pixel.
pub type Rgb8 = [u8; 3];

/// Composite a straight-alpha source pixel over a destination pixel.
///
/// Colors are weighted by `src_a / 255` and `dst_a * (255 - src_a) / 255²`
/// without renormalizing by the output alpha, which makes the result exact
/// Porter-Duff "over" whenever the destination is opaque.
pub fn over(src: Rgb8, src_a: u8, dst: Rgb8, dst_a: u8) -> (Rgb8, u8) {
    let sa = f64::from(src_a);
    let da = f64::from(dst_a);
    let inv = 255.0 - sa;

    let mut out = [0u8; 3];
    for i in 0..3 {
        let sc = f64::from(src[i]) * sa / 255.0;
        let dc = f64::from(dst[i]) * da * inv / 65025.0;
        out[i] = clamp_u8(sc + dc);
    }
    let out_a = clamp_u8(sa + da * inv / 255.0);
    (out, out_a)
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/blend.rs"]
mod tests;
