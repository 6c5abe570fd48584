//! Layout helpers built on the 2D context: tiling and overlaying sources.

use crate::{
    elements::{canvas::Canvas, document::create_canvas, source::CanvasImageSource},
    foundation::error::CleaveResult,
};

/// Vertical placement of tiles shorter than the tallest one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Flush with the top edge.
    Top,
    /// Centered, rounding the offset down.
    #[default]
    Middle,
    /// Flush with the bottom edge.
    Bottom,
}

/// Lay `sources` out left to right, `gap` pixels apart, on a new canvas as
/// wide as the row and as tall as the tallest source.
#[tracing::instrument(skip_all, fields(count = sources.len(), align = ?align, gap = gap))]
pub fn tile_right(
    sources: &[CanvasImageSource<'_>],
    align: VerticalAlign,
    gap: u32,
) -> CleaveResult<Canvas> {
    let dims: Vec<(u32, u32)> = sources.iter().map(|s| s.dimensions()).collect();
    let gaps = u64::from(gap) * dims.len().saturating_sub(1) as u64;
    let width = dims.iter().map(|&(w, _)| u64::from(w)).sum::<u64>() + gaps;
    let height = dims.iter().map(|&(_, h)| h).max().unwrap_or(0);

    let mut canvas = create_canvas();
    canvas.set_width(width as f64)?;
    canvas.set_height(f64::from(height))?;
    tracing::debug!(width, height, "tile canvas sized");

    let mut ctx = canvas.context_2d(None);
    let mut x = 0i64;
    for (source, &(w, h)) in sources.iter().zip(&dims) {
        let y = match align {
            VerticalAlign::Top => 0,
            VerticalAlign::Middle => (height - h) / 2,
            VerticalAlign::Bottom => height - h,
        };
        ctx.draw_image(*source, x, i64::from(y))?;
        x += i64::from(w) + i64::from(gap);
    }
    Ok(canvas)
}

/// Draw `overlay` over an optional `background` on a new canvas.
///
/// The canvas takes the background's size (0x0 without one). The overlay
/// goes at `offset`, or centered when `None`.
#[tracing::instrument(skip_all, fields(offset = ?offset, has_background = background.is_some()))]
pub fn overlay(
    overlay: CanvasImageSource<'_>,
    background: Option<CanvasImageSource<'_>>,
    offset: Option<(i64, i64)>,
) -> CleaveResult<Canvas> {
    let mut canvas = create_canvas();
    if let Some(background) = background {
        let (w, h) = background.dimensions();
        canvas.set_width(f64::from(w))?;
        canvas.set_height(f64::from(h))?;
    }

    let (ow, oh) = overlay.dimensions();
    let (cw, ch) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let (x, y) = offset.unwrap_or_else(|| {
        (
            round_half_up(cw / 2.0 - f64::from(ow) / 2.0),
            round_half_up(ch / 2.0 - f64::from(oh) / 2.0),
        )
    });

    let mut ctx = canvas.context_2d(None);
    if let Some(background) = background {
        ctx.draw_image(background, 0, 0)?;
    }
    ctx.draw_image(overlay, x, y)?;
    Ok(canvas)
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
