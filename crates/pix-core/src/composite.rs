//! Alpha compositing of one buffer onto another.
//!
//! Two placement modes:
//!
//! - [`draw_over`] - Porter-Duff OVER with straight alpha, the default for
//!   stacking layers.
//! - [`draw_src`] - plain replacement copy, used when a layer should
//!   punch through whatever is below it.
//!
//! The source is clipped against the destination; negative offsets and
//! fully disjoint placements are fine and never error.

use crate::buffer::PixelBuffer;
use crate::pixel::Rgba;

/// Composites `src` over `dst` (Porter-Duff OVER, straight alpha).
#[inline]
pub fn over_pixel(dst: Rgba, src: Rgba) -> Rgba {
    let sa = src.a as f64 / 255.0;
    let da = dst.a as f64 / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let ch = |s: u8, d: u8| {
        ((s as f64 * sa + d as f64 * da * (1.0 - sa)) / oa).round() as u8
    };
    Rgba::new(
        ch(src.r, dst.r),
        ch(src.g, dst.g),
        ch(src.b, dst.b),
        (oa * 255.0).round() as u8,
    )
}

/// Draws `src` over `dst` with its top-left corner at `(x, y)`.
///
/// Pixels falling outside `dst` are clipped. A fully transparent source
/// pixel leaves the destination untouched.
pub fn draw_over(dst: &mut PixelBuffer, src: &PixelBuffer, x: i64, y: i64) {
    for sy in 0..src.height() as i64 {
        for sx in 0..src.width() as i64 {
            let Some(s) = src.get(sx, sy) else { continue };
            if s.a == 0 {
                continue;
            }
            let (dx, dy) = (x + sx, y + sy);
            if let Some(d) = dst.get(dx, dy) {
                dst.set(dx, dy, over_pixel(d, s));
            }
        }
    }
}

/// Copies `src` into `dst` at `(x, y)`, replacing destination pixels.
pub fn draw_src(dst: &mut PixelBuffer, src: &PixelBuffer, x: i64, y: i64) {
    for sy in 0..src.height() as i64 {
        for sx in 0..src.width() as i64 {
            if let Some(s) = src.get(sx, sy) {
                dst.set(x + sx, y + sy, s);
            }
        }
    }
}
