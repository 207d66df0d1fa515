//! Per-pixel arithmetic between two buffers.
//!
//! # Operations
//!
//! - [`ArithmeticOp::Add`] - averaged sum, `(src + dst) / 2`
//! - [`ArithmeticOp::Subtract`] - absolute or soft difference
//! - [`ArithmeticOp::Multiply`] - normalized product with an
//!   anti-vanishing floor
//! - [`ArithmeticOp::Divide`] - normalized quotient, zero divisor maps
//!   to white
//! - [`ArithmeticOp::And`] / [`Or`](ArithmeticOp::Or) /
//!   [`Xor`](ArithmeticOp::Xor) - bitwise per channel
//!
//! Binary ops are applied over the overlap of the two buffers at an
//! offset; destination pixels outside the overlap pass through
//! unchanged. [`bit_not`] is the one unary op.

use pix_core::{PixelBuffer, Rgba};
use tracing::debug;

use crate::error::OpsResult;

/// How [`ArithmeticOp::Subtract`] treats the difference.
///
/// Alpha never enters the difference in either mode: it is carried as
/// the channel-wise max of the operands, and only a fully transparent
/// pair is forced to 128 so the result stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtractMode {
    /// Plain absolute difference.
    #[default]
    Absolute,
    /// Signed difference re-centered on 128: `(dst - src) / 2 + 128`,
    /// floored at 0.
    Soft,
}

/// A binary per-pixel arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// Averaged sum.
    Add,
    /// Difference in the given mode.
    Subtract(SubtractMode),
    /// Normalized product.
    Multiply,
    /// Normalized quotient.
    Divide,
    /// Bitwise AND, all four channels.
    And,
    /// Bitwise OR, all four channels.
    Or,
    /// Bitwise XOR, all four channels.
    Xor,
}

/// Results below this after a nonzero multiply get nudged up so faint
/// detail survives repeated multiplication.
const MULTIPLY_FLOOR: u32 = 5;

fn add_ch(d: u8, s: u8) -> u8 {
    ((d as u32 + s as u32) / 2) as u8
}

fn subtract_ch(d: u8, s: u8, mode: SubtractMode) -> u8 {
    match mode {
        SubtractMode::Absolute => (d as i32 - s as i32).unsigned_abs() as u8,
        SubtractMode::Soft => ((d as i32 - s as i32) / 2 + 128).clamp(0, 255) as u8,
    }
}

fn multiply_ch(d: u8, s: u8) -> u8 {
    let prod = d as u32 * s as u32;
    let mut r = (prod + 128) / 255;
    if prod > 0 && r < MULTIPLY_FLOOR {
        r = (r + 1).min(MULTIPLY_FLOOR);
    }
    r as u8
}

fn divide_ch(d: u8, s: u8) -> u8 {
    if s == 0 {
        return 255;
    }
    let r = (d as u32 * 255 + s as u32 / 2) / s as u32;
    r.min(255) as u8
}

impl ArithmeticOp {
    /// Combines one destination pixel with one source pixel.
    pub fn combine(self, dst: Rgba, src: Rgba) -> Rgba {
        match self {
            ArithmeticOp::Add => rgb_op(dst, src, add_ch),
            ArithmeticOp::Subtract(mode) => {
                let mut out = rgb_op(dst, src, |d, s| subtract_ch(d, s, mode));
                if out.a == 0 {
                    // An invisible difference is forced visible.
                    out.a = 128;
                }
                out
            }
            ArithmeticOp::Multiply => rgb_op(dst, src, multiply_ch),
            ArithmeticOp::Divide => rgb_op(dst, src, divide_ch),
            ArithmeticOp::And => bit_op(dst, src, |d, s| d & s),
            ArithmeticOp::Or => bit_op(dst, src, |d, s| d | s),
            ArithmeticOp::Xor => bit_op(dst, src, |d, s| d ^ s),
        }
    }

    /// Applies the op over the overlap of `src` placed on `dst` at
    /// `(x, y)`. Pixels outside the overlap are copied from `dst`.
    pub fn apply(self, dst: &PixelBuffer, src: &PixelBuffer, x: i64, y: i64) -> OpsResult<PixelBuffer> {
        debug!(op = ?self, x, y, "arithmetic op");
        let mut out = dst.clone();
        for sy in 0..src.height() as i64 {
            for sx in 0..src.width() as i64 {
                let (dx, dy) = (x + sx, y + sy);
                let (Some(d), Some(s)) = (dst.get(dx, dy), src.get(sx, sy)) else {
                    continue;
                };
                out.set(dx, dy, self.combine(d, s));
            }
        }
        Ok(out)
    }
}

/// RGB channels through `f`, alpha as the max of the operands.
fn rgb_op(dst: Rgba, src: Rgba, f: impl Fn(u8, u8) -> u8) -> Rgba {
    Rgba::new(
        f(dst.r, src.r),
        f(dst.g, src.g),
        f(dst.b, src.b),
        dst.a.max(src.a),
    )
}

/// All four channels through `f`.
fn bit_op(dst: Rgba, src: Rgba, f: impl Fn(u8, u8) -> u8) -> Rgba {
    Rgba::new(
        f(dst.r, src.r),
        f(dst.g, src.g),
        f(dst.b, src.b),
        f(dst.a, src.a),
    )
}

/// Bitwise NOT of the RGB channels, alpha preserved.
pub fn bit_not(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("bitwise not");
    let mut out = img.clone();
    for px in out.as_bytes_mut().chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
    Ok(out)
}
