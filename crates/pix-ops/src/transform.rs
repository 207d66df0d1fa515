//! Geometric transforms: rotation, rigid motion, affine and perspective
//! warps.
//!
//! All transforms share one inverse-mapping engine: every output pixel
//! is mapped back into the source and sampled there. The engine is
//! parameterized by [`Sampling`] kernel and [`Background`] fill, so the
//! affine and perspective paths differ only in the inverse map they
//! provide.

use pix_core::{PixelBuffer, Rgba};
use pix_math::{Affine2, Mat3};
use tracing::debug;

use crate::error::{OpsError, OpsResult};
use crate::parallel::for_each_row;

/// Resampling kernel for warps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Nearest-neighbor lookup.
    #[default]
    Nearest,
    /// Bilinear interpolation over the 2x2 neighborhood.
    Bilinear,
}

/// Fill for output pixels that map outside the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Opaque black fill.
    #[default]
    OpaqueBlack,
    /// Transparent fill.
    Transparent,
}

impl Background {
    fn color(self) -> Rgba {
        match self {
            Background::OpaqueBlack => Rgba::BLACK,
            Background::Transparent => Rgba::TRANSPARENT,
        }
    }
}

/// Options for the warp engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WarpOptions {
    /// Resampling kernel.
    pub sampling: Sampling,
    /// Out-of-source fill.
    pub background: Background,
}

fn sample(src: &PixelBuffer, x: f64, y: f64, sampling: Sampling, bg: Rgba) -> Rgba {
    let (w, h) = (src.width() as i64, src.height() as i64);
    match sampling {
        Sampling::Nearest => src
            .get(x.round() as i64, y.round() as i64)
            .unwrap_or(bg),
        Sampling::Bilinear => {
            // Inverse maps of exact grid points carry ~1e-16 residue;
            // tolerate it at the edges instead of leaking background.
            const EDGE_EPS: f64 = 1e-9;
            if x < -EDGE_EPS || y < -EDGE_EPS || x > (w - 1) as f64 + EDGE_EPS || y > (h - 1) as f64 + EDGE_EPS {
                return bg;
            }
            let x = x.clamp(0.0, (w - 1) as f64);
            let y = y.clamp(0.0, (h - 1) as f64);
            let x0 = x.floor() as i64;
            let y0 = y.floor() as i64;
            let x1 = (x0 + 1).min(w - 1);
            let y1 = (y0 + 1).min(h - 1);
            let fx = x - x0 as f64;
            let fy = y - y0 as f64;
            let c00 = src.get(x0, y0).unwrap_or(bg);
            let c10 = src.get(x1, y0).unwrap_or(bg);
            let c01 = src.get(x0, y1).unwrap_or(bg);
            let c11 = src.get(x1, y1).unwrap_or(bg);
            let ch = |f: fn(Rgba) -> u8| {
                pix_math::bilinear(
                    f(c00) as f64,
                    f(c10) as f64,
                    f(c01) as f64,
                    f(c11) as f64,
                    fx,
                    fy,
                )
                .round()
                .clamp(0.0, 255.0) as u8
            };
            Rgba::new(ch(|c| c.r), ch(|c| c.g), ch(|c| c.b), ch(|c| c.a))
        }
    }
}

/// Inverse-mapping warp into a `out_w x out_h` buffer.
///
/// `inv` maps an output pixel center to source coordinates; `None`
/// means the point has no preimage and takes the background.
fn warp_into(
    src: &PixelBuffer,
    out_w: u32,
    out_h: u32,
    inv: impl Fn(f64, f64) -> Option<(f64, f64)> + Send + Sync,
    opts: WarpOptions,
) -> OpsResult<PixelBuffer> {
    let bg = opts.background.color();
    let mut out = PixelBuffer::new(out_w, out_h)?;
    let row_bytes = out_w as usize * 4;
    for_each_row(out.as_bytes_mut(), row_bytes, |y, row| {
        for x in 0..out_w as usize {
            let c = match inv(x as f64, y as f64) {
                Some((sx, sy)) => sample(src, sx, sy, opts.sampling, bg),
                None => bg,
            };
            row[x * 4..x * 4 + 4].copy_from_slice(&c.to_array());
        }
    });
    Ok(out)
}

/// Warps through an affine transform, output sized like the input.
///
/// A singular transform collapses the image onto a line; the input is
/// returned unchanged in that case rather than producing garbage.
pub fn warp_affine(img: &PixelBuffer, m: Affine2, opts: WarpOptions) -> OpsResult<PixelBuffer> {
    debug!(?opts, "affine warp");
    let Some(inv) = m.inverse() else {
        return Ok(img.clone());
    };
    warp_into(img, img.width(), img.height(), |x, y| Some(inv.apply(x, y)), opts)
}

/// Warps through a 3x3 homography, output sized like the input.
///
/// Output points whose preimage lies at infinity (`w == 0`) take the
/// background fill.
///
/// # Errors
///
/// A singular homography has no inverse and is rejected.
pub fn warp_perspective(img: &PixelBuffer, m: Mat3, opts: WarpOptions) -> OpsResult<PixelBuffer> {
    debug!(?opts, "perspective warp");
    let inv = m
        .inverse()
        .ok_or_else(|| OpsError::InvalidParameter("singular homography".into()))?;
    warp_into(
        img,
        img.width(),
        img.height(),
        |x, y| inv.apply_homogeneous(x, y),
        opts,
    )
}

/// Rotates by `deg` degrees about the image center.
///
/// The output grows to the rotated bounding box
/// (`ceil(w|cos| + h|sin|)` by `ceil(w|sin| + h|cos|)`), sampling is
/// bilinear, and uncovered corners are transparent. Multiples of 90
/// degrees land exactly on the source grid.
pub fn rotate(img: &PixelBuffer, deg: f64) -> OpsResult<PixelBuffer> {
    debug!(deg, "rotate");
    let theta = deg.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();
    let (w, h) = (img.width() as f64, img.height() as f64);
    // sin/cos of quarter turns carry a ~1e-16 residue; absorbed before
    // the ceil so exact extents never gain a phantom pixel.
    let extent = |v: f64| (v - 1e-9).ceil().max(1.0) as u32;
    let out_w = extent(w * cos_t.abs() + h * sin_t.abs());
    let out_h = extent(w * sin_t.abs() + h * cos_t.abs());

    let src_cx = (w - 1.0) / 2.0;
    let src_cy = (h - 1.0) / 2.0;
    let dst_cx = (out_w as f64 - 1.0) / 2.0;
    let dst_cy = (out_h as f64 - 1.0) / 2.0;

    let forward = Affine2::translation(dst_cx, dst_cy)
        .compose(&Affine2::rotation(theta))
        .compose(&Affine2::translation(-src_cx, -src_cy));
    // Rotations are always invertible.
    let inv = forward.inverse().ok_or_else(|| {
        OpsError::InvalidParameter("degenerate rotation".into())
    })?;
    warp_into(
        img,
        out_w,
        out_h,
        |x, y| Some(inv.apply(x, y)),
        WarpOptions {
            sampling: Sampling::Bilinear,
            background: Background::Transparent,
        },
    )
}

/// Rigid motion: rotation about the center followed by a translation.
///
/// Output keeps the input size; uncovered areas are transparent.
pub fn rigid(img: &PixelBuffer, deg: f64, dx: f64, dy: f64) -> OpsResult<PixelBuffer> {
    debug!(deg, dx, dy, "rigid transform");
    let (w, h) = (img.width() as f64, img.height() as f64);
    let m = Affine2::translation(dx, dy).compose(&Affine2::rotation_about(
        deg.to_radians(),
        (w - 1.0) / 2.0,
        (h - 1.0) / 2.0,
    ));
    warp_affine(
        img,
        m,
        WarpOptions {
            sampling: Sampling::Bilinear,
            background: Background::Transparent,
        },
    )
}
