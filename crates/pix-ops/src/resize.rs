//! Separable image resizing.
//!
//! Two-pass resampling: rows first, then columns, against a selectable
//! [`Filter`] kernel. When downscaling, the kernel footprint is widened
//! by the scale factor so it averages rather than skips.

use pix_core::PixelBuffer;
use tracing::debug;

use crate::error::{OpsError, OpsResult};
use crate::parallel::for_each_row;

/// Resampling filter kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest neighbor; blocky but exact for pixel art.
    Nearest,
    /// Triangle filter; the default.
    #[default]
    Bilinear,
    /// Catmull-Rom cubic; sharper than bilinear with mild ringing.
    CatmullRom,
}

impl Filter {
    /// Kernel radius in source pixels at scale 1.
    fn support(self) -> f64 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::CatmullRom => 2.0,
        }
    }

    /// Kernel weight at offset `x`.
    fn weight(self, x: f64) -> f64 {
        let x = x.abs();
        match self {
            Filter::Nearest => {
                if x <= 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Filter::Bilinear => (1.0 - x).max(0.0),
            Filter::CatmullRom => {
                if x < 1.0 {
                    1.5 * x * x * x - 2.5 * x * x + 1.0
                } else if x < 2.0 {
                    -0.5 * x * x * x + 2.5 * x * x - 4.0 * x + 2.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Resamples one axis of planar f64 data.
///
/// `src` is `src_len` taps of 4 channels each for `lines` independent
/// lines; stride selects row-major or column-major walking.
struct AxisResample {
    src_len: usize,
    dst_len: usize,
    filter: Filter,
}

impl AxisResample {
    /// Contributions (index, weight) for one output tap, normalized.
    fn taps(&self, i: usize) -> Vec<(usize, f64)> {
        let scale = self.src_len as f64 / self.dst_len as f64;
        let filter_scale = scale.max(1.0);
        let support = self.filter.support() * filter_scale;
        let center = (i as f64 + 0.5) * scale - 0.5;
        let lo = ((center - support).ceil() as i64).max(0) as usize;
        let hi = ((center + support).floor() as i64).min(self.src_len as i64 - 1) as usize;
        let mut taps: Vec<(usize, f64)> = (lo..=hi)
            .map(|j| (j, self.filter.weight((j as f64 - center) / filter_scale)))
            .collect();
        let sum: f64 = taps.iter().map(|(_, w)| w).sum();
        if sum > 0.0 {
            for (_, w) in &mut taps {
                *w /= sum;
            }
        } else {
            // Degenerate window: fall back to the nearest source tap.
            taps = vec![(center.round().clamp(0.0, (self.src_len - 1) as f64) as usize, 1.0)];
        }
        taps
    }
}

/// Resizes to `new_w x new_h` with the given filter.
pub fn resize(img: &PixelBuffer, new_w: u32, new_h: u32, filter: Filter) -> OpsResult<PixelBuffer> {
    if new_w == 0 || new_h == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "target size {new_w}x{new_h}"
        )));
    }
    debug!(new_w, new_h, ?filter, "resize");
    let (w, h) = img.dimensions();
    if (new_w, new_h) == (w, h) {
        return Ok(img.clone());
    }

    // Horizontal pass into f64 planes: new_w x h.
    let horiz = AxisResample {
        src_len: w as usize,
        dst_len: new_w as usize,
        filter,
    };
    let h_taps: Vec<Vec<(usize, f64)>> = (0..new_w as usize).map(|i| horiz.taps(i)).collect();
    let src_bytes = img.as_bytes();
    let mut mid = vec![0.0f64; new_w as usize * h as usize * 4];
    for y in 0..h as usize {
        let src_row = &src_bytes[y * w as usize * 4..(y + 1) * w as usize * 4];
        let mid_row = &mut mid[y * new_w as usize * 4..(y + 1) * new_w as usize * 4];
        for (x, taps) in h_taps.iter().enumerate() {
            let mut acc = [0.0f64; 4];
            for &(j, wgt) in taps {
                for ch in 0..4 {
                    acc[ch] += src_row[j * 4 + ch] as f64 * wgt;
                }
            }
            mid_row[x * 4..x * 4 + 4].copy_from_slice(&acc);
        }
    }

    // Vertical pass into the output buffer.
    let vert = AxisResample {
        src_len: h as usize,
        dst_len: new_h as usize,
        filter,
    };
    let v_taps: Vec<Vec<(usize, f64)>> = (0..new_h as usize).map(|i| vert.taps(i)).collect();
    let mut out = PixelBuffer::new(new_w, new_h)?;
    let row_bytes = new_w as usize * 4;
    for_each_row(out.as_bytes_mut(), row_bytes, |y, row| {
        let taps = &v_taps[y];
        for x in 0..new_w as usize {
            let mut acc = [0.0f64; 4];
            for &(j, wgt) in taps {
                let base = (j * new_w as usize + x) * 4;
                for ch in 0..4 {
                    acc[ch] += mid[base + ch] * wgt;
                }
            }
            for ch in 0..4 {
                row[x * 4 + ch] = acc[ch].round().clamp(0.0, 255.0) as u8;
            }
        }
    });
    Ok(out)
}
