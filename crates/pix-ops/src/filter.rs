//! Convolution filters: Gaussian blur, denoise, sharpen.

use pix_core::{PixelBuffer, Rgba};
use tracing::debug;

use crate::error::{OpsError, OpsResult};
use crate::parallel::for_each_row;

/// Fixed sigma used by [`denoise`].
const DENOISE_SIGMA: f64 = 0.8;

/// Builds a normalized 1D Gaussian kernel with radius `ceil(3 * sigma)`.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (3.0 * sigma).ceil() as i64;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Separable Gaussian blur over all four channels.
///
/// Edges clamp to the nearest pixel, so blurring never darkens borders.
pub fn gaussian_blur(img: &PixelBuffer, sigma: f64) -> OpsResult<PixelBuffer> {
    if sigma <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "sigma must be positive, got {sigma}"
        )));
    }
    debug!(sigma, "gaussian blur");
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as i64;
    let (w, h) = img.dimensions();
    let row_bytes = w as usize * 4;

    // Horizontal pass.
    let mut tmp = img.clone();
    for_each_row(tmp.as_bytes_mut(), row_bytes, |y, row| {
        for x in 0..w as i64 {
            let mut acc = [0.0f64; 4];
            for (k, weight) in kernel.iter().enumerate() {
                let sx = (x + k as i64 - radius).clamp(0, w as i64 - 1);
                let c = img.get(sx, y as i64).unwrap_or(Rgba::TRANSPARENT);
                acc[0] += c.r as f64 * weight;
                acc[1] += c.g as f64 * weight;
                acc[2] += c.b as f64 * weight;
                acc[3] += c.a as f64 * weight;
            }
            let i = x as usize * 4;
            for ch in 0..4 {
                row[i + ch] = acc[ch].round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    // Vertical pass.
    let mut out = tmp.clone();
    for_each_row(out.as_bytes_mut(), row_bytes, |y, row| {
        for x in 0..w as i64 {
            let mut acc = [0.0f64; 4];
            for (k, weight) in kernel.iter().enumerate() {
                let sy = (y as i64 + k as i64 - radius).clamp(0, h as i64 - 1);
                let c = tmp.get(x, sy).unwrap_or(Rgba::TRANSPARENT);
                acc[0] += c.r as f64 * weight;
                acc[1] += c.g as f64 * weight;
                acc[2] += c.b as f64 * weight;
                acc[3] += c.a as f64 * weight;
            }
            let i = x as usize * 4;
            for ch in 0..4 {
                row[i + ch] = acc[ch].round().clamp(0.0, 255.0) as u8;
            }
        }
    });
    Ok(out)
}

/// Light Gaussian blur tuned for sensor noise.
pub fn denoise(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    gaussian_blur(img, DENOISE_SIGMA)
}

/// Laplacian sharpen: 3x3 kernel with center 5 and cross -1.
///
/// The one-pixel border is copied through unchanged; alpha is preserved.
pub fn sharpen(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("laplacian sharpen");
    let (w, h) = img.dimensions();
    let mut out = img.clone();
    if w < 3 || h < 3 {
        return Ok(out);
    }
    let row_bytes = w as usize * 4;
    for_each_row(out.as_bytes_mut(), row_bytes, |y, row| {
        let y = y as i64;
        if y == 0 || y == h as i64 - 1 {
            return;
        }
        for x in 1..w as i64 - 1 {
            let center = img.get(x, y).unwrap_or(Rgba::TRANSPARENT);
            let up = img.get(x, y - 1).unwrap_or(Rgba::TRANSPARENT);
            let down = img.get(x, y + 1).unwrap_or(Rgba::TRANSPARENT);
            let left = img.get(x - 1, y).unwrap_or(Rgba::TRANSPARENT);
            let right = img.get(x + 1, y).unwrap_or(Rgba::TRANSPARENT);
            let sharp = |c: u8, u: u8, d: u8, l: u8, r: u8| {
                (5 * c as i32 - u as i32 - d as i32 - l as i32 - r as i32).clamp(0, 255) as u8
            };
            let i = x as usize * 4;
            row[i] = sharp(center.r, up.r, down.r, left.r, right.r);
            row[i + 1] = sharp(center.g, up.g, down.g, left.g, right.g);
            row[i + 2] = sharp(center.b, up.b, down.b, left.b, right.b);
            // alpha untouched
        }
    });
    Ok(out)
}
