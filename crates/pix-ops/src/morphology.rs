//! Binary morphology and skeleton thinning.
//!
//! Erode/dilate treat luma >= 128 as foreground over a 3x3 structuring
//! element and leave the one-pixel border untouched. [`thin`] runs
//! Zhang-Suen skeletonization on dark strokes (luma <= 50) and loops
//! until a full pass deletes nothing.

use pix_core::{PixelBuffer, Rgba};
use tracing::debug;

use crate::error::OpsResult;

/// Luma at or above this is foreground for erode/dilate.
const FOREGROUND_LUMA: u8 = 128;

/// Luma at or below this is stroke for thinning.
const STROKE_LUMA: u8 = 50;

fn foreground_mask(img: &PixelBuffer) -> Vec<bool> {
    img.as_bytes()
        .chunks_exact(4)
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]).luminance() >= FOREGROUND_LUMA)
        .collect()
}

fn mask_to_image(mask: &[bool], w: u32, h: u32, invert: bool) -> OpsResult<PixelBuffer> {
    let mut out = PixelBuffer::new(w, h)?;
    for (i, px) in out.as_bytes_mut().chunks_exact_mut(4).enumerate() {
        let on = mask[i] != invert;
        let v = if on { 255 } else { 0 };
        px.copy_from_slice(&[v, v, v, 255]);
    }
    Ok(out)
}

fn morph(img: &PixelBuffer, require_all: bool) -> OpsResult<PixelBuffer> {
    let (w, h) = img.dimensions();
    let mask = foreground_mask(img);
    let mut out = mask.clone();
    if w >= 3 && h >= 3 {
        let iw = w as usize;
        for y in 1..(h as usize - 1) {
            for x in 1..(w as usize - 1) {
                let mut all = true;
                let mut any = false;
                for dy in 0..3 {
                    for dx in 0..3 {
                        let v = mask[(y + dy - 1) * iw + (x + dx - 1)];
                        all &= v;
                        any |= v;
                    }
                }
                out[y * iw + x] = if require_all { all } else { any };
            }
        }
    }
    mask_to_image(&out, w, h, false)
}

/// Erosion: a pixel stays foreground only when its whole 3x3
/// neighborhood is foreground.
pub fn erode(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("erode");
    morph(img, true)
}

/// Dilation: a pixel becomes foreground when any 3x3 neighbor is.
pub fn dilate(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("dilate");
    morph(img, false)
}

/// Opening: erosion then dilation. Removes specks smaller than the
/// structuring element.
pub fn open(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("open");
    dilate(&erode(img)?)
}

/// Closing: dilation then erosion. Fills pinholes smaller than the
/// structuring element.
pub fn close(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("close");
    erode(&dilate(img)?)
}

/// Zhang-Suen thinning of dark strokes down to a one-pixel skeleton.
///
/// The input is binarized at luma <= 50; the output renders the skeleton
/// black on white. Each pass runs the two standard sub-iterations and
/// the loop stops when neither deletes a pixel, which is guaranteed
/// because the stroke pixel count strictly decreases.
pub fn thin(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("zhang-suen thinning");
    let (w, h) = img.dimensions();
    let iw = w as usize;
    let mut mask: Vec<bool> = img
        .as_bytes()
        .chunks_exact(4)
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]).luminance() <= STROKE_LUMA)
        .collect();

    if w >= 3 && h >= 3 {
        loop {
            let mut deleted = false;
            for sub in 0..2 {
                let snapshot = mask.clone();
                for y in 1..(h as usize - 1) {
                    for x in 1..(w as usize - 1) {
                        if !snapshot[y * iw + x] {
                            continue;
                        }
                        // Neighbors p2..p9 clockwise from north.
                        let p = [
                            snapshot[(y - 1) * iw + x],
                            snapshot[(y - 1) * iw + x + 1],
                            snapshot[y * iw + x + 1],
                            snapshot[(y + 1) * iw + x + 1],
                            snapshot[(y + 1) * iw + x],
                            snapshot[(y + 1) * iw + x - 1],
                            snapshot[y * iw + x - 1],
                            snapshot[(y - 1) * iw + x - 1],
                        ];
                        let n = p.iter().filter(|&&v| v).count();
                        if !(2..=6).contains(&n) {
                            continue; // endpoints (n == 1) survive
                        }
                        let transitions = (0..8)
                            .filter(|&i| !p[i] && p[(i + 1) % 8])
                            .count();
                        if transitions != 1 {
                            continue;
                        }
                        let (c1, c2) = if sub == 0 {
                            // p2*p4*p6 == 0 and p4*p6*p8 == 0
                            (p[0] && p[2] && p[4], p[2] && p[4] && p[6])
                        } else {
                            // p2*p4*p8 == 0 and p2*p6*p8 == 0
                            (p[0] && p[2] && p[6], p[0] && p[4] && p[6])
                        };
                        if c1 || c2 {
                            continue;
                        }
                        mask[y * iw + x] = false;
                        deleted = true;
                    }
                }
            }
            if !deleted {
                break;
            }
        }
    }
    mask_to_image(&mask, w, h, true)
}
