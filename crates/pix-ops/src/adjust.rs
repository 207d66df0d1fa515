//! Color adjustments.
//!
//! # Operations
//!
//! - [`gray`], [`binary`] - Rec. 601 grayscale and hard threshold
//! - [`brightness`], [`contrast`], [`exposure`] - tonal adjustments
//! - [`hue`], [`saturation`] - HSV-space adjustments
//! - [`levels`], [`gamma`] - remapping curves
//! - [`color_temperature`] - white point shift by Kelvin temperature
//!
//! All adjustments return a new buffer and leave the alpha channel
//! untouched.

use pix_core::{PixelBuffer, Rgba};
use tracing::debug;

use crate::error::{OpsError, OpsResult};

/// Threshold for [`binary`]: strictly brighter than this becomes white.
pub const BINARY_THRESHOLD: u8 = 128;

fn map_rgb(img: &PixelBuffer, f: impl Fn(u8) -> u8) -> PixelBuffer {
    let mut out = img.clone();
    for px in out.as_bytes_mut().chunks_exact_mut(4) {
        px[0] = f(px[0]);
        px[1] = f(px[1]);
        px[2] = f(px[2]);
    }
    out
}

fn map_pixels(img: &PixelBuffer, f: impl Fn(Rgba) -> Rgba) -> PixelBuffer {
    let mut out = img.clone();
    for px in out.as_bytes_mut().chunks_exact_mut(4) {
        let c = f(Rgba::new(px[0], px[1], px[2], px[3]));
        px.copy_from_slice(&c.to_array());
    }
    out
}

/// Converts to grayscale using Rec. 601 luma.
pub fn gray(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("grayscale");
    Ok(map_pixels(img, |c| {
        let y = c.luminance();
        Rgba::new(y, y, y, c.a)
    }))
}

/// Thresholds to pure black and white.
///
/// Luma strictly above [`BINARY_THRESHOLD`] becomes white, everything
/// else black.
pub fn binary(img: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!("binary threshold");
    Ok(map_pixels(img, |c| {
        let v = if c.luminance() > BINARY_THRESHOLD { 255 } else { 0 };
        Rgba::new(v, v, v, c.a)
    }))
}

/// Adds `delta` to every RGB channel, clamped.
pub fn brightness(img: &PixelBuffer, delta: i32) -> OpsResult<PixelBuffer> {
    debug!(delta, "brightness");
    Ok(map_rgb(img, |c| (c as i32 + delta).clamp(0, 255) as u8))
}

/// Adjusts contrast about the midpoint.
///
/// `c` ranges over [-255, 255]; the remap factor is
/// `259(c + 255) / (255(259 - c))`.
pub fn contrast(img: &PixelBuffer, c: f64) -> OpsResult<PixelBuffer> {
    if !(-255.0..=255.0).contains(&c) {
        return Err(OpsError::InvalidParameter(format!(
            "contrast must be in [-255, 255], got {c}"
        )));
    }
    debug!(c, "contrast");
    let factor = (259.0 * (c + 255.0)) / (255.0 * (259.0 - c));
    Ok(map_rgb(img, |ch| {
        (factor * (ch as f64 - 128.0) + 128.0).clamp(0.0, 255.0) as u8
    }))
}

/// Multiplies exposure by `2^ev` stops.
pub fn exposure(img: &PixelBuffer, ev: f64) -> OpsResult<PixelBuffer> {
    debug!(ev, "exposure");
    let gain = 2f64.powf(ev);
    Ok(map_rgb(img, |c| (c as f64 * gain).clamp(0.0, 255.0).round() as u8))
}

/// Remaps the input range `[in_lo, in_hi]` to `[out_lo, out_hi]`.
pub fn levels(img: &PixelBuffer, in_lo: u8, in_hi: u8, out_lo: u8, out_hi: u8) -> OpsResult<PixelBuffer> {
    if in_hi <= in_lo {
        return Err(OpsError::InvalidParameter(format!(
            "input range is empty: [{in_lo}, {in_hi}]"
        )));
    }
    debug!(in_lo, in_hi, out_lo, out_hi, "levels");
    let span_in = (in_hi - in_lo) as f64;
    let span_out = out_hi as f64 - out_lo as f64;
    Ok(map_rgb(img, |c| {
        let t = ((c as f64 - in_lo as f64) / span_in).clamp(0.0, 1.0);
        (out_lo as f64 + t * span_out).round().clamp(0.0, 255.0) as u8
    }))
}

/// Applies gamma correction `out = 255 * (in/255)^(1/g)`.
pub fn gamma(img: &PixelBuffer, g: f64) -> OpsResult<PixelBuffer> {
    if g <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "gamma must be positive, got {g}"
        )));
    }
    debug!(g, "gamma");
    let exp = 1.0 / g;
    Ok(map_rgb(img, |c| {
        (255.0 * (c as f64 / 255.0).powf(exp)).round().clamp(0.0, 255.0) as u8
    }))
}

/// Rotates hue by `deg` degrees in HSV space.
pub fn hue(img: &PixelBuffer, deg: f64) -> OpsResult<PixelBuffer> {
    debug!(deg, "hue rotate");
    Ok(map_pixels(img, |c| {
        let (h, s, v) = rgb_to_hsv(c.r, c.g, c.b);
        let h = (h + deg).rem_euclid(360.0);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Rgba::new(r, g, b, c.a)
    }))
}

/// Scales saturation by `factor` in HSV space.
pub fn saturation(img: &PixelBuffer, factor: f64) -> OpsResult<PixelBuffer> {
    if factor < 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "saturation factor must be non-negative, got {factor}"
        )));
    }
    debug!(factor, "saturation");
    Ok(map_pixels(img, |c| {
        let (h, s, v) = rgb_to_hsv(c.r, c.g, c.b);
        let (r, g, b) = hsv_to_rgb(h, (s * factor).min(1.0), v);
        Rgba::new(r, g, b, c.a)
    }))
}

/// Shifts the white point toward a black-body temperature in Kelvin.
///
/// Channel gains follow the Tanner Helland polynomial fit and are
/// normalized so the largest gain is 1.0, which keeps overall level
/// instead of blowing out a channel.
pub fn color_temperature(img: &PixelBuffer, kelvin: f64) -> OpsResult<PixelBuffer> {
    if !(1000.0..=40000.0).contains(&kelvin) {
        return Err(OpsError::InvalidParameter(format!(
            "temperature must be in [1000, 40000] K, got {kelvin}"
        )));
    }
    debug!(kelvin, "color temperature");
    let (r_gain, g_gain, b_gain) = temperature_gains(kelvin);
    Ok(map_pixels(img, |c| {
        Rgba::new(
            (c.r as f64 * r_gain).clamp(0.0, 255.0).round() as u8,
            (c.g as f64 * g_gain).clamp(0.0, 255.0).round() as u8,
            (c.b as f64 * b_gain).clamp(0.0, 255.0).round() as u8,
            c.a,
        )
    }))
}

fn temperature_gains(kelvin: f64) -> (f64, f64, f64) {
    let t = kelvin / 100.0;
    let r = if t <= 66.0 {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };
    let g = if t <= 66.0 {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };
    let b = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };
    let r = r.clamp(0.0, 255.0) / 255.0;
    let g = g.clamp(0.0, 255.0) / 255.0;
    let b = b.clamp(0.0, 255.0) / 255.0;
    let max = r.max(g).max(b);
    if max > 0.0 {
        (r / max, g / max, b / max)
    } else {
        (1.0, 1.0, 1.0)
    }
}

/// RGB to HSV; hue in degrees, saturation and value in [0, 1].
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

/// HSV back to RGB.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let c = v * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one(c: Rgba) -> PixelBuffer {
        PixelBuffer::filled(1, 1, c).unwrap()
    }

    fn first(buf: &PixelBuffer) -> Rgba {
        buf.get(0, 0).unwrap()
    }

    #[test]
    fn test_gray_luma() {
        let out = gray(&one(Rgba::new(100, 50, 200, 77))).unwrap();
        let c = first(&out);
        assert_eq!((c.r, c.g, c.b), (82, 82, 82));
        assert_eq!(c.a, 77);
    }

    #[test]
    fn test_binary_threshold_is_strict() {
        // Luma exactly 128 stays black.
        let mid = binary(&one(Rgba::opaque(128, 128, 128))).unwrap();
        assert_eq!(first(&mid).r, 0);
        let above = binary(&one(Rgba::opaque(129, 129, 129))).unwrap();
        assert_eq!(first(&above).r, 255);
    }

    #[test]
    fn test_brightness_clamps() {
        let out = brightness(&one(Rgba::opaque(200, 10, 128)), 100).unwrap();
        assert_eq!(first(&out), Rgba::opaque(255, 110, 228));
        let down = brightness(&one(Rgba::opaque(10, 10, 10)), -50).unwrap();
        assert_eq!(first(&down), Rgba::opaque(0, 0, 0));
    }

    #[test]
    fn test_contrast_midpoint_fixed() {
        let out = contrast(&one(Rgba::opaque(128, 128, 128)), 128.0).unwrap();
        assert_eq!(first(&out), Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn test_contrast_rejects_out_of_range() {
        assert!(contrast(&one(Rgba::WHITE), 300.0).is_err());
    }

    #[test]
    fn test_contrast_spreads() {
        let out = contrast(&one(Rgba::opaque(100, 156, 128)), 100.0).unwrap();
        let c = first(&out);
        assert!(c.r < 100);
        assert!(c.g > 156);
    }

    #[test]
    fn test_exposure_doubles() {
        let out = exposure(&one(Rgba::opaque(60, 0, 200)), 1.0).unwrap();
        assert_eq!(first(&out), Rgba::opaque(120, 0, 255));
    }

    #[test]
    fn test_levels_remap() {
        let out = levels(&one(Rgba::opaque(128, 0, 255)), 0, 255, 64, 192).unwrap();
        let c = first(&out);
        assert_eq!(c.g, 64);
        assert_eq!(c.b, 192);
        assert_eq!(c.r, 128);
    }

    #[test]
    fn test_levels_empty_range_rejected() {
        assert!(levels(&one(Rgba::WHITE), 100, 100, 0, 255).is_err());
    }

    #[test]
    fn test_gamma_identity() {
        let out = gamma(&one(Rgba::opaque(37, 128, 250)), 1.0).unwrap();
        assert_eq!(first(&out), Rgba::opaque(37, 128, 250));
        assert!(gamma(&one(Rgba::WHITE), 0.0).is_err());
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let out = gamma(&one(Rgba::opaque(64, 64, 64)), 2.0).unwrap();
        assert!(first(&out).r > 64);
    }

    #[test]
    fn test_hsv_round_trip() {
        for c in [(255, 0, 0), (12, 200, 99), (255, 255, 255), (0, 0, 0)] {
            let (h, s, v) = rgb_to_hsv(c.0, c.1, c.2);
            assert_eq!(hsv_to_rgb(h, s, v), c);
        }
    }

    #[test]
    fn test_hue_full_turn_identity() {
        let out = hue(&one(Rgba::opaque(10, 200, 60)), 360.0).unwrap();
        assert_eq!(first(&out), Rgba::opaque(10, 200, 60));
    }

    #[test]
    fn test_hue_red_to_green() {
        let out = hue(&one(Rgba::opaque(255, 0, 0)), 120.0).unwrap();
        assert_eq!(first(&out), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn test_saturation_zero_is_gray() {
        let out = saturation(&one(Rgba::opaque(200, 50, 50)), 0.0).unwrap();
        let c = first(&out);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_temperature_neutral_near_6600() {
        let (r, g, b) = temperature_gains(6600.0);
        assert_relative_eq!(r, 1.0, epsilon = 0.05);
        assert_relative_eq!(b, 1.0, epsilon = 0.05);
        assert!(g > 0.9);
    }

    #[test]
    fn test_temperature_warm_drops_blue() {
        let out = color_temperature(&one(Rgba::WHITE), 2000.0).unwrap();
        let c = first(&out);
        assert_eq!(c.r, 255);
        assert!(c.b < 200);
    }

    #[test]
    fn test_temperature_range_check() {
        assert!(color_temperature(&one(Rgba::WHITE), 100.0).is_err());
    }
}
