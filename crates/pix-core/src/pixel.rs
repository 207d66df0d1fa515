//! RGBA pixel type and luminance helpers.
//!
//! Everything in this workspace operates on 8-bit RGBA with straight
//! (non-premultiplied) alpha. Luminance uses the Rec. 601 weights, which
//! is what the grayscale and threshold operations key on.

/// Rec. 601 luma weight for red.
pub const LUMA_R: f64 = 0.299;
/// Rec. 601 luma weight for green.
pub const LUMA_G: f64 = 0.587;
/// Rec. 601 luma weight for blue.
pub const LUMA_B: f64 = 0.114;

/// An 8-bit RGBA color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB channels.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the channels as a `[r, g, b, a]` array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates a color from a `[r, g, b, a]` array.
    #[inline]
    pub const fn from_array(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Rec. 601 luminance, rounded to the nearest integer.
    #[inline]
    pub fn luminance(self) -> u8 {
        let y = LUMA_R * self.r as f64 + LUMA_G * self.g as f64 + LUMA_B * self.b as f64;
        y.round() as u8
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(v: [u8; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Rgba> for [u8; 4] {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Rgba::BLACK.luminance(), 0);
        assert_eq!(Rgba::WHITE.luminance(), 255);
    }

    #[test]
    fn test_luminance_rounding() {
        // 0.299*100 + 0.587*50 + 0.114*200 = 29.9 + 29.35 + 22.8 = 82.05
        assert_eq!(Rgba::opaque(100, 50, 200).luminance(), 82);
    }

    #[test]
    fn test_array_round_trip() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(Rgba::from_array(c.to_array()), c);
    }
}
