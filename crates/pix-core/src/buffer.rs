//! RGBA8 pixel buffer.
//!
//! [`PixelBuffer`] is the single image representation used across the
//! workspace: an interleaved row-major `Vec<u8>` of RGBA pixels with
//! straight alpha.
//!
//! # Coordinate System
//!
//! Origin (0, 0) is at the top-left corner, X increases to the right, Y
//! increases downward. Accessors take `i64` so callers can pass untrusted
//! or offset coordinates directly: reads outside the buffer return `None`,
//! writes outside the buffer are silently dropped.
//!
//! # Write Policies
//!
//! - [`PixelBuffer::set`] stores the color as-is.
//! - [`PixelBuffer::blend`] is the rasterization write policy: RGB is a
//!   linear blend by source alpha, output alpha is the max of source and
//!   destination alpha. Every shape renderer writes through it.
//!
//! # Example
//!
//! ```rust
//! use pix_core::{PixelBuffer, Rgba};
//!
//! let mut buf = PixelBuffer::new(64, 64).unwrap();
//! buf.blend(10, 10, Rgba::opaque(255, 0, 0));
//! assert_eq!(buf.get(10, 10), Some(Rgba::opaque(255, 0, 0)));
//! assert_eq!(buf.get(-1, 10), None);
//! ```

use crate::error::{Error, Result};
use crate::pixel::Rgba;
use crate::rect::Rect;

/// An 8-bit RGBA image buffer with straight alpha.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// Creates a transparent-black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when either dimension is zero
    /// or the byte length would overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Creates a buffer filled with a solid color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        buf.fill(color);
        Ok(buf)
    }

    /// Creates a single-pixel buffer. Infallible, which makes it the
    /// placeholder of choice when a fallible construction must still
    /// yield a usable buffer.
    pub fn single(color: Rgba) -> Self {
        Self {
            width: 1,
            height: 1,
            data: color.to_array().to_vec(),
        }
    }

    /// Wraps raw interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when `data.len()` is not
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero dimension"));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "byte length overflow"))
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` when `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Reads the pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        if !self.contains(x, y) {
            return None;
        }
        let i = self.offset(x as u32, y as u32);
        Some(Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Stores `color` at `(x, y)`. Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, color: Rgba) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }

    /// Blends `color` onto `(x, y)` using the rasterization write policy.
    ///
    /// RGB channels are linearly interpolated by the source alpha; the
    /// output alpha is `max(dst.a, src.a)`. Out-of-bounds writes are
    /// dropped.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        let fa = color.a as f64 / 255.0;
        let mix = |src: u8, dst: u8| (src as f64 * fa + dst as f64 * (1.0 - fa)) as u8;
        self.data[i] = mix(color.r, self.data[i]);
        self.data[i + 1] = mix(color.g, self.data[i + 1]);
        self.data[i + 2] = mix(color.b, self.data[i + 2]);
        self.data[i + 3] = self.data[i + 3].max(color.a);
    }

    /// Fills the whole buffer with a solid color.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Copies the clipped intersection of `rect` with the buffer into a
    /// new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] when the intersection is empty.
    pub fn sub_image(&self, rect: Rect) -> Result<PixelBuffer> {
        let clipped = rect
            .clip_to(self.width, self.height)
            .ok_or_else(|| Error::invalid_region("rect does not intersect buffer"))?;
        let (w, h) = (clipped.width(), clipped.height());
        let mut out = PixelBuffer::new(w, h)?;
        for y in 0..h as i64 {
            for x in 0..w as i64 {
                if let Some(c) = self.get(clipped.x0 + x, clipped.y0 + y) {
                    out.set(x, y, c);
                }
            }
        }
        Ok(out)
    }

    /// Raw interleaved RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning the raw bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Iterates rows as `&[u8]` slices of `width * 4` bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize * 4)
    }

    /// Iterates rows as mutable slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(self.width as usize * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        assert_eq!(buf.dimensions(), (4, 3));
        assert_eq!(buf.get(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.as_bytes().len(), 48);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(PixelBuffer::new(0, 10).is_err());
        assert!(PixelBuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.get(-1, 0), None);
        assert_eq!(buf.get(2, 0), None);
        // Writes outside are dropped, not panics.
        buf.set(-1, -1, Rgba::WHITE);
        buf.blend(5, 5, Rgba::WHITE);
        assert_eq!(buf.get(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_blend_alpha_max() {
        let mut buf = PixelBuffer::filled(1, 1, Rgba::new(100, 100, 100, 200)).unwrap();
        buf.blend(0, 0, Rgba::new(0, 0, 0, 51));
        let c = buf.get(0, 0).unwrap();
        // 100 * (1 - 0.2) = 80, truncated
        assert_eq!(c.r, 80);
        // Alpha keeps the larger of the two.
        assert_eq!(c.a, 200);
    }

    #[test]
    fn test_blend_opaque_replaces_rgb() {
        let mut buf = PixelBuffer::filled(1, 1, Rgba::opaque(10, 20, 30)).unwrap();
        buf.blend(0, 0, Rgba::opaque(200, 100, 50));
        assert_eq!(buf.get(0, 0), Some(Rgba::opaque(200, 100, 50)));
    }

    #[test]
    fn test_sub_image_clips() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.set(3, 3, Rgba::WHITE);
        let sub = buf.sub_image(Rect::new(2, 2, 10, 10)).unwrap();
        assert_eq!(sub.dimensions(), (2, 2));
        assert_eq!(sub.get(1, 1), Some(Rgba::WHITE));
    }

    #[test]
    fn test_sub_image_disjoint_errors() {
        let buf = PixelBuffer::new(4, 4).unwrap();
        assert!(buf.sub_image(Rect::new(10, 10, 12, 12)).is_err());
    }
}
