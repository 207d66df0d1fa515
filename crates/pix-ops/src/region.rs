//! Region extraction and pixelation.

use pix_core::{PixelBuffer, Region, Rgba};
use tracing::debug;

use crate::error::{OpsError, OpsResult};

/// Crops the region out of the image.
///
/// Rect regions become a direct sub-copy. Shaped regions are rebased to
/// their bounding rect's origin, with out-of-region pixels left
/// transparent.
///
/// # Errors
///
/// Fails for an invalid region or one fully outside the image.
pub fn crop(img: &PixelBuffer, region: &Region) -> OpsResult<PixelBuffer> {
    region.validate().map_err(OpsError::Core)?;
    debug!(?region, "crop");
    let bbox = region.bounding_rect();
    if let Region::Rect(r) = region {
        return Ok(img.sub_image(*r)?);
    }
    let clipped = bbox
        .clip_to(img.width(), img.height())
        .ok_or_else(|| OpsError::InvalidParameter("region does not intersect image".into()))?;
    let mut out = PixelBuffer::new(clipped.width(), clipped.height())?;
    for y in clipped.y0..=clipped.y1 {
        for x in clipped.x0..=clipped.x1 {
            if !region.contains(x, y) {
                continue;
            }
            if let Some(c) = img.get(x, y) {
                out.set(x - clipped.x0, y - clipped.y0, c);
            }
        }
    }
    Ok(out)
}

/// Pixelates the region with `block`-sized cells.
///
/// Each cell of the region's bounding rect is averaged over its
/// in-region pixels only, and the average is written back only to those
/// pixels. Cells with no in-region pixel stay untouched, as does
/// everything outside the region.
pub fn mosaic(img: &PixelBuffer, region: &Region, block: u32) -> OpsResult<PixelBuffer> {
    if block == 0 {
        return Err(OpsError::InvalidParameter("block size must be positive".into()));
    }
    region.validate().map_err(OpsError::Core)?;
    debug!(?region, block, "mosaic");
    let mut out = img.clone();
    let Some(bbox) = region.bounding_rect().clip_to(img.width(), img.height()) else {
        return Ok(out); // region fully off-image
    };

    let step = block as i64;
    let mut by = bbox.y0;
    while by <= bbox.y1 {
        let mut bx = bbox.x0;
        while bx <= bbox.x1 {
            let mut sum = [0u64; 4];
            let mut count = 0u64;
            for y in by..(by + step).min(bbox.y1 + 1) {
                for x in bx..(bx + step).min(bbox.x1 + 1) {
                    if !region.contains(x, y) {
                        continue;
                    }
                    let Some(c) = img.get(x, y) else { continue };
                    sum[0] += c.r as u64;
                    sum[1] += c.g as u64;
                    sum[2] += c.b as u64;
                    sum[3] += c.a as u64;
                    count += 1;
                }
            }
            if count > 0 {
                let avg = Rgba::new(
                    (sum[0] / count) as u8,
                    (sum[1] / count) as u8,
                    (sum[2] / count) as u8,
                    (sum[3] / count) as u8,
                );
                for y in by..(by + step).min(bbox.y1 + 1) {
                    for x in bx..(bx + step).min(bbox.x1 + 1) {
                        if region.contains(x, y) {
                            out.set(x, y, avg);
                        }
                    }
                }
            }
            bx += step;
        }
        by += step;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_core::Rect;

    fn gradient(w: u32, h: u32) -> PixelBuffer {
        let mut img = PixelBuffer::new(w, h).unwrap();
        for y in 0..h as i64 {
            for x in 0..w as i64 {
                img.set(x, y, Rgba::opaque((x * 10) as u8, (y * 10) as u8, 0));
            }
        }
        img
    }

    #[test]
    fn test_crop_rect() {
        let img = gradient(10, 10);
        let out = crop(&img, &Region::Rect(Rect::new(2, 3, 5, 6))).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get(0, 0), Some(Rgba::opaque(20, 30, 0)));
    }

    #[test]
    fn test_crop_full_extent_is_identity() {
        let img = gradient(10, 10);
        let out = crop(&img, &Region::Rect(Rect::new(0, 0, 9, 9))).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_crop_circle_rebased() {
        let img = PixelBuffer::filled(20, 20, Rgba::opaque(50, 60, 70)).unwrap();
        let region = Region::Circle {
            cx: 10,
            cy: 10,
            radius: 4,
        };
        let out = crop(&img, &region).unwrap();
        assert_eq!(out.dimensions(), (9, 9));
        // Center keeps the source color, corner is transparent.
        assert_eq!(out.get(4, 4), Some(Rgba::opaque(50, 60, 70)));
        assert_eq!(out.get(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_crop_triangle_outside_transparent() {
        let img = PixelBuffer::filled(20, 20, Rgba::WHITE).unwrap();
        let region = Region::Triangle([(0, 0), (8, 0), (0, 8)]);
        let out = crop(&img, &region).unwrap();
        assert_eq!(out.get(1, 1).unwrap().a, 255);
        assert_eq!(out.get(7, 7), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_crop_disjoint_region_errors() {
        let img = PixelBuffer::new(8, 8).unwrap();
        let region = Region::Circle {
            cx: 100,
            cy: 100,
            radius: 3,
        };
        assert!(crop(&img, &region).is_err());
    }

    #[test]
    fn test_mosaic_uniform_block() {
        let img = gradient(8, 8);
        let region = Region::Rect(Rect::new(0, 0, 7, 7));
        let out = mosaic(&img, &region, 4).unwrap();
        // All pixels of a block share the block average.
        let a = out.get(0, 0).unwrap();
        let b = out.get(3, 3).unwrap();
        assert_eq!(a, b);
        // Average of x in 0..4 -> 15, y likewise.
        assert_eq!(a, Rgba::opaque(15, 15, 0));
    }

    #[test]
    fn test_mosaic_outside_region_untouched() {
        let img = gradient(8, 8);
        let region = Region::Rect(Rect::new(0, 0, 3, 3));
        let out = mosaic(&img, &region, 2).unwrap();
        assert_eq!(out.get(6, 6), img.get(6, 6));
    }

    #[test]
    fn test_mosaic_circle_edges_sharp() {
        let img = gradient(16, 16);
        let region = Region::Circle {
            cx: 8,
            cy: 8,
            radius: 5,
        };
        let out = mosaic(&img, &region, 4).unwrap();
        // A bounding-box corner outside the disc keeps its pixel.
        assert_eq!(out.get(3, 3), img.get(3, 3));
        // Center is averaged with its cell.
        assert_ne!(out.get(8, 8), img.get(8, 8));
    }

    #[test]
    fn test_mosaic_zero_block_rejected() {
        let img = gradient(4, 4);
        assert!(mosaic(&img, &Region::Rect(Rect::new(0, 0, 3, 3)), 0).is_err());
    }
}
