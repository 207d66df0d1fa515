//! Axis-aligned rectangles, filled and outlined.

use pix_core::{PixelBuffer, Rect, Rgba};

use crate::line::draw_line;

/// Fills a rectangle. Integer-aligned edges need no anti-aliasing.
pub fn draw_rect(buf: &mut PixelBuffer, rect: Rect, color: Rgba) {
    let Some(clipped) = rect.clip_to(buf.width(), buf.height()) else {
        return;
    };
    for y in clipped.y0..=clipped.y1 {
        for x in clipped.x0..=clipped.x1 {
            buf.blend(x, y, color);
        }
    }
}

/// Strokes a rectangle outline of the given width, centered on the
/// rectangle's edges.
pub fn draw_rect_outline(buf: &mut PixelBuffer, rect: Rect, width: u32, color: Rgba) {
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    draw_line(buf, (x0, y0), (x1, y0), width, color);
    draw_line(buf, (x1, y0), (x1, y1), width, color);
    draw_line(buf, (x1, y1), (x0, y1), width, color);
    draw_line(buf, (x0, y1), (x0, y0), width, color);
}
