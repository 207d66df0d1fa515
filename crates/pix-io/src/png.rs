//! PNG format support.
//!
//! Reading normalizes every input to 8-bit RGBA: palettes are expanded,
//! 16-bit channels are stripped to 8, and gray/gray-alpha are widened.
//! Writing always emits 8-bit RGBA with an sRGB chunk.
//!
//! # Example
//!
//! ```rust,ignore
//! use pix_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pix_core::PixelBuffer;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Reads a PNG file into an RGBA8 buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    debug!(path = %path.as_ref().display(), "read png");
    let file = File::open(path.as_ref())?;
    let mut decoder = png::Decoder::new(std::io::BufReader::new(file));
    // Expand palettes and strip 16-bit depth down to 8.
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let width = info.width;
    let height = info.height;
    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "color type {other:?} after normalization"
            )));
        }
    };
    Ok(PixelBuffer::from_raw(width, height, rgba)?)
}

/// Writes an RGBA8 buffer to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    debug!(path = %path.as_ref().display(), "write png");
    let file = File::create(path.as_ref())?;
    encode_into(BufWriter::new(file), image)
}

/// Encodes an RGBA8 buffer to in-memory PNG bytes.
pub fn encode(image: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(&mut out, image)?;
    Ok(out)
}

fn encode_into<W: Write>(writer: W, image: &PixelBuffer) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(image.as_bytes())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_core::Rgba;

    fn sample() -> PixelBuffer {
        let mut img = PixelBuffer::filled(5, 3, Rgba::opaque(10, 200, 30)).unwrap();
        img.set(0, 0, Rgba::new(1, 2, 3, 4));
        img.set(4, 2, Rgba::TRANSPARENT);
        img
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = sample();
        write(&path, &img).unwrap();
        let back = read(&path).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_encode_is_png() {
        let bytes = encode(&sample()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_read_missing_file_errors() {
        let err = read("/nonexistent/definitely-missing.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
