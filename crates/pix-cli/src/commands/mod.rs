//! CLI command implementations

pub mod adjust;
pub mod binary;
pub mod blur;
pub mod composite;
pub mod crop;
pub mod gray;
pub mod info;
pub mod morph;
pub mod mosaic;
pub mod resize;
pub mod rotate;
pub mod sharpen;

use anyhow::{Context, Result};
use pix_core::PixelBuffer;
use std::path::Path;

/// Load a PNG image from path.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    pix_io::png::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a PNG image to path.
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    pix_io::png::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// One-step convenience: load, transform, save, with verbose banners.
pub fn process(
    input: &Path,
    output: &Path,
    verbose: bool,
    op: impl FnOnce(&PixelBuffer) -> Result<PixelBuffer>,
) -> Result<()> {
    if verbose {
        println!("Loading: {}", input.display());
    }
    let image = load_image(input)?;
    if verbose {
        println!("Size: {}x{}", image.width(), image.height());
    }
    let result = op(&image)?;
    save_image(output, &result)?;
    if verbose {
        println!("Saved: {}", output.display());
    }
    Ok(())
}
