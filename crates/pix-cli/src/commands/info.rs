//! Info command - image dimensions and file size

use crate::InfoArgs;
use crate::commands::load_image;
use anyhow::Result;

pub fn run(args: InfoArgs, _verbose: bool) -> Result<()> {
    for path in &args.input {
        let image = load_image(path)?;
        let bytes = std::fs::metadata(path)?.len();
        let opaque = image
            .as_bytes()
            .chunks_exact(4)
            .all(|px| px[3] == 255);
        println!(
            "{}: {}x{} rgba8, {} bytes on disk, alpha: {}",
            path.display(),
            image.width(),
            image.height(),
            bytes,
            if opaque { "opaque" } else { "present" },
        );
    }
    Ok(())
}
