//! Resize command - separable resampling

use crate::ResizeArgs;
use crate::commands::process;
use anyhow::{Result, bail};
use pix_ops::Filter;

pub fn run(args: ResizeArgs, verbose: bool) -> Result<()> {
    let filter = parse_filter(&args.filter)?;
    process(&args.input, &args.output, verbose, |img| {
        let (w, h) = target_size(img.width(), img.height(), &args)?;
        if verbose {
            println!("Target: {w}x{h} ({:?})", filter);
        }
        Ok(pix_ops::resize::resize(img, w, h, filter)?)
    })
}

fn parse_filter(name: &str) -> Result<Filter> {
    Ok(match name {
        "nearest" => Filter::Nearest,
        "bilinear" => Filter::Bilinear,
        "catmull-rom" | "catmullrom" => Filter::CatmullRom,
        other => bail!("Unknown filter: {other} (nearest, bilinear, catmull-rom)"),
    })
}

fn target_size(src_w: u32, src_h: u32, args: &ResizeArgs) -> Result<(u32, u32)> {
    if let Some(scale) = args.scale {
        if args.width.is_some() || args.height.is_some() {
            bail!("--scale cannot be combined with --width/--height");
        }
        if scale <= 0.0 {
            bail!("Scale must be positive, got {scale}");
        }
        let w = ((src_w as f64 * scale).round() as u32).max(1);
        let h = ((src_h as f64 * scale).round() as u32).max(1);
        return Ok((w, h));
    }
    // A single dimension keeps aspect ratio.
    match (args.width, args.height) {
        (Some(w), Some(h)) => Ok((w, h)),
        (Some(w), None) => {
            let h = ((w as f64 * src_h as f64 / src_w as f64).round() as u32).max(1);
            Ok((w, h))
        }
        (None, Some(h)) => {
            let w = ((h as f64 * src_w as f64 / src_h as f64).round() as u32).max(1);
            Ok((w, h))
        }
        (None, None) => bail!("Specify --width, --height, or --scale"),
    }
}
