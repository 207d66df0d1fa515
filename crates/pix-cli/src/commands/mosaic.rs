//! Mosaic command - pixelate a rectangular region

use crate::MosaicArgs;
use crate::commands::process;
use anyhow::{Result, bail};
use pix_core::{Rect, Region};

pub fn run(args: MosaicArgs, verbose: bool) -> Result<()> {
    if args.w == 0 || args.h == 0 {
        bail!("Region size must be positive, got {}x{}", args.w, args.h);
    }
    let region = Region::Rect(Rect::from_size(args.x, args.y, args.w, args.h));
    process(&args.input, &args.output, verbose, |img| {
        Ok(pix_ops::region::mosaic(img, &region, args.block)?)
    })
}
