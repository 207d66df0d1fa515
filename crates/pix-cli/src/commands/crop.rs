//! Crop command - rectangular crop

use crate::CropArgs;
use crate::commands::process;
use anyhow::{Result, bail};
use pix_core::{Rect, Region};

pub fn run(args: CropArgs, verbose: bool) -> Result<()> {
    if args.w == 0 || args.h == 0 {
        bail!("Crop size must be positive, got {}x{}", args.w, args.h);
    }
    let rect = Rect::from_size(args.x, args.y, args.w, args.h);
    process(&args.input, &args.output, verbose, |img| {
        Ok(pix_ops::region::crop(img, &Region::Rect(rect))?)
    })
}
