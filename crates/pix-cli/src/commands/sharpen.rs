//! Sharpen command - Laplacian sharpen

use crate::SharpenArgs;
use crate::commands::process;
use anyhow::Result;

pub fn run(args: SharpenArgs, verbose: bool) -> Result<()> {
    process(&args.input, &args.output, verbose, |img| {
        Ok(pix_ops::filter::sharpen(img)?)
    })
}
