//! Gray command - Rec. 601 grayscale

use crate::GrayArgs;
use crate::commands::process;
use anyhow::Result;

pub fn run(args: GrayArgs, verbose: bool) -> Result<()> {
    process(&args.input, &args.output, verbose, |img| {
        Ok(pix_ops::adjust::gray(img)?)
    })
}
