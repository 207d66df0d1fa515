//! Binary command - hard black/white threshold

use crate::BinaryArgs;
use crate::commands::process;
use anyhow::Result;

pub fn run(args: BinaryArgs, verbose: bool) -> Result<()> {
    process(&args.input, &args.output, verbose, |img| {
        Ok(pix_ops::adjust::binary(img)?)
    })
}
