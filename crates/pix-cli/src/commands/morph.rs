//! Morph command - binary morphology and thinning

use crate::MorphArgs;
use crate::commands::process;
use anyhow::{Result, bail};
use pix_ops::morphology;

pub fn run(args: MorphArgs, verbose: bool) -> Result<()> {
    process(&args.input, &args.output, verbose, |img| {
        Ok(match args.op.as_str() {
            "erode" => morphology::erode(img)?,
            "dilate" => morphology::dilate(img)?,
            "open" => morphology::open(img)?,
            "close" => morphology::close(img)?,
            "thin" => morphology::thin(img)?,
            other => bail!("Unknown morphology op: {other} (erode, dilate, open, close, thin)"),
        })
    })
}
