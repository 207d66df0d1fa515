//! Rotate command - arbitrary angle rotation with expanded bounds

use crate::RotateArgs;
use crate::commands::process;
use anyhow::Result;

pub fn run(args: RotateArgs, verbose: bool) -> Result<()> {
    if verbose {
        println!("Rotation: {}°", args.angle);
    }
    process(&args.input, &args.output, verbose, |img| {
        Ok(pix_ops::transform::rotate(img, args.angle)?)
    })
}
