//! Blur command - Gaussian blur or fixed denoise

use crate::BlurArgs;
use crate::commands::process;
use anyhow::Result;

pub fn run(args: BlurArgs, verbose: bool) -> Result<()> {
    process(&args.input, &args.output, verbose, |img| {
        if args.denoise {
            Ok(pix_ops::filter::denoise(img)?)
        } else {
            Ok(pix_ops::filter::gaussian_blur(img, args.sigma)?)
        }
    })
}
