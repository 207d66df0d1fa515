//! Adjust command - stacked tonal and color adjustments
//!
//! Flags apply in a fixed order: brightness, contrast, exposure, gamma,
//! hue, saturation, temperature.

use crate::AdjustArgs;
use crate::commands::process;
use anyhow::Result;
use pix_ops::adjust;

pub fn run(args: AdjustArgs, verbose: bool) -> Result<()> {
    process(&args.input, &args.output, verbose, |img| {
        let mut out = img.clone();
        if let Some(delta) = args.brightness {
            out = adjust::brightness(&out, delta)?;
        }
        if let Some(c) = args.contrast {
            out = adjust::contrast(&out, c)?;
        }
        if let Some(ev) = args.exposure {
            out = adjust::exposure(&out, ev)?;
        }
        if let Some(g) = args.gamma {
            out = adjust::gamma(&out, g)?;
        }
        if let Some(deg) = args.hue {
            out = adjust::hue(&out, deg)?;
        }
        if let Some(factor) = args.saturation {
            out = adjust::saturation(&out, factor)?;
        }
        if let Some(kelvin) = args.temperature {
            out = adjust::color_temperature(&out, kelvin)?;
        }
        Ok(out)
    })
}
