//! Composite command - combine two images
//!
//! `over` stacks the foreground through the canvas layer path; the
//! arithmetic modes combine the overlap per pixel.

use crate::CompositeArgs;
use crate::commands::{load_image, save_image};
use anyhow::{Result, bail};
use pix_canvas::{Canvas, ImageLayer};
use pix_ops::{ArithmeticOp, SubtractMode};

pub fn run(args: CompositeArgs, verbose: bool) -> Result<()> {
    let fg = load_image(&args.fg)?;
    let bg = load_image(&args.bg)?;
    if verbose {
        println!(
            "fg {}x{} onto bg {}x{} at ({}, {}), mode {}",
            fg.width(),
            fg.height(),
            bg.width(),
            bg.height(),
            args.x,
            args.y,
            args.mode,
        );
    }

    let layer = ImageLayer::new(fg, args.x, args.y);
    let canvas = Canvas::from_image(bg);
    let canvas = match args.mode.as_str() {
        "over" => canvas.add_layer(layer),
        mode => canvas.add_layer_op(parse_op(mode)?, &layer),
    };
    let result = canvas.into_image()?;
    save_image(&args.output, &result)
}

fn parse_op(mode: &str) -> Result<ArithmeticOp> {
    Ok(match mode {
        "add" => ArithmeticOp::Add,
        "subtract" => ArithmeticOp::Subtract(SubtractMode::Absolute),
        "soft-subtract" => ArithmeticOp::Subtract(SubtractMode::Soft),
        "multiply" => ArithmeticOp::Multiply,
        "divide" => ArithmeticOp::Divide,
        "and" => ArithmeticOp::And,
        "or" => ArithmeticOp::Or,
        "xor" => ArithmeticOp::Xor,
        other => bail!("Unknown composite mode: {other}"),
    })
}
