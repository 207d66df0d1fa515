//! pix - raster image composition CLI
//!
//! Thin command-line front end over the pix crates: color adjustments,
//! filters, geometric transforms, region operations, morphology, and
//! two-image compositing, all over RGBA PNG files.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "pix")]
#[command(author, version, about = "Raster image composition CLI")]
#[command(long_about = "
A command-line front end for the pix raster toolkit.

Examples:
  pix info image.png                      # Show image info
  pix gray input.png -o out.png           # Rec. 601 grayscale
  pix adjust input.png -o out.png --brightness 30 --contrast 20
  pix blur input.png -o out.png -s 2.5
  pix rotate input.png -o out.png -a 33.5
  pix resize input.png -o out.png -w 1920 -H 1080 -f catmull-rom
  pix crop input.png -o out.png -x 10 -y 10 -w 200 -H 100
  pix mosaic input.png -o out.png -x 0 -y 0 -w 100 -H 100 -b 12
  pix composite fg.png bg.png -o out.png -m over -x 40 -y 20
  pix morph input.png -o out.png --op thin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert to grayscale
    #[command(visible_alias = "g")]
    Gray(GrayArgs),

    /// Threshold to pure black and white
    Binary(BinaryArgs),

    /// Tonal and color adjustments
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),

    /// Gaussian blur or denoise
    Blur(BlurArgs),

    /// Laplacian sharpen
    Sharpen(SharpenArgs),

    /// Rotate by an arbitrary angle
    Rotate(RotateArgs),

    /// Resize with a selectable filter
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Crop a rectangle
    Crop(CropArgs),

    /// Pixelate a rectangular region
    Mosaic(MosaicArgs),

    /// Combine two images
    #[command(visible_alias = "comp")]
    Composite(CompositeArgs),

    /// Morphological operations and thinning
    Morph(MorphArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct GrayArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct BinaryArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct AdjustArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Brightness delta [-255, 255]
    #[arg(long)]
    brightness: Option<i32>,

    /// Contrast amount [-255, 255]
    #[arg(long)]
    contrast: Option<f64>,

    /// Exposure adjustment (stops)
    #[arg(long)]
    exposure: Option<f64>,

    /// Gamma correction
    #[arg(long)]
    gamma: Option<f64>,

    /// Hue rotation in degrees
    #[arg(long)]
    hue: Option<f64>,

    /// Saturation multiplier
    #[arg(long)]
    saturation: Option<f64>,

    /// Color temperature in Kelvin [1000, 40000]
    #[arg(long)]
    temperature: Option<f64>,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Gaussian sigma in pixels
    #[arg(short, long, default_value = "1.5")]
    sigma: f64,

    /// Use the fixed light denoise blur instead of -s
    #[arg(long)]
    denoise: bool,
}

#[derive(Args)]
struct SharpenArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct RotateArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Rotation angle in degrees (clockwise)
    #[arg(short, long)]
    angle: f64,
}

#[derive(Args)]
struct ResizeArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Target width
    #[arg(short, long)]
    width: Option<u32>,

    /// Target height
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Scale factor (e.g. 0.5, 2.0)
    #[arg(short, long)]
    scale: Option<f64>,

    /// Filter: nearest, bilinear, catmull-rom
    #[arg(short, long, default_value = "catmull-rom")]
    filter: String,
}

#[derive(Args)]
struct CropArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// X offset
    #[arg(short)]
    x: i64,

    /// Y offset
    #[arg(short)]
    y: i64,

    /// Width
    #[arg(short)]
    w: u32,

    /// Height
    #[arg(short = 'H')]
    h: u32,
}

#[derive(Args)]
struct MosaicArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Region X offset
    #[arg(short)]
    x: i64,

    /// Region Y offset
    #[arg(short)]
    y: i64,

    /// Region width
    #[arg(short)]
    w: u32,

    /// Region height
    #[arg(short = 'H')]
    h: u32,

    /// Mosaic block size in pixels
    #[arg(short, long, default_value = "8")]
    block: u32,
}

#[derive(Args)]
struct CompositeArgs {
    /// Foreground image
    fg: PathBuf,

    /// Background image
    bg: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Mode: over, add, subtract, soft-subtract, multiply, divide,
    /// and, or, xor
    #[arg(short, long, default_value = "over")]
    mode: String,

    /// Foreground X offset on the background
    #[arg(short, long, default_value = "0")]
    x: i64,

    /// Foreground Y offset on the background
    #[arg(short, long, default_value = "0")]
    y: i64,
}

#[derive(Args)]
struct MorphArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Operation: erode, dilate, open, close, thin
    #[arg(long)]
    op: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Gray(args) => commands::gray::run(args, cli.verbose),
        Commands::Binary(args) => commands::binary::run(args, cli.verbose),
        Commands::Adjust(args) => commands::adjust::run(args, cli.verbose),
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
        Commands::Sharpen(args) => commands::sharpen::run(args, cli.verbose),
        Commands::Rotate(args) => commands::rotate::run(args, cli.verbose),
        Commands::Resize(args) => commands::resize::run(args, cli.verbose),
        Commands::Crop(args) => commands::crop::run(args, cli.verbose),
        Commands::Mosaic(args) => commands::mosaic::run(args, cli.verbose),
        Commands::Composite(args) => commands::composite::run(args, cli.verbose),
        Commands::Morph(args) => commands::morph::run(args, cli.verbose),
    }
}
