//! asciigram CLI - transcode an image to ASCII art and back to a bitmap.

use asciigram::{ArtError, Config, FileFontSource, Pipeline};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asciigram", about = "Convert images to ASCII art and re-render as a bitmap")]
struct Args {
    /// Input image file
    input: PathBuf,
    /// Output bitmap path
    #[arg(short, long, default_value = "ascii.png")]
    output: PathBuf,
    /// Output width in characters
    #[arg(short, long, default_value = "200")]
    width: u32,
    /// Monospace font used for rasterization
    #[arg(short, long, default_value = "assets/DejaVuSansMono.ttf")]
    font: PathBuf,
    /// Glyph size in pixels
    #[arg(long, default_value = "13")]
    font_size: f32,
    /// Invert the image before mapping
    #[arg(short, long)]
    invert: bool,
    /// Print the ASCII text to stdout instead of rendering a bitmap
    #[arg(short, long)]
    text_only: bool,
}

fn main() -> Result<(), ArtError> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::default()
        .with_width(args.width)
        .with_font_size(args.font_size);
    let pipeline = Pipeline::new(config, FileFontSource::new(&args.font));

    let mut image = image::open(&args.input)?;
    if args.invert {
        image.invert();
    }

    let ascii = pipeline.ascii_from_image(&image);
    if args.text_only {
        println!("{ascii}");
    } else {
        pipeline.render_text(&ascii, &args.output)?;
        println!("{}", args.output.display());
    }

    Ok(())
}
