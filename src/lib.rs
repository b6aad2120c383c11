//! Image to ASCII art transcoder.
//!
//! Converts an image into a fixed-width text rendition using a density
//! ramp, then rasterizes that text back into a monochrome bitmap through
//! a monospace font.

pub mod config;
pub mod frame;
pub mod pipeline;
pub mod ramp;
pub mod render;
pub mod sample;

pub use config::Config;
pub use frame::AsciiArtifact;
pub use pipeline::{Conversion, Pipeline, Scratch};
pub use ramp::DensityRamp;
pub use render::{BytesFontSource, FileFontSource, FontSource, Rasterizer};
pub use sample::SampleGrid;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Font load error: {0}")]
    FontLoad(String),
    #[error("Render write error: {0}")]
    RenderWrite(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArtError>;
