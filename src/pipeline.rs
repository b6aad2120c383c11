//! Pipeline orchestration: decode → normalize → map → frame → render.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::debug;

use crate::frame::AsciiArtifact;
use crate::ramp::DensityRamp;
use crate::render::{FontSource, Rasterizer};
use crate::sample::SampleGrid;
use crate::{Config, Result};

/// Output of a full pipeline run.
pub struct Conversion {
    /// Newline-separated ASCII rendition of the input.
    pub ascii: String,
    /// Where the re-rendered bitmap was written.
    pub image_path: PathBuf,
}

/// Single-shot image→text→image transcoder.
///
/// Each stage exclusively owns its output until handing it to the next;
/// any stage failure aborts the run before the output file exists, so
/// callers never observe a partial artifact.
pub struct Pipeline<F: FontSource> {
    config: Config,
    ramp: DensityRamp,
    font_source: F,
}

impl<F: FontSource> Pipeline<F> {
    pub fn new(config: Config, font_source: F) -> Self {
        Self { config, ramp: DensityRamp::default(), font_source }
    }

    pub fn with_ramp(mut self, ramp: DensityRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decode `input` and produce its textual rendition.
    pub fn ascii_art(&self, input: &Path) -> Result<String> {
        let image = image::open(input)?;
        debug!("decoded {} ({}x{})", input.display(), image.width(), image.height());
        Ok(self.ascii_from_image(&image))
    }

    /// The pure half of the pipeline, for callers that already hold a
    /// decoded image.
    pub fn ascii_from_image(&self, image: &DynamicImage) -> String {
        let grid = SampleGrid::from_image(image, &self.config);
        debug!("normalized to {}x{} samples", grid.width(), grid.height());
        let glyphs = self.ramp.map_grid(&grid);
        AsciiArtifact::frame(&glyphs, self.config.row_width).text()
    }

    /// Re-render previously produced ASCII text as a bitmap at `output`.
    pub fn render_text(&self, ascii: &str, output: &Path) -> Result<()> {
        let artifact = AsciiArtifact::from_text(ascii);
        let rasterizer = Rasterizer::new(&self.font_source, &self.config)?;
        rasterizer.render_to_file(&artifact, output)?;
        debug!("wrote {}", output.display());
        Ok(())
    }

    /// Full run: textual rendition plus the re-rendered bitmap.
    pub fn run(&self, input: &Path, output: &Path) -> Result<Conversion> {
        let ascii = self.ascii_art(input)?;
        self.render_text(&ascii, output)?;
        Ok(Conversion { ascii, image_path: output.to_path_buf() })
    }
}

/// Per-invocation scratch files for callers that relay images, such as a
/// chat transport downloading a photo and uploading the rendered result.
///
/// Paths live in a private temp directory removed on drop, on success and
/// failure alike, so concurrent invocations never collide.
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Result<Self> {
        Ok(Self { dir: tempfile::tempdir()? })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
