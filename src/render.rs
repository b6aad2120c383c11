//! Text rasterization through a monospace font.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings, Metrics};
use image::{GrayImage, Luma};
use log::debug;

use crate::frame::AsciiArtifact;
use crate::{ArtError, Config, Result};

/// Resolves a loadable font for the rasterizer.
///
/// Font locations are environment-specific, so the pipeline takes this as
/// an injected capability instead of a hardcoded path.
pub trait FontSource {
    fn load(&self) -> Result<Font>;
}

/// Loads a font from a file on disk.
pub struct FileFontSource {
    path: PathBuf,
}

impl FileFontSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FontSource for FileFontSource {
    fn load(&self) -> Result<Font> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| ArtError::FontLoad(format!("{}: {e}", self.path.display())))?;
        Font::from_bytes(bytes, FontSettings::default()).map_err(|e| ArtError::FontLoad(e.to_string()))
    }
}

/// Font supplied as in-memory bytes, for embedded fonts and tests.
pub struct BytesFontSource(pub Vec<u8>);

impl FontSource for BytesFontSource {
    fn load(&self) -> Result<Font> {
        Font::from_bytes(self.0.as_slice(), FontSettings::default())
            .map_err(|e| ArtError::FontLoad(e.to_string()))
    }
}

/// Renders an [`AsciiArtifact`] onto a single-channel canvas: white
/// background, black glyphs, one text row per `font_size` of height.
pub struct Rasterizer {
    font: Font,
    font_size: f32,
    margin_px: u32,
}

impl Rasterizer {
    pub fn new(source: &dyn FontSource, config: &Config) -> Result<Self> {
        Ok(Self {
            font: source.load()?,
            font_size: config.font_size,
            margin_px: config.margin_px,
        })
    }

    fn line_advance(&self, line: &str) -> f32 {
        line.chars()
            .map(|ch| self.font.metrics(ch, self.font_size).advance_width)
            .sum()
    }

    /// Rasterize the artifact. The canvas is sized to hold the widest row
    /// plus the margin, with rows advancing by `font_size` vertically.
    pub fn render(&self, artifact: &AsciiArtifact) -> GrayImage {
        let widths: Vec<f32> = artifact.rows().iter().map(|row| self.line_advance(row)).collect();
        let (width, height) =
            canvas_size(&widths, artifact.row_count(), self.font_size, self.margin_px);
        let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));

        let ascent = self
            .font
            .horizontal_line_metrics(self.font_size)
            .map(|m| m.ascent)
            .unwrap_or(self.font_size);
        let left = (self.margin_px / 2) as f32;

        for (row_idx, line) in artifact.rows().iter().enumerate() {
            let baseline = row_idx as f32 * self.font_size + ascent;
            let mut pen_x = left;
            for ch in line.chars() {
                let (metrics, bitmap) = self.font.rasterize(ch, self.font_size);
                draw_glyph(&mut canvas, &metrics, &bitmap, pen_x, baseline);
                pen_x += metrics.advance_width;
            }
        }

        debug!("rasterized {} rows onto {}x{} canvas", artifact.row_count(), width, height);
        canvas
    }

    /// Rasterize and persist as a lossless image, in one final step so a
    /// failed run leaves no partial file behind.
    pub fn render_to_file(&self, artifact: &AsciiArtifact, path: &Path) -> Result<()> {
        let canvas = self.render(artifact);
        canvas
            .save(path)
            .map_err(|e| ArtError::RenderWrite(format!("{}: {e}", path.display())))
    }
}

/// Blend a glyph coverage bitmap as black ink over the canvas.
fn draw_glyph(canvas: &mut GrayImage, metrics: &Metrics, bitmap: &[u8], pen_x: f32, baseline: f32) {
    let x0 = (pen_x + metrics.xmin as f32).round() as i64;
    let y0 = baseline.round() as i64 - metrics.height as i64 - metrics.ymin as i64;

    for sy in 0..metrics.height {
        for sx in 0..metrics.width {
            let coverage = bitmap[sy * metrics.width + sx];
            if coverage == 0 {
                continue;
            }
            let tx = x0 + sx as i64;
            let ty = y0 + sy as i64;
            if tx < 0 || ty < 0 || tx >= canvas.width() as i64 || ty >= canvas.height() as i64 {
                continue;
            }
            let px = canvas.get_pixel_mut(tx as u32, ty as u32);
            px.0[0] = px.0[0].min(255 - coverage);
        }
    }
}

/// Canvas geometry: widest line plus margin by `font_size * rows` plus
/// margin. Dimensions never collapse to zero.
fn canvas_size(line_widths: &[f32], rows: usize, font_size: f32, margin_px: u32) -> (u32, u32) {
    let max_line = line_widths.iter().fold(0.0f32, |acc, &w| acc.max(w));
    let width = (max_line.ceil() as u32 + margin_px).max(1);
    let height = (font_size.ceil() as u32 * rows as u32 + margin_px).max(1);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_fits_the_widest_row() {
        let (w, h) = canvas_size(&[91.0, 130.4, 44.0], 3, 13.0, 20);
        assert_eq!(w, 151);
        assert_eq!(h, 13 * 3 + 20);
    }

    #[test]
    fn empty_artifact_still_gets_a_canvas() {
        let (w, h) = canvas_size(&[], 0, 13.0, 20);
        assert_eq!((w, h), (20, 20));
    }

    #[test]
    fn missing_font_file_is_a_font_load_error() {
        let source = FileFontSource::new("/nonexistent/mono.ttf");
        let err = source.load().err().expect("load should fail");
        assert!(matches!(err, ArtError::FontLoad(_)));
    }

    #[test]
    fn garbage_bytes_are_a_font_load_error() {
        let source = BytesFontSource(vec![0u8; 64]);
        let err = source.load().err().expect("load should fail");
        assert!(matches!(err, ArtError::FontLoad(_)));
    }
}
