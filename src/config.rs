//! Tunable pipeline parameters.

use serde::{Deserialize, Serialize};

/// Knobs for the full image→text→image pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Sample grid width in cells.
    pub target_width: u32,
    /// Characters per text row. Conventionally equal to `target_width`
    /// so one grid row becomes one text row, but the two are independent.
    pub row_width: usize,
    /// Linear contrast gain applied around the mean intensity.
    pub contrast_factor: f32,
    /// Monospace cells are roughly twice as tall as wide; the derived
    /// grid height is divided by this to keep proportions.
    pub aspect_correction: f32,
    /// Glyph size in pixels, also the per-row vertical advance.
    pub font_size: f32,
    /// Total margin added to each canvas dimension.
    pub margin_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_width: 200,
            row_width: 200,
            contrast_factor: 1.5,
            aspect_correction: 1.9,
            font_size: 13.0,
            margin_px: 20,
        }
    }
}

impl Config {
    /// Set both the sample width and the row width, keeping the
    /// one-grid-row-per-text-row convention.
    pub fn with_width(mut self, width: u32) -> Self {
        self.target_width = width;
        self.row_width = width as usize;
        self
    }

    pub fn with_contrast(mut self, factor: f32) -> Self {
        self.contrast_factor = factor;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}
