//! Luminance normalization - resize, grayscale, contrast boost.

use image::{imageops::FilterType, DynamicImage};

use crate::Config;

/// Normalized grayscale samples in raster order, one byte per cell.
///
/// Width is always exactly `Config::target_width`; height is derived from
/// the source aspect ratio corrected for glyph cell shape, never below 1.
pub struct SampleGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SampleGrid {
    pub fn from_image(image: &DynamicImage, config: &Config) -> Self {
        let (src_w, src_h) = (image.width(), image.height());
        let ratio = src_h as f32 / src_w as f32 / config.aspect_correction;
        let height = (config.target_width as f32 * ratio).round().max(1.0) as u32;

        let gray = image
            .resize_exact(config.target_width, height, FilterType::Triangle)
            .to_luma8();

        let mut data = gray.into_raw();
        boost_contrast(&mut data, config.contrast_factor);

        Self { width: config.target_width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major intensity values, top-left to bottom-right.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn cell_count(&self) -> usize {
        self.data.len()
    }
}

/// Linear contrast gain around the mean, clamped to [0, 255].
fn boost_contrast(pixels: &mut [u8], factor: f32) {
    if pixels.is_empty() {
        return;
    }
    let mean =
        (pixels.iter().map(|&p| p as u64).sum::<u64>() as f64 / pixels.len() as f64) as f32;
    for p in pixels.iter_mut() {
        *p = (mean + (*p as f32 - mean) * factor).clamp(0.0, 255.0) as u8;
    }
}
