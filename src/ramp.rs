//! Density ramp and intensity-to-glyph mapping.

use serde::{Deserialize, Serialize};

use crate::sample::SampleGrid;

/// Default 11-glyph ramp, darkest to lightest.
pub const DEFAULT_RAMP: &str = "█@%#*+=-:. ";

/// Ordered glyph palette from visually darkest to lightest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityRamp {
    glyphs: Vec<char>,
}

impl Default for DensityRamp {
    fn default() -> Self {
        Self::new(DEFAULT_RAMP)
    }
}

impl DensityRamp {
    /// Build a ramp from `glyphs`, ordered dark to light.
    ///
    /// Panics if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Self {
        assert!(!glyphs.is_empty(), "density ramp needs at least one glyph");
        Self { glyphs: glyphs.chars().collect() }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Bucket index for an intensity. Bucket width is `256 / len`; the
    /// clamp guards the top bucket, where 255 would otherwise index one
    /// past the end.
    pub fn index(&self, intensity: u8) -> usize {
        let bucket = 256.0 / self.glyphs.len() as f32;
        ((intensity as f32 / bucket) as usize).min(self.glyphs.len() - 1)
    }

    pub fn glyph(&self, intensity: u8) -> char {
        self.glyphs[self.index(intensity)]
    }

    /// Map every grid cell to a glyph in raster order.
    pub fn map_grid(&self, grid: &SampleGrid) -> Vec<char> {
        grid.pixels().iter().map(|&p| self.glyph(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darkest_and_lightest_hit_the_ramp_ends() {
        let ramp = DensityRamp::default();
        assert_eq!(ramp.glyph(0), '█');
        assert_eq!(ramp.glyph(255), ' ');
        assert_eq!(ramp.index(255), ramp.len() - 1);
    }

    #[test]
    fn mapping_is_monotonic() {
        let ramp = DensityRamp::default();
        for v in 0..255u8 {
            assert!(ramp.index(v) <= ramp.index(v + 1), "regressed at {v}");
        }
    }

    #[test]
    fn every_glyph_is_reachable() {
        let ramp = DensityRamp::default();
        let hit: std::collections::HashSet<usize> =
            (0..=255u8).map(|v| ramp.index(v)).collect();
        assert_eq!(hit.len(), ramp.len());
    }

    #[test]
    fn alternate_ramps_are_injectable() {
        let ramp = DensityRamp::new("#. ");
        assert_eq!(ramp.len(), 3);
        assert_eq!(ramp.glyph(0), '#');
        assert_eq!(ramp.glyph(128), '.');
        assert_eq!(ramp.glyph(255), ' ');
    }
}
