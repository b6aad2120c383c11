//! Row framing of the flat glyph stream.

/// The textual artifact: glyph rows of a fixed width, in raster order.
///
/// Every row holds exactly the framing width except possibly the last,
/// so the flattened rows always reproduce the input stream losslessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArtifact {
    rows: Vec<String>,
}

impl AsciiArtifact {
    /// Chunk `chars` into rows of `row_width`; the final row may be
    /// shorter. An empty input yields an empty artifact.
    ///
    /// Panics if `row_width` is zero.
    pub fn frame(chars: &[char], row_width: usize) -> Self {
        assert!(row_width > 0, "row width must be positive");
        let rows = chars
            .chunks(row_width)
            .map(|chunk| chunk.iter().collect())
            .collect();
        Self { rows }
    }

    /// Rebuild an artifact from newline-separated text.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self { rows: Vec::new() };
        }
        Self { rows: text.split('\n').map(str::to_owned).collect() }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Newline-joined text form, no trailing newline.
    pub fn text(&self) -> String {
        self.rows.join("\n")
    }

    /// The flat glyph stream the artifact was framed from.
    pub fn flatten(&self) -> Vec<char> {
        self.rows.iter().flat_map(|row| row.chars()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_gives_uniform_rows() {
        let chars: Vec<char> = "abcdef".chars().collect();
        let artifact = AsciiArtifact::frame(&chars, 3);
        assert_eq!(artifact.rows(), &["abc".to_owned(), "def".to_owned()]);
    }

    #[test]
    fn remainder_lands_in_a_short_final_row() {
        let chars: Vec<char> = "abcdefg".chars().collect();
        let artifact = AsciiArtifact::frame(&chars, 3);
        assert_eq!(artifact.row_count(), 3);
        assert_eq!(artifact.rows()[2], "g");
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let artifact = AsciiArtifact::frame(&[], 200);
        assert!(artifact.is_empty());
        assert_eq!(artifact.text(), "");
    }

    #[test]
    fn reframing_is_idempotent() {
        let chars: Vec<char> = "█@%#*+=-:. █@%#*".chars().collect();
        let artifact = AsciiArtifact::frame(&chars, 7);
        let reframed = AsciiArtifact::frame(&artifact.flatten(), 7);
        assert_eq!(artifact, reframed);
    }

    #[test]
    fn text_round_trips_through_from_text() {
        let chars: Vec<char> = "#.#.#.#.".chars().collect();
        let artifact = AsciiArtifact::frame(&chars, 3);
        assert_eq!(AsciiArtifact::from_text(&artifact.text()), artifact);
    }

    #[test]
    fn flatten_preserves_total_count() {
        let chars: Vec<char> = std::iter::repeat('█').take(1234).collect();
        let artifact = AsciiArtifact::frame(&chars, 200);
        assert_eq!(artifact.flatten().len(), 1234);
        assert_eq!(artifact.row_count(), 7);
    }
}
