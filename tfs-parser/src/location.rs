//! Byte offset to line/column conversion for host protocols.

/// A zero-based line / UTF-16 column pair, the unit LSP ranges use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Precomputed line starts for one document.
///
/// The scanning core works in byte offsets; hosts measure columns in UTF-16
/// code units. Build the index once per conversion batch and call
/// [`LineIndex::position`] per offset.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                line_starts.push(idx + ch.len_utf8());
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a position. `offset` must lie on a char
    /// boundary of `text`; offsets past the end clamp to the last position.
    pub fn position(&self, text: &str, offset: usize) -> Position {
        let offset = offset.min(text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let character = text[line_start..offset]
            .chars()
            .map(|c| c.len_utf16() as u32)
            .sum();
        Position::new(line as u32, character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_positions() {
        let text = "abc\ndef";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 0), Position::new(0, 0));
        assert_eq!(index.position(text, 3), Position::new(0, 3));
    }

    #[test]
    fn newline_starts_the_next_line() {
        let text = "abc\ndef\n";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 4), Position::new(1, 0));
        assert_eq!(index.position(text, 7), Position::new(1, 3));
        assert_eq!(index.position(text, 8), Position::new(2, 0));
    }

    #[test]
    fn columns_count_utf16_units() {
        // '𝄞' is one char, two UTF-16 units, four UTF-8 bytes
        let text = "𝄞x\ny";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 4), Position::new(0, 2));
        assert_eq!(index.position(text, 5), Position::new(0, 3));
        assert_eq!(index.position(text, 6), Position::new(1, 0));
    }

    #[test]
    fn offsets_past_the_end_clamp() {
        let text = "ab";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 99), Position::new(0, 2));
    }
}
