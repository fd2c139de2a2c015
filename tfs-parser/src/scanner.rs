//! Comment and string-literal exclusion scanning.
//!
//! Identifier and state matching must never fire inside `// ...` line
//! comments, `/* ... */` block comments, or `"..."` string literals. A
//! single forward pass collects those regions as half-open byte ranges in
//! scan order; later passes only ever ask whether an offset falls inside
//! one. Because the pass is sequential and each region is consumed
//! atomically, no region can start inside another and the ranges never
//! overlap.

use std::ops::Range;

/// The comment/string regions of a document, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    ranges: Vec<Range<usize>>,
}

impl Exclusions {
    /// Scan `text` left to right once.
    ///
    /// Recognition priority at each position: line comment, block comment,
    /// string literal; any other byte advances the cursor by one.
    /// Unterminated block comments and strings extend to end of input —
    /// malformed input is never an error here.
    pub fn scan(text: &str) -> Self {
        let bytes = text.as_bytes();
        let len = bytes.len();
        let mut ranges = Vec::new();
        let mut i = 0;

        while i < len {
            if bytes[i] == b'/' && i + 1 < len && bytes[i + 1] == b'/' {
                let start = i;
                i += 2;
                while i < len && bytes[i] != b'\n' {
                    i += 1;
                }
                // end-exclusive of the newline
                ranges.push(start..i);
                continue;
            }
            if bytes[i] == b'/' && i + 1 < len && bytes[i + 1] == b'*' {
                let start = i;
                i += 2;
                while i < len && !(bytes[i] == b'*' && i + 1 < len && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = len.min(i + 2);
                ranges.push(start..i);
                continue;
            }
            if bytes[i] == b'"' {
                let start = i;
                i += 1;
                while i < len {
                    match bytes[i] {
                        // a backslash consumes exactly one following byte
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                // a trailing escape can step one past the end
                i = i.min(len);
                ranges.push(start..i);
                continue;
            }
            i += 1;
        }

        Self { ranges }
    }

    /// True when `offset` falls inside a comment or string literal.
    pub fn contains(&self, offset: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(&offset))
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
