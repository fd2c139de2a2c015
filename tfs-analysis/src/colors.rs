//! Raw color literal extraction for picker-style hosts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use tfs_parser::Rgba;

static HEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").expect("hex pattern compiles"));
static RGB_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rgba?\([^)]*\)").expect("rgb pattern compiles"));

/// A parsable color literal found in the raw document text.
///
/// Holds the uncompensated value: picker edits round-trip against what the
/// author wrote, never against the brightened render color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMatch {
    pub range: Range<usize>,
    pub color: Rgba,
}

/// Locate every hex and `rgb()`/`rgba()` literal in `text`.
///
/// Deliberately unfiltered: literals inside comments and strings stay
/// inspectable, matching picker behavior in editors. Matches that fail to
/// parse (e.g. `#12345`) are dropped silently.
pub fn document_colors(text: &str) -> Vec<ColorMatch> {
    let mut matches = Vec::new();
    for m in HEX_LITERAL.find_iter(text) {
        if let Some(color) = Rgba::parse(m.as_str()) {
            matches.push(ColorMatch {
                range: m.range(),
                color,
            });
        }
    }
    for m in RGB_LITERAL.find_iter(text) {
        if let Some(color) = Rgba::parse(m.as_str()) {
            matches.push(ColorMatch {
                range: m.range(),
                color,
            });
        }
    }
    matches
}

/// Textual presentations offered for a picked color value: 6-digit hex
/// (alpha discarded) and the `rgba(R, G, B, A)` form.
pub fn color_presentations(color: Rgba) -> Vec<String> {
    vec![color.to_hex6(), color.to_rgba_string()]
}
