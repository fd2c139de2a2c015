//! Decoration span computation for TFS documents.
//!
//! [`compute_decorations`] is the pipeline core: scan exclusions, build the
//! palette registry, then walk every identifier occurrence and emit
//! non-overlapping spans partitioned into "inline colored text" and "swatch
//! marker only". The function is pure in `(text, options)` — the host
//! decides when to call it and owns applying/retracting the results, and
//! nothing is cached between calls.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Range;

use tfs_parser::classify::{classify, identifier_runs, IdentifierRole};
use tfs_parser::{Exclusions, Rgba, TokenRegistry};

use crate::compensate::{compensate, CompensationMode};

static STATE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]\n]+\]").expect("state pattern compiles"));

/// Glyph rendered before every decorated occurrence, in the span's color.
pub const MARKER_GLYPH: &str = "■";
/// Fixed render color for `[state]` annotations.
pub const STATE_ACCENT: &str = "#ff6bd8";

/// Configuration bundle, read fresh by the host for every invocation.
///
/// Field names deserialize from the camelCase keys hosts send
/// (`enableColorHighlight`, `compensation`, `minLuminance`).
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightOptions {
    /// When false, reference occurrences keep their text color and only the
    /// marker glyph carries the token color.
    pub enable_color_highlight: bool,
    pub compensation: CompensationMode,
    /// Luminance floor for [`compensate`] when compensation is `Auto`.
    pub min_luminance: f64,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            enable_color_highlight: true,
            compensation: CompensationMode::Auto,
            min_luminance: 0.45,
        }
    }
}

/// How a span decorates its occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanCategory {
    /// The identifier text itself is recolored.
    Inline,
    /// Only the leading marker glyph carries the color.
    Swatch,
}

/// One decorated identifier occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationSpan {
    /// Half-open byte range of the identifier.
    pub range: Range<usize>,
    /// Canonical hex of the (possibly compensated) token color; `None` for
    /// component definitions whose name is not a palette token — the host
    /// renders those markers in its default foreground.
    pub render_color: Option<String>,
    pub category: SpanCategory,
    /// Always [`MARKER_GLYPH`]; carried so hosts need no extra lookup.
    pub marker: &'static str,
}

/// A `[state]` annotation span, always the fixed accent color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSpan {
    /// Covers the brackets and their contents.
    pub range: Range<usize>,
    pub color: &'static str,
}

/// Full output of one pipeline invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecorationSet {
    pub inline: Vec<DecorationSpan>,
    pub swatch: Vec<DecorationSpan>,
    pub states: Vec<StateSpan>,
}

impl DecorationSet {
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.swatch.is_empty() && self.states.is_empty()
    }
}

/// Compute the full decoration sets for `text` under `options`.
pub fn compute_decorations(text: &str, options: &HighlightOptions) -> DecorationSet {
    let exclusions = Exclusions::scan(text);
    let registry = TokenRegistry::parse(text);
    let runs: Vec<Range<usize>> = identifier_runs(text).collect();

    let mut set = DecorationSet::default();
    // one span per exact range across the whole run, whichever pass gets
    // there first (definition sites, then tokens in registry order)
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for token in registry.tokens() {
        let Some(resolved) = Rgba::parse(&token.raw_value) else {
            // unparsable raw value: the token contributes no decorations
            continue;
        };
        let rendered = match options.compensation {
            CompensationMode::Auto => compensate(resolved, options.min_luminance),
            CompensationMode::Off => resolved,
        };
        let render_color = rendered.to_canonical_hex();

        // Palette definition sites first: their trailing `:` would make the
        // general scan discard them as property keys.
        for site in registry.definition_sites() {
            if !site.name.eq_ignore_ascii_case(&token.name) {
                continue;
            }
            if exclusions.contains(site.range.start) {
                continue;
            }
            if seen.insert((site.range.start, site.range.end)) {
                push_span(
                    &mut set,
                    site.range.clone(),
                    Some(render_color.clone()),
                    routed_category(options),
                );
            }
        }

        for run in &runs {
            if !text[run.clone()].eq_ignore_ascii_case(&token.name) {
                continue;
            }
            if exclusions.contains(run.start) {
                continue;
            }
            let category = match classify(text, run) {
                IdentifierRole::PropertyKey => continue,
                IdentifierRole::ComponentDef => SpanCategory::Swatch,
                IdentifierRole::Reference => routed_category(options),
            };
            if seen.insert((run.start, run.end)) {
                push_span(&mut set, run.clone(), Some(render_color.clone()), category);
            }
        }
    }

    // Component definitions are marked document-wide, palette token or not;
    // without a token there is no color and the host default applies.
    for run in &runs {
        if exclusions.contains(run.start) {
            continue;
        }
        if classify(text, run) != IdentifierRole::ComponentDef {
            continue;
        }
        if seen.insert((run.start, run.end)) {
            push_span(&mut set, run.clone(), None, SpanCategory::Swatch);
        }
    }

    for annotation in STATE_ANNOTATION.find_iter(text) {
        if !exclusions.contains(annotation.start()) {
            set.states.push(StateSpan {
                range: annotation.range(),
                color: STATE_ACCENT,
            });
        }
    }

    set
}

fn routed_category(options: &HighlightOptions) -> SpanCategory {
    if options.enable_color_highlight {
        SpanCategory::Inline
    } else {
        SpanCategory::Swatch
    }
}

fn push_span(
    set: &mut DecorationSet,
    range: Range<usize>,
    render_color: Option<String>,
    category: SpanCategory,
) {
    let span = DecorationSpan {
        range,
        render_color,
        category,
        marker: MARKER_GLYPH,
    };
    match category {
        SpanCategory::Inline => set.inline.push(span),
        SpanCategory::Swatch => set.swatch.push(span),
    }
}
