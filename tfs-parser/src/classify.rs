//! Identifier occurrence scanning and syntactic role classification.
//!
//! The same identifier can play several roles in TFS: declaration key on
//! the left of a `:`, component-type name before a `{`, or a plain value
//! reference. Roles are decided from purely local lookaround over the raw
//! text — no brace nesting or block structure is consulted.

use std::ops::Range;

/// Syntactic role of an identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    /// Followed (modulo whitespace) by `:` — a structural key, never colored.
    PropertyKey,
    /// Uppercase first letter and followed (modulo whitespace) by `{` —
    /// rendered swatch-only regardless of settings.
    ComponentDef,
    /// Anything else.
    Reference,
}

/// Bytes that form identifiers: letters, digits, underscore, hyphen.
pub fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

/// Iterate every maximal run of identifier bytes in `text`.
///
/// Runs are maximal by construction, so a token name never matches inside
/// a longer identifier (`brand` does not fire within `brand-dark`).
pub fn identifier_runs(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let bytes = text.as_bytes();
    let mut i = 0;
    std::iter::from_fn(move || {
        while i < bytes.len() && !is_identifier_byte(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        let start = i;
        while i < bytes.len() && is_identifier_byte(bytes[i]) {
            i += 1;
        }
        Some(start..i)
    })
}

/// Classify the identifier occupying `range` within `text`.
pub fn classify(text: &str, range: &Range<usize>) -> IdentifierRole {
    if is_property_key(text, range.end) {
        return IdentifierRole::PropertyKey;
    }
    if is_component_def(text, range) {
        return IdentifierRole::ComponentDef;
    }
    IdentifierRole::Reference
}

/// The next non-whitespace byte after `end` is a `:`.
pub fn is_property_key(text: &str, end: usize) -> bool {
    next_non_whitespace(text, end) == Some(b':')
}

/// Uppercase-first identifier immediately (modulo whitespace) before `{`.
pub fn is_component_def(text: &str, range: &Range<usize>) -> bool {
    let starts_uppercase = text
        .as_bytes()
        .get(range.start)
        .is_some_and(|byte| byte.is_ascii_uppercase());
    starts_uppercase && next_non_whitespace(text, range.end) == Some(b'{')
}

fn next_non_whitespace(text: &str, mut i: usize) -> Option<u8> {
    let bytes = text.as_bytes();
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    bytes.get(i).copied()
}
