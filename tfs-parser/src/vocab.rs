//! Fixed vocabularies of the TFS surface syntax.
//!
//! Purely declarative: completion and documentation surfaces consume these,
//! the scanning pipeline does not.

/// Property names recognized in declaration lines.
pub const PROPERTIES: &[&str] = &[
    "color",
    "background",
    "border",
    "border-style",
    "border-color",
    "padding",
    "font",
    "font-size",
    "weight",
    "family",
    "outline",
    "fill",
    "track",
    "line-height",
    "text-align",
    "margin",
    "margin-bottom",
    "border-radius",
    "box-shadow",
    "transform",
    "height",
];

/// Block directives.
pub const DIRECTIVES: &[&str] = &["@colors", "@fonts", "@keyframes", "@media"];

/// State annotation names, as used inside `[ ... ]`.
pub const STATES: &[&str] = &[
    "default", "hover", "focus", "error", "warning", "success", "active", "disabled",
];
