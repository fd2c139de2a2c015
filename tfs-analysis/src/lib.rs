//! Editor feature layer for TFS documents.
//!
//! Everything in this crate is a pure function of `(document text, options)`
//! returning plain data. Hosts own the trigger policy (re-run on edit, on
//! focus, on configuration change) and the lifecycle of whatever rendering
//! handles they map the data onto; they must retract previously applied
//! decorations before applying a fresh set.
//!
//! - [`highlight`] — decoration span computation (the pipeline core)
//! - [`compensate`] — perceptual brightening for dark backgrounds
//! - [`colors`] — raw color literal extraction for picker surfaces
//! - [`completion`] — completion candidates (vocabularies + palette tokens)

pub mod colors;
pub mod compensate;
pub mod completion;
pub mod highlight;

pub use compensate::{compensate, CompensationMode};
pub use highlight::{
    compute_decorations, DecorationSet, DecorationSpan, HighlightOptions, SpanCategory, StateSpan,
};
