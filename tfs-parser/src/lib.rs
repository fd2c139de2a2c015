//! Scanning and color core for the TFS styling language.
//!
//! TFS is a small declarative styling format: `@colors { name: value; }`
//! palette blocks, `Component { ... }` definitions, `property: value;`
//! declarations, and `[state]` annotations. This crate holds the pure,
//! host-agnostic pieces the tooling layers build on:
//!
//! - [`scanner`] — comment/string exclusion ranges (single forward pass)
//! - [`color`] — color literal parsing, WCAG luminance, white blending
//! - [`registry`] — ordered palette token registry from `@colors` blocks
//! - [`classify`] — identifier occurrence scanning and role classification
//! - [`vocab`] — the fixed property/directive/state vocabularies
//! - [`location`] — byte offset to line/column conversion for hosts
//!
//! Everything here is deterministic in the input text and rebuilt from
//! scratch by each caller; nothing is cached across invocations.

pub mod classify;
pub mod color;
pub mod location;
pub mod registry;
pub mod scanner;
pub mod vocab;

pub use color::Rgba;
pub use registry::{ColorToken, TokenRegistry};
pub use scanner::Exclusions;
