//! Language Server Protocol implementation for TFS.
//!
//!     Thin protocol adapter over the pure feature layer in `tfs-analysis`:
//!     the server stores full document text per URI, reads the highlight
//!     settings the client sends, and translates plain feature data into
//!     protocol shapes. All highlighting/completion/color logic (and its
//!     dense unit tests) lives in the feature crates; tests here only assert
//!     the right things are called and converted.
//!
//! Surfaces
//!
//!     1. Completion (textDocument/completion):
//!         Property/directive/state vocabularies plus the document's palette
//!         tokens, re-triggered on `@ [ : - _`.
//!
//!     2. Document colors (textDocument/documentColor, colorPresentation):
//!         Raw hex/rgba literals as editable color values; presentations are
//!         the 6-digit hex and `rgba(...)` forms.
//!
//!     3. Decorations (custom `tfs/decorations` request):
//!         The inline/swatch/state span sets from the highlighting pipeline.
//!         LSP has no decoration surface of its own, so clients pull the
//!         fresh sets after an edit and own retract-then-apply ordering.
//!
//! Configuration
//!
//!     `initializationOptions` and `workspace/didChangeConfiguration` both
//!     accept `{ "enableColorHighlight": bool, "compensation": "auto"|"off",
//!     "minLuminance": number }`, optionally nested under a `"tfs"` key.
//!     Settings are re-read into every computation; the server keeps no
//!     other state across requests.

pub mod server;

pub use server::{DecorationParams, DecorationReport, TfsLanguageServer};
