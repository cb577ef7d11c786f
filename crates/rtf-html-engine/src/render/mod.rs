//! # HTML Rendering
//!
//! Turns parsed blocks into the HTML fragment of a chunk.
//!
//! ## Modules
//!
//! - **`tags`**: `Html` tag and entity constants
//! - **`inline`**: indentation entities, tab substitution, styled spans
//! - **`block`**: paragraph containers and list markup

pub mod block;
pub mod inline;
pub mod tags;

pub use block::{render_list, wrap_paragraph};
pub use inline::{indent_to_html, replace_tabs, span};
pub use tags::Html;
