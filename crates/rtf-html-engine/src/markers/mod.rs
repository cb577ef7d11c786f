//! # Marker Tables
//!
//! Every literal RTF sequence the parser reacts to lives here, never in parser code.
//!
//! ## Modules
//!
//! - **`kinds`**: Single-purpose markers with owned constants (`ContentEnd`,
//!   `SymbolControl`, `TabControl`, `LineSeparator`)
//! - **`table`**: `MarkerTable`, the ordered marker families (begin variants,
//!   style combinations, list cues) built once per converter
//!
//! ## Priority
//!
//! Each family is an explicit list ordered by a `priority` field:
//!
//! - Begin variants: least specific first (`\rtlch \ltrch` before `\rtlch \ltrch\loch`)
//! - Style markers: most specific combination first (bold+italic+underline, pairs, singles)
//! - List wrappers: numeric start before bullet start

pub mod kinds;
pub mod table;

pub use kinds::{ContentEnd, LineSeparator, SymbolControl, TabControl};
pub use table::{BeginMarker, ListMarkers, MarkerTable, StyleMarker, WrapperKind, WrapperMarker};
