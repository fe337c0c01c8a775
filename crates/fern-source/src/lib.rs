//! Source file handling and position tracking for the Fern programming language.
//!
//! The front end works on byte offsets: tokens and AST nodes carry plain
//! [`types::Span`]s, and only diagnostics pay for line/column resolution.
//! Each registered [`types::SourceFile`] keeps an index of its newlines so
//! that resolution is a binary search, and a [`types::SourceManager`] maps
//! [`types::FileID`]s back to files when a report is rendered.
//!
//! Lines and columns are 1-indexed; columns count bytes, not grapheme
//! clusters.

pub mod types;
