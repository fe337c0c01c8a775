//! Type definitions for source code representation.
//!
//! Key types:
//!
//! - `Position`: a location in source code with 1-indexed line/column and byte offset
//! - `Span` and `SourceSpan`: ranges within source files
//! - `SourceFile`: a source file with a newline index for position lookup
//! - `SourceManager`: a registry of source files keyed by `FileID`

use std::fmt;
use std::ops::Range;

/// A unique identifier for a source file.
///
/// The ID is the file's slot in the [`SourceManager`] registry, so
/// resolving one is a plain vector access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileID(u32);

impl FileID {
    /// Creates a `FileID` for the given registry slot.
    #[must_use]
    pub const fn new(slot: u32) -> Self { Self(slot) }

    /// Returns the registry slot of this file.
    #[must_use]
    pub const fn slot(&self) -> usize { self.0 as usize }
}

/// A position in a source file.
///
/// Line and column are 1-indexed, following editor conventions; the column
/// counts bytes from the start of the line. `offset` is the 0-indexed byte
/// offset from the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in bytes (1-indexed)
    pub column: usize,
    /// Byte offset from the start of the file (0-indexed)
    pub offset: usize,
}

impl Position {
    /// Creates a new position with the given line, column, and byte offset.
    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source file with an index of its newlines.
///
/// A byte offset resolves to a line by counting how many newlines precede
/// it; the newline index makes that a binary search rather than a scan.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Identifier of the file
    pub id: FileID,
    /// Name of the file (usually a path)
    pub name: String,
    /// Content of the file
    pub content: String,
    /// Byte offset of every `\n` in the content, in order
    newline_offsets: Vec<usize>,
}

impl SourceFile {
    /// Creates a new source file and indexes its newlines.
    #[must_use]
    pub fn new(id: FileID, name: String, content: String) -> Self {
        let newline_offsets = content
            .bytes()
            .enumerate()
            .filter_map(|(offset, byte)| (byte == b'\n').then_some(offset))
            .collect();

        Self { id, name, content, newline_offsets }
    }

    /// Resolves a byte offset to a [`Position`].
    ///
    /// The line is the number of newlines before the offset; the column is
    /// the distance to the nearest preceding newline. Offsets past the end
    /// of the content resolve as if clamped to the end, which is where the
    /// lexer's zero-width EOF tokens sit.
    #[must_use]
    pub fn position_from_offset(&self, offset: usize) -> Position {
        let offset = offset.min(self.content.len());

        let newlines_before = self.newline_offsets.partition_point(|&newline| newline < offset);
        let line_begin = match newlines_before {
            0 => 0,
            n => self.newline_offsets[n - 1] + 1,
        };

        Position::new(newlines_before + 1, offset - line_begin + 1, offset)
    }

    /// Returns the text of a 1-indexed line, without its newline.
    ///
    /// `None` when the line number is past the end of the file.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let line_idx = line.checked_sub(1)?;

        let begin = match line_idx {
            0 => 0,
            n => self.newline_offsets.get(n - 1)? + 1,
        };
        let end = self.newline_offsets.get(line_idx).copied().unwrap_or(self.content.len());

        self.content.get(begin..end)
    }
}

/// A registry of source files.
///
/// Files live in registration order and a [`FileID`] is the index into
/// that order.
#[derive(Debug, Default, Clone)]
pub struct SourceManager {
    /// The registered files, in registration order
    files: Vec<SourceFile>,
}

impl SourceManager {
    /// Creates a new empty `SourceManager`.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers a source file and returns its `FileID`.
    pub fn add_file(&mut self, name: String, content: String) -> FileID {
        let id = FileID::new(self.files.len() as u32);
        self.files.push(SourceFile::new(id, name, content));

        id
    }

    /// Returns the source file with the given ID, if it exists.
    #[must_use]
    pub fn get_file(&self, id: FileID) -> Option<&SourceFile> { self.files.get(id.slot()) }

    /// Resolves a byte offset in the given file to a position.
    #[must_use]
    pub fn position_from_offset(&self, file_id: FileID, offset: usize) -> Option<Position> {
        self.get_file(file_id).map(|file| file.position_from_offset(offset))
    }

    /// Returns the text of a 1-indexed line in the given file.
    #[must_use]
    pub fn line_text(&self, file_id: FileID, line: usize) -> Option<&str> {
        self.get_file(file_id)?.line_text(line)
    }
}

/// A span in a source file, with resolved positions at both ends.
///
/// This is the form diagnostics carry: it knows its file and its 1-indexed
/// line/column endpoints, so rendering needs no further lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// Starting position of the span
    pub start: Position,
    /// Ending position of the span (exclusive)
    pub end: Position,
    /// File identifier
    pub file_id: FileID,
}

impl SourceSpan {
    /// Creates a new span with the given start and end positions and file ID.
    #[must_use]
    pub const fn new(start: Position, end: Position, file_id: FileID) -> Self {
        Self { start, end, file_id }
    }
}

/// A simple span that only contains start and end byte offsets.
///
/// Tokens and AST nodes carry these; a `Span` is upgraded to a
/// [`SourceSpan`] only when a diagnostic needs line/column information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start offset
    pub start: usize,
    /// End offset
    pub end: usize,
}

impl Span {
    /// Creates a new simple span with the given start and end offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self { Self { start, end } }

    /// Merges two spans, creating a new span that covers both.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl Default for Span {
    fn default() -> Self { Self::new(0, 0) }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self { Self { start: range.start, end: range.end } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content: &str) -> SourceFile {
        SourceFile::new(FileID::new(0), "a.fern".into(), content.into())
    }

    #[test]
    fn offsets_resolve_across_lines() {
        let file = file("let x = 1\nx + 2\n");

        assert_eq!(file.position_from_offset(0), Position::new(1, 1, 0));
        assert_eq!(file.position_from_offset(4), Position::new(1, 5, 4));
        // The newline itself still belongs to line 1
        assert_eq!(file.position_from_offset(9), Position::new(1, 10, 9));
        assert_eq!(file.position_from_offset(10), Position::new(2, 1, 10));
        assert_eq!(file.position_from_offset(14), Position::new(2, 5, 14));
    }

    #[test]
    fn offsets_past_the_end_clamp_to_eof() {
        let file = file("ab\nc");

        // Where a zero-width EOF token points
        assert_eq!(file.position_from_offset(4), Position::new(2, 2, 4));
        assert_eq!(file.position_from_offset(100), file.position_from_offset(4));
    }

    #[test]
    fn position_in_empty_file() {
        let file = file("");

        assert_eq!(file.position_from_offset(0), Position::new(1, 1, 0));
    }

    #[test]
    fn line_text_excludes_the_newline() {
        let file = file("first\nsecond\nthird");

        assert_eq!(file.line_text(1), Some("first"));
        assert_eq!(file.line_text(2), Some("second"));
        assert_eq!(file.line_text(3), Some("third"));
        assert_eq!(file.line_text(4), None);
        assert_eq!(file.line_text(0), None);
    }

    #[test]
    fn trailing_newline_yields_an_empty_last_line() {
        let file = file("only\n");

        assert_eq!(file.line_text(1), Some("only"));
        assert_eq!(file.line_text(2), Some(""));
    }

    #[test]
    fn span_merge_covers_both() {
        let a = Span::new(3, 7);
        let b = Span::new(5, 12);

        assert_eq!(a.merge(&b), Span::new(3, 12));
    }

    #[test]
    fn manager_ids_are_registration_slots() {
        let mut manager = SourceManager::new();
        let a = manager.add_file("a.fern".into(), "1".into());
        let b = manager.add_file("b.fern".into(), "2".into());

        assert_ne!(a, b);
        assert_eq!(manager.get_file(a).map(|f| f.content.as_str()), Some("1"));
        assert_eq!(manager.get_file(b).map(|f| f.content.as_str()), Some("2"));
        assert_eq!(manager.line_text(b, 1), Some("2"));
    }
}
