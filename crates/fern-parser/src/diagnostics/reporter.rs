//! Diagnostic reporting for the Fern front end.
//!
//! The [`DiagnosticReporter`] collects diagnostics during lexing and
//! parsing and renders them with source snippets and caret underlines.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Arc;

use fern_source::types::SourceManager;

use super::error::{Diagnostic, DiagnosticLevel};

/// Collects and formats diagnostic messages.
#[derive(Debug, Clone)]
pub struct DiagnosticReporter {
    /// Source manager for looking up spans
    source_manager: Arc<SourceManager>,
    /// Collection of diagnostics, in the order they were reported
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    /// Create a new diagnostic reporter with the given source manager.
    #[must_use]
    pub const fn new(source_manager: Arc<SourceManager>) -> Self {
        Self { source_manager, diagnostics: Vec::new() }
    }

    /// Add a diagnostic to the collection.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) { self.diagnostics.push(diagnostic); }

    /// Report anything convertible into a diagnostic.
    pub fn report<E>(&mut self, error: E)
    where E: Into<Diagnostic> {
        self.add_diagnostic(error.into());
    }

    /// Check if there are any error-level diagnostics.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == DiagnosticLevel::Error)
    }

    /// Get the number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize { self.diagnostics.len() }

    /// Check if there are no diagnostics.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.diagnostics.is_empty() }

    /// Get the collected diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

    /// Format and return all diagnostics as a string.
    #[must_use]
    pub fn emit(&self) -> String {
        let mut output = String::new();

        for diagnostic in &self.diagnostics {
            self.format_diagnostic(&mut output, diagnostic);
        }

        output
    }

    /// Print all diagnostics to the given writer (normally stderr).
    ///
    /// ## Errors
    ///
    /// Returns an I/O error if writing to the output writer fails.
    pub fn print<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            let mut formatted = String::new();
            self.format_diagnostic(&mut formatted, diagnostic);
            write!(writer, "{formatted}")?;
        }

        Ok(())
    }

    /// Format a single diagnostic with a source snippet and caret underline:
    ///
    /// ```text
    /// error: Expected ), found <newline>
    ///   --> main.fern:3:14
    ///    |
    ///  3 |     print(1, 2
    ///    |              ^
    /// ```
    fn format_diagnostic(&self, output: &mut String, diagnostic: &Diagnostic) {
        let Some(file) = self.source_manager.get_file(diagnostic.span.file_id) else {
            // Without the file, fall back to a bare message
            let _ = writeln!(output, "{}: {}", diagnostic.level, diagnostic.message);
            return;
        };

        let color = diagnostic.level.color_code();
        let reset = DiagnosticLevel::reset_code();
        let start = diagnostic.span.start;

        // Header line
        let _ = writeln!(output, "{}{}{}: {}", color, diagnostic.level, reset, diagnostic.message);

        // File location line
        let _ = writeln!(output, "  --> {}:{}:{}", file.name, start.line, start.column);
        let _ = writeln!(output, "   |");

        // Source line with caret underline
        if let Some(line_text) = self.source_manager.line_text(diagnostic.span.file_id, start.line)
        {
            let _ = writeln!(output, "{:>3} | {}", start.line, line_text);

            let spaces = " ".repeat(start.column - 1);
            let length = if start.line == diagnostic.span.end.line {
                (diagnostic.span.end.column - start.column).max(1)
            } else {
                // Multi-line spans underline to the end of the first line
                line_text.len().saturating_sub(start.column - 1).max(1)
            };
            let carets = "^".repeat(length);

            let _ = writeln!(output, "    | {spaces}{color}{carets}{reset}");
        }

        // Notes
        for note in &diagnostic.notes {
            let _ = writeln!(output, "   = note: {note}");
        }

        output.push('\n');
    }
}
