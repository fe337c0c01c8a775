//! # Fern Parser
//!
//! The front end of the Fern compiler: a layout-aware lexer and a recursive
//! descent parser producing an arena-allocated AST.
//!
//! ## Key Features
//!
//! - **Layout syntax**: indentation is turned into synthetic INDENT/DEDENT/
//!   NEWLINE tokens, suppressed inside brackets.
//! - **String interpolation**: `"Hi, {name}!"` is lexed as a begin/mid/end
//!   token sequence with the embedded expressions tokenized normally.
//! - **Error recovery**: the parser reports a diagnostic, enters panic mode,
//!   and resumes at the next statement boundary, so a single pass reports
//!   multiple errors.
//! - **Speculative parsing**: bounded backtracking through full lexer state
//!   snapshots disambiguates lambdas from grouped expressions.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use fern_parser::parser::Parser;
//! use fern_source::types::SourceManager;
//!
//! let source = "fn main():\n    let x = 1\n    x\n";
//! let mut manager = SourceManager::new();
//! let file_id = manager.add_file("example.fern".to_string(), source.to_string());
//!
//! let mut parser = Parser::new(source, file_id, Arc::new(manager));
//! let program = parser.parse_program();
//! assert!(!parser.had_error());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
