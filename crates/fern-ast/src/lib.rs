//! Abstract Syntax Tree (AST) definitions for the Fern programming language.
//!
//! All nodes live in an [`ast::Ast`] arena and reference their children by
//! [`nodes::NodeId`]. Links are strictly downward: a parent owns its children
//! and no node points back up the tree. Dropping the arena invalidates every
//! node it produced at once.

#[macro_use]
pub mod macros;

pub mod ast;
pub mod nodes;
