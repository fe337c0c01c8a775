//! Type representation for the Fern programming language.
//!
//! This crate defines the post-inference type IR consumed by the checker and
//! the code generator. The parser never produces these types directly - it
//! emits surface type annotations; the checker lowers annotations into this
//! representation and introduces fresh type variables through a
//! [`session::TypeSession`].

pub mod session;
pub mod ty;

pub use session::TypeSession;
pub use ty::{Type, TypeVar};
