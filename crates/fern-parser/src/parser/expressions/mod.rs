//! Expression parsing.
//!
//! Split by concern: `core` holds the Pratt loop and primary dispatch,
//! `operators` the binding-power table and operator node builders,
//! `literals` the literal and string-interpolation rules, `containers` the
//! bracketed forms (lists, maps, tuples, lambdas, blocks), and `special`
//! the keyword-introduced forms (`if`, `match`, `with`, loops, processes).

mod containers;
mod core;
mod literals;
mod operators;
mod special;
