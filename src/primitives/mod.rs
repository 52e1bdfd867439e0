//! Core compute primitives (the Matrix container and its algebra).
//!
//! The container owns a flat row-major buffer with value semantics;
//! everything else in the crate composes on its public contract.

mod matrix;
mod ops;
mod reduce;

pub use matrix::{Axis, Matrix};
pub use reduce::Scope;
