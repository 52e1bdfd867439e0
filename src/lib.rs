//! Matriz: generic dense matrix container for precision experiments.
//!
//! Matriz provides a value-semantics 2D numeric container with
//! shape-safe algebra, descriptive statistics, and small-matrix linear
//! algebra (determinant, transpose, submatrix, row/column surgery),
//! built to compare floating-point representations of differing width
//! against each other.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0])
//!     .expect("data length matches rows * cols");
//! let i = Matrix::<f64>::identity(2);
//!
//! let p = a.matmul(&i).expect("inner dimensions agree");
//! assert_eq!(p, a);
//!
//! assert!((a.det() - (-2.0)).abs() < 1e-12);
//! assert!((a.mean(Scope::All) - 2.5).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] container, operators, reductions
//! - [`io`]: whitespace text load/save
//! - [`random`]: seedable uniform random fill
//! - [`error`]: the crate error type
//!
//! # Design notes
//!
//! Shape mismatches on the allocating algebra (`add`, `sub`, `matmul`)
//! are real errors, so a failed operation is never confused with a
//! legitimately empty 0x0 operand. Checked element access and
//! reductions over out-of-range scopes keep the cheaper sentinel
//! policy instead; each method documents which side it is on. Bulk
//! loops go through rayon when the `parallel` feature (default on) is
//! enabled and the element count clears a configurable per-instance
//! threshold.

pub mod error;
pub mod io;
pub mod prelude;
pub mod primitives;
pub mod random;

pub use error::{Error, Result};
pub use primitives::{Axis, Matrix, Scope};
