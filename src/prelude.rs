//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::primitives::{Axis, Matrix, Scope};
