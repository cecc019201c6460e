//! Matriz: dense row-major matrices with a declarative row builder.
//!
//! Matriz provides one value type, [`Matrix`], backed by a flat `Vec<f64>`,
//! with a small algebra (transpose, multiply, add, subtract, map, sum),
//! coordinate and row/column access, search, and iteration. Matrices are
//! immutable after construction; every transformation returns a new value.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::build(|b| {
//!     b.row([1, 2])?;
//!     b.row([3, 4])?;
//!     Ok(())
//! })?;
//! let b = Matrix::build(|b| {
//!     b.row([5, 6])?;
//!     b.row([7, 8])?;
//!     Ok(())
//! })?;
//!
//! let product = a.matmul(&b)?;
//! assert_eq!(product.get(0, 0)?, 19.0);
//! assert_eq!(product.transpose().get(0, 1)?, 22.0);
//! # Ok::<(), matriz::MatrizError>(())
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: The `Matrix` type and its operation set
//! - [`builder`]: Row-by-row construction, sealed behind [`Matrix::build`]
//! - [`error`]: Error type and `Result` alias

pub mod builder;
pub mod error;
pub mod matrix;
pub mod prelude;

pub use builder::MatrixBuilder;
pub use error::{MatrizError, Result};
pub use matrix::Matrix;
