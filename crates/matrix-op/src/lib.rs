//! Fixed-size matrix and vector primitives.
//!
//! This crate provides a handful of dense linear algebra kernels for matrices and vectors whose
//! dimensions are known at compile time:
//!
//! - [`select_row`] and [`replace_row`] to read and overwrite a single matrix row,
//! - [`dot_product`] of two vectors,
//! - [`transpose`], [`right_multiply`] (matrix-vector product), and [`multiply`] (matrix-matrix
//!   product).
//!
//! The free functions write into a caller-provided output and never allocate. [`Matrix`] and
//! [`Vector`] additionally offer method and operator forms that return owned values; those are
//! implemented in terms of the free functions.
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are const generic parameters. Multiplying matrices whose inner dimensions don't
//!   match, or taking the dot product of vectors of different lengths, fails to compile rather
//!   than failing at runtime.
//! - Matrices use a single, row-major, unpadded layout. A `Matrix<T, R, C>` has the same memory
//!   layout as a flat `[T; R * C]` array in which element `(i, j)` lives at index `i * C + j`.
//! - Kernels are naive loops. Numerical stability beyond that, decompositions, sparse storage,
//!   broadcasting, and dynamically-sized matrices are out of scope.
//!
//! # Example
//!
//! ```
//! # use matrix_op::*;
//! let a = Matrix::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//! ]);
//! let x = Vector::from([1.0, -1.0]);
//!
//! let mut a_tr = Matrix::ZERO;
//! transpose(&a, &mut a_tr);
//!
//! let mut mul = Vector::ZERO;
//! right_multiply(&a_tr, &x, &mut mul);
//! assert_eq!(mul, [-3.0, -3.0, -3.0]);
//! ```
//!
//! # Cargo Features
//!
//! * `f32`: makes [`Real`] an alias for [`f32`]. By default it is [`f64`].

mod error;
mod matrix;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;

/// The default scalar type.
///
/// This is [`f64`], or [`f32`] if the `f32` feature is enabled. All operations in this crate are
/// generic over the element type, so this only picks a default.
#[cfg(not(feature = "f32"))]
pub type Real = f64;

/// The default scalar type.
///
/// This is [`f64`], or [`f32`] if the `f32` feature is enabled. All operations in this crate are
/// generic over the element type, so this only picks a default.
#[cfg(feature = "f32")]
pub type Real = f32;

/// A matrix with [`Real`] elements.
pub type RealMatrix<const R: usize, const C: usize> = Matrix<Real, R, C>;
/// A vector with [`Real`] elements.
pub type RealVector<const N: usize> = Vector<Real, N>;
