//! Exact linear algebra and polynomial helpers over any [`FieldArithmetic`] type
//!
//! Matrices are row-major `Vec<Vec<T>>`; polynomials are coefficient slices
//! with the constant term first.
//!
//! [`FieldArithmetic`]: crate::arith::FieldArithmetic

pub mod matrix;
pub mod poly;

pub use matrix::{gaussian_solve, row_reduce, RowReduction};
pub use poly::{evaluate_polynomial, poly_degree, poly_div_rem, poly_mul, poly_trim};
