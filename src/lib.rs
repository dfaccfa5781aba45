//! Finite-field arithmetic over GF(p^m) and Reed-Solomon error correction
//!
//! ```
//! use gfrs::{Field, ReedSolomon};
//!
//! let field = Field::prime(11).unwrap();
//! let rs = ReedSolomon::with_default_points(&field, 5, 2).unwrap();
//!
//! let message = vec![field.from_int(2), field.from_int(3)];
//! let mut codeword = rs.encode(&message).unwrap();
//! codeword[1] = &codeword[1] + 4i64;
//!
//! assert_eq!(rs.decode(&codeword).unwrap(), message);
//! ```

pub mod arith;
pub mod config;
pub mod error;
pub mod galois;
pub mod linalg;
pub mod reed_solomon;
pub mod validation;

pub use arith::FieldArithmetic;
pub use config::FieldConfig;
pub use error::{GfError, Result};
pub use galois::{Element, ElementValue, Field, FieldBuilder};
pub use linalg::{evaluate_polynomial, gaussian_solve};
pub use reed_solomon::{ReedSolomon, ReedSolomonBuilder};
pub use validation::is_prime;
