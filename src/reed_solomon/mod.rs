//! Reed-Solomon error correction
//!
//! Codes are defined by evaluation: a length-`k` message is the coefficient
//! vector of a polynomial of degree below `k`, and the codeword is that
//! polynomial evaluated at `n` distinct nonzero points. Decoding uses the
//! Berlekamp-Welch algorithm and corrects up to `⌊(n-k)/2⌋` corrupted symbols.
//!
//! The codec only relies on [`FieldArithmetic`](crate::arith::FieldArithmetic)
//! and the helpers in [`linalg`](crate::linalg).

pub mod builder;
pub mod codec;

pub use builder::ReedSolomonBuilder;
pub use codec::{default_evaluation_points, ReedSolomon};
