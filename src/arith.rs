//! Arithmetic capability shared by field elements and numeric stand-ins
//!
//! Generic code in [`linalg`](crate::linalg) and
//! [`reed_solomon`](crate::reed_solomon) only talks to values through this
//! trait, so it works unchanged over [`Element`](crate::galois::Element),
//! `f64`, or any other type providing exact (or exact-enough) field operations.

use crate::error::{GfError, Result};

/// Field-like arithmetic with fallible operations
///
/// Identities are produced from an existing value (`zero_like`, `one_like`)
/// because the field of an element is only known at runtime.
pub trait FieldArithmetic: Clone + PartialEq + std::fmt::Debug {
    fn checked_add(&self, rhs: &Self) -> Result<Self>;

    fn checked_sub(&self, rhs: &Self) -> Result<Self>;

    fn checked_mul(&self, rhs: &Self) -> Result<Self>;

    /// Fails with [`GfError::DivisionByZero`] when `rhs` is the additive identity.
    fn checked_div(&self, rhs: &Self) -> Result<Self>;

    /// Additive identity of the same field as `self`
    fn zero_like(&self) -> Self;

    /// Multiplicative identity of the same field as `self`
    fn one_like(&self) -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == self.zero_like()
    }

    #[inline]
    fn checked_neg(&self) -> Result<Self> {
        self.zero_like().checked_sub(self)
    }
}

/// Reals as a stand-in field. Equality with zero is exact, so only use this
/// with inputs whose elimination stays exactly representable.
impl FieldArithmetic for f64 {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self - rhs)
    }

    #[inline]
    fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    #[inline]
    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if *rhs == 0.0 {
            return Err(GfError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    #[inline]
    fn zero_like(&self) -> Self {
        0.0
    }

    #[inline]
    fn one_like(&self) -> Self {
        1.0
    }
}
