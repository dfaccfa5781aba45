//! Field elements and their operators

use super::field::{is_zero, Field};
use crate::arith::FieldArithmetic;
use crate::error::{GfError, Result};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Coefficient storage; inline for degrees up to 4
pub(crate) type Coefficients = SmallVec<[u32; 4]>;

/// Input accepted by [`Field::element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValue {
    /// Promoted to `[v mod p, 0, ...]`
    Int(i128),
    /// Coefficients lowest degree first, each in `[0, p)`
    Coefficients(SmallVec<[i64; 4]>),
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ElementValue {
                fn from(v: $t) -> Self {
                    ElementValue::Int(v as i128)
                }
            }
        )*
    };
}

int_value!(i32, i64, u32, u64, usize);

macro_rules! coefficient_value {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> From<[$t; N]> for ElementValue {
                fn from(v: [$t; N]) -> Self {
                    ElementValue::Coefficients(v.iter().map(|&c| c as i64).collect())
                }
            }

            impl From<&[$t]> for ElementValue {
                fn from(v: &[$t]) -> Self {
                    ElementValue::Coefficients(v.iter().map(|&c| c as i64).collect())
                }
            }

            impl From<Vec<$t>> for ElementValue {
                fn from(v: Vec<$t>) -> Self {
                    ElementValue::Coefficients(v.into_iter().map(|c| c as i64).collect())
                }
            }
        )*
    };
}

coefficient_value!(i32, i64, u32);

/// An element of a [`Field`]
///
/// Immutable: every operation returns a new element. Elements of different
/// fields never combine; the `checked_*` methods of [`FieldArithmetic`]
/// report [`GfError::FieldMismatch`], and the operators panic with the same
/// message.
#[derive(Clone, Debug)]
pub struct Element {
    field: Field,
    coefs: Coefficients,
}

impl Element {
    /// Caller guarantees `coefs` has length `m` with entries in `[0, p)`
    pub(crate) fn from_parts(field: Field, coefs: Coefficients) -> Self {
        Self { field, coefs }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Coefficients lowest degree first, always exactly `m` of them
    pub fn coefficients(&self) -> &[u32] {
        &self.coefs
    }

    /// Canonical index `Σ c_i p^i`
    pub fn index(&self) -> u64 {
        self.field.inner().index_of(&self.coefs)
    }

    pub fn is_one(&self) -> bool {
        self.coefs[0] == 1 && is_zero(&self.coefs[1..])
    }

    /// `self^exp`, with `0^0 = 1`
    pub fn pow(&self, exp: u64) -> Element {
        self.with_coefs(self.field.inner().pow(&self.coefs, exp))
    }

    /// Multiplicative inverse
    ///
    /// # Errors
    ///
    /// [`GfError::DivisionByZero`] for the additive identity
    pub fn inverse(&self) -> Result<Element> {
        let inner = self.field.inner();
        Ok(self.with_coefs(inner.div(&inner.one(), &self.coefs)?))
    }

    /// Multiplicative order, or `None` for zero
    pub fn multiplicative_order(&self) -> Option<u64> {
        self.field.inner().multiplicative_order(&self.coefs)
    }

    fn with_coefs(&self, coefs: Coefficients) -> Element {
        Element::from_parts(self.field.clone(), coefs)
    }

    fn check_compatible(&self, rhs: &Element) -> Result<()> {
        if self.field.same_field(&rhs.field) {
            Ok(())
        } else {
            Err(GfError::FieldMismatch)
        }
    }
}

impl FieldArithmetic for Element {
    fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs)?;
        Ok(self.with_coefs(self.field.inner().add(&self.coefs, &rhs.coefs)))
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs)?;
        Ok(self.with_coefs(self.field.inner().sub(&self.coefs, &rhs.coefs)))
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs)?;
        Ok(self.with_coefs(self.field.inner().mul(&self.coefs, &rhs.coefs)))
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs)?;
        Ok(self.with_coefs(self.field.inner().div(&self.coefs, &rhs.coefs)?))
    }

    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        is_zero(&self.coefs)
    }

    fn checked_neg(&self) -> Result<Self> {
        Ok(-self)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.field.same_field(&other.field) && self.coefs == other.coefs
    }
}

impl Eq for Element {}

/// Compares against the integer promoted into this element's field
impl PartialEq<i64> for Element {
    fn eq(&self, other: &i64) -> bool {
        *self == self.field.from_int(*other as i128)
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefs.hash(state);
    }
}

/// `3` or `(1, 3)`; the alternate form `{:#}` prefixes the field, `[F_49] (1, 3)`
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "[{}] ", self.field)?;
        }
        if self.coefs.len() == 1 {
            return write!(f, "{}", self.coefs[0]);
        }
        write!(f, "(")?;
        for (i, c) in self.coefs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl Neg for &Element {
    type Output = Element;

    fn neg(self) -> Element {
        self.with_coefs(self.field.inner().neg(&self.coefs))
    }
}

impl Neg for Element {
    type Output = Element;

    fn neg(self) -> Element {
        -&self
    }
}

#[inline]
fn unwrap_op(result: Result<Element>) -> Element {
    result.unwrap_or_else(|e| panic!("{}", e))
}

// Operators panic where the checked methods would return an error,
// the same way integer division panics on a zero divisor.
macro_rules! element_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Element> for &Element {
            type Output = Element;

            fn $method(self, rhs: &Element) -> Element {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl $trait<Element> for Element {
            type Output = Element;

            fn $method(self, rhs: Element) -> Element {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl $trait<&Element> for Element {
            type Output = Element;

            fn $method(self, rhs: &Element) -> Element {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl $trait<Element> for &Element {
            type Output = Element;

            fn $method(self, rhs: Element) -> Element {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl $trait<i64> for &Element {
            type Output = Element;

            fn $method(self, rhs: i64) -> Element {
                unwrap_op(self.$checked(&self.field.from_int(rhs as i128)))
            }
        }

        impl $trait<i64> for Element {
            type Output = Element;

            fn $method(self, rhs: i64) -> Element {
                (&self).$method(rhs)
            }
        }

        impl $trait<&Element> for i64 {
            type Output = Element;

            fn $method(self, rhs: &Element) -> Element {
                unwrap_op(rhs.field.from_int(self as i128).$checked(rhs))
            }
        }

        impl $trait<Element> for i64 {
            type Output = Element;

            fn $method(self, rhs: Element) -> Element {
                self.$method(&rhs)
            }
        }
    };
}

element_op!(Add, add, checked_add);
element_op!(Sub, sub, checked_sub);
element_op!(Mul, mul, checked_mul);
element_op!(Div, div, checked_div);
