//! Field construction and raw coefficient arithmetic

use super::element::{Coefficients, Element, ElementValue};
use super::tables::LogTables;
use crate::config::FieldConfig;
use crate::error::{GfError, Result};
use crate::validation::{field_order, is_prime, validate_reduction_poly};
use log::debug;
use smallvec::smallvec;
use std::fmt;
use std::sync::Arc;

/// Shared immutable state behind a [`Field`] handle
pub(crate) struct FieldInner {
    p: u32,
    m: usize,
    order: u64,
    reduction: Option<Vec<u32>>,
    tables: Option<LogTables>,
}

impl FieldInner {
    #[inline]
    pub(crate) fn characteristic(&self) -> u32 {
        self.p
    }

    #[inline]
    pub(crate) fn degree(&self) -> usize {
        self.m
    }

    #[inline]
    pub(crate) fn order(&self) -> u64 {
        self.order
    }

    pub(crate) fn zero(&self) -> Coefficients {
        smallvec![0; self.m]
    }

    pub(crate) fn one(&self) -> Coefficients {
        let mut coefs = self.zero();
        coefs[0] = 1;
        coefs
    }

    /// Canonical index `Σ c_i p^i`
    pub(crate) fn index_of(&self, coefs: &[u32]) -> u64 {
        coefs
            .iter()
            .rev()
            .fold(0u64, |acc, &c| acc * self.p as u64 + c as u64)
    }

    /// Inverse of [`index_of`](Self::index_of) for `index < q`
    pub(crate) fn coefficients_of(&self, mut index: u64) -> Coefficients {
        let p = self.p as u64;
        (0..self.m)
            .map(|_| {
                let digit = index % p;
                index /= p;
                digit as u32
            })
            .collect()
    }

    pub(crate) fn add(&self, a: &[u32], b: &[u32]) -> Coefficients {
        let p = self.p as u64;
        a.iter()
            .zip(b)
            .map(|(&x, &y)| ((x as u64 + y as u64) % p) as u32)
            .collect()
    }

    pub(crate) fn sub(&self, a: &[u32], b: &[u32]) -> Coefficients {
        let p = self.p as u64;
        a.iter()
            .zip(b)
            .map(|(&x, &y)| ((x as u64 + p - y as u64) % p) as u32)
            .collect()
    }

    pub(crate) fn neg(&self, a: &[u32]) -> Coefficients {
        let p = self.p as u64;
        a.iter().map(|&x| ((p - x as u64) % p) as u32).collect()
    }

    /// Schoolbook product reduced mod the reduction polynomial. Never touches
    /// the log tables, so it is usable while they are being built.
    pub(crate) fn mul_direct(&self, a: &[u32], b: &[u32]) -> Coefficients {
        let p = self.p as u64;
        let m = self.m;

        let reduction = match &self.reduction {
            Some(g) => g,
            None => return smallvec![((a[0] as u64 * b[0] as u64) % p) as u32],
        };

        let mut product = vec![0u64; 2 * m - 1];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                product[i + j] = (product[i + j] + x as u64 * y as u64) % p;
            }
        }

        // Long division by the monic g: clear x^top by subtracting c·g·x^(top-m)
        for top in (m..2 * m - 1).rev() {
            let c = product[top];
            if c == 0 {
                continue;
            }
            let base = top - m;
            for (i, &g) in reduction.iter().enumerate() {
                product[base + i] = (product[base + i] + p - (c * g as u64) % p) % p;
            }
        }

        product[..m].iter().map(|&c| c as u32).collect()
    }

    pub(crate) fn pow_direct(&self, base: &[u32], mut exp: u64) -> Coefficients {
        let mut result = self.one();
        let mut square: Coefficients = base.into();
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul_direct(&result, &square);
            }
            exp >>= 1;
            if exp > 0 {
                square = self.mul_direct(&square, &square);
            }
        }
        result
    }

    pub(crate) fn mul(&self, a: &[u32], b: &[u32]) -> Coefficients {
        if is_zero(a) || is_zero(b) {
            return self.zero();
        }
        match &self.tables {
            Some(tables) => {
                self.coefficients_of(tables.mul_index(self.index_of(a), self.index_of(b)))
            }
            None => self.mul_direct(a, b),
        }
    }

    pub(crate) fn div(&self, a: &[u32], b: &[u32]) -> Result<Coefficients> {
        if is_zero(b) {
            return Err(GfError::DivisionByZero);
        }
        if is_zero(a) {
            return Ok(self.zero());
        }
        Ok(match &self.tables {
            Some(tables) => {
                self.coefficients_of(tables.div_index(self.index_of(a), self.index_of(b)))
            }
            // b^(q-1) = 1, so b^(q-2) is the inverse
            None => self.mul_direct(a, &self.pow_direct(b, self.order - 2)),
        })
    }

    pub(crate) fn pow(&self, base: &[u32], exp: u64) -> Coefficients {
        if is_zero(base) {
            return if exp == 0 { self.one() } else { self.zero() };
        }
        match &self.tables {
            Some(tables) => self.coefficients_of(tables.pow_index(self.index_of(base), exp)),
            None => self.pow_direct(base, exp),
        }
    }

    /// Multiplicative order of `elem` found by repeated multiplication, or
    /// `None` if the powers never return to one within `q - 1` steps.
    pub(crate) fn multiplicative_order(&self, elem: &[u32]) -> Option<u64> {
        if is_zero(elem) {
            return None;
        }
        let one = self.one();
        let mut power: Coefficients = elem.into();
        let mut order = 1u64;
        while power != one {
            if order >= self.order - 1 || is_zero(&power) {
                return None;
            }
            power = self.mul_direct(&power, elem);
            order += 1;
        }
        Some(order)
    }
}

#[inline]
pub(crate) fn is_zero(coefs: &[u32]) -> bool {
    coefs.iter().all(|&c| c == 0)
}

/// A finite field GF(p^m)
///
/// `Field` is a cheap handle to immutable shared state; clone it freely and
/// share it across threads. Two handles denote the same field only if one
/// was cloned from the other: separately constructed fields never mix, even
/// with identical parameters.
#[derive(Clone)]
pub struct Field {
    inner: Arc<FieldInner>,
}

impl Field {
    /// Construct GF(p^m).
    ///
    /// `reduction_poly` lists the coefficients of a monic degree-`m`
    /// polynomial lowest degree first (`[1, 0, 1]` is `x² + 1`). It is
    /// required when `m > 1` and ignored when `m = 1`. It must be
    /// irreducible over GF(p); this is not checked.
    ///
    /// With `find_primitive_elem` the constructor searches for a primitive
    /// element and builds discrete-log tables for fast multiplication and
    /// division.
    ///
    /// # Errors
    ///
    /// - [`GfError::InvalidFieldParameters`] for a non-prime `p`, `m = 0`, an
    ///   order overflowing `u64`, or a missing/malformed reduction polynomial
    /// - [`GfError::NoPrimitiveElementFound`] if tables were requested and
    ///   no element of order `q - 1` exists
    pub fn new(
        p: u32,
        m: usize,
        reduction_poly: Option<&[u32]>,
        find_primitive_elem: bool,
    ) -> Result<Self> {
        let config = FieldConfig {
            find_primitive_elem,
            ..FieldConfig::default()
        };
        Self::with_config(p, m, reduction_poly, &config)
    }

    /// Construct the prime field GF(p) with log tables
    pub fn prime(p: u32) -> Result<Self> {
        Self::new(p, 1, None, true)
    }

    /// Construct GF(p^m) with explicit configuration.
    ///
    /// A [`FieldConfig::primitive_element`] is used instead of searching. It
    /// must have multiplicative order `q - 1`, otherwise construction fails
    /// with [`GfError::InvalidFieldParameters`].
    pub fn with_config(
        p: u32,
        m: usize,
        reduction_poly: Option<&[u32]>,
        config: &FieldConfig,
    ) -> Result<Self> {
        if !is_prime(p as u64) {
            return Err(GfError::InvalidFieldParameters(format!(
                "characteristic {} is not prime",
                p
            )));
        }
        if m == 0 {
            return Err(GfError::InvalidFieldParameters(
                "degree must be at least 1".to_string(),
            ));
        }
        let order = field_order(p, m)?;

        let reduction = if m > 1 {
            let poly = reduction_poly.ok_or_else(|| {
                GfError::InvalidFieldParameters(format!(
                    "degree {} requires a reduction polynomial",
                    m
                ))
            })?;
            validate_reduction_poly(p, m, poly)?;
            Some(poly.to_vec())
        } else {
            if reduction_poly.is_some() {
                debug!("Ignoring reduction polynomial for prime field GF({})", p);
            }
            None
        };

        let mut inner = FieldInner {
            p,
            m,
            order,
            reduction,
            tables: None,
        };

        if config.find_primitive_elem || config.primitive_element.is_some() {
            let limit = config.max_table_order.min(u32::MAX as u64);
            if order > limit {
                return Err(GfError::InvalidFieldParameters(format!(
                    "order {} exceeds the log table limit {}",
                    order, limit
                )));
            }
            inner.tables = Some(LogTables::build(&inner, config)?);
        }

        debug!(
            "Constructed GF({}^{}) of order {} ({})",
            p,
            m,
            order,
            if inner.tables.is_some() {
                "log tables"
            } else {
                "direct arithmetic"
            }
        );

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    #[inline]
    pub(crate) fn inner(&self) -> &FieldInner {
        &self.inner
    }

    /// Whether `self` and `other` are handles to the same field
    #[inline]
    pub fn same_field(&self, other: &Field) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn characteristic(&self) -> u32 {
        self.inner.p
    }

    pub fn degree(&self) -> usize {
        self.inner.m
    }

    /// Number of elements `q = p^m`
    pub fn order(&self) -> u64 {
        self.inner.order
    }

    /// Reduction polynomial, lowest degree first (`None` for prime fields)
    pub fn reduction_poly(&self) -> Option<&[u32]> {
        self.inner.reduction.as_deref()
    }

    pub fn has_log_table(&self) -> bool {
        self.inner.tables.is_some()
    }

    /// The primitive element chosen at construction, if tables were built
    pub fn primitive_element(&self) -> Option<Element> {
        self.inner.tables.as_ref().map(|tables| {
            Element::from_parts(
                self.clone(),
                self.inner.coefficients_of(tables.primitive_index()),
            )
        })
    }

    /// Create an element from an integer or a coefficient sequence.
    ///
    /// Integers are reduced mod `p` into the constant coefficient. Sequences
    /// may be shorter than `m` (zero-padded) but every coefficient must
    /// already lie in `[0, p)`.
    ///
    /// # Errors
    ///
    /// [`GfError::OutOfRangeCoefficient`] or [`GfError::TooManyCoefficients`]
    pub fn element<V: Into<ElementValue>>(&self, value: V) -> Result<Element> {
        match value.into() {
            ElementValue::Int(v) => Ok(self.from_int(v)),
            ElementValue::Coefficients(coefs) => self.from_coefficients(&coefs),
        }
    }

    /// Promote an integer: `[v mod p, 0, ...]`
    pub fn from_int(&self, value: i128) -> Element {
        let c = value.rem_euclid(self.inner.p as i128) as u32;
        let mut coefs = self.inner.zero();
        coefs[0] = c;
        Element::from_parts(self.clone(), coefs)
    }

    /// Create an element from at most `m` coefficients in `[0, p)`
    pub fn from_coefficients(&self, coefs: &[i64]) -> Result<Element> {
        if coefs.len() > self.inner.m {
            return Err(GfError::TooManyCoefficients {
                got: coefs.len(),
                degree: self.inner.m,
            });
        }

        let mut reduced = self.inner.zero();
        for (slot, &c) in reduced.iter_mut().zip(coefs) {
            if c < 0 || c >= self.inner.p as i64 {
                return Err(GfError::OutOfRangeCoefficient {
                    coefficient: c,
                    characteristic: self.inner.p,
                });
            }
            *slot = c as u32;
        }

        Ok(Element::from_parts(self.clone(), reduced))
    }

    /// Element with canonical index `index`, or `None` if `index >= q`
    pub fn element_from_index(&self, index: u64) -> Option<Element> {
        (index < self.inner.order)
            .then(|| Element::from_parts(self.clone(), self.inner.coefficients_of(index)))
    }

    /// The element `α^exponent` for the primitive element `α`
    pub fn from_log(&self, exponent: u64) -> Result<Element> {
        let tables = self.inner.tables.as_ref().ok_or(GfError::MissingLogTable)?;
        Ok(Element::from_parts(
            self.clone(),
            self.inner.coefficients_of(tables.antilog_index(exponent)),
        ))
    }

    /// Discrete logarithm of a nonzero element to the primitive base
    pub fn log(&self, elem: &Element) -> Result<u64> {
        if !self.same_field(elem.field()) {
            return Err(GfError::FieldMismatch);
        }
        let tables = self.inner.tables.as_ref().ok_or(GfError::MissingLogTable)?;
        if is_zero(elem.coefficients()) {
            return Err(GfError::LogOfZero);
        }
        Ok(tables.log_of(self.inner.index_of(elem.coefficients())))
    }

    pub fn zero(&self) -> Element {
        Element::from_parts(self.clone(), self.inner.zero())
    }

    pub fn one(&self) -> Element {
        Element::from_parts(self.clone(), self.inner.one())
    }

    /// All `q` elements in canonical index order, zero first
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.inner.order)
            .map(move |i| Element::from_parts(self.clone(), self.inner.coefficients_of(i)))
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other)
    }
}

impl Eq for Field {}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F_{}", self.inner.order)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.inner.p, self.inner.m)
    }
}

/// Builder for [`Field`] with optional parameters and sensible defaults
///
/// # Example
///
/// ```
/// use gfrs::galois::FieldBuilder;
///
/// let field = FieldBuilder::new(2)
///     .degree(3)
///     .reduction_poly(&[1, 1, 0, 1])
///     .parallel(false)
///     .build()
///     .unwrap();
/// assert_eq!(field.order(), 8);
/// ```
pub struct FieldBuilder {
    p: u32,
    m: usize,
    reduction_poly: Option<Vec<u32>>,
    config: FieldConfig,
}

impl FieldBuilder {
    pub fn new(p: u32) -> Self {
        Self {
            p,
            m: 1,
            reduction_poly: None,
            config: FieldConfig::default(),
        }
    }

    pub fn degree(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    pub fn reduction_poly(mut self, poly: &[u32]) -> Self {
        self.reduction_poly = Some(poly.to_vec());
        self
    }

    pub fn find_primitive_elem(mut self, find: bool) -> Self {
        self.config.find_primitive_elem = find;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.config.threads = threads;
        self
    }

    /// Use a known primitive element, coefficients lowest degree first
    pub fn primitive_element(mut self, coefs: &[u32]) -> Self {
        self.config.primitive_element = Some(coefs.to_vec());
        self
    }

    pub fn config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Field> {
        Field::with_config(self.p, self.m, self.reduction_poly.as_deref(), &self.config)
    }
}
