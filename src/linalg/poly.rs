//! Univariate polynomials as coefficient slices, constant term first

use crate::arith::FieldArithmetic;
use crate::error::{GfError, Result};

/// Evaluate `coeffs[0] + coeffs[1]·x + ...` by Horner's method.
///
/// The empty polynomial evaluates to zero.
pub fn evaluate_polynomial<T: FieldArithmetic>(coeffs: &[T], x: &T) -> Result<T> {
    coeffs
        .iter()
        .rev()
        .try_fold(x.zero_like(), |acc, c| acc.checked_mul(x)?.checked_add(c))
}

/// Degree of the polynomial, `None` for the zero polynomial
pub fn poly_degree<T: FieldArithmetic>(coeffs: &[T]) -> Option<usize> {
    coeffs.iter().rposition(|c| !c.is_zero())
}

/// Drop trailing zero coefficients
pub fn poly_trim<T: FieldArithmetic>(mut coeffs: Vec<T>) -> Vec<T> {
    let len = poly_degree(&coeffs).map_or(0, |d| d + 1);
    coeffs.truncate(len);
    coeffs
}

/// Product of two polynomials
pub fn poly_mul<T: FieldArithmetic>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    let (Some(first), false) = (a.first(), b.is_empty()) else {
        return Ok(Vec::new());
    };

    let mut product = vec![first.zero_like(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            product[i + j] = product[i + j].checked_add(&x.checked_mul(y)?)?;
        }
    }
    Ok(poly_trim(product))
}

/// Long division: returns `(quotient, remainder)` with `num = quotient·den +
/// remainder` and `deg(remainder) < deg(den)`. Both results are trimmed.
///
/// # Errors
///
/// [`GfError::DivisionByZero`] if `den` is the zero polynomial
pub fn poly_div_rem<T: FieldArithmetic>(num: &[T], den: &[T]) -> Result<(Vec<T>, Vec<T>)> {
    let den_deg = poly_degree(den).ok_or(GfError::DivisionByZero)?;
    let lead = &den[den_deg];

    let mut remainder = poly_trim(num.to_vec());
    let Some(num_deg) = poly_degree(&remainder) else {
        return Ok((Vec::new(), Vec::new()));
    };
    if num_deg < den_deg {
        return Ok((Vec::new(), remainder));
    }

    let mut quotient = vec![lead.zero_like(); num_deg - den_deg + 1];
    for shift in (0..=num_deg - den_deg).rev() {
        let top = &remainder[shift + den_deg];
        if top.is_zero() {
            continue;
        }
        let factor = top.checked_div(lead)?;
        for (i, d) in den[..=den_deg].iter().enumerate() {
            let scaled = factor.checked_mul(d)?;
            remainder[shift + i] = remainder[shift + i].checked_sub(&scaled)?;
        }
        quotient[shift] = factor;
    }

    Ok((poly_trim(quotient), poly_trim(remainder)))
}
