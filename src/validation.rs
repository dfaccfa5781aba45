//! Shared validation logic for field parameters.

use crate::error::{GfError, Result};

/// Check if `n` is prime by trial division up to `sqrt(n)`.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Compute `p^m`, rejecting orders that overflow `u64`
pub fn field_order(p: u32, m: usize) -> Result<u64> {
    u32::try_from(m)
        .ok()
        .and_then(|exp| (p as u64).checked_pow(exp))
        .ok_or_else(|| {
            GfError::InvalidFieldParameters(format!("order {}^{} does not fit in 64 bits", p, m))
        })
}

/// Validate a reduction polynomial for a degree-`m` extension of `GF(p)`.
///
/// Coefficients are lowest degree first. The polynomial must have exactly
/// `m + 1` coefficients, all in `[0, p)`, and be monic. Irreducibility is
/// not checked.
pub fn validate_reduction_poly(p: u32, m: usize, poly: &[u32]) -> Result<()> {
    if poly.len() != m + 1 {
        return Err(GfError::InvalidFieldParameters(format!(
            "reduction polynomial must have {} coefficients, got {}",
            m + 1,
            poly.len()
        )));
    }

    if let Some(&c) = poly.iter().find(|&&c| c >= p) {
        return Err(GfError::InvalidFieldParameters(format!(
            "reduction polynomial coefficient {} is not in [0, {})",
            c, p
        )));
    }

    if poly[m] != 1 {
        return Err(GfError::InvalidFieldParameters(
            "reduction polynomial must be monic".to_string(),
        ));
    }

    Ok(())
}
