//! Builder pattern for ReedSolomon

use super::codec::ReedSolomon;
use crate::error::{GfError, Result};
use crate::galois::{Element, Field};

/// Builder for a [`ReedSolomon`] code over a [`Field`]
///
/// The message length can be given directly or derived from the number of
/// errors the code must correct.
///
/// # Example
///
/// ```
/// use gfrs::{Field, ReedSolomonBuilder};
///
/// let field = Field::prime(11).unwrap();
/// let rs = ReedSolomonBuilder::new()
///     .field(field)
///     .length(7)
///     .correcting(2)
///     .build()
///     .unwrap();
/// assert_eq!(rs.k(), 3);
/// ```
pub struct ReedSolomonBuilder {
    field: Option<Field>,
    n: Option<usize>,
    k: Option<usize>,
    correctable: Option<usize>,
    evaluation_points: Option<Vec<Element>>,
}

impl ReedSolomonBuilder {
    pub fn new() -> Self {
        Self {
            field: None,
            n: None,
            k: None,
            correctable: None,
            evaluation_points: None,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Codeword length `n`
    pub fn length(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    /// Message length `k`
    pub fn message_length(mut self, k: usize) -> Self {
        self.k = Some(k);
        self.correctable = None;
        self
    }

    /// Choose `k = n - 2t` so that `t` corrupted symbols can be corrected
    pub fn correcting(mut self, t: usize) -> Self {
        self.correctable = Some(t);
        self.k = None;
        self
    }

    /// Explicit evaluation points; the length defaults to their count
    pub fn evaluation_points(mut self, points: Vec<Element>) -> Self {
        self.evaluation_points = Some(points);
        self
    }

    /// Build the code
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidCodeParameters`] if:
    /// - No field was provided
    /// - Neither a length nor evaluation points were provided
    /// - Neither a message length nor a correction capacity was provided
    /// - The resulting parameters are rejected by [`ReedSolomon::new`]
    pub fn build(self) -> Result<ReedSolomon> {
        let field = self
            .field
            .ok_or_else(|| GfError::InvalidCodeParameters("No field provided".to_string()))?;

        let n = match (self.n, &self.evaluation_points) {
            (Some(n), _) => n,
            (None, Some(points)) => points.len(),
            (None, None) => {
                return Err(GfError::InvalidCodeParameters(
                    "No code length provided".to_string(),
                ))
            }
        };

        let k = match (self.k, self.correctable) {
            (Some(k), _) => k,
            (None, Some(t)) => t
                .checked_mul(2)
                .and_then(|r| n.checked_sub(r))
                .ok_or_else(|| {
                    GfError::InvalidCodeParameters(format!(
                        "length {} cannot correct {} errors",
                        n, t
                    ))
                })?,
            (None, None) => {
                return Err(GfError::InvalidCodeParameters(
                    "No message length provided".to_string(),
                ))
            }
        };

        match self.evaluation_points {
            Some(points) => ReedSolomon::new(&field, n, k, points),
            None => ReedSolomon::with_default_points(&field, n, k),
        }
    }
}

impl Default for ReedSolomonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
