//! Reed-Solomon encoding and Berlekamp-Welch decoding
//!
//! A message `m_0..m_{k-1}` is the polynomial `P(x) = Σ m_i x^i`; its
//! codeword is `P` evaluated at `n` fixed distinct nonzero points.
//!
//! Decoding solves for an error locator `E` (monic, degree `e`) and
//! `Q = P·E` from the linear constraints `Q(x_i) = r_i·E(x_i)`, then recovers
//! `P = Q / E`. With `e` equal to the true error count the square system has
//! a unique solution; with more it is singular, so candidate counts are
//! tried from `e_max = ⌊(n-k)/2⌋` downward.

use crate::arith::FieldArithmetic;
use crate::error::{GfError, Result};
use crate::galois::{Element, Field};
use crate::linalg::{evaluate_polynomial, gaussian_solve, poly_degree, poly_div_rem};
use log::{debug, trace};
use rustc_hash::FxHashSet as HashSet;

/// Reed-Solomon code of length `n` and dimension `k` over any
/// [`FieldArithmetic`] type
#[derive(Debug, Clone)]
pub struct ReedSolomon<T = Element> {
    n: usize,
    k: usize,
    evaluation_points: Vec<T>,
}

impl ReedSolomon<Element> {
    /// Construct a code over `field` evaluating at `evaluation_points`.
    ///
    /// # Errors
    ///
    /// [`GfError::InvalidCodeParameters`] unless `1 <= k < n <= q - 1` and
    /// the points are `n` distinct nonzero elements of `field`
    pub fn new(field: &Field, n: usize, k: usize, evaluation_points: Vec<Element>) -> Result<Self> {
        check_lengths(n, k)?;
        if n as u64 > field.order() - 1 {
            return Err(GfError::InvalidCodeParameters(format!(
                "code length {} exceeds the {} nonzero elements of {}",
                n,
                field.order() - 1,
                field
            )));
        }
        if evaluation_points.iter().any(|x| !x.field().same_field(field)) {
            return Err(GfError::InvalidCodeParameters(
                "evaluation points must belong to the code's field".to_string(),
            ));
        }

        let distinct: HashSet<u64> = evaluation_points.iter().map(Element::index).collect();
        if distinct.len() != evaluation_points.len() {
            return Err(GfError::InvalidCodeParameters(
                "evaluation points must be distinct".to_string(),
            ));
        }

        Self::from_points(n, k, evaluation_points)
    }

    /// Construct a code with the default evaluation points: `α^0..α^(n-1)`
    /// when the field has log tables, otherwise the nonzero elements with
    /// canonical indices `1..=n`.
    pub fn with_default_points(field: &Field, n: usize, k: usize) -> Result<Self> {
        let points = default_evaluation_points(field, n)?;
        Self::new(field, n, k, points)
    }

    pub fn field(&self) -> &Field {
        self.evaluation_points[0].field()
    }
}

/// The first `n` nonzero elements in log order (or canonical order without tables)
pub fn default_evaluation_points(field: &Field, n: usize) -> Result<Vec<Element>> {
    if n as u64 > field.order() - 1 {
        return Err(GfError::InvalidCodeParameters(format!(
            "{} has only {} nonzero elements, {} requested",
            field,
            field.order() - 1,
            n
        )));
    }

    if field.has_log_table() {
        (0..n as u64).map(|i| field.from_log(i)).collect()
    } else {
        (1..=n as u64)
            .map(|i| {
                field.element_from_index(i).ok_or_else(|| {
                    GfError::InvalidCodeParameters(format!("no element with index {}", i))
                })
            })
            .collect()
    }
}

fn check_lengths(n: usize, k: usize) -> Result<()> {
    if k == 0 || k >= n {
        return Err(GfError::InvalidCodeParameters(format!(
            "need 1 <= k < n, got n = {}, k = {}",
            n, k
        )));
    }
    Ok(())
}

impl<T: FieldArithmetic> ReedSolomon<T> {
    /// Construct a code from explicit points of any arithmetic type.
    ///
    /// # Errors
    ///
    /// [`GfError::InvalidCodeParameters`] unless `1 <= k < n` and the points
    /// are `n` distinct nonzero values
    pub fn from_points(n: usize, k: usize, evaluation_points: Vec<T>) -> Result<Self> {
        check_lengths(n, k)?;
        if evaluation_points.len() != n {
            return Err(GfError::InvalidCodeParameters(format!(
                "expected {} evaluation points, got {}",
                n,
                evaluation_points.len()
            )));
        }
        if evaluation_points.iter().any(|x| x.is_zero()) {
            return Err(GfError::InvalidCodeParameters(
                "evaluation points must be nonzero".to_string(),
            ));
        }
        for (i, x) in evaluation_points.iter().enumerate() {
            if evaluation_points[i + 1..].contains(x) {
                return Err(GfError::InvalidCodeParameters(
                    "evaluation points must be distinct".to_string(),
                ));
            }
        }

        Ok(Self {
            n,
            k,
            evaluation_points,
        })
    }

    /// Codeword length
    pub fn n(&self) -> usize {
        self.n
    }

    /// Message length
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of corrupted symbols that decoding is guaranteed to correct
    pub fn max_correctable(&self) -> usize {
        (self.n - self.k) / 2
    }

    pub fn evaluation_points(&self) -> &[T] {
        &self.evaluation_points
    }

    /// Evaluate the message polynomial at every evaluation point
    pub fn encode(&self, message: &[T]) -> Result<Vec<T>> {
        check_len(message, self.k)?;
        self.evaluation_points
            .iter()
            .map(|x| evaluate_polynomial(message, x))
            .collect()
    }

    /// Recover the message from a received word with at most
    /// [`max_correctable`](Self::max_correctable) corrupted symbols.
    ///
    /// More corruption is either detected ([`GfError::DecodingFailure`]) or,
    /// when the received word lies close to another codeword, decoded to a
    /// different message.
    pub fn decode(&self, received: &[T]) -> Result<Vec<T>> {
        check_len(received, self.n)?;

        for errors in (0..=self.max_correctable()).rev() {
            let (matrix, rhs) = self.berlekamp_welch_system(received, errors)?;
            let solution = match gaussian_solve(&matrix, &rhs) {
                Ok(solution) => solution,
                Err(GfError::SingularSystem { column }) => {
                    trace!(
                        "System for {} errors is singular at column {}, fewer errors present",
                        errors,
                        column
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            let message = self.recover_message(solution, errors)?;
            debug!(
                "Decoded with error locator of degree {} (n = {}, k = {})",
                errors, self.n, self.k
            );
            return Ok(message);
        }

        Err(GfError::DecodingFailure(
            "no Berlekamp-Welch system had a unique solution".to_string(),
        ))
    }

    /// Positions where `received` differs from the codeword it decodes to
    pub fn error_positions(&self, received: &[T]) -> Result<Vec<usize>> {
        let codeword = self.encode(&self.decode(received)?)?;
        Ok(codeword
            .iter()
            .zip(received)
            .enumerate()
            .filter(|(_, (c, r))| c != r)
            .map(|(i, _)| i)
            .collect())
    }

    /// Build the `n×n` system in the `n - errors` coefficients of `Q`
    /// followed by the `errors` low coefficients of the monic `E`:
    ///
    /// `Q(x_i) - r_i·(E(x_i) - x_i^errors) = r_i·x_i^errors`
    fn berlekamp_welch_system(
        &self,
        received: &[T],
        errors: usize,
    ) -> Result<(Vec<Vec<T>>, Vec<T>)> {
        let q_len = self.n - errors;
        let mut matrix = Vec::with_capacity(self.n);
        let mut rhs = Vec::with_capacity(self.n);

        for (x, r) in self.evaluation_points.iter().zip(received) {
            // x^0 ..= x^(n-1), enough for both Q and E's leading term
            let mut powers = Vec::with_capacity(self.n);
            let mut power = x.one_like();
            for _ in 0..self.n {
                powers.push(power.clone());
                power = power.checked_mul(x)?;
            }

            let mut row = Vec::with_capacity(self.n);
            row.extend_from_slice(&powers[..q_len]);
            for p in &powers[..errors] {
                row.push(r.checked_mul(p)?.checked_neg()?);
            }

            matrix.push(row);
            rhs.push(r.checked_mul(&powers[errors])?);
        }

        Ok((matrix, rhs))
    }

    fn recover_message(&self, mut solution: Vec<T>, errors: usize) -> Result<Vec<T>> {
        let one = solution[0].one_like();
        let mut locator = solution.split_off(self.n - errors);
        locator.push(one);

        let (mut message, remainder) = poly_div_rem(&solution, &locator)?;
        if !remainder.is_empty() {
            return Err(GfError::DecodingFailure(format!(
                "error locator of degree {} does not divide Q",
                errors
            )));
        }
        if let Some(degree) = poly_degree(&message).filter(|&d| d >= self.k) {
            return Err(GfError::DecodingFailure(format!(
                "recovered polynomial has degree {}, expected less than {}",
                degree, self.k
            )));
        }

        message.resize(self.k, locator[0].zero_like());
        Ok(message)
    }
}

fn check_len<T>(symbols: &[T], expected: usize) -> Result<()> {
    if symbols.len() != expected {
        return Err(GfError::LengthMismatch {
            expected,
            got: symbols.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f11() -> Field {
        Field::prime(11).unwrap()
    }

    fn elems(field: &Field, values: &[i64]) -> Vec<Element> {
        values.iter().map(|&v| field.from_int(v as i128)).collect()
    }

    #[test]
    fn test_single_error_corrected() {
        let field = f11();
        let rs = ReedSolomon::with_default_points(&field, 5, 2).unwrap();
        assert_eq!(rs.max_correctable(), 1);

        let message = elems(&field, &[2, 3]);
        let mut codeword = rs.encode(&message).unwrap();
        assert_eq!(codeword.len(), 5);

        codeword[3] = &codeword[3] + 1i64;
        assert_eq!(rs.decode(&codeword).unwrap(), message);
        assert_eq!(rs.error_positions(&codeword).unwrap(), vec![3]);
    }

    #[test]
    fn test_clean_codeword_decodes() {
        let field = f11();
        let rs = ReedSolomon::with_default_points(&field, 7, 3).unwrap();
        let message = elems(&field, &[4, 0, 9]);
        let codeword = rs.encode(&message).unwrap();
        assert_eq!(rs.decode(&codeword).unwrap(), message);
        assert!(rs.error_positions(&codeword).unwrap().is_empty());
    }

    #[test]
    fn test_short_message_polynomial_is_padded() {
        let field = f11();
        let rs = ReedSolomon::with_default_points(&field, 6, 3).unwrap();
        let message = elems(&field, &[5, 0, 0]);
        let mut codeword = rs.encode(&message).unwrap();
        codeword[0] = field.zero();
        assert_eq!(rs.decode(&codeword).unwrap(), message);
    }

    #[test]
    fn test_parameter_validation() {
        let field = f11();
        assert!(ReedSolomon::with_default_points(&field, 5, 5).is_err());
        assert!(ReedSolomon::with_default_points(&field, 5, 0).is_err());
        assert!(ReedSolomon::with_default_points(&field, 11, 3).is_err());

        let duplicate = elems(&field, &[1, 2, 2]);
        assert!(matches!(
            ReedSolomon::new(&field, 3, 1, duplicate),
            Err(GfError::InvalidCodeParameters(_))
        ));
        let with_zero = elems(&field, &[0, 1, 2]);
        assert!(ReedSolomon::new(&field, 3, 1, with_zero).is_err());

        let other = f11();
        let foreign = elems(&other, &[1, 2, 3]);
        assert!(ReedSolomon::new(&field, 3, 1, foreign).is_err());
    }

    #[test]
    fn test_length_checks() {
        let field = f11();
        let rs = ReedSolomon::with_default_points(&field, 5, 2).unwrap();
        assert_eq!(
            rs.encode(&elems(&field, &[1])),
            Err(GfError::LengthMismatch {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            rs.decode(&elems(&field, &[1, 2])),
            Err(GfError::LengthMismatch {
                expected: 5,
                got: 2
            })
        );
    }

    #[test]
    fn test_default_points_without_tables() {
        let field = Field::new(11, 1, None, false).unwrap();
        let points = default_evaluation_points(&field, 4).unwrap();
        assert_eq!(points, elems(&field, &[1, 2, 3, 4]));

        let rs = ReedSolomon::new(&field, 4, 2, points).unwrap();
        let message = elems(&field, &[7, 1]);
        let mut codeword = rs.encode(&message).unwrap();
        codeword[1] = field.zero();
        assert_eq!(rs.decode(&codeword).unwrap(), message);
    }

    #[test]
    fn test_real_valued_code() {
        let rs = ReedSolomon::from_points(5, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let codeword = rs.encode(&[1.0, 1.0]).unwrap();
        assert_eq!(codeword, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(rs.max_correctable(), 1);
        assert!(ReedSolomon::from_points(2, 1, vec![1.0, 1.0]).is_err());
    }
}
