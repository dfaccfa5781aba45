//! Gaussian elimination
//!
//! Arithmetic is exact, so pivoting is purely structural: any nonzero entry
//! is a usable pivot and the first one found is taken.

use crate::arith::FieldArithmetic;
use crate::error::{GfError, Result};

/// Solve the square system `a · x = b`.
///
/// # Errors
///
/// - [`GfError::DimensionMismatch`] if `a` is not `n×n` or `b` is not length `n`
/// - [`GfError::SingularSystem`] if some column has no nonzero pivot
pub fn gaussian_solve<T: FieldArithmetic>(a: &[Vec<T>], b: &[T]) -> Result<Vec<T>> {
    let n = a.len();
    if b.len() != n {
        return Err(GfError::DimensionMismatch(format!(
            "matrix has {} rows but right-hand side has {} entries",
            n,
            b.len()
        )));
    }
    if let Some(row) = a.iter().find(|row| row.len() != n) {
        return Err(GfError::DimensionMismatch(format!(
            "expected a square {}x{} matrix, found a row of length {}",
            n,
            n,
            row.len()
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Augmented matrix [A | b]
    let mut aug: Vec<Vec<T>> = a
        .iter()
        .zip(b)
        .map(|(row, rhs)| {
            let mut r = row.clone();
            r.push(rhs.clone());
            r
        })
        .collect();

    // Forward elimination
    for col in 0..n {
        let pivot_row = (col..n)
            .find(|&row| !aug[row][col].is_zero())
            .ok_or(GfError::SingularSystem { column: col })?;

        if pivot_row != col {
            aug.swap(col, pivot_row);
        }

        let pivot = aug[col][col].clone();
        for row in (col + 1)..n {
            if aug[row][col].is_zero() {
                continue;
            }
            let factor = aug[row][col].checked_div(&pivot)?;
            for j in col..=n {
                let scaled = factor.checked_mul(&aug[col][j])?;
                aug[row][j] = aug[row][j].checked_sub(&scaled)?;
            }
        }
    }

    // Back substitution
    let mut x: Vec<T> = vec![aug[0][0].zero_like(); n];
    for row in (0..n).rev() {
        let mut acc = aug[row][n].clone();
        for j in (row + 1)..n {
            acc = acc.checked_sub(&aug[row][j].checked_mul(&x[j])?)?;
        }
        x[row] = acc.checked_div(&aug[row][row])?;
    }

    Ok(x)
}

/// Result of [`row_reduce`]
#[derive(Debug, Clone, PartialEq)]
pub struct RowReduction<T> {
    /// Reduced row echelon form
    pub matrix: Vec<Vec<T>>,
    /// `row_map[i] == j` means reduced row `i` started out as row `j`
    pub row_map: Vec<usize>,
    /// Column of the leading one of each nonzero row, in row order
    pub pivot_columns: Vec<usize>,
}

impl<T> RowReduction<T> {
    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }
}

/// Reduce a matrix of any shape to reduced row echelon form.
///
/// Every pivot is scaled to one and cleared above and below. Columns without
/// a pivot are skipped, so rank-deficient and non-square matrices are fine.
///
/// # Errors
///
/// [`GfError::DimensionMismatch`] for ragged rows
pub fn row_reduce<T: FieldArithmetic>(mut a: Vec<Vec<T>>) -> Result<RowReduction<T>> {
    let rows = a.len();
    let cols = a.first().map_or(0, |row| row.len());
    if a.iter().any(|row| row.len() != cols) {
        return Err(GfError::DimensionMismatch(
            "all rows must have the same length".to_string(),
        ));
    }

    let mut row_map: Vec<usize> = (0..rows).collect();
    let mut pivot_columns = Vec::new();
    let mut r = 0;

    for c in 0..cols {
        if r == rows {
            break;
        }
        let Some(pivot_row) = (r..rows).find(|&i| !a[i][c].is_zero()) else {
            continue;
        };

        a.swap(r, pivot_row);
        row_map.swap(r, pivot_row);

        let pivot = a[r][c].clone();
        for j in c..cols {
            a[r][j] = a[r][j].checked_div(&pivot)?;
        }

        for i in 0..rows {
            if i == r || a[i][c].is_zero() {
                continue;
            }
            let factor = a[i][c].clone();
            for j in c..cols {
                let scaled = factor.checked_mul(&a[r][j])?;
                a[i][j] = a[i][j].checked_sub(&scaled)?;
            }
        }

        pivot_columns.push(c);
        r += 1;
    }

    Ok(RowReduction {
        matrix: a,
        row_map,
        pivot_columns,
    })
}
