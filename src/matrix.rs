use crate::{Error, Fraction, Result};
use std::ops::Index;

/// A rectangular matrix of fractions, stored row by row.
///
/// The shape is fixed at construction. Row operations are exposed to the
/// reducer as slices, so they can reorder and rewrite rows but never change
/// the dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<Fraction>>,
    col_n: usize,
}

impl Matrix {
    /// Creates a matrix after checking that `rows` is exactly
    /// `total_row` × `total_col`.
    pub fn new(total_row: usize, total_col: usize, rows: Vec<Vec<Fraction>>) -> Result<Matrix> {
        if total_row == 0 || total_col == 0 {
            return Err(Error::Empty);
        }
        if rows.len() != total_row {
            return Err(Error::RowCountMismatch {
                expected: total_row,
                actual: rows.len(),
            });
        }
        if let Some(row) = rows.iter().position(|r| r.len() != total_col) {
            return Err(Error::RaggedRow {
                row,
                expected: total_col,
                actual: rows[row].len(),
            });
        }
        Ok(Matrix {
            rows,
            col_n: total_col,
        })
    }

    /// Creates a matrix taking its shape from the first row.
    pub fn from_rows(rows: Vec<Vec<Fraction>>) -> Result<Matrix> {
        let col_n = rows.first().map_or(0, Vec::len);
        Matrix::new(rows.len(), col_n, rows)
    }

    pub fn from_integers(rows: &[&[i64]]) -> Result<Matrix> {
        Matrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&n| Fraction::from(n)).collect())
                .collect(),
        )
    }

    /// Splits a flat row-major list of entries into a `total_row` × `total_col` matrix.
    pub fn from_entries(
        total_row: usize,
        total_col: usize,
        entries: Vec<Fraction>,
    ) -> Result<Matrix> {
        if total_row == 0 || total_col == 0 {
            return Err(Error::Empty);
        }
        let expected = Matrix::entry_count(total_row, total_col)?;
        if entries.len() != expected {
            return Err(Error::EntryCountMismatch {
                expected,
                actual: entries.len(),
            });
        }
        let rows = entries.chunks(total_col).map(<[Fraction]>::to_vec).collect();
        Matrix::new(total_row, total_col, rows)
    }

    /// Number of entries in a `total_row` × `total_col` matrix.
    pub fn entry_count(total_row: usize, total_col: usize) -> Result<usize> {
        total_row.checked_mul(total_col).ok_or(Error::TooLarge {
            rows: total_row,
            cols: total_col,
        })
    }

    pub fn row_n(&self) -> usize {
        self.rows.len()
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn rows(&self) -> &[Vec<Fraction>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &[Fraction] {
        &self.rows[i]
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Fraction>] {
        &mut self.rows
    }

    /// Appends an all-zero column, the implicit right-hand side of a
    /// homogeneous system.
    pub fn augment_zero_column(&mut self) {
        for row in &mut self.rows {
            row.push(Fraction::ZERO);
        }
        self.col_n += 1;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Fraction;

    fn index(&self, (row, col): (usize, usize)) -> &Fraction {
        &self.rows[row][col]
    }
}

/// Subtracts `factor` times `src` from `dest`, entry by entry.
pub(crate) fn row_mul_sub(
    dest: &mut [Fraction],
    factor: Fraction,
    src: &[Fraction],
) -> Result<()> {
    for (dest, src) in dest.iter_mut().zip(src.iter()) {
        if src.is_zero() {
            continue;
        }
        *dest = dest.checked_sub(factor.checked_mul(*src)?)?;
    }
    Ok(())
}

/// Divides every entry of a row by `divisor`.
pub(crate) fn row_div(row: &mut [Fraction], divisor: Fraction) -> Result<()> {
    for n in row.iter_mut() {
        *n = n.checked_div(divisor)?;
    }
    Ok(())
}
