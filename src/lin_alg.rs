use crate::matrix::{row_div, row_mul_sub};
use crate::{Fraction, Matrix, Result};
use std::cmp::Ordering;
use tracing::{debug, instrument, trace};

/// Transforms a matrix into reduced row echelon form by Gauss-Jordan
/// elimination and returns the pivot column of each pivot row.
///
/// Only the first `col_limit` columns are pivot candidates; for an augmented
/// matrix this excludes the right-hand side. The number of returned pivots is
/// the rank of the candidate part.
#[instrument(level = "debug", skip_all, fields(rows = mat.row_n(), cols = mat.col_n()))]
pub fn row_reduce(mat: &mut Matrix, col_limit: usize) -> Result<Vec<usize>> {
    let col_limit = col_limit.min(mat.col_n());
    let pivots = reduce_forward(mat, col_limit)?;
    reduce_backward(mat, &pivots)?;
    normalize_pivots(mat, &pivots)?;
    Ok(pivots)
}

fn reduce_forward(mat: &mut Matrix, col_limit: usize) -> Result<Vec<usize>> {
    let rows = mat.rows_mut();
    let row_n = rows.len();

    let mut pivots = Vec::new();
    let mut row_i = 0;
    let mut col_i = 0;

    while row_i < row_n && col_i < col_limit {
        if rows[row_i..].iter().all(|row| row[col_i].is_zero()) {
            debug!(col = col_i, "no pivot candidate");
            col_i += 1;
            continue;
        }

        // The smallest non-zero value becomes the pivot.
        sort_candidates(&mut rows[row_i..], col_i);

        let Some((pivot_row, rest)) = rows[row_i..].split_first_mut() else {
            break;
        };
        let pivot = pivot_row[col_i];
        debug!(row = row_i, col = col_i, %pivot, "pivot");

        for (offset, cur_row) in rest.iter_mut().enumerate() {
            let cur = cur_row[col_i];
            if cur.is_zero() {
                continue;
            }
            let factor = cur.checked_div(pivot)?;
            trace!(target_row = row_i + 1 + offset, %factor, "eliminate below");
            row_mul_sub(cur_row, factor, pivot_row)?;
        }

        pivots.push(col_i);
        row_i += 1;
        col_i += 1;
    }
    Ok(pivots)
}

/// Stable-sorts rows so that rows with a zero in `col` sink to the bottom and
/// the rest are ascending by value.
pub(crate) fn sort_candidates(rows: &mut [Vec<Fraction>], col: usize) {
    rows.sort_by(|a, b| match (a[col].is_zero(), b[col].is_zero()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a[col].cmp(&b[col]),
    });
}

/// Clears every pivot column above its pivot, last pivot first.
fn reduce_backward(mat: &mut Matrix, pivots: &[usize]) -> Result<()> {
    let rows = mat.rows_mut();

    for (pivot_i, &col) in pivots.iter().enumerate().rev() {
        let (above, rest) = rows.split_at_mut(pivot_i);
        let pivot_row = &rest[0];
        let pivot = pivot_row[col];

        for (target_row, cur_row) in above.iter_mut().enumerate() {
            let cur = cur_row[col];
            if cur.is_zero() {
                continue;
            }
            let factor = cur.checked_div(pivot)?;
            trace!(target_row, %factor, "eliminate above");
            row_mul_sub(cur_row, factor, pivot_row)?;
        }
    }
    Ok(())
}

/// Scales each pivot row so its pivot is one.
fn normalize_pivots(mat: &mut Matrix, pivots: &[usize]) -> Result<()> {
    let rows = mat.rows_mut();

    for (row, &col) in rows.iter_mut().zip(pivots) {
        let pivot = row[col];
        if pivot.is_zero() || pivot.is_one() {
            continue;
        }
        row_div(row, pivot)?;
    }
    Ok(())
}
