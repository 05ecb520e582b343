use crate::{Echelon, FreeVariable, Fraction, Result};
use tracing::debug;

/// Reads the particular solution off a reduced augmented matrix.
///
/// Each pivot unknown takes the right-hand side of its pivot row; free
/// unknowns are set to zero.
pub fn particular(echelon: &Echelon, unknowns: usize) -> Result<Vec<Fraction>> {
    let mat = &echelon.matrix;
    let mut sol = vec![Fraction::ZERO; unknowns];

    for (row_i, &col) in echelon.pivots.iter().enumerate() {
        sol[col] = mat[(row_i, unknowns)].checked_div(mat[(row_i, col)])?;
    }
    Ok(sol)
}

/// Returns the columns without a pivot, left to right.
pub fn free_columns(echelon: &Echelon, unknowns: usize) -> Vec<usize> {
    let mut pivots = echelon.pivots.iter().peekable();
    (0..unknowns)
        .filter(|&col| {
            if pivots.peek() == Some(&&col) {
                pivots.next();
                false
            } else {
                true
            }
        })
        .collect()
}

/// Parametrizes the solution set by the free unknowns.
///
/// Moving a free term to the right-hand side negates it, so the coefficient
/// of free variable `k` in pivot row `i` is `-mat[i][free_k]`.
pub fn free_variables(echelon: &Echelon, unknowns: usize) -> Result<Vec<FreeVariable>> {
    let mat = &echelon.matrix;
    let rank = echelon.rank();

    let columns = free_columns(echelon, unknowns);
    debug!(?columns, rank, "free variables");

    columns
        .into_iter()
        .map(|column| {
            let coefficients = (0..rank)
                .map(|row_i| mat[(row_i, column)].checked_neg())
                .collect::<Result<_>>()?;
            Ok(FreeVariable {
                column,
                coefficients,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lin_alg::row_reduce;
    use crate::Matrix;

    fn echelon(rows: &[&[i64]]) -> (Echelon, usize) {
        let mut matrix = Matrix::from_integers(rows).unwrap();
        let unknowns = matrix.col_n() - 1;
        let pivots = row_reduce(&mut matrix, unknowns).unwrap();
        (Echelon { matrix, pivots }, unknowns)
    }

    fn fracs(ns: &[i64]) -> Vec<Fraction> {
        ns.iter().map(|&n| Fraction::from(n)).collect()
    }

    #[test]
    fn test_particular_unique() {
        let (e, n) = echelon(&[&[1, 1, 3], &[1, -1, 1]]);
        assert_eq!(particular(&e, n).unwrap(), fracs(&[2, 1]));
        assert!(free_columns(&e, n).is_empty());
    }

    #[test]
    fn test_single_free_variable() {
        let (e, n) = echelon(&[&[1, 1, 2]]);
        assert_eq!(particular(&e, n).unwrap(), fracs(&[2, 0]));
        let vars = free_variables(&e, n).unwrap();
        assert_eq!(
            vars,
            vec![FreeVariable {
                column: 1,
                coefficients: fracs(&[-1]),
            }]
        );
    }

    #[test]
    fn test_free_column_between_pivots() {
        // x0 + 2 x1 = 3, x2 = 4
        let (e, n) = echelon(&[&[1, 2, 0, 3], &[0, 0, 1, 4]]);
        assert_eq!(free_columns(&e, n), vec![1]);
        assert_eq!(particular(&e, n).unwrap(), fracs(&[3, 0, 4]));
        let vars = free_variables(&e, n).unwrap();
        assert_eq!(vars[0].coefficients, fracs(&[-2, 0]));
    }

    #[test]
    fn test_zero_and_trailing_free_columns() {
        let (e, n) = echelon(&[&[0, 1, 1, 1, 5], &[0, 1, -1, 2, 1]]);
        assert_eq!(e.pivots, vec![1, 2]);
        assert_eq!(free_columns(&e, n), vec![0, 3]);

        let vars = free_variables(&e, n).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].coefficients, fracs(&[0, 0]));
        assert_eq!(
            vars[1].coefficients,
            vec![Fraction::new(-3, 2).unwrap(), Fraction::new(1, 2).unwrap()]
        );
        assert_eq!(particular(&e, n).unwrap(), fracs(&[0, 3, 2, 0]));
    }
}
