use crate::{Echelon, Error, Fraction, Matrix, Result};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionType {
    Unique,
    Infinite,
    None,
}

/// An unknown left unconstrained by the reduced system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeVariable {
    /// Column of the unknown in the coefficient matrix.
    pub column: usize,
    /// Coefficient of this variable in the value of each pivot unknown,
    /// indexed by pivot row.
    pub coefficients: Vec<Fraction>,
}

/// The result of solving a linear system.
///
/// `particular` has one entry per unknown, with free unknowns set to zero,
/// and is empty when there is no solution. `free_variables` is only
/// populated for [`SolutionType::Infinite`]. The general solution is
/// `particular + Σ t_k * basis()[k]` over arbitrary rationals `t_k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub solution_type: SolutionType,
    pub particular: Vec<Fraction>,
    pub free_variables: Vec<FreeVariable>,
    pub echelon: Echelon,
}

impl Solution {
    pub fn unknowns(&self) -> usize {
        self.echelon.matrix.col_n() - 1
    }

    pub fn reduced(&self) -> &Matrix {
        &self.echelon.matrix
    }

    pub fn pivots(&self) -> &[usize] {
        &self.echelon.pivots
    }

    /// Coefficient of free variable `free_i` in the pivot unknown of `pivot_row`.
    pub fn coefficient(&self, pivot_row: usize, free_i: usize) -> Fraction {
        self.free_variables[free_i].coefficients[pivot_row]
    }

    pub fn is_free(&self, unknown: usize) -> bool {
        self.free_variables.iter().any(|var| var.column == unknown)
    }

    /// Returns one nullspace vector per free variable: one at the free
    /// column, the coefficients at the pivot columns and zero elsewhere.
    pub fn basis(&self) -> Vec<Vec<Fraction>> {
        let unknowns = self.unknowns();
        self.free_variables
            .iter()
            .map(|var| {
                let mut v = vec![Fraction::ZERO; unknowns];
                v[var.column] = Fraction::ONE;
                for (&col, &coef) in self.echelon.pivots.iter().zip(&var.coefficients) {
                    v[col] = coef;
                }
                v
            })
            .collect()
    }

    /// Rows of the reduced matrix of the form `0 ... 0 : b` with `b != 0`.
    ///
    /// An under-determined system is classified as infinite even when such a
    /// row exists; this lets callers tell that case apart.
    pub fn contradictory_rows(&self) -> Vec<usize> {
        let unknowns = self.unknowns();
        self.echelon
            .matrix
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| is_contradiction(row, unknowns))
            .map(|(i, _)| i)
            .collect()
    }

    /// Evaluates the general solution for the given free-variable values,
    /// one per free variable.
    pub fn evaluate(&self, params: &[Fraction]) -> Result<Vec<Fraction>> {
        if params.len() != self.free_variables.len() {
            return Err(Error::ParamCountMismatch {
                expected: self.free_variables.len(),
                actual: params.len(),
            });
        }
        let mut x = self.particular.clone();
        for (v, &t) in self.basis().iter().zip(params) {
            for (xi, &vi) in x.iter_mut().zip(v) {
                *xi = xi.checked_add(vi.checked_mul(t)?)?;
            }
        }
        Ok(x)
    }
}

/// Classifies a reduced augmented matrix with `unknowns` coefficient columns.
///
/// The checks run in order: fewer equations than unknowns is always
/// infinite, then any contradiction row means no solution, then a missing
/// diagonal pivot means infinite.
pub fn classify(mat: &Matrix, unknowns: usize) -> SolutionType {
    let solution_type = if mat.row_n() < unknowns {
        SolutionType::Infinite
    } else if mat.rows().iter().any(|row| is_contradiction(row, unknowns)) {
        SolutionType::None
    } else if (0..unknowns).all(|i| !mat[(i, i)].is_zero()) {
        SolutionType::Unique
    } else {
        SolutionType::Infinite
    };
    debug!(?solution_type, rows = mat.row_n(), unknowns, "classified");
    solution_type
}

fn is_contradiction(row: &[Fraction], unknowns: usize) -> bool {
    row[..unknowns].iter().all(Fraction::is_zero) && !row[unknowns].is_zero()
}
