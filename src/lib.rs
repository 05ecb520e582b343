//! Exact solver for systems of linear equations over the rationals.
//!
//! A system is row-reduced to reduced row echelon form with fraction
//! arithmetic, classified as having a unique solution, infinitely many or
//! none, and, when solvable, expressed as a particular solution plus a
//! combination of nullspace vectors indexed by the free unknowns.

mod error;
mod fmt;
mod fraction;
pub mod lin_alg;
mod matrix;
pub mod nullspace;
pub mod parse;
#[cfg(test)]
mod proptests;
mod solution;

pub use error::{Error, Result};
pub use fmt::Augmented;
pub use fraction::Fraction;
pub use matrix::Matrix;
pub use parse::parse_entries;
pub use solution::{classify, FreeVariable, Solution, SolutionType};

use tracing::info;

/// How the last column of a system's matrix is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The matrix holds coefficients only; the right-hand side is zero.
    Homogeneous,
    /// The last column is the right-hand side.
    Particular,
}

/// A reduced matrix together with the pivot column of each pivot row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Echelon {
    pub matrix: Matrix,
    pub pivots: Vec<usize>,
}

impl Echelon {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// A linear system waiting to be solved.
///
/// Solving consumes the system; each solve works on its own matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct System {
    matrix: Matrix,
    mode: Mode,
}

impl System {
    pub fn new(matrix: Matrix, mode: Mode) -> Result<System> {
        if mode == Mode::Particular && matrix.col_n() < 2 {
            return Err(Error::MissingRhs);
        }
        Ok(System { matrix, mode })
    }

    pub fn homogeneous(matrix: Matrix) -> Result<System> {
        System::new(matrix, Mode::Homogeneous)
    }

    pub fn particular(matrix: Matrix) -> Result<System> {
        System::new(matrix, Mode::Particular)
    }

    pub fn unknowns(&self) -> usize {
        match self.mode {
            Mode::Homogeneous => self.matrix.col_n(),
            Mode::Particular => self.matrix.col_n() - 1,
        }
    }

    pub fn solve(self) -> Result<Solution> {
        let unknowns = self.unknowns();
        let mut matrix = self.matrix;
        if self.mode == Mode::Homogeneous {
            matrix.augment_zero_column();
        }

        let pivots = lin_alg::row_reduce(&mut matrix, unknowns)?;
        let echelon = Echelon { matrix, pivots };

        let solution_type = classify(&echelon.matrix, unknowns);
        let (particular, free_variables) = match solution_type {
            SolutionType::None => (vec![], vec![]),
            SolutionType::Unique => (nullspace::particular(&echelon, unknowns)?, vec![]),
            SolutionType::Infinite => (
                nullspace::particular(&echelon, unknowns)?,
                nullspace::free_variables(&echelon, unknowns)?,
            ),
        };
        info!(
            ?solution_type,
            rank = echelon.rank(),
            free = free_variables.len(),
            "solved"
        );

        Ok(Solution {
            solution_type,
            particular,
            free_variables,
            echelon,
        })
    }
}

/// Reduces a plain matrix to reduced row echelon form, with every column a
/// pivot candidate.
pub fn reduced_echelon_form(mut matrix: Matrix) -> Result<Echelon> {
    let col_n = matrix.col_n();
    let pivots = lin_alg::row_reduce(&mut matrix, col_n)?;
    Ok(Echelon { matrix, pivots })
}
