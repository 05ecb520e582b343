use crate::{Fraction, Matrix, Solution, SolutionType};
use owo_colors::OwoColorize;
use std::fmt::{self, Display, Formatter, Write};

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = if self.is_integer() {
            self.numer().to_string()
        } else {
            format!("{}/{}", self.numer(), self.denom())
        };
        f.pad(&s)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_rows(self, f, None)
    }
}

/// Displays a matrix with its last column set apart as the right-hand side.
pub struct Augmented<'a>(&'a Matrix);

impl Matrix {
    pub fn augmented(&self) -> Augmented<'_> {
        Augmented(self)
    }
}

impl Display for Augmented<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_rows(self.0, f, Some(self.0.col_n() - 1))
    }
}

/// Formats the rows of a matrix between bars, right-aligning every entry to
/// the widest one. A `:` is written before column `split`, if any.
fn fmt_rows(mat: &Matrix, f: &mut Formatter<'_>, split: Option<usize>) -> fmt::Result {
    let cells: Vec<Vec<String>> = mat
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    for (i, row) in cells.iter().enumerate() {
        if i != 0 {
            f.write_char('\n')?;
        }
        f.write_char('|')?;
        for (j, cell) in row.iter().enumerate() {
            if split == Some(j) {
                f.write_str(" :")?;
            }
            write!(f, " {:>width$}", cell)?;
        }
        f.write_str(" |")?;
    }
    Ok(())
}

/// Formats the general solution, one unknown per line.
///
/// The alternate flag (`{:#}`) colors the numbers: positive ones green,
/// negative ones yellow.
impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let color = f.alternate();

        if self.solution_type == SolutionType::None {
            return if color {
                write!(f, "{}", "no solution".red().bold())
            } else {
                f.write_str("no solution")
            };
        }

        for unknown in 0..self.unknowns() {
            if unknown != 0 {
                f.write_char('\n')?;
            }
            write!(f, "c{} = ", unknown)?;

            if self.is_free(unknown) {
                f.write_str("any rational number")?;
                continue;
            }
            let Some(row_i) = self.pivots().iter().position(|&col| col == unknown) else {
                continue;
            };

            let constant = self.particular[unknown];
            let mut first = true;
            if !constant.is_zero() {
                fmt_num(f, &constant.to_string(), constant.is_negative(), color)?;
                first = false;
            }
            for var in &self.free_variables {
                let coef = var.coefficients[row_i];
                if coef.is_zero() {
                    continue;
                }
                fmt_term(f, coef, var.column, first, color)?;
                first = false;
            }
            if first {
                fmt_num(f, "0", false, color)?;
            }
        }
        Ok(())
    }
}

/// Formats `coef * c{column}` as a signed term of a sum.
///
/// A coefficient of magnitude one is dropped, and fractional ones are
/// parenthesized. The leading term carries its sign without spaces.
fn fmt_term(
    f: &mut Formatter<'_>,
    coef: Fraction,
    column: usize,
    first: bool,
    color: bool,
) -> fmt::Result {
    let negative = coef.is_negative();
    match (first, negative) {
        (true, true) => f.write_char('-')?,
        (true, false) => {}
        (false, true) => f.write_str(" - ")?,
        (false, false) => f.write_str(" + ")?,
    }

    let n = coef.numer().unsigned_abs();
    if coef.is_integer() {
        if n != 1 {
            fmt_num(f, &n.to_string(), negative, color)?;
        }
    } else {
        f.write_char('(')?;
        fmt_num(f, &format!("{}/{}", n, coef.denom()), negative, color)?;
        f.write_char(')')?;
    }
    write!(f, "c{}", column)
}

fn fmt_num(f: &mut Formatter<'_>, text: &str, negative: bool, color: bool) -> fmt::Result {
    match (color, negative) {
        (false, _) => f.write_str(text),
        (true, false) => write!(f, "{}", text.green().bold()),
        (true, true) => write!(f, "{}", text.yellow().bold()),
    }
}
