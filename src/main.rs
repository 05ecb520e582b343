use linsys::{parse_entries, reduced_echelon_form, Fraction, Matrix, Mode, System};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

const RULE: &str =
    "--------------------------------------------------------------------------------";

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("LINSYS_LOG"))
        .init();

    ctrlc::set_handler(|| {
        println!();
        process::exit(0);
    })
    .expect("failed to set Ctrl-C handler");

    let mut input = Input::default();
    println!("{}", "Linear System Solver".bold());

    loop {
        print_instruction();
        let Some(cmd) = input.prompt("\n> ") else {
            break;
        };
        let done = match cmd.trim() {
            "-h" => solve(&mut input, Mode::Homogeneous),
            "-p" => solve(&mut input, Mode::Particular),
            "-e" => reduce(&mut input),
            _ => break,
        };
        if done.is_none() {
            break;
        }

        println!("\n{RULE}");
        match input.prompt("Do you want to solve other system(s)? (y/n): ") {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("n") => {}
            _ => break,
        }
    }
}

fn print_instruction() {
    println!("{RULE}");
    println!("Please enter:\t-h to solve an associated homogeneous system");
    println!("\t\t-p to solve a particular system");
    println!("\t\t-e to calculate the reduced echelon form of a matrix");
    println!("\t\t-x or anything else to exit");
}

/// Reads a system in the given mode, solves it and prints the result.
///
/// Returns `None` once standard input is exhausted.
fn solve(input: &mut Input, mode: Mode) -> Option<()> {
    let variables = input.read_count("Number of variable(s): ")?;
    let equations = input.read_count("Number of equation(s): ")?;

    let cols = match mode {
        Mode::Homogeneous => {
            println!("\nFor the equations  4x + 5y + 6z = 0");
            println!("                   8x - 3y      = 0");
            println!("enter the coefficients:  4 5 6");
            println!("                         8 -3 0");
            variables
        }
        Mode::Particular => {
            println!("\nFor the equations  4x + 5y + 6z = 7");
            println!("                   8x - 3y      = 0");
            println!("enter the augmented matrix:  4 5 6 7");
            println!("                             8 -3 0 0");
            variables + 1
        }
    };
    println!("Entries may be split across lines freely, and fractions are written as 3/4.\n");

    let matrix = input.read_matrix(equations, cols)?;
    match System::new(matrix, mode).and_then(System::solve) {
        Ok(sol) => {
            println!("\nThe reduced echelon form matrix is:\n");
            println!("{}", sol.reduced().augmented());
            println!("\n{RULE}");
            println!("The solution is:\n");
            println!("{:#}", sol);
        }
        Err(e) => print_error(&e),
    }
    Some(())
}

/// Reads a plain matrix and prints its reduced echelon form.
fn reduce(input: &mut Input) -> Option<()> {
    let cols = input.read_count("Number of column(s): ")?;
    let rows = input.read_count("Number of row(s): ")?;
    println!("\nFor the matrix  | 4  5  6 |  enter:  4 5 6");
    println!("                | 8 -3  0 |          8 -3 0\n");

    let matrix = input.read_matrix(rows, cols)?;
    match reduced_echelon_form(matrix) {
        Ok(echelon) => {
            println!("\nThe reduced echelon form matrix is:\n");
            println!("{}", echelon.matrix);
            println!("\nRank: {}", echelon.rank().green().bold());
        }
        Err(e) => print_error(&e),
    }
    Some(())
}

fn print_error(e: &dyn std::fmt::Display) {
    println!("{}", format!("Error: {}", e).red());
}

#[derive(Default)]
struct Input {
    buf: String,
}

impl Input {
    /// Prints `msg` and reads one line, or returns `None` at end of input.
    fn prompt(&mut self, msg: &str) -> Option<String> {
        print!("{}", msg);
        io::stdout().flush().expect("failed to flush stdout");

        self.buf.clear();
        let n = io::stdin()
            .read_line(&mut self.buf)
            .expect("failed to read line");
        if n == 0 {
            return None;
        }
        Some(self.buf.clone())
    }

    fn read_count(&mut self, msg: &str) -> Option<usize> {
        loop {
            let line = self.prompt(msg)?;
            match line.trim().parse::<usize>() {
                Ok(n) if n > 0 => return Some(n),
                _ => print_error(&"expected a positive whole number"),
            }
        }
    }

    fn read_matrix(&mut self, rows: usize, cols: usize) -> Option<Matrix> {
        let total = match Matrix::entry_count(rows, cols) {
            Ok(total) => total,
            Err(e) => {
                print_error(&e);
                return None;
            }
        };
        let mut entries: Vec<Fraction> = Vec::with_capacity(total.min(1024));

        while entries.len() < total {
            let msg = if entries.is_empty() {
                "Input: ".to_owned()
            } else {
                format!("({} more) ", total - entries.len())
            };
            let line = self.prompt(&msg)?;
            match parse_entries(&line) {
                Ok(parsed) => entries.extend(parsed),
                Err(e) => print_error(&e),
            }
        }
        if entries.len() > total {
            println!(
                "{}",
                format!("Ignoring {} extra entries.", entries.len() - total).yellow()
            );
            entries.truncate(total);
        }

        match Matrix::from_entries(rows, cols, entries) {
            Ok(matrix) => Some(matrix),
            Err(e) => {
                print_error(&e);
                None
            }
        }
    }
}
