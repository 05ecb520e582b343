//! Property-based tests for fraction arithmetic and row reduction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::lin_alg::row_reduce;
    use crate::{Fraction, Matrix, System};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    // Augmented systems of up to 4 equations in up to 4 unknowns with small
    // entries, so that elimination stays far from the i64 range.
    fn system() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..=4, 2usize..=5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(-6i64..=6, cols), rows)
        })
    }

    fn to_matrix(rows: &[Vec<i64>]) -> Matrix {
        Matrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&n| Fraction::from(n)).collect())
                .collect(),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn canonical_form(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denom() > 0);
            let g = gcd::Gcd::gcd(f.numer().unsigned_abs(), f.denom().unsigned_abs());
            prop_assert_eq!(g, 1);
            prop_assert_eq!(f.numer() as i128 * d as i128, n as i128 * f.denom() as i128);
        }

        #[test]
        fn add_sub_inverse(a in fraction(), b in fraction()) {
            let sum = a.checked_add(b).unwrap();
            prop_assert_eq!(sum.checked_sub(b).unwrap(), a);
        }

        #[test]
        fn mul_div_inverse(a in fraction(), b in non_zero_fraction()) {
            let prod = a.checked_mul(b).unwrap();
            prop_assert_eq!(prod.checked_div(b).unwrap(), a);
        }

        #[test]
        fn add_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.checked_add(b).unwrap(), b.checked_add(a).unwrap());
        }

        #[test]
        fn order_matches_value(a in fraction(), b in fraction()) {
            let (x, y) = (a.to_f64(), b.to_f64());
            if a < b {
                prop_assert!(x < y);
            } else if a > b {
                prop_assert!(x > y);
            } else {
                prop_assert_eq!(x, y);
            }
        }

        #[test]
        fn reduction_idempotent(rows in system()) {
            let mut m = to_matrix(&rows);
            let unknowns = m.col_n() - 1;
            let pivots = row_reduce(&mut m, unknowns).unwrap();
            let once = m.clone();
            prop_assert_eq!(row_reduce(&mut m, unknowns).unwrap(), pivots);
            prop_assert_eq!(m, once);
        }

        #[test]
        fn row_permutation_invariant(rows in system(), seed in any::<u64>()) {
            let mut permuted = rows.clone();
            // Deterministic rotation plus swap, driven by the seed.
            let len = permuted.len();
            permuted.rotate_left(seed as usize % len);
            permuted.swap(0, (seed >> 8) as usize % len);

            let a = System::particular(to_matrix(&rows)).unwrap().solve().unwrap();
            let b = System::particular(to_matrix(&permuted)).unwrap().solve().unwrap();

            prop_assert_eq!(a.solution_type, b.solution_type);
            prop_assert_eq!(a.pivots(), b.pivots());
            if a.contradictory_rows().is_empty() {
                prop_assert_eq!(&a.particular, &b.particular);
                prop_assert_eq!(&a.free_variables, &b.free_variables);
            }
        }

        #[test]
        fn row_operation_invariant(rows in system(), k in -3i64..=3) {
            // Add k times the first row to the last one.
            let mut combined = rows.clone();
            let last = combined.len() - 1;
            if last > 0 {
                for j in 0..combined[last].len() {
                    combined[last][j] += k * rows[0][j];
                }
            }

            let a = System::particular(to_matrix(&rows)).unwrap().solve().unwrap();
            let b = System::particular(to_matrix(&combined)).unwrap().solve().unwrap();

            prop_assert_eq!(a.solution_type, b.solution_type);
            if a.contradictory_rows().is_empty() {
                prop_assert_eq!(&a.particular, &b.particular);
                prop_assert_eq!(&a.free_variables, &b.free_variables);
            }
        }

        #[test]
        fn general_solution_satisfies_system(rows in system(), t in -5i64..=5) {
            let sol = System::particular(to_matrix(&rows)).unwrap().solve().unwrap();
            prop_assume!(sol.contradictory_rows().is_empty());

            let params = vec![Fraction::from(t); sol.free_variables.len()];
            let x = sol.evaluate(&params).unwrap();
            for row in &rows {
                let (rhs, coefs) = row.split_last().unwrap();
                let lhs = coefs.iter().zip(&x).fold(Fraction::ZERO, |acc, (&a, &xi)| {
                    acc.checked_add(Fraction::from(a).checked_mul(xi).unwrap()).unwrap()
                });
                prop_assert_eq!(lhs, Fraction::from(*rhs));
            }
        }
    }
}
