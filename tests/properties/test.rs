use proptest::collection::vec;
use proptest::prelude::*;

use relp_tableau::algorithm::OptimizationResult;
use relp_tableau::algorithm::simplex::Simplex;
use relp_tableau::algorithm::simplex::config::SolverConfig;
use relp_tableau::data::linear_program::standard_form::StandardForm;

use super::{best_vertex, has_improving_ray, TOLERANCE};

fn coefficient() -> impl Strategy<Value = f64> {
    (-5i32..=5).prop_map(f64::from)
}

fn pair() -> impl Strategy<Value = [f64; 2]> {
    (coefficient(), coefficient()).prop_map(|(first, second)| [first, second])
}

/// Between one and four constraints with a right-hand side of the same length.
fn constraints() -> impl Strategy<Value = (Vec<[f64; 2]>, Vec<f64>)> {
    (1usize..=4).prop_flat_map(|m| (vec(pair(), m), vec((-5i32..=10).prop_map(f64::from), m)))
}

fn to_problem(A: &[[f64; 2]], b: &[f64], c: [f64; 2]) -> StandardForm<f64> {
    StandardForm::new(
        A.iter().map(|row| row.to_vec()).collect(),
        b.to_vec(),
        c.to_vec(),
    ).unwrap()
}

fn solver() -> Simplex<f64> {
    Simplex::new(SolverConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn agrees_with_enumeration((A, b) in constraints(), c in pair()) {
        let problem = to_problem(&A, &b, c);
        let result = solver().solve(&problem).unwrap();

        match best_vertex(&A, &b, c) {
            None => {
                prop_assert_eq!(result, OptimizationResult::Infeasible);
            },
            Some(_) if has_improving_ray(&A, c) => {
                prop_assert_eq!(result, OptimizationResult::Unbounded);
            },
            Some(best) => match result {
                OptimizationResult::FiniteOptimum(solution) => {
                    prop_assert!((solution.objective_value - best).abs() <= TOLERANCE * (1f64 + best.abs()));
                    prop_assert!(problem.is_feasible(&solution.values, TOLERANCE));
                    let value = problem.objective_value(&solution.values);
                    prop_assert!((value - solution.objective_value).abs() <= TOLERANCE * (1f64 + best.abs()));
                },
                other => {
                    prop_assert!(false, "expected a finite optimum of {}, got {:?}", best, other);
                },
            },
        }
    }

    #[test]
    fn deterministic((A, b) in constraints(), c in pair()) {
        let problem = to_problem(&A, &b, c);
        let solver = solver();

        prop_assert_eq!(solver.solve_with_statistics(&problem), solver.solve_with_statistics(&problem));
    }

    #[test]
    fn optimum_has_no_improving_axis_step((A, b) in constraints(), c in pair()) {
        let problem = to_problem(&A, &b, c);

        if let OptimizationResult::FiniteOptimum(solution) = solver().solve(&problem).unwrap() {
            for j in 0..2 {
                for step in [-1e-3, 1e-3] {
                    let mut moved = solution.values.clone();
                    moved[j] += step;
                    if problem.is_feasible(&moved, 0f64) {
                        prop_assert!(problem.objective_value(&moved) <= solution.objective_value + TOLERANCE);
                    }
                }
            }
        }
    }
}
