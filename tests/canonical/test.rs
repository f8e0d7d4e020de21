use approx::assert_abs_diff_eq;

use relp_tableau::algorithm::{OptimizationResult, solve, SolveError};
use relp_tableau::algorithm::simplex::Simplex;
use relp_tableau::algorithm::simplex::config::SolverConfig;
use relp_tableau::io::error::ImportError;
use relp_tableau::io::import;

use super::get_test_file_path;

fn solve_file(name: &str) -> OptimizationResult<f64> {
    let problem = import(&get_test_file_path(name)).unwrap();
    Simplex::new(SolverConfig::default()).unwrap().solve(&problem).unwrap()
}

#[test]
fn bounded() {
    match solve_file("bounded") {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.objective_value, 5f64, epsilon = 1e-9);
            assert_abs_diff_eq!(solution.values[0], 2f64, epsilon = 1e-9);
            assert_abs_diff_eq!(solution.values[1], 1f64, epsilon = 1e-9);
            assert_eq!(solution.to_string(), "Answer = 5, x = [2, 1]");
        },
        other => panic!("expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn lower_bounded() {
    assert_eq!(solve_file("lower_bounded"), OptimizationResult::Unbounded);
}

#[test]
fn infeasible() {
    let result = solve_file("infeasible");
    assert_eq!(result, OptimizationResult::Infeasible);
    assert_eq!(result.to_string(), "No feasible solution exists, the constraints are inconsistent!");
}

#[test]
fn ragged() {
    let result = import(&get_test_file_path("ragged"));
    assert!(matches!(result, Err(ImportError::LinearProgram(SolveError::InvalidInput(_)))));
}

#[test]
fn unbounded_upper_region() {
    // x1 - x0 <= 1 and x1 <= 4: x0 can grow forever
    let result = solve(
        vec![vec![-1f64, 1f64], vec![0f64, 1f64]],
        vec![1f64, 4f64],
        vec![1f64, 1f64],
    );
    assert_eq!(result, Ok(OptimizationResult::Unbounded));
}

#[test]
fn empty_problems_are_rejected() {
    assert!(matches!(solve(vec![], vec![], vec![1f64]), Err(SolveError::InvalidInput(_))));
    assert!(matches!(solve(vec![vec![]], vec![1f64], vec![]), Err(SolveError::InvalidInput(_))));
}

#[test]
fn larger_problem() {
    // Production planning: max 3x + 2y + 4z
    // x + y + 2z <= 4, 2x + z <= 5, 2x + 2y + 4z <= 8 (redundant), x - y >= -1
    let result = solve(
        vec![
            vec![1f64, 1f64, 2f64],
            vec![2f64, 0f64, 1f64],
            vec![2f64, 2f64, 4f64],
            vec![-1f64, 1f64, 0f64],
        ],
        vec![4f64, 5f64, 8f64, 1f64],
        vec![3f64, 2f64, 4f64],
    ).unwrap();

    match result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.objective_value, 10.5f64, epsilon = 1e-9);
            assert_abs_diff_eq!(solution.values[0], 2.5f64, epsilon = 1e-9);
            assert_abs_diff_eq!(solution.values[1], 1.5f64, epsilon = 1e-9);
            assert_abs_diff_eq!(solution.values[2], 0f64, epsilon = 1e-9);
        },
        other => panic!("expected a finite optimum, got {:?}", other),
    }
}
