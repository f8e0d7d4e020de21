use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use relp_tableau::algorithm::simplex::Simplex;
use relp_tableau::algorithm::simplex::config::{DEFAULT_EPSILON, SolverConfig};
use relp_tableau::data::linear_program::standard_form::StandardForm;
use relp_tableau::io::import;

/// A dense simplex solver for problems of the form max c^T x s.t. Ax <= b, x >= 0.
#[derive(Parser)]
#[command(version, author, about)]
struct Opts {
    /// File containing the problem description, in JSON
    #[arg(required_unless_present = "demo")]
    problem_file: Option<PathBuf>,
    /// Solve the demonstration problems instead of reading a file
    #[arg(long, conflicts_with = "problem_file")]
    demo: bool,
    /// Values within this distance from zero are considered zero
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,
    /// Give up after this many pivots
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Give up after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// Print the number of pivots per phase
    #[arg(long)]
    statistics: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let mut config = SolverConfig::default().with_epsilon(opts.epsilon);
    if let Some(max_iterations) = opts.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    if let Some(time_limit) = opts.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(time_limit));
    }
    let solver = Simplex::new(config).context("Invalid solver configuration")?;

    let problems = match opts.problem_file {
        Some(path) => {
            println!("Reading problem file: \"{}\"...", path.to_string_lossy());
            let problem = import(&path)
                .with_context(|| format!("Couldn't read a problem from {:?}", path))?;
            vec![problem]
        },
        None => demonstration_problems()?,
    };

    for (i, problem) in problems.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let (result, statistics) = solver.solve_with_statistics(problem)
            .context("Couldn't solve the problem")?;
        println!("{}", result);
        if opts.statistics {
            for (phase, pivots) in &statistics.pivots {
                println!("{:?}: {} pivots", phase, pivots);
            }
        }
    }

    Ok(())
}

/// An optimal, an unbounded and an infeasible problem.
fn demonstration_problems() -> Result<Vec<StandardForm<f64>>> {
    let c = vec![2f64, 1f64];

    Ok(vec![
        StandardForm::new(
            vec![vec![1f64, -1f64], vec![-1f64, 1f64], vec![1f64, 1f64]],
            vec![1f64, 1f64, 3f64],
            c.clone(),
        )?,
        StandardForm::new(
            vec![vec![1f64, -1f64], vec![-1f64, 1f64], vec![-1f64, -1f64]],
            vec![1f64, 1f64, -3f64],
            c.clone(),
        )?,
        StandardForm::new(
            vec![vec![0f64, -1f64], vec![-1f64, 0f64], vec![1f64, 1f64]],
            vec![-2f64, -2f64, 1f64],
            c,
        )?,
    ])
}
