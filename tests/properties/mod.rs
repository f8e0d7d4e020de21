//! # Property based tests
//!
//! Random problems in two variables are small enough to be solved independently by enumerating
//! all vertices of the feasible region and all extreme rays of its recession cone. The outcome of
//! the simplex method is compared against that enumeration.

/// # Generation and comparison
#[allow(missing_docs)]
mod test;

/// Tolerance used when comparing against the enumeration.
const TOLERANCE: f64 = 1e-6;

/// Intersect two lines `a_0 x_0 + a_1 x_1 = b`.
fn intersection(first: ([f64; 2], f64), second: ([f64; 2], f64)) -> Option<[f64; 2]> {
    let ([a, b], e) = first;
    let ([c, d], f) = second;

    let determinant = a * d - b * c;
    if determinant.abs() < 1e-12 {
        None
    } else {
        Some([(e * d - b * f) / determinant, (a * f - e * c) / determinant])
    }
}

/// All lines bounding the feasible region: the constraints and the two axes.
fn boundary_lines(A: &[[f64; 2]], b: &[f64]) -> Vec<([f64; 2], f64)> {
    A.iter().copied().zip(b.iter().copied())
        .chain([([1f64, 0f64], 0f64), ([0f64, 1f64], 0f64)])
        .collect()
}

fn is_feasible(A: &[[f64; 2]], b: &[f64], x: [f64; 2]) -> bool {
    x.iter().all(|&value| value >= -TOLERANCE)
        && A.iter().zip(b).all(|(row, &rhs)| row[0] * x[0] + row[1] * x[1] <= rhs + TOLERANCE)
}

/// Largest objective value over the vertices of the feasible region, `None` if it is empty.
///
/// The region lies in the nonnegative quadrant, so it has a vertex whenever it is not empty.
fn best_vertex(A: &[[f64; 2]], b: &[f64], c: [f64; 2]) -> Option<f64> {
    let lines = boundary_lines(A, b);

    let mut best: Option<f64> = None;
    for (i, &first) in lines.iter().enumerate() {
        for &second in &lines[i + 1..] {
            if let Some(x) = intersection(first, second) {
                if is_feasible(A, b, x) {
                    let value = c[0] * x[0] + c[1] * x[1];
                    best = Some(best.map_or(value, |current: f64| current.max(value)));
                }
            }
        }
    }

    best
}

/// Whether the recession cone `{d >= 0, Ad <= 0}` contains a direction improving the objective.
///
/// In two dimensions, the extreme rays of the cone are among the axes and the directions
/// orthogonal to a constraint row.
fn has_improving_ray(A: &[[f64; 2]], c: [f64; 2]) -> bool {
    let candidates = [[1f64, 0f64], [0f64, 1f64]].into_iter()
        .chain(A.iter().flat_map(|row| [[row[1], -row[0]], [-row[1], row[0]]]));

    candidates
        .filter(|d| d[0].abs() + d[1].abs() > 0f64)
        .filter(|d| d.iter().all(|&value| value >= 0f64))
        .filter(|d| A.iter().all(|row| row[0] * d[0] + row[1] * d[1] <= 0f64))
        .any(|d| c[0] * d[0] + c[1] * d[1] > 0f64)
}
