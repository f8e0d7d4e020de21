//! # Dense matrix
//!
//! Row-major storage in a single `Vec`. Dimensions are fixed at creation.
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// Uses a `Vec<F>` as underlying data structure, rows stored one after another.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Zero + Clone> Dense<F> {
    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert!(nr_rows > 0);
        debug_assert!(nr_columns > 0);

        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }
}

impl<F> Dense<F> {
    /// Create a matrix from a collection of rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of equal length, at least one of them.
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<F>>) -> Self {
        debug_assert!(!rows.is_empty());

        let nr_rows = rows.len();
        let nr_columns = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        Self {
            data: rows.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// All values in row `i`, mutably.
    pub fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows);

        &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    #[cfg(test)]
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F> Index<(usize, usize)> for Dense<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i * self.nr_columns + j]
    }
}

impl<F> IndexMut<(usize, usize)> for Dense<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &mut self.data[i * self.nr_columns + j]
    }
}
