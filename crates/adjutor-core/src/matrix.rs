//! Dense tabular dataset with `NaN` as the missing-value marker

use crate::error::{Error, Result};

/// Row-major `f64` matrix.
///
/// Missing observations are encoded as `f64::NAN`, which is what the
/// imputers fill and what the classifiers refuse.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from a row-major buffer
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = cell_count(rows, cols)?;
        if len != data.len() {
            return Err(Error::shape(format!(
                "expected {} values for a {}x{} matrix, got {}",
                len,
                rows,
                cols,
                data.len()
            )));
        }

        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a list of rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let nrows = rows.len();

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::shape(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Self::new(nrows, cols, rows.into_iter().flatten().collect())
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite the value at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::shape(format!(
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, self.rows, self.cols
            )));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // zero-width matrices have no data, so any non-zero chunk size yields nothing
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Iterate over the values of one column
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        let cols = self.cols;
        let rows = if col < cols { self.rows } else { 0 };
        (0..rows).map(move |r| self.data[r * cols + col])
    }

    /// Number of missing (`NaN`) cells
    pub fn missing_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    pub fn has_missing(&self) -> bool {
        self.data.iter().any(|v| v.is_nan())
    }

    /// Row-major backing buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Apply `f(col, value)` to every cell in place
    pub fn map_inplace(&mut self, mut f: impl FnMut(usize, f64) -> f64) {
        let cols = self.cols.max(1);
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = f(i % cols, *v);
        }
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| Error::shape(format!("{}x{} matrix is too large", rows, cols)))
}
