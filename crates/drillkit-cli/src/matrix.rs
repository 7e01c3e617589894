//! Dense integer matrices stored row by row, plus a coordinate-list sparse
//! form that only keeps non-zero entries.
use core::fmt;

use drillkit::{AllocationError, DynArray, IndexError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("cannot {op} a {left} matrix and a {right} matrix")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },
    #[error("arithmetic overflow while computing entry ({row}, {col})")]
    Overflow { row: usize, col: usize },
    #[error("({row}, {col}) is outside a {nrows}x{ncols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// Rows by columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub nrows: usize,
    pub ncols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.nrows, self.ncols)
    }
}

/// Row-major dense matrix: one [`DynArray`] per row, all of length `ncols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: DynArray<DynArray<i32>>,
    ncols: usize,
}

impl Matrix {
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, AllocationError> {
        let mut rows = DynArray::with_capacity(nrows)?;
        for _ in 0..nrows {
            rows.push(DynArray::filled(ncols, 0)?)?;
        }
        Ok(Self { rows, ncols })
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i32, MatrixError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .map_err(|_| self.out_of_bounds(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<(), MatrixError> {
        let err = self.out_of_bounds(row, col);
        self.rows
            .get_mut(row)
            .and_then(|r| r.set(col, value))
            .map(drop)
            .map_err(|_: IndexError| err)
    }

    /// Element-wise sum; both operands must have the same shape.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(self.mismatch("add", other));
        }
        let mut sum = Matrix::zeros(self.nrows(), self.ncols)?;
        for row in 0..self.nrows() {
            for col in 0..self.ncols {
                let value = self
                    .get(row, col)?
                    .checked_add(other.get(row, col)?)
                    .ok_or(MatrixError::Overflow { row, col })?;
                sum.set(row, col, value)?;
            }
        }
        Ok(sum)
    }

    /// Matrix product; `self.ncols()` must equal `other.nrows()`.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != other.nrows() {
            return Err(self.mismatch("multiply", other));
        }
        let mut product = Matrix::zeros(self.nrows(), other.ncols)?;
        for row in 0..self.nrows() {
            for col in 0..other.ncols {
                let mut acc: i32 = 0;
                for k in 0..self.ncols {
                    acc = self
                        .get(row, k)?
                        .checked_mul(other.get(k, col)?)
                        .and_then(|term| acc.checked_add(term))
                        .ok_or(MatrixError::Overflow { row, col })?;
                }
                product.set(row, col, acc)?;
            }
        }
        Ok(product)
    }

    pub fn shape(&self) -> Shape {
        Shape {
            nrows: self.nrows(),
            ncols: self.ncols,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.rows.iter().map(DynArray::as_slice)
    }

    fn mismatch(&self, op: &'static str, other: &Matrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::OutOfBounds {
            row,
            col,
            nrows: self.nrows(),
            ncols: self.ncols,
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut sep = "";
            for value in row {
                write!(f, "{sep}{value}")?;
                sep = " ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One stored entry of a [`SparseMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i32,
}

/// Coordinate-list (COO) matrix. Zero is never stored; entries keep the order
/// in which they were first set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    nrows: usize,
    ncols: usize,
    entries: DynArray<Entry>,
}

impl SparseMatrix {
    /// An all-zero matrix with room for `capacity` entries before growing.
    pub fn with_capacity(
        nrows: usize,
        ncols: usize,
        capacity: usize,
    ) -> Result<Self, AllocationError> {
        Ok(Self {
            nrows,
            ncols,
            entries: DynArray::with_capacity(capacity)?,
        })
    }

    pub fn shape(&self) -> Shape {
        Shape {
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i32, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(self
            .entries
            .iter()
            .find(|e| e.row == row && e.col == col)
            .map_or(0, |e| e.value))
    }

    /// Stores `value` at `(row, col)`. Setting zero removes any stored entry.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<(), MatrixError> {
        self.check_bounds(row, col)?;
        let existing = self
            .entries
            .iter()
            .position(|e| e.row == row && e.col == col);
        match (existing, value) {
            (None, 0) => {}
            (None, value) => {
                self.entries
                    .push(Entry { row, col, value })
                    .map_err(AllocationError::from)?;
            }
            (Some(index), 0) => {
                // `index` came from `position`, so it is in range.
                let _removed = self.entries.remove(index);
            }
            (Some(index), value) => {
                if let Ok(entry) = self.entries.get_mut(index) {
                    entry.value = value;
                }
            }
        }
        Ok(())
    }

    pub fn to_dense(&self) -> Result<Matrix, MatrixError> {
        let mut dense = Matrix::zeros(self.nrows, self.ncols)?;
        for entry in &self.entries {
            dense.set(entry.row, entry.col, entry.value)?;
        }
        Ok(dense)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row < self.nrows && col < self.ncols {
            return Ok(());
        }
        Err(MatrixError::OutOfBounds {
            row,
            col,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sparse matrix (COO format):")?;
        for entry in &self.entries {
            writeln!(f, "({}, {}): {}", entry.row, entry.col, entry.value)?;
        }
        Ok(())
    }
}
