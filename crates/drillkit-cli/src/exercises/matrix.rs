use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    console::Console,
    matrix::{Matrix, SparseMatrix},
};

pub(super) fn add<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    writeln!(console.out(), "Matrix addition program")?;
    let Some((a, b)) = read_pair(console)? else {
        return stopped(console);
    };
    match a.checked_add(&b) {
        Ok(sum) => {
            writeln!(console.out(), "Sum of the matrices:")?;
            write!(console.out(), "{sum}")?;
        }
        Err(err) => writeln!(console.err(), "Error: {err}")?,
    }
    Ok(())
}

pub(super) fn multiply<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<()> {
    writeln!(console.out(), "Matrix multiplication program")?;
    let Some((a, b)) = read_pair(console)? else {
        return stopped(console);
    };
    match a.checked_mul(&b) {
        Ok(product) => {
            writeln!(console.out(), "Product of the matrices:")?;
            write!(console.out(), "{product}")?;
        }
        Err(err) => writeln!(console.err(), "Error: {err}")?,
    }
    Ok(())
}

/// Reads a dense matrix and keeps only its non-zero entries.
pub(super) fn sparse<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    max_entries: usize,
) -> Result<()> {
    let Some((nrows, ncols)) = read_shape(console)? else {
        return stopped(console);
    };
    let mut matrix = SparseMatrix::with_capacity(nrows, ncols, max_entries)?;

    writeln!(console.out(), "Enter the elements of the matrix:")?;
    for row in 0..nrows {
        for col in 0..ncols {
            let Some(value) = ask_element(console, row, col)? else {
                return stopped(console);
            };
            matrix.set(row, col, value)?;
        }
    }
    log::debug!(
        "stored {} of {} entries, capacity {}",
        matrix.nnz(),
        nrows * ncols,
        matrix.capacity()
    );

    write!(console.out(), "{matrix}")?;
    writeln!(console.out(), "Matrix in dense format:")?;
    let dense = matrix.to_dense()?;
    write!(console.out(), "{dense}")?;
    Ok(())
}

fn read_pair<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<Option<(Matrix, Matrix)>> {
    let Some(first) = read_matrix(console, "first")? else {
        return Ok(None);
    };
    let Some(second) = read_matrix(console, "second")? else {
        return Ok(None);
    };
    Ok(Some((first, second)))
}

fn read_matrix<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    which: &str,
) -> Result<Option<Matrix>> {
    writeln!(console.out(), "Enter the rows and columns of the {which} matrix:")?;
    let Some((nrows, ncols)) = read_shape(console)? else {
        return Ok(None);
    };
    let mut matrix = Matrix::zeros(nrows, ncols)?;

    writeln!(console.out(), "Enter the elements of the {which} matrix:")?;
    for row in 0..nrows {
        for col in 0..ncols {
            let Some(value) = ask_element(console, row, col)? else {
                return Ok(None);
            };
            matrix.set(row, col, value)?;
        }
    }
    Ok(Some(matrix))
}

fn read_shape<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<Option<(usize, usize)>> {
    let Some(nrows) = ask_dimension(console, "Enter number of rows")? else {
        return Ok(None);
    };
    let Some(ncols) = ask_dimension(console, "Enter number of columns")? else {
        return Ok(None);
    };
    Ok(Some((nrows, ncols)))
}

/// Asks until a positive dimension is entered.
fn ask_dimension<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    text: &str,
) -> Result<Option<usize>> {
    loop {
        let Some(value) = console.ask_or(text, "stop")? else {
            return Ok(None);
        };
        match usize::try_from(value) {
            Ok(n) if n > 0 => return Ok(Some(n)),
            _ => writeln!(console.err(), "Error: dimensions must be positive, got {value}")?,
        }
    }
}

fn ask_element<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    row: usize,
    col: usize,
) -> Result<Option<i32>> {
    console.ask(&format!("Enter element at row {row}, column {col}: "))
}

fn stopped<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    writeln!(console.out(), "Input stopped by user.")?;
    Ok(())
}
