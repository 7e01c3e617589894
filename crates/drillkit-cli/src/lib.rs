//! Interactive exercises built on [`drillkit`]: an array-backed stack, a
//! singly linked list, integer collection and search, dense matrix
//! arithmetic and a coordinate-list sparse matrix.
use std::io::{BufRead, Write};

use anyhow::Result;
use drillkit::{InputOptions, IntInput};

pub mod cli;
pub mod console;
pub mod exercises;
pub mod linked_list;
pub mod matrix;
pub mod stack;

use console::Console;
use exercises::Exercise;

/// Runs `exercise` against the given streams and returns them, so callers
/// can inspect what was written.
pub fn run<R: BufRead, W: Write, E: Write>(
    exercise: Exercise,
    options: InputOptions,
    input: R,
    out: W,
    diagnostics: E,
) -> Result<(R, W, E)> {
    let mut console = Console::new(IntInput::with_options(input, out, diagnostics, options)?);
    exercise.run(&mut console)?;
    log::info!(
        "{} finished with {} rejected lines",
        exercise.name(),
        console.reported_errors()
    );
    let (input, mut out, diagnostics) = console.into_parts();
    out.flush()?;
    Ok((input, out, diagnostics))
}
