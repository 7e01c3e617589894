use std::io::{BufRead, Write};

use anyhow::Result;
use drillkit::DynArray;

use crate::console::Console;

/// Reads integers until the user stops, then echoes them one per line.
pub(super) fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    gather(console)?;
    Ok(())
}

/// Gathers integers like [`run`], then answers lookups by position of first
/// occurrence until the user stops.
pub(super) fn search<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> Result<()> {
    let values = gather(console)?;
    while let Some(needle) = console.ask_or("Enter value to search", "quit")? {
        match values.position(&needle) {
            Some(index) => writeln!(console.out(), "Found at index {index}")?,
            None => writeln!(console.out(), "{needle} not found")?,
        }
    }
    Ok(())
}

fn gather<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> Result<DynArray<i32>> {
    let mut values = DynArray::new();
    while let Some(value) = console.ask_or("Enter an integer", "stop")? {
        writeln!(console.out(), "Parsed value: {value}")?;
        if let Err(err) = values.push(value) {
            log::error!("value storage could not grow past {} elements", values.len());
            return Err(err.into());
        }
    }
    writeln!(console.out(), "Input stopped by user.")?;
    for value in &values {
        writeln!(console.out(), "{value}")?;
    }
    Ok(values)
}
