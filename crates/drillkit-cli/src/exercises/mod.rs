//! The interactive programs. Each one drives a [`Console`] and writes its
//! results to the console's output; parse errors and cancellations go to the
//! diagnostics stream.
use std::io::{BufRead, Write};

use anyhow::Result;

use crate::console::Console;

mod collect;
mod list;
mod matrix;
mod stack;

/// Initial stack capacity when none is given on the command line.
pub const DEFAULT_STACK_CAPACITY: usize = 5;
/// Initial sparse entry capacity when none is given on the command line.
pub const DEFAULT_SPARSE_ENTRIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Stack { capacity: usize },
    List,
    Collect,
    Search,
    MatAdd,
    MatMult,
    Sparse { max_entries: usize },
}

impl Exercise {
    pub fn name(self) -> &'static str {
        match self {
            Exercise::Stack { .. } => "stack",
            Exercise::List => "list",
            Exercise::Collect => "collect",
            Exercise::Search => "search",
            Exercise::MatAdd => "mat-add",
            Exercise::MatMult => "mat-mult",
            Exercise::Sparse { .. } => "sparse",
        }
    }

    pub fn run<R: BufRead, W: Write, E: Write>(
        self,
        console: &mut Console<R, W, E>,
    ) -> Result<()> {
        log::info!("starting the {} exercise", self.name());
        match self {
            Exercise::Stack { capacity } => stack::run(console, capacity),
            Exercise::List => list::run(console),
            Exercise::Collect => collect::run(console),
            Exercise::Search => collect::search(console),
            Exercise::MatAdd => matrix::add(console),
            Exercise::MatMult => matrix::multiply(console),
            Exercise::Sparse { max_entries } => matrix::sparse(console, max_entries),
        }
    }
}
