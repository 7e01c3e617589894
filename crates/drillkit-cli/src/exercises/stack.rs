use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{console::Console, stack::Stack};

const MENU: &str = "\nStack Menu:\n1. Push\n2. Pop\n3. Peek\n4. Display\n5. Exit";

pub(super) fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    capacity: usize,
) -> Result<()> {
    let mut stack = Stack::with_capacity(capacity).context("failed to create the stack")?;

    writeln!(console.out(), "--- Array-based Stack Operations ---")?;
    writeln!(
        console.out(),
        "Stack created with initial capacity: {}",
        stack.capacity()
    )?;

    loop {
        writeln!(console.out(), "{MENU}")?;
        let Some(choice) = console.ask_or("Enter your choice", "quit")? else {
            writeln!(console.out(), "\nExiting program.")?;
            break;
        };

        match choice {
            1 => {
                let Some(value) = console.ask_or("Enter value to push", "cancel")? else {
                    writeln!(console.err(), "Push operation cancelled. Returning to menu.")?;
                    continue;
                };
                match stack.push(value) {
                    Ok(()) => writeln!(console.out(), "{value} pushed onto the stack.")?,
                    Err(err) => {
                        log::warn!("stack push failed: {err}");
                        writeln!(console.err(), "Error: failed to push {value}: {}", err.error())?;
                    }
                }
            }
            2 => match stack.pop() {
                Some(value) => writeln!(console.out(), "{value} popped from the stack.")?,
                None => writeln!(console.out(), "Stack is empty. Cannot pop.")?,
            },
            3 => match stack.peek() {
                Some(value) => writeln!(console.out(), "Top element: {value}")?,
                None => writeln!(console.out(), "Stack is empty. Cannot peek.")?,
            },
            4 => stack.render(console.out())?,
            5 => {
                writeln!(console.out(), "Exiting program.")?;
                break;
            }
            _ => writeln!(
                console.out(),
                "Invalid choice. Please enter a number between 1 and 5."
            )?,
        }
    }

    writeln!(console.out(), "Program terminated.")?;
    Ok(())
}
