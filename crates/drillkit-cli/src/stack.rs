use std::io::{self, Write};

use drillkit::{AllocationError, DynArray, PushError};

/// LIFO stack of integers stored in a [`DynArray`]; the top is the last
/// element.
#[derive(Debug, Default)]
pub struct Stack {
    elements: DynArray<i32>,
}

impl Stack {
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        Ok(Self {
            elements: DynArray::with_capacity(capacity)?,
        })
    }

    pub fn push(&mut self, value: i32) -> Result<(), PushError<i32>> {
        self.elements.push(value)
    }

    pub fn pop(&mut self) -> Option<i32> {
        self.elements.pop()
    }

    pub fn peek(&self) -> Option<i32> {
        self.elements.last().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Elements from top to base.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.elements.iter().rev().copied()
    }

    /// Draws the stack from top to base, one boxed cell per element.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(
                out,
                "Stack is empty. (Size: 0, Capacity: {})",
                self.capacity()
            );
        }

        writeln!(out, "Stack (Size: {}, Capacity: {}):", self.len(), self.capacity())?;
        for (i, value) in self.iter().enumerate() {
            if i == 0 {
                writeln!(out, "TOP -> | {value} |")?;
            } else {
                writeln!(out, "       -----")?;
                writeln!(out, "       | {value} |")?;
            }
        }
        writeln!(out, "       BASE")
    }
}
