use std::{collections::TryReserveError, io};

use thiserror::Error;

/// Storage for a buffer or array could not be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The allocator refused the request.
    #[error("memory allocation failed: {0}")]
    Reserve(#[from] TryReserveError),
    /// Growing would pass a configured ceiling.
    #[error("requested capacity of {requested} exceeds the limit of {limit}")]
    LimitExceeded {
        /// Capacity the operation needed.
        requested: usize,
        /// The configured ceiling.
        limit: usize,
    },
    /// The needed capacity does not fit in a `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,
}

/// An index was outside `0..len`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of bounds for length {len}")]
pub struct IndexError {
    /// The rejected index.
    pub index: usize,
    /// Length of the container at the time.
    pub len: usize,
}

/// Appending to a [`DynArray`](crate::DynArray) failed; the rejected element
/// is handed back so the caller can retry or drop it.
#[derive(Error, Debug)]
#[error("failed to append element: {error}")]
pub struct PushError<T> {
    value: T,
    #[source]
    error: AllocationError,
}

impl<T> PushError<T> {
    pub(crate) fn new(value: T, error: AllocationError) -> Self {
        Self { value, error }
    }

    /// The element that was not appended.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Why the append failed.
    pub fn error(&self) -> &AllocationError {
        &self.error
    }
}

impl<T> From<PushError<T>> for AllocationError {
    fn from(err: PushError<T>) -> Self {
        err.error
    }
}

/// Why a line of text is not a valid integer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line had no characters.
    #[error("input string is empty")]
    EmptyInput,
    /// Nothing but an optional `-`.
    #[error("no digits found after sign")]
    NoDigits,
    #[error("invalid character '{}' at offset {offset}", .byte.escape_ascii())]
    /// A byte other than an ASCII digit after the sign.
    TrailingGarbage {
        /// Byte offset of the first offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
    /// Above `i32::MAX`.
    #[error("number is too large")]
    NumberTooLarge,
    /// Below `i32::MIN`.
    #[error("number is too small")]
    NumberTooSmall,
}

/// A line could not be read.
#[derive(Error, Debug)]
pub enum LineError {
    /// The line buffer could not grow.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// The reader failed with something other than `Interrupted`.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}
