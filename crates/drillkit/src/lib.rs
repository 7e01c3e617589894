//! Building blocks for small interactive data-structure exercises: a
//! NUL-terminated line buffer, a growable array with a doubling policy, a
//! strict integer parser and the prompt/retry loop that ties line reading and
//! parsing together.
//!
//! ```rust
//! use std::io::{self, Cursor};
//! use drillkit::{DynArray, IntInput, NextInt};
//!
//! let mut input = IntInput::new(Cursor::new("5\nabc\n-3\nq\n"), io::sink(), io::sink());
//! let mut values = DynArray::new();
//! while let NextInt::Value(n) = input.next_int("> ") {
//!     values.push(n).unwrap();
//! }
//! assert_eq!(values.as_slice(), &[5, -3]);
//! assert_eq!(input.reported_errors(), 1);
//! ```

mod byte_buffer;
mod dyn_array;
mod error;
mod int_parser;
mod line_reader;
mod options;
mod pipeline;


pub use byte_buffer::ByteBuffer;
pub use dyn_array::DynArray;
pub use error::{AllocationError, IndexError, LineError, ParseError, PushError};
pub use int_parser::{parse_int, parse_int_str};
pub use line_reader::{LineOutcome, LineReader};
pub use options::InputOptions;
pub use pipeline::{IntInput, NextInt};
