//! The prompt, read, parse and retry loop behind every integer prompt.
//!
//! [`IntInput::next_int`] keeps prompting until it has a valid integer or a
//! reason to stop. Parse failures are written to the diagnostics writer and
//! retried without limit. A closed stream or the sentinel line ends input
//! with [`NextInt::UserStopped`]. Allocation and I/O failures are terminal for
//! the call and are handed to the caller instead of being retried.
use std::io::{self, BufRead, Write};

use crate::{
    byte_buffer::ByteBuffer,
    error::{AllocationError, LineError, ParseError},
    int_parser::parse_int,
    line_reader::{LineOutcome, LineReader},
    options::InputOptions,
};

/// Outcome of one [`IntInput::next_int`] call.
#[derive(Debug)]
#[must_use]
pub enum NextInt {
    /// A valid integer was entered.
    Value(i32),
    /// The sentinel was entered or the input stream closed.
    UserStopped,
    /// The line buffer could not grow. Retrying would not help.
    AllocationFailed(AllocationError),
    /// Reading the input or writing a prompt failed.
    InputFailed(io::Error),
}

impl NextInt {
    /// The integer, if one was entered.
    pub fn into_value(self) -> Option<i32> {
        match self {
            NextInt::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Whether this is [`NextInt::UserStopped`].
    pub fn is_stopped(&self) -> bool {
        matches!(self, NextInt::UserStopped)
    }
}

impl PartialEq for NextInt {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NextInt::Value(a), NextInt::Value(b)) => a == b,
            (NextInt::UserStopped, NextInt::UserStopped) => true,
            (NextInt::AllocationFailed(a), NextInt::AllocationFailed(b)) => a == b,
            (NextInt::InputFailed(a), NextInt::InputFailed(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

/// Interactive integer input over a line source, a prompt writer `W` and a
/// diagnostics writer `E`.
#[derive(Debug)]
pub struct IntInput<R, W, E> {
    lines: LineReader<R>,
    out: W,
    diagnostics: E,
    options: InputOptions,
    reported: usize,
}

impl<R: BufRead, W: Write, E: Write> IntInput<R, W, E> {
    /// Creates a pipeline with default options. Does not allocate.
    pub fn new(input: R, out: W, diagnostics: E) -> Self {
        Self {
            lines: LineReader::new(input),
            out,
            diagnostics,
            options: InputOptions::default(),
            reported: 0,
        }
    }

    /// Creates a pipeline with `options`, reserving the initial line buffer.
    pub fn with_options(
        input: R,
        out: W,
        diagnostics: E,
        options: InputOptions,
    ) -> Result<Self, AllocationError> {
        let mut line = match options.max_line_bytes {
            Some(limit) => ByteBuffer::with_limit(limit),
            None => ByteBuffer::new(),
        };
        line.reserve(options.initial_line_capacity)?;
        Ok(Self {
            lines: LineReader::with_buffer(input, line),
            out,
            diagnostics,
            options,
            reported: 0,
        })
    }

    /// Writes `prompt` and reads lines until one parses as an integer, the
    /// user stops, or input becomes unusable.
    pub fn next_int(&mut self, prompt: &str) -> NextInt {
        loop {
            if let Err(err) = self.prompt(prompt) {
                return NextInt::InputFailed(err);
            }

            let line = match self.lines.read_line() {
                LineOutcome::Line(line) => line,
                LineOutcome::Eof => {
                    log::debug!("input closed, stopping");
                    return NextInt::UserStopped;
                }
                LineOutcome::Failed(LineError::Allocation(err)) => {
                    log::error!("line buffer could not grow: {err}");
                    return NextInt::AllocationFailed(err);
                }
                LineOutcome::Failed(LineError::Io(err)) => return NextInt::InputFailed(err),
            };

            if *line == *self.options.sentinel.as_bytes() {
                log::debug!("sentinel {:?} entered, stopping", self.options.sentinel);
                return NextInt::UserStopped;
            }

            match parse_int(line) {
                Ok(value) => return NextInt::Value(value),
                Err(err) => {
                    log::debug!("rejected {line:?}: {err}");
                    if let Err(io_err) = self.report(err) {
                        return NextInt::InputFailed(io_err);
                    }
                }
            }
        }
    }

    /// Recoverable errors reported so far.
    pub fn reported_errors(&self) -> usize {
        self.reported
    }

    /// The options this pipeline was built with.
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// The prompt writer, for callers printing their own results.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// The writer that receives parse error reports.
    pub fn diagnostics(&mut self) -> &mut E {
        &mut self.diagnostics
    }

    /// Splits the pipeline into its reader and both writers.
    pub fn into_parts(self) -> (R, W, E) {
        (self.lines.into_inner(), self.out, self.diagnostics)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        if prompt.is_empty() {
            return Ok(());
        }
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()
    }

    fn report(&mut self, err: ParseError) -> io::Result<()> {
        self.reported += 1;
        if self.options.echo_errors {
            writeln!(self.diagnostics, "Error: {err}")?;
            self.diagnostics.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::{IntInput, NextInt};
    use crate::{error::AllocationError, options::InputOptions};

    type Buffers = IntInput<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn pipeline(input: &str) -> Buffers {
        IntInput::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    fn diagnostics(input: Buffers) -> String {
        let (_, _, diagnostics) = input.into_parts();
        String::from_utf8(diagnostics).unwrap()
    }

    #[test]
    fn values_errors_and_sentinel() {
        let mut input = pipeline("5\nabc\n-3\nq\n");
        assert_eq!(input.next_int("> "), NextInt::Value(5));
        assert_eq!(input.next_int("> "), NextInt::Value(-3));
        assert_eq!(input.reported_errors(), 1);
        assert_eq!(input.next_int("> "), NextInt::UserStopped);
        assert_eq!(input.reported_errors(), 1);

        let (_, out, diagnostics) = input.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "> > > > ");
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "Error: no digits found after sign\n"
        );
    }

    #[test]
    fn immediate_eof_is_a_stop() {
        let mut input = pipeline("");
        assert_eq!(input.next_int("n: "), NextInt::UserStopped);
        assert_eq!(input.reported_errors(), 0);
    }

    #[test]
    fn partial_last_line_is_kept() {
        let mut input = pipeline("12");
        assert_eq!(input.next_int(""), NextInt::Value(12));
        assert_eq!(input.next_int(""), NextInt::UserStopped);
    }

    #[test]
    fn errors_then_eof_still_stops() {
        let mut input = pipeline("\n-\n12a\n");
        assert_eq!(input.next_int(""), NextInt::UserStopped);
        assert_eq!(input.reported_errors(), 3);
        assert_eq!(
            diagnostics(input),
            "Error: input string is empty\n\
             Error: no digits found after sign\n\
             Error: invalid character 'a' at offset 2\n"
        );
    }

    #[test]
    fn sentinel_must_match_whole_line() {
        let mut input = pipeline("quit\nq\n");
        assert_eq!(input.next_int(""), NextInt::UserStopped);
        assert_eq!(input.reported_errors(), 1);
    }

    #[test]
    fn custom_sentinel_and_quiet_errors() {
        let options = InputOptions {
            sentinel: "done".into(),
            echo_errors: false,
            ..InputOptions::default()
        };
        let mut input = IntInput::with_options(
            Cursor::new(b"q\n8\ndone\n".to_vec()),
            Vec::new(),
            Vec::new(),
            options,
        )
        .unwrap();
        assert_eq!(input.next_int(""), NextInt::Value(8));
        assert_eq!(input.next_int(""), NextInt::UserStopped);
        assert_eq!(input.reported_errors(), 1);
        assert_eq!(diagnostics(input), "");
    }

    #[test]
    fn oversized_line_fails_then_next_line_is_read() {
        let options = InputOptions {
            max_line_bytes: Some(4),
            ..InputOptions::default()
        };
        let mut input = IntInput::with_options(
            Cursor::new(b"123456\n7\n".to_vec()),
            io::sink(),
            io::sink(),
            options,
        )
        .unwrap();
        assert_eq!(
            input.next_int(""),
            NextInt::AllocationFailed(AllocationError::LimitExceeded {
                requested: 5,
                limit: 4
            })
        );
        assert_eq!(input.reported_errors(), 0);
        assert_eq!(input.next_int(""), NextInt::Value(7));
        assert_eq!(input.next_int(""), NextInt::UserStopped);
    }

    #[test]
    fn initial_capacity_is_reserved() {
        let options = InputOptions {
            initial_line_capacity: 32,
            ..InputOptions::default()
        };
        let input = IntInput::with_options(io::empty(), io::sink(), io::sink(), options);
        assert!(input.is_ok());
    }

    #[test]
    fn broken_prompt_writer_is_input_failure() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut input = IntInput::new(Cursor::new(b"1\n".to_vec()), Broken, io::sink());
        match input.next_int("> ") {
            NextInt::InputFailed(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected input failure, got {other:?}"),
        }
    }

    #[test]
    fn into_value_and_is_stopped() {
        assert_eq!(NextInt::Value(4).into_value(), Some(4));
        assert_eq!(NextInt::UserStopped.into_value(), None);
        assert!(NextInt::UserStopped.is_stopped());
        assert!(!NextInt::Value(0).is_stopped());
    }
}
