//! Byte-at-a-time line reading over any [`BufRead`].
//!
//! A line ends at `\n`, which is consumed and not returned; a `\r` directly
//! before it is dropped as well. Reaching the end of the stream before any
//! byte of a line is [`LineOutcome::Eof`]; reaching it after some bytes
//! yields that partial line, and the following call reports `Eof`.
//!
//! The reader owns one [`ByteBuffer`] and clears it at the start of every
//! call, so storage is reused across lines and released with the reader.
use std::io::{self, BufRead};

use bstr::BStr;

use crate::{byte_buffer::ByteBuffer, error::LineError};

/// Result of one [`LineReader::read_line`] call.
#[derive(Debug)]
pub enum LineOutcome<'a> {
    /// A complete line, or the partial last line of the stream.
    Line(&'a BStr),
    /// The stream ended before any byte of a new line.
    Eof,
    /// Appending to the line buffer or reading the stream failed. The partial
    /// line is discarded; after an allocation failure the rest of the line is
    /// consumed as well, so the next call starts on the following line.
    Failed(LineError),
}

/// Splits a byte stream into lines held in a reused [`ByteBuffer`].
#[derive(Debug)]
pub struct LineReader<R> {
    input: R,
    line: ByteBuffer,
}

impl<R: BufRead> LineReader<R> {
    /// Reads from `input` with an unbounded line buffer that allocates on
    /// the first byte.
    pub fn new(input: R) -> Self {
        Self::with_buffer(input, ByteBuffer::new())
    }

    /// Uses `line` as the reusable line buffer, keeping its storage and limit.
    pub fn with_buffer(input: R, mut line: ByteBuffer) -> Self {
        line.clear();
        Self { input, line }
    }

    /// Reads the next line. The returned slice borrows the reader's buffer and
    /// is valid until the next call.
    pub fn read_line(&mut self) -> LineOutcome<'_> {
        self.line.clear();
        let mut saw_byte = false;
        let mut terminated = false;

        loop {
            let byte = match self.next_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => break,
                Err(err) => {
                    self.line.clear();
                    return LineOutcome::Failed(LineError::Io(err));
                }
            };
            saw_byte = true;
            if byte == b'\n' {
                terminated = true;
                break;
            }
            if let Err(err) = self.line.push_byte(byte) {
                self.line.clear();
                if let Err(io_err) = self.skip_rest_of_line() {
                    return LineOutcome::Failed(LineError::Io(io_err));
                }
                return LineOutcome::Failed(LineError::Allocation(err));
            }
        }

        if !saw_byte {
            return LineOutcome::Eof;
        }
        if terminated && self.line.last() == Some(b'\r') {
            self.line.truncate(self.line.len() - 1);
        }
        log::trace!("read line {:?}", self.line.as_bstr());
        LineOutcome::Line(self.line.as_bstr())
    }

    /// Capacity of the reusable line buffer.
    pub fn buffer_capacity(&self) -> usize {
        self.line.capacity()
    }

    /// The underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.input
    }

    /// Returns the underlying reader; buffered but unconsumed bytes stay in it.
    pub fn into_inner(self) -> R {
        self.input
    }

    /// Consumes input through the next `\n` or the end of the stream, so the
    /// following call starts on a line boundary.
    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        while let Some(byte) = self.next_byte()? {
            if byte == b'\n' {
                break;
            }
        }
        Ok(())
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if byte.is_some() {
                self.input.consume(1);
            }
            return Ok(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, Cursor, Read};

    use rstest::rstest;

    use super::{LineOutcome, LineReader};
    use crate::{
        byte_buffer::ByteBuffer,
        error::{AllocationError, LineError},
    };

    fn lines(input: &[u8]) -> Vec<Option<String>> {
        let mut reader = LineReader::new(Cursor::new(input.to_vec()));
        let mut out = Vec::new();
        loop {
            match reader.read_line() {
                LineOutcome::Line(line) => out.push(Some(line.to_string())),
                LineOutcome::Eof => {
                    out.push(None);
                    return out;
                }
                LineOutcome::Failed(err) => panic!("unexpected failure: {err}"),
            }
        }
    }

    #[rstest]
    #[case(b"", &[])]
    #[case(b"\n", &[""])]
    #[case(b"12\n", &["12"])]
    #[case(b"12", &["12"])]
    #[case(b"1\n2\n", &["1", "2"])]
    #[case(b"1\n\n2", &["1", "", "2"])]
    #[case(b"5\r\n-3\r\n", &["5", "-3"])]
    #[case(b"a\rb\n", &["a\rb"])]
    #[case(b"tail\r", &["tail\r"])]
    fn splits_lines(#[case] input: &[u8], #[case] expected: &[&str]) {
        let mut expected: Vec<Option<String>> =
            expected.iter().map(|s| Some((*s).to_string())).collect();
        expected.push(None);
        assert_eq!(lines(input), expected);
    }

    #[test]
    fn eof_is_sticky() {
        let mut reader = LineReader::new(Cursor::new(b"x".to_vec()));
        assert!(matches!(reader.read_line(), LineOutcome::Line(l) if l == "x"));
        assert!(matches!(reader.read_line(), LineOutcome::Eof));
        assert!(matches!(reader.read_line(), LineOutcome::Eof));
    }

    #[test]
    fn buffer_is_reused_across_lines() {
        let mut reader = LineReader::new(Cursor::new(b"a long first line\nb\n".to_vec()));
        assert!(matches!(reader.read_line(), LineOutcome::Line(_)));
        let capacity = reader.buffer_capacity();
        assert!(matches!(reader.read_line(), LineOutcome::Line(l) if l == "b"));
        assert_eq!(reader.buffer_capacity(), capacity);
    }

    #[test]
    fn oversized_line_is_an_allocation_failure() {
        let input = Cursor::new(b"123456789\n7\n".to_vec());
        let mut reader = LineReader::with_buffer(input, ByteBuffer::with_limit(4));
        match reader.read_line() {
            LineOutcome::Failed(LineError::Allocation(AllocationError::LimitExceeded {
                limit,
                ..
            })) => assert_eq!(limit, 4),
            other => panic!("expected allocation failure, got {other:?}"),
        }
        assert!(matches!(reader.read_line(), LineOutcome::Line(l) if l == "7"));
        assert!(matches!(reader.read_line(), LineOutcome::Eof));
    }

    #[test]
    fn oversized_unterminated_line_reaches_eof() {
        let input = Cursor::new(b"123456789".to_vec());
        let mut reader = LineReader::with_buffer(input, ByteBuffer::with_limit(4));
        assert!(matches!(
            reader.read_line(),
            LineOutcome::Failed(LineError::Allocation(_))
        ));
        assert!(matches!(reader.read_line(), LineOutcome::Eof));
    }

    struct Flaky {
        inner: Cursor<Vec<u8>>,
        interrupt_next: bool,
        fail_after: Option<usize>,
        served: usize,
    }

    impl Read for Flaky {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            unreachable!("LineReader only uses BufRead")
        }
    }

    impl BufRead for Flaky {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if std::mem::take(&mut self.interrupt_next) {
                return Err(io::ErrorKind::Interrupted.into());
            }
            if self.fail_after == Some(self.served) {
                return Err(io::Error::other("device unplugged"));
            }
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.served += amt;
            self.interrupt_next = true;
            self.inner.consume(amt);
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let flaky = Flaky {
            inner: Cursor::new(b"42\n".to_vec()),
            interrupt_next: true,
            fail_after: None,
            served: 0,
        };
        let mut reader = LineReader::new(flaky);
        assert!(matches!(reader.read_line(), LineOutcome::Line(l) if l == "42"));
    }

    #[test]
    fn io_errors_are_surfaced() {
        let flaky = Flaky {
            inner: Cursor::new(b"42\n".to_vec()),
            interrupt_next: false,
            fail_after: Some(1),
            served: 0,
        };
        let mut reader = LineReader::new(flaky);
        match reader.read_line() {
            LineOutcome::Failed(LineError::Io(err)) => {
                assert_eq!(err.to_string(), "device unplugged");
            }
            other => panic!("expected io failure, got {other:?}"),
        }
    }
}
