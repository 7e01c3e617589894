//! Growable, NUL-terminated byte buffer used to assemble one line of input.
//!
//! Storage is a `Vec<u8>` whose last byte is always `\0` once any storage has
//! been requested, so `capacity() >= len() + 1` holds whenever the buffer owns
//! memory. The terminator is never part of [`ByteBuffer::as_bytes`].
//!
//! Growth requests go through `try_reserve_exact`, so exhausting memory is
//! reported as an [`AllocationError`] instead of aborting the process. A failed
//! append leaves the buffer exactly as it was.
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::error::AllocationError;

/// An owned byte string that keeps a `\0` after its content.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    limit: Option<usize>,
}

impl ByteBuffer {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer that owns at least `capacity` bytes of storage.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut buffer = Self::new();
        buffer.reserve(capacity)?;
        Ok(buffer)
    }

    /// Creates an empty buffer whose capacity, terminator included, may never
    /// exceed `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Number of content bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Whether there is no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated bytes, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The capacity ceiling set by [`ByteBuffer::with_limit`], if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Ensures room for `additional` more content bytes plus the terminator.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocationError> {
        if additional == 0 && self.data.is_empty() {
            return Ok(());
        }
        let needed = self
            .len()
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(AllocationError::CapacityOverflow)?;
        if needed > self.data.capacity() {
            self.grow(needed)?;
        }
        if self.data.is_empty() {
            self.data.push(0);
        }
        Ok(())
    }

    /// Appends one byte. See [`ByteBuffer::push_bytes`].
    pub fn push_byte(&mut self, byte: u8) -> Result<(), AllocationError> {
        self.push_bytes(&[byte])
    }

    /// Appends the UTF-8 bytes of `text`. See [`ByteBuffer::push_bytes`].
    pub fn push_str(&mut self, text: &str) -> Result<(), AllocationError> {
        self.push_bytes(text.as_bytes())
    }

    /// Appends `bytes`, growing to `max(needed, 2 * capacity)` when the new
    /// content plus terminator would not fit. Appending nothing never
    /// allocates.
    ///
    /// # Errors
    ///
    /// [`AllocationError`] if the buffer had to grow and could not; the
    /// content is unchanged in that case.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), AllocationError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.reserve(bytes.len())?;
        // Capacity is already sufficient: none of the pushes below reallocate.
        self.data.pop();
        self.data.extend_from_slice(bytes);
        self.data.push(0);
        Ok(())
    }

    /// Shortens the content to `len` bytes. Has no effect if `len` is not
    /// smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.data.truncate(len);
            self.data.push(0);
        }
    }

    /// Drops the content but keeps the storage for reuse.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// The final content byte.
    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Content followed by the `\0` terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.data.is_empty() {
            return b"\0";
        }
        &self.data
    }

    /// Content as a [`BStr`], which displays invalid UTF-8 lossily.
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    fn grow(&mut self, needed: usize) -> Result<(), AllocationError> {
        let old = self.data.capacity();
        let mut target = needed.max(old.saturating_mul(2));
        if let Some(limit) = self.limit {
            if needed > limit {
                return Err(AllocationError::LimitExceeded {
                    requested: needed,
                    limit,
                });
            }
            target = target.min(limit);
        }
        self.data.try_reserve_exact(target - self.data.len())?;
        log::trace!("byte buffer grew from {old} to {} bytes", self.data.capacity());
        Ok(())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("content", &self.as_bstr())
            .field("capacity", &self.capacity())
            .field("limit", &self.limit)
            .finish()
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteBuffer;
    use crate::error::AllocationError;

    #[test]
    fn new_buffer_owns_nothing() {
        let buf = ByteBuffer::new();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_bytes(), b"");
        assert_eq!(buf.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn with_capacity_reserves_terminator_slot() {
        let buf = ByteBuffer::with_capacity(8).unwrap();
        assert!(buf.capacity() >= 9);
        assert!(buf.is_empty());
        assert_eq!(buf.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn append_keeps_terminator() {
        let mut buf = ByteBuffer::new();
        buf.push_byte(b'4').unwrap();
        buf.push_str("2 is").unwrap();
        buf.push_bytes(b" the answer").unwrap();
        assert_eq!(buf.as_bytes(), b"42 is the answer");
        assert_eq!(buf.as_bytes_with_nul(), b"42 is the answer\0");
        assert!(buf.capacity() > buf.len());
    }

    #[test]
    fn growth_at_least_doubles() {
        let mut buf = ByteBuffer::new();
        let mut previous = buf.capacity();
        for _ in 0..200 {
            buf.push_byte(b'x').unwrap();
            let capacity = buf.capacity();
            if capacity != previous {
                assert!(capacity >= previous * 2);
                previous = capacity;
            }
            assert!(capacity > buf.len());
        }
    }

    #[test]
    fn large_append_grows_to_needed() {
        let mut buf = ByteBuffer::new();
        buf.push_byte(b'a').unwrap();
        let text = "b".repeat(100);
        buf.push_str(&text).unwrap();
        assert!(buf.capacity() >= 102);
        assert_eq!(buf.len(), 101);
    }

    #[test]
    fn clear_keeps_storage() {
        let mut buf = ByteBuffer::new();
        buf.push_str("hello").unwrap();
        let capacity = buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), capacity);
        assert_eq!(buf.as_bytes_with_nul(), b"\0");
        buf.push_str("hi").unwrap();
        assert_eq!(buf.as_bytes(), b"hi");
    }

    #[test]
    fn truncate_drops_tail() {
        let mut buf = ByteBuffer::new();
        buf.push_str("abc\r").unwrap();
        buf.truncate(3);
        assert_eq!(buf.as_bytes_with_nul(), b"abc\0");
        buf.truncate(10);
        assert_eq!(buf.as_bytes(), b"abc");
    }

    #[test]
    fn limit_rejects_without_mutation() {
        let mut buf = ByteBuffer::with_limit(4);
        buf.push_str("abc").unwrap();
        assert!(buf.capacity() <= 4);

        let err = buf.push_byte(b'd').unwrap_err();
        assert_eq!(
            err,
            AllocationError::LimitExceeded {
                requested: 5,
                limit: 4
            }
        );
        assert_eq!(buf.as_bytes_with_nul(), b"abc\0");
    }

    #[test]
    fn empty_append_never_allocates() {
        let mut buf = ByteBuffer::with_limit(0);
        buf.push_str("").unwrap();
        buf.push_bytes(b"").unwrap();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_bytes_with_nul(), b"\0");
        assert!(buf.push_byte(b'a').is_err());

        let mut buf = ByteBuffer::with_limit(4);
        buf.push_str("ab").unwrap();
        let capacity = buf.capacity();
        buf.push_str("").unwrap();
        assert_eq!(buf.capacity(), capacity);
        assert_eq!(buf.as_bytes_with_nul(), b"ab\0");
    }

    #[test]
    fn impossible_reservation_is_an_error() {
        let mut buf = ByteBuffer::new();
        buf.push_byte(b'a').unwrap();
        let err = buf.reserve(usize::MAX).unwrap_err();
        assert_eq!(err, AllocationError::CapacityOverflow);
        assert_eq!(buf.as_bytes(), b"a");

        assert!(matches!(
            ByteBuffer::with_capacity(usize::MAX - 1),
            Err(AllocationError::Reserve(_))
        ));
    }

    #[test]
    fn display_is_lossy_text() {
        let mut buf = ByteBuffer::new();
        buf.push_bytes(b"ok\xff").unwrap();
        assert_eq!(buf.to_string(), "ok\u{FFFD}");
    }
}
