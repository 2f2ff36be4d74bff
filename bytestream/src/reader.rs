//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};

/// A byte-level reader for decoding fixed-width little-endian fields.
///
/// All read operations are bounds-checked and return errors on failure.
/// A failed read leaves the cursor where it was.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads an unsigned 24-bit integer stored as 3 little-endian bytes.
    pub fn read_u24_le(&mut self) -> ByteResult<u32> {
        let [b0, b1, b2] = self.read_array::<3>()?;
        Ok(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    /// Reads a `u32` (little-endian).
    pub fn read_u32_le(&mut self) -> ByteResult<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn ensure_bytes(&self, bytes: usize) -> ByteResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(ByteError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
