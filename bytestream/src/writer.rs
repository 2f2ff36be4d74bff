//! Byte-level writer for encoding fixed-width little-endian fields.

use crate::error::{ByteError, ByteResult};

/// Largest value that fits in a 24-bit field.
pub const U24_MAX: u32 = (1 << 24) - 1;

/// A byte-level writer for encoding fixed-width little-endian fields.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes the low 24 bits of `value` as 3 little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::ValueOutOfRange`] if `value` doesn't fit in 24 bits.
    /// Nothing is written in that case.
    pub fn write_u24_le(&mut self, value: u32) -> ByteResult<()> {
        if value > U24_MAX {
            return Err(ByteError::ValueOutOfRange {
                value: u64::from(value),
                bits: 24,
            });
        }
        let [b0, b1, b2, _] = value.to_le_bytes();
        self.bytes.extend_from_slice(&[b0, b1, b2]);
        Ok(())
    }

    /// Writes a `u32` (little-endian).
    pub fn write_u32_le(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert_eq!(writer.len(), 0);
        assert!(writer.is_empty());
        let bytes = writer.finish();
        assert!(bytes.is_empty());
    }

    #[test]
    fn write_single_byte() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);
        assert_eq!(writer.len(), 1);
        assert_eq!(writer.finish(), vec![0xAB]);
    }

    #[test]
    fn write_u24_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u24_le(0x0012_3456).unwrap();
        assert_eq!(writer.finish(), vec![0x56, 0x34, 0x12]);
    }

    #[test]
    fn write_u24_max_value_fits() {
        let mut writer = ByteWriter::new();
        writer.write_u24_le(U24_MAX).unwrap();
        assert_eq!(writer.finish(), vec![0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn write_u24_value_out_of_range() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0x02);
        let result = writer.write_u24_le(U24_MAX + 1);
        assert!(matches!(
            result,
            Err(ByteError::ValueOutOfRange {
                value: 16_777_216,
                bits: 24
            })
        ));
        // Rejected values leave the buffer untouched.
        assert_eq!(writer.finish(), vec![0x02]);
    }

    #[test]
    fn write_u32_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u32_le(0x1234_5678);
        assert_eq!(writer.finish(), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn with_capacity() {
        let writer = ByteWriter::with_capacity(18);
        assert_eq!(writer.len(), 0);
    }

    #[test]
    fn finish_into() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);

        let mut buf = vec![0x00, 0x11];
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x11, 0xAB]);
    }

    #[test]
    fn writer_default() {
        let writer = ByteWriter::default();
        assert_eq!(writer.len(), 0);
    }
}
