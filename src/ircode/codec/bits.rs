//! MSB-first bit-field reader over a packed index stream.
//!
//! Fields are read most significant bit first, both within each source byte
//! and within the returned value:
//!
//! ```text
//! byte:    0b1110_0010
//! fields:    11 10 00 10   (read_bits(2) x 4 -> 3, 2, 0, 2)
//! ```

use crate::ircode::types::error::{ExportError, Result};
use crate::ircode::types::models::MAX_FIELD_WIDTH;

/// Stateful reader extracting 1 to 8 bit wide fields from a byte slice.
///
/// The reader buffers one source byte at a time. [`BitReader::reset`] drops
/// whatever is left of that byte, so a new record always starts on a fresh
/// byte boundary.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    label: &'static str,
    bytes: &'a [u8],
    /// Index of the next byte to pull into the buffer.
    cursor: usize,
    current: u8,
    bits_left: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_label("bit stream", bytes)
    }

    /// Creates a reader whose errors name `label` as the failing record.
    pub fn with_label(label: &'static str, bytes: &'a [u8]) -> Self {
        Self {
            label,
            bytes,
            cursor: 0,
            current: 0,
            bits_left: 0,
        }
    }

    /// Rebinds the reader to another byte sequence, starting from its first bit.
    pub fn attach(&mut self, label: &'static str, bytes: &'a [u8]) {
        self.label = label;
        self.bytes = bytes;
        self.cursor = 0;
        self.reset();
    }

    /// Discards the buffered bits of the current byte.
    ///
    /// The next read pulls the following byte from the source.
    pub fn reset(&mut self) {
        self.current = 0;
        self.bits_left = 0;
    }

    /// Bits still readable: the buffered remainder plus all unread bytes.
    pub fn bits_remaining(&self) -> usize {
        self.bits_left as usize + (self.bytes.len() - self.cursor) * 8
    }

    /// Reads the next `count` bits as an unsigned value.
    ///
    /// The first bit read becomes the most significant bit of the result.
    ///
    /// # Errors
    /// - [`ExportError::InvalidFieldWidth`] if `count` is not in 1..=8
    /// - [`ExportError::UnreadableInput`] if fewer than `count` bits remain;
    ///   the reader is left untouched in that case
    pub fn read_bits(&mut self, count: u8) -> Result<u8> {
        if count == 0 || count > MAX_FIELD_WIDTH {
            return Err(ExportError::InvalidFieldWidth {
                record: self.label,
                width: count,
            });
        }
        let available_bits = self.bits_remaining();
        if available_bits < count as usize {
            return Err(ExportError::UnreadableInput {
                record: self.label,
                needed_bits: count as usize,
                available_bits,
            });
        }

        let mut value = 0u8;
        for _ in 0..count {
            if self.bits_left == 0 {
                self.current = self.bytes[self.cursor];
                self.cursor += 1;
                self.bits_left = 8;
            }
            self.bits_left -= 1;
            value = (value << 1) | ((self.current >> self.bits_left) & 1);
        }

        Ok(value)
    }
}
