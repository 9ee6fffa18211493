//! Core data structures for the IR code database.
//!
//! This module defines the fundamental types used throughout the library:
//! - Code records as stored in the compiled-in database
//! - Raw and carrier-normalized timing pairs
//! - Named collections of records

use super::error::{ExportError, Result};

/// Divisor value marking a record that is sent without a carrier.
///
/// Such records only switch the LED on and off. They cannot be expressed in
/// carrier periods and are left out of the export.
pub const NO_CARRIER: u32 = 0;

/// Widest packed index the bit reader can deliver in one read.
pub const MAX_FIELD_WIDTH: u8 = 8;

/// One compressed IR code as stored in the database.
///
/// The on/off sequence is stored as a stream of small fixed-width indices,
/// each selecting one `(on, off)` row of `timing_table`. Durations are in
/// units of 10 microseconds.
///
/// # Layout
/// ```text
/// packed_indices:  |idx0 |idx1 |idx2 | ... |idxN-1|pad|   (field_width bits each, MSB first)
/// timing_table:    [on0, off0, on1, off1, ...]            (u16, 10 µs ticks)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRecord<'a> {
    /// Name of the record in the source database, used in diagnostics.
    pub label: &'static str,
    /// Carrier frequency in Hertz, or [`NO_CARRIER`].
    pub carrier_divisor: u32,
    pub pair_count: u8,
    pub field_width: u8,
    pub packed_indices: &'a [u8],
    pub timing_table: &'a [u16],
}

impl<'a> CodeRecord<'a> {
    pub const fn new(
        label: &'static str,
        carrier_divisor: u32,
        pair_count: u8,
        field_width: u8,
        timing_table: &'a [u16],
        packed_indices: &'a [u8],
    ) -> Self {
        Self {
            label,
            carrier_divisor,
            pair_count,
            field_width,
            packed_indices,
            timing_table,
        }
    }

    /// Returns `true` if the record is sent on a carrier and can be exported.
    pub fn is_modulated(&self) -> bool {
        self.carrier_divisor != NO_CARRIER
    }

    /// Number of bits the packed index stream must provide.
    pub fn packed_bit_len(&self) -> usize {
        self.pair_count as usize * self.field_width as usize
    }

    /// Looks up the raw `(on, off)` timing pair selected by a packed index.
    ///
    /// # Errors
    /// Returns [`ExportError::MalformedRecord`] if `2 * index + 1` falls
    /// outside the timing table.
    pub fn lookup_pair(&self, index: usize) -> Result<RawPair> {
        let offset = index * 2;
        match (self.timing_table.get(offset), self.timing_table.get(offset + 1)) {
            (Some(&on), Some(&off)) => Ok(RawPair { on, off }),
            _ => Err(ExportError::MalformedRecord {
                record: self.label,
                index,
                table_len: self.timing_table.len(),
            }),
        }
    }

    /// Checks that the record can be read as a packed index stream.
    ///
    /// Table bounds are not checked here; they are checked per index while
    /// decoding.
    ///
    /// # Errors
    /// - [`ExportError::InvalidFieldWidth`] if `field_width` is not in 1..=8
    /// - [`ExportError::UnreadableInput`] if `packed_indices` is too short
    pub fn validate(&self) -> Result<()> {
        if self.field_width == 0 || self.field_width > MAX_FIELD_WIDTH {
            return Err(ExportError::InvalidFieldWidth {
                record: self.label,
                width: self.field_width,
            });
        }

        let available_bits = self.packed_indices.len() * 8;
        if available_bits < self.packed_bit_len() {
            return Err(ExportError::UnreadableInput {
                record: self.label,
                needed_bits: self.packed_bit_len(),
                available_bits,
            });
        }

        Ok(())
    }
}

/// An `(on, off)` pair in raw 10 µs ticks, as stored in a timing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPair {
    pub on: u16,
    pub off: u16,
}

/// An `(on, off)` pair expressed in whole carrier periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPair {
    pub on: u64,
    pub off: u64,
}

/// A named, ordered group of records emitted as one `Brand` block.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    pub name: &'static str,
    pub records: &'a [CodeRecord<'a>],
}

impl<'a> Collection<'a> {
    pub const fn new(name: &'static str, records: &'a [CodeRecord<'a>]) -> Self {
        Self { name, records }
    }

    /// Iterates over the records that carry a carrier and will be exported.
    pub fn modulated_records(&self) -> impl Iterator<Item = &CodeRecord<'a>> + '_ {
        self.records.iter().filter(|record| record.is_modulated())
    }
}
