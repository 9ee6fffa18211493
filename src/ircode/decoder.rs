//! Expansion of packed code records into raw timing pairs.
//!
//! Decoding is a two-stage lookup:
//!
//! ```text
//! packed_indices ──BitReader──▶ index ──timing_table──▶ (on, off)
//! ```
//!
//! The [`Decoder`] owns a single [`BitReader`] and re-attaches it for every
//! record, so no buffered bits survive a record boundary.
//!
//! # Example
//! ```no_run
//! # use ircode_export::{Carrier, CodeRecord, Decoder};
//! const TIMES: &[u16] = &[60, 60, 240, 60];
//! let record = CodeRecord::new("code_demo", 40_000, 4, 1, TIMES, &[0b1000_0000]);
//! let carrier = Carrier::new(record.carrier_divisor).unwrap();
//!
//! let mut decoder = Decoder::new();
//! for pair in decoder.decode(&record) {
//!     let periods = carrier.normalize(pair.unwrap());
//!     println!("{},{}", periods.on, periods.off);
//! }
//! ```

use log::{debug, trace};

use super::codec::bits::BitReader;
use super::types::error::Result;
use super::types::models::{CodeRecord, RawPair};

/// Decodes code records one at a time with a shared bit reader.
#[derive(Debug)]
pub struct Decoder<'a> {
    reader: BitReader<'a>,
}

impl<'a> Default for Decoder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Decoder<'a> {
    pub fn new() -> Self {
        Self {
            reader: BitReader::new(&[]),
        }
    }

    /// Starts decoding `record`, returning a lazy iterator over its raw pairs.
    ///
    /// The iterator borrows the decoder's bit reader, so only one record can
    /// be in flight at a time. It yields exactly `pair_count` items unless an
    /// error occurs, after which it yields nothing more.
    pub fn decode<'d>(&'d mut self, record: &'d CodeRecord<'a>) -> DecodedPairs<'d, 'a> {
        debug!(
            "Decoding {}: {} pairs, {} bits per index, {} timing entries",
            record.label,
            record.pair_count,
            record.field_width,
            record.timing_table.len()
        );
        trace!("{} packed indices: {}", record.label, hex::encode(record.packed_indices));

        self.reader.attach(record.label, record.packed_indices);

        DecodedPairs {
            reader: &mut self.reader,
            record,
            remaining: record.pair_count as usize,
        }
    }

    /// Decodes `record` completely.
    ///
    /// # Errors
    /// Returns the first error hit while reading indices or looking up pairs.
    pub fn decode_all(&mut self, record: &CodeRecord<'a>) -> Result<Vec<RawPair>> {
        self.decode(record).collect()
    }
}

/// Iterator over the raw `(on, off)` pairs of one record.
///
/// Created by [`Decoder::decode()`].
pub struct DecodedPairs<'d, 'a> {
    reader: &'d mut BitReader<'a>,
    record: &'d CodeRecord<'a>,
    remaining: usize,
}

impl<'d, 'a> Iterator for DecodedPairs<'d, 'a> {
    type Item = Result<RawPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Stage 1: next packed index
        let index = match self.reader.read_bits(self.record.field_width) {
            Ok(index) => index,
            Err(e) => {
                self.remaining = 0;
                return Some(Err(e));
            }
        };

        // Stage 2: dictionary lookup
        let pair = self.record.lookup_pair(index as usize);
        if pair.is_err() {
            self.remaining = 0;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'d, 'a> std::iter::FusedIterator for DecodedPairs<'d, 'a> {}
