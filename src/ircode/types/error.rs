//! Custom error types for the ircode-export crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Decoding errors are never recoverable: the code database is compiled in,
/// so any of them points at a broken database entry. Each variant names the
/// record it came from.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An error originating from writing the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A packed index points past the end of the record's timing table.
    #[error("Malformed record {record}: index {index} needs timing entries {}..={} but the table has {table_len}", .index * 2, .index * 2 + 1)]
    MalformedRecord {
        record: &'static str,
        index: usize,
        table_len: usize,
    },

    /// The packed index stream ends before all fields were read.
    #[error("Unreadable input in record {record}: need {needed_bits} bits, only {available_bits} available")]
    UnreadableInput {
        record: &'static str,
        needed_bits: usize,
        available_bits: usize,
    },

    /// A record declares a packed field width outside 1..=8 bits.
    #[error("Invalid field width in record {record}: {width} bits (expected 1..=8)")]
    InvalidFieldWidth { record: &'static str, width: u8 },
}

/// A convenience `Result` type alias using the crate's `ExportError` type.
pub type Result<T> = std::result::Result<T, ExportError>;
