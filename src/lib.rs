//! # ircode-export
//!
//! Decodes the bit-packed TV-B-Gone IR code tables and writes every code as a
//! TV-KILL `Pattern` declaration, with on/off durations counted in periods of
//! the code's carrier wave.
pub mod ircode;

// Re-export the main types for convenience
pub use ircode::{
    codec::{bits::BitReader, carrier::Carrier},
    decoder::{DecodedPairs, Decoder},
    export::{render, CollectionSummary, MUTE_PLACEHOLDER},
    export_database,
    types::models::{CodeRecord, Collection, PeriodPair, RawPair, NO_CARRIER},
    ExportError, ExportOptions, ExportSummary, Exporter, Result,
};
