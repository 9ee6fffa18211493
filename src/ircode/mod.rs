//! Core IR code conversion module.
//!
//! # Module Organization
//!
//! - [`types`]: Code records, timing pairs and error types
//! - [`codec`]: Bit reader and carrier-period normalization
//! - [`decoder`]: Expansion of packed records into raw timing pairs
//! - [`export`]: Rendering of collections as `Brand` declarations
//! - [`database`]: The compiled-in code tables
//!
//! # Pipeline
//!
//! ```text
//! Collection ─▶ CodeRecord ─▶ Decoder ─▶ RawPair ─▶ Carrier ─▶ PeriodPair ─▶ Exporter
//!                              │
//!                           BitReader
//! ```

pub mod codec;
pub mod database;
pub mod decoder;
pub mod export;
pub mod types;

use std::io::Write;

use log::info;

pub use export::{ExportOptions, ExportSummary, Exporter};
pub use types::error::{ExportError, Result};

/// Exports the compiled-in database to `out` with default options.
///
/// # Errors
/// Fails on the first malformed database record or write error.
pub fn export_database<W: Write>(out: W) -> Result<ExportSummary> {
    info!("Exporting compiled-in IR code database");
    Exporter::new(out).export_all(database::COLLECTIONS)
}
