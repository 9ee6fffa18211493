//! Rendering of decoded collections as TV-KILL `Brand` declarations.
//!
//! Each collection becomes one Kotlin `Brand(...)` block:
//!
//! ```text
//!     private val tvBgoneNA = Brand(
//!         "tvBgoneNA",
//!         arrayOf(
//!             Pattern(38400 /*T=26.041667us*/, intArrayOf(92,23,46,23,...)),
//!             ...
//!         ),
//!         //Mute-pattern
//!         Pattern(0, intArrayOf(0,0))
//!     )
//! ```
//!
//! Records are decoded and checked before anything is written, so a broken
//! database entry never leaves a half-written declaration behind.
//!
//! # Example
//! ```no_run
//! # use ircode_export::{CodeRecord, Collection, Exporter};
//! const TIMES: &[u16] = &[96, 24];
//! let records = [CodeRecord::new("code_demo", 38_000, 1, 2, TIMES, &[0x00])];
//! let mut exporter = Exporter::new(std::io::stdout().lock());
//! let summary = exporter.export_all(&[Collection::new("demo", &records)]).unwrap();
//! println!("{} patterns", summary.exported());
//! ```

use std::io::{self, Write};

use log::{debug, info};

use super::codec::carrier::Carrier;
use super::decoder::Decoder;
use super::types::error::{ExportError, Result};
use super::types::models::{Collection, PeriodPair};

/// Pattern closing every `Brand` block.
///
/// The consumer reserves one extra pattern slot per brand; it is always
/// filled with this all-zero placeholder.
pub const MUTE_PLACEHOLDER: &str = "Pattern(0, intArrayOf(0,0))";

/// Brand names listed in the closing `allBrands` declaration.
///
/// Besides the exported collections this includes the brands the consumer
/// defines by hand.
pub const DEFAULT_BRAND_INDEX: &[&str] = &[
    "samsung",
    "sony",
    "lg",
    "panasonic",
    "philips",
    "nec",
    "sharp",
    "jvc",
    "toshiba",
    "mitsubishi",
    "vizio",
    "rca",
    "pioneer",
    "hisense",
    "akai",
    "aoc",
    "tvBgoneEU",
    "tvBgoneNA",
];

const BANNER: &str = "    /*
    Conversion program at https://github.com/glaukon-ariston/TV-B-Gone-Codes
    IR database from https://github.com/shirriff/Arduino-TV-B-Gone
    According to https://github.com/42SK/TVKILL/wiki/How-to-add-IR-patterns-to-TV-KILL
    The constructor of the Pattern class requires two parameters:
      1. The pattern's frequency in Hertz
      2. The alternating on/off pattern in periods of the carrier frequency
    */
";

/// Compiled-in settings for the export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Emit the provenance comment above every `Brand` block.
    pub banner: bool,
    /// Names for the closing `allBrands` declaration, in output order.
    pub brand_index: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            banner: true,
            brand_index: DEFAULT_BRAND_INDEX.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Per-collection record counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    pub exported: usize,
    pub skipped: usize,
}

/// What an [`Exporter::export_all`] run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub collections: Vec<CollectionSummary>,
}

impl ExportSummary {
    pub fn exported(&self) -> usize {
        self.collections.iter().map(|c| c.exported).sum()
    }

    pub fn skipped(&self) -> usize {
        self.collections.iter().map(|c| c.skipped).sum()
    }
}

/// Writes collections to an output stream in the `Brand` format.
pub struct Exporter<W: Write> {
    out: W,
    options: ExportOptions,
}

impl<W: Write> Exporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, ExportOptions::default())
    }

    pub fn with_options(out: W, options: ExportOptions) -> Self {
        Self { out, options }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Exports every collection followed by the `allBrands` index.
    ///
    /// Collections are separated by a blank line.
    ///
    /// # Errors
    /// Every collection is decoded before the first byte is written, so a
    /// malformed record anywhere in `collections` fails the call with
    /// nothing written. Write errors can still leave partial output.
    pub fn export_all(&mut self, collections: &[Collection<'_>]) -> Result<ExportSummary> {
        info!("Exporting {} collections", collections.len());

        let decoded = collections
            .iter()
            .map(decode_collection)
            .collect::<Result<Vec<_>>>()?;

        let mut summary = ExportSummary::default();
        for (i, collection) in decoded.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            summary.collections.push(self.write_collection(collection)?);
        }
        self.write_brand_index()?;
        self.out.flush()?;

        info!(
            "Export finished: {} patterns written, {} unmodulated records skipped",
            summary.exported(),
            summary.skipped()
        );
        Ok(summary)
    }

    /// Writes one `Brand` block for `collection`.
    ///
    /// Records without a carrier are skipped. The block always ends with
    /// [`MUTE_PLACEHOLDER`], even when no record was written.
    ///
    /// # Errors
    /// The whole collection is decoded first; on a decoding error nothing
    /// is written.
    pub fn export_collection(&mut self, collection: &Collection<'_>) -> Result<CollectionSummary> {
        let decoded = decode_collection(collection)?;
        self.write_collection(&decoded)
    }

    fn write_collection(&mut self, collection: &DecodedCollection) -> Result<CollectionSummary> {
        if self.options.banner {
            self.out.write_all(BANNER.as_bytes())?;
        }
        write!(
            self.out,
            "    private val {name} = Brand(\n        \"{name}\",\n        arrayOf(\n",
            name = collection.name
        )?;

        for (i, pattern) in collection.patterns.iter().enumerate() {
            if i > 0 {
                writeln!(self.out, ",")?;
            }
            self.write_pattern(pattern)?;
        }

        write!(self.out, "\n        ),\n        //Mute-pattern\n        {}\n    )\n", MUTE_PLACEHOLDER)?;

        let summary = CollectionSummary {
            name: collection.name.to_string(),
            exported: collection.patterns.len(),
            skipped: collection.skipped,
        };
        debug!(
            "Collection {} done: {} exported, {} skipped",
            summary.name, summary.exported, summary.skipped
        );
        Ok(summary)
    }

    /// Writes a single `Pattern(...)` entry without trailing separator.
    fn write_pattern(&mut self, pattern: &DecodedPattern) -> Result<()> {
        write!(
            self.out,
            "            Pattern({} /*T={:.6}us*/, intArrayOf(",
            pattern.carrier.frequency_hz(),
            pattern.carrier.period_us()
        )?;

        for (k, periods) in pattern.periods.iter().enumerate() {
            if k > 0 {
                write!(self.out, ",")?;
            }
            write!(self.out, "{},{}", periods.on, periods.off)?;
        }

        write!(self.out, "))")?;
        Ok(())
    }

    /// Writes the closing `allBrands` declaration.
    pub fn write_brand_index(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "\n    val allBrands = arrayOf({})\n",
            self.options.brand_index.join(", ")
        )?;
        Ok(())
    }
}

/// Renders `collections` into a `String` with default options.
///
/// # Errors
/// Returns the first decoding error; nothing is returned on failure.
pub fn render(collections: &[Collection<'_>]) -> Result<String> {
    let mut exporter = Exporter::new(Vec::new());
    exporter.export_all(collections)?;
    String::from_utf8(exporter.into_inner())
        .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// A modulated record, decoded and normalized.
struct DecodedPattern {
    carrier: Carrier,
    periods: Vec<PeriodPair>,
}

/// A collection whose records all decoded cleanly.
struct DecodedCollection {
    name: &'static str,
    patterns: Vec<DecodedPattern>,
    skipped: usize,
}

/// Validates, decodes and normalizes every modulated record of `collection`.
fn decode_collection(collection: &Collection<'_>) -> Result<DecodedCollection> {
    info!(
        "Decoding collection {}: {} records, {} with carrier",
        collection.name,
        collection.records.len(),
        collection.modulated_records().count()
    );

    let mut decoder = Decoder::new();
    let mut decoded = DecodedCollection {
        name: collection.name,
        patterns: Vec::with_capacity(collection.records.len()),
        skipped: 0,
    };

    for record in collection.records {
        let Some(carrier) = Carrier::new(record.carrier_divisor) else {
            debug!("Skipping {}: no carrier", record.label);
            decoded.skipped += 1;
            continue;
        };

        record.validate()?;
        let periods = decoder
            .decode(record)
            .map(|pair| pair.map(|pair| carrier.normalize(pair)))
            .collect::<Result<Vec<_>>>()?;
        decoded.patterns.push(DecodedPattern { carrier, periods });
    }

    Ok(decoded)
}
