//! Compiled-in IR code database.
//!
//! Codes are grouped by region, in the layout of the TV-B-Gone world code
//! table: a carrier frequency in Hertz, a pair count, an index width, a
//! timing table in 10 µs ticks and the packed index stream. The bundled
//! tables are a small excerpt.

mod eu;
mod na;

use super::types::models::Collection;

pub use eu::EU_CODES;
pub use na::NA_CODES;

/// North American power codes.
pub const TV_BGONE_NA: Collection<'static> = Collection::new("tvBgoneNA", NA_CODES);

/// European power codes.
pub const TV_BGONE_EU: Collection<'static> = Collection::new("tvBgoneEU", EU_CODES);

/// All collections, in export order.
pub const COLLECTIONS: &[Collection<'static>] = &[TV_BGONE_NA, TV_BGONE_EU];
