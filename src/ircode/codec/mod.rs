//! Codec layer for the packed code database.
//!
//! # Submodules
//!
//! - [`bits`][]: MSB-first bit-field reader for packed index streams
//! - [`carrier`][]: Conversion of 10 µs ticks into carrier periods

pub mod bits;
pub mod carrier;
