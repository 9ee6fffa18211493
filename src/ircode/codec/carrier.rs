//! Conversion of raw timing ticks into carrier-period counts.
//!
//! Timing tables store durations in 10 µs ticks. The consumer expects each
//! duration as a whole number of carrier cycles, so every value is scaled by
//! the carrier period and rounded half away from zero.

use log::trace;

use crate::ircode::types::models::{PeriodPair, RawPair, NO_CARRIER};

/// Microseconds per raw timing tick.
pub const TICK_US: f64 = 10.0;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// A carrier frequency with its derived period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carrier {
    frequency_hz: u32,
    period_us: f64,
}

impl Carrier {
    /// Builds the carrier for a record's divisor.
    ///
    /// Returns `None` for [`NO_CARRIER`]: such records have no period to
    /// normalize against.
    pub fn new(carrier_divisor: u32) -> Option<Self> {
        if carrier_divisor == NO_CARRIER {
            return None;
        }
        Some(Self {
            frequency_hz: carrier_divisor,
            period_us: MICROS_PER_SECOND / carrier_divisor as f64,
        })
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// Duration of one carrier cycle in microseconds.
    pub fn period_us(&self) -> f64 {
        self.period_us
    }

    /// Converts a duration in raw ticks into whole carrier periods.
    pub fn to_periods(&self, ticks: u16) -> u64 {
        // `round` is half away from zero, same as C `lround`.
        (ticks as f64 * TICK_US / self.period_us).round() as u64
    }

    pub fn normalize(&self, pair: RawPair) -> PeriodPair {
        let normalized = PeriodPair {
            on: self.to_periods(pair.on),
            off: self.to_periods(pair.off),
        };
        trace!(
            "{} Hz: ({}, {}) ticks -> ({}, {}) periods",
            self.frequency_hz, pair.on, pair.off, normalized.on, normalized.off
        );
        normalized
    }
}
