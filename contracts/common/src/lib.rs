#![deny(warnings)]
#![no_std]

mod fixedi128;

pub use fixedi128::*;

/// Percent representation: 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Seconds in year. Equal 365.25 * 24 * 60 * 60
pub const ONE_YEAR: u64 = 31_557_600;
