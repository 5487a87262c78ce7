#![no_std]

#[cfg(feature = "text")]
extern crate alloc;

mod config;
pub mod curves;
pub mod decibels;
pub mod range;

#[cfg(feature = "text")]
mod parameter;
#[cfg(feature = "text")]
pub mod text;

pub use config::ConfigError;
pub use decibels::{decibels_to_gain, gain_to_decibels, DEFAULT_MINIMUM_DB};
pub use range::{
    decibel_range, decibel_range_for_harmonic, gain_range, int_range_with_midpoint, linear_range,
    try_decibel_range, try_decibel_range_for_harmonic, try_int_range_with_midpoint,
    try_linear_range, Curve, Range,
};

#[cfg(feature = "log-range")]
pub use range::{
    logarithmic_range, logarithmic_range_with_linear_start, reversed_logarithmic_range,
    try_logarithmic_range, try_logarithmic_range_with_linear_start,
    try_reversed_logarithmic_range, DEFAULT_BREAKPOINT_NORMALIZED, DEFAULT_EXPONENT,
};

#[cfg(feature = "text")]
pub use parameter::{Config, Parameter};
#[cfg(feature = "text")]
pub use text::Unit;
