//! Value <-> text conversion for parameter labels.
//!
//! Each unit comes as a pair of free functions, `string_from_*` and
//! `*_from_string`. Formatting rounds to a fixed precision, so
//! `format(parse(format(x)))` is stable but `parse(format(x))` is not `x`.
//! Parsing never fails: text that holds no number reads as 0.
//!
//! [`Unit`] picks one pair at runtime for code that stores the unit of a
//! parameter alongside its range.
mod frequency;
mod level;
mod number;
mod percent;
mod plain;
mod time;

use alloc::string::String;

pub use frequency::{hz_value_from_string, string_from_hz_value};
pub use level::{
    db_from_string, db_from_string_with_off_at_64, gain_value_from_string, string_from_db_value,
    string_from_db_value_with_off_at_64, string_from_gain_value, OFF_AT_64,
};
pub use percent::{
    percent_value_from_string, string_from_percent_value, string_from_percent_value_with_digits,
};
pub use plain::{
    int_value_from_string, string_from_int_value, string_from_unit_interval,
    unit_interval_from_string, DEFAULT_UNIT_INTERVAL_DECIMALS,
};
pub use time::{string_from_time_value, time_value_from_string};

/// Text representation of a parameter's plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Seconds, shown as ms below 0.5 s.
    Time,

    /// dB with one decimal.
    Decibels,

    /// dB with one decimal, [`OFF_AT_64`] shown as "OFF".
    DecibelsWithOff,

    /// Linear gain shown and entered as dB.
    Gain,

    /// Whole numbers.
    Integer,

    /// 0.0..1.0 shown as a whole percentage.
    Percent,

    /// 0.0..1.0 shown as a percentage with the given number of decimals.
    PercentWithDigits(usize),

    /// Hz, switching to kHz from 1000 Hz.
    Hertz,

    /// Raw value with the given number of decimals.
    UnitInterval(usize),
}

impl Unit {
    pub fn format(&self, value: f32) -> String {
        match *self {
            Unit::Time => string_from_time_value(value),
            Unit::Decibels => string_from_db_value(value),
            Unit::DecibelsWithOff => string_from_db_value_with_off_at_64(value),
            Unit::Gain => string_from_gain_value(value),
            Unit::Integer => string_from_int_value(value),
            Unit::Percent => string_from_percent_value(value),
            Unit::PercentWithDigits(digits) => string_from_percent_value_with_digits(value, digits),
            Unit::Hertz => string_from_hz_value(value),
            Unit::UnitInterval(decimals) => string_from_unit_interval(value, decimals),
        }
    }

    pub fn parse(&self, text: &str) -> f32 {
        match self {
            Unit::Time => time_value_from_string(text),
            Unit::Decibels => db_from_string(text),
            Unit::DecibelsWithOff => db_from_string_with_off_at_64(text),
            Unit::Gain => gain_value_from_string(text),
            Unit::Integer => int_value_from_string(text),
            Unit::Percent | Unit::PercentWithDigits(_) => percent_value_from_string(text),
            Unit::Hertz => hz_value_from_string(text),
            Unit::UnitInterval(_) => unit_interval_from_string(text),
        }
    }
}
