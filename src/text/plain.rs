//! Unit-less labels.

use alloc::format;
use alloc::string::String;

use super::number::{fixed, float_value, int_value};

/// Decimal places for [`string_from_unit_interval`] when nothing else is asked for.
pub const DEFAULT_UNIT_INTERVAL_DECIMALS: usize = 4;

/// Truncates toward zero: 1.9 -> "1".
pub fn string_from_int_value(value: f32) -> String {
    format!("{}", value as i32)
}

pub fn int_value_from_string(text: &str) -> f32 {
    int_value(text) as f32
}

/// Raw 0.0..1.0 value with a fixed number of decimals: (0.5, 4) -> "0.5000".
pub fn string_from_unit_interval(value: f32, decimals: usize) -> String {
    fixed(value, decimals)
}

pub fn unit_interval_from_string(text: &str) -> f32 {
    float_value(text)
}
