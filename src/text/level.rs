//! Decibel and gain labels.

use alloc::format;
use alloc::string::String;

use crate::decibels::{decibels_to_gain, gain_to_decibels, DEFAULT_MINIMUM_DB};

use super::number::{fixed, float_value};

/// Level shown as "OFF" by the `*_with_off_at_64` pair.
pub const OFF_AT_64: f32 = -64.0;

/// One decimal place plus "db": -6.123 -> "-6.1db".
pub fn string_from_db_value(db: f32) -> String {
    format!("{}db", fixed(db, 1))
}

/// "-3db", "-3.1" and "-3 db" all read as dB. The suffix is case-sensitive.
pub fn db_from_string(text: &str) -> f32 {
    let text = text.trim();
    float_value(text.strip_suffix("db").unwrap_or(text))
}

pub fn string_from_db_value_with_off_at_64(db: f32) -> String {
    if approximately_equal(db, OFF_AT_64) {
        return String::from("OFF");
    }
    string_from_db_value(db)
}

pub fn db_from_string_with_off_at_64(text: &str) -> f32 {
    if text.trim().eq_ignore_ascii_case("off") {
        return OFF_AT_64;
    }
    db_from_string(text)
}

/// Linear gain shown in dB: 0.5 -> "-6.0db", 0.0 -> "-100.0db".
pub fn string_from_gain_value(gain: f32) -> String {
    string_from_db_value(gain_to_decibels(gain, DEFAULT_MINIMUM_DB))
}

/// Text is always read as dB, with or without the suffix, and returned as gain.
pub fn gain_value_from_string(text: &str) -> f32 {
    decibels_to_gain(db_from_string(text), DEFAULT_MINIMUM_DB)
}

fn approximately_equal(a: f32, b: f32) -> bool {
    let diff = libm::fabsf(a - b);
    diff <= f32::MIN_POSITIVE || diff <= f32::EPSILON * libm::fabsf(a).max(libm::fabsf(b))
}
