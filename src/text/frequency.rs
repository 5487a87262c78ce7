use alloc::format;
use alloc::string::String;

use super::number::{fixed, float_value, strip_suffix_ignore_ascii_case, whole};

/// Hz label with precision shrinking as the value grows.
///
/// Below 2 Hz two decimals ("0.50Hz"), below 10 Hz one ("5.5Hz"), whole
/// hertz up to 1 kHz ("440Hz"), and kHz with one decimal above ("1.5kHz").
pub fn string_from_hz_value(hz: f32) -> String {
    if hz < 2.0 {
        format!("{}Hz", fixed(hz, 2))
    } else if hz < 10.0 {
        format!("{}Hz", fixed(hz, 1))
    } else if libm::roundf(hz) < 1000.0 {
        format!("{}Hz", whole(hz))
    } else {
        format!("{}kHz", fixed(hz / 1000.0, 1))
    }
}

/// Accepts "440", "440Hz", "440hz", "1.5kHz" and "1.5khz".
pub fn hz_value_from_string(text: &str) -> f32 {
    let text = text.trim();

    if let Some(khz) = strip_suffix_ignore_ascii_case(text, "khz") {
        return float_value(khz) * 1000.0;
    }
    float_value(strip_suffix_ignore_ascii_case(text, "hz").unwrap_or(text))
}
