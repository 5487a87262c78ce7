use alloc::format;
use alloc::string::String;

use super::number::{fixed, float_value, whole};

/// Seconds to a label: whole milliseconds below half a second
/// ("0ms", "111ms"), seconds with two decimals from there on ("0.50s").
/// Negative and NaN input reads "0ms".
pub fn string_from_time_value(seconds: f32) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        String::from("0ms")
    } else if seconds < 0.5 {
        format!("{}ms", whole(seconds * 1000.0))
    } else {
        format!("{}s", fixed(seconds, 2))
    }
}

/// Label to seconds.
///
/// Accepts "11.1ms", "100ms", "1.0s", "15.98s". Without a unit a decimal
/// point means seconds ("3.5") and a bare integer means milliseconds ("100").
pub fn time_value_from_string(text: &str) -> f32 {
    let text = text.trim();

    if let Some(ms) = text.strip_suffix("ms") {
        float_value(ms) / 1000.0
    } else if let Some(s) = text.strip_suffix('s') {
        float_value(s)
    } else if text.contains('.') {
        float_value(text)
    } else {
        float_value(text) / 1000.0
    }
}
