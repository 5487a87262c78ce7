use alloc::format;
use alloc::string::String;

use super::number::{fixed, float_value, whole};

/// 0.0..1.0 to a whole percentage: 0.25555 -> "25%", 0.9999999 -> "100%".
pub fn string_from_percent_value(value: f32) -> String {
    format!("{}%", whole(value * 100.0))
}

/// Percentage with a fixed number of decimals: (0.25555, 1) -> "25.6%".
pub fn string_from_percent_value_with_digits(value: f32, digits: usize) -> String {
    format!("{}%", fixed(value * 100.0, digits))
}

/// "50%" and "50" both read as 0.5.
pub fn percent_value_from_string(text: &str) -> f32 {
    let text = text.trim();
    float_value(text.strip_suffix('%').unwrap_or(text)) / 100.0
}
