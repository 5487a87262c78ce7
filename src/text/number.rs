//! Number <-> text primitives shared by the unit formatters.
//!
//! Parsing is lenient: leading whitespace is skipped, the longest numeric
//! prefix is read and anything after it ignored. Text without a number reads
//! as zero so a stray keystroke never turns into an error in the UI.

use alloc::format;
use alloc::string::String;

/// Read the numeric prefix of `text` as a float (`[+-]digits[.digits][e[+-]digits]`).
pub(crate) fn float_value(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        log::debug!("no number in {:?}, reading as 0", text);
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

/// Read the integer prefix of `text` (`[+-]digits`). Saturates on overflow.
pub(crate) fn int_value(text: &str) -> i32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        log::debug!("no integer in {:?}, reading as 0", text);
        return 0;
    }

    text[..sign + digits].parse().unwrap_or(if bytes[0] == b'-' {
        i32::MIN
    } else {
        i32::MAX
    })
}

/// Render with exactly `decimals` decimal places.
pub(crate) fn fixed(value: f32, decimals: usize) -> String {
    let mut text = format!("{value:.decimals$}");
    drop_negative_zero_sign(&mut text);
    text
}

/// Render with one decimal place, then drop the fraction.
///
/// 99.99999 comes out as "100" and 25.5555 as "25".
pub(crate) fn whole(value: f32) -> String {
    let mut text = fixed(value, 1);
    if let Some(dot) = text.find('.') {
        text.truncate(dot);
    }
    drop_negative_zero_sign(&mut text);
    text
}

/// "-0" and "-0.00" become "0" and "0.00".
fn drop_negative_zero_sign(text: &mut String) {
    if text.starts_with('-') && text[1..].bytes().all(|byte| matches!(byte, b'0' | b'.')) {
        text.remove(0);
    }
}

pub(crate) fn strip_suffix_ignore_ascii_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_value_reads_the_numeric_prefix() {
        assert_eq!(float_value("-3.5db"), -3.5);
        assert_eq!(float_value("  12 apples"), 12.0);
        assert_eq!(float_value(".25"), 0.25);
        assert_eq!(float_value("+4."), 4.0);
        assert_eq!(float_value("1e3Hz"), 1000.0);
        assert_eq!(float_value("2e"), 2.0);
        assert_eq!(float_value("2e-"), 2.0);
    }

    #[test]
    fn float_value_without_digits_is_zero() {
        assert_eq!(float_value(""), 0.0);
        assert_eq!(float_value("abc"), 0.0);
        assert_eq!(float_value("-."), 0.0);
        assert_eq!(float_value("ms"), 0.0);
    }

    #[test]
    fn int_value_stops_at_the_decimal_point() {
        assert_eq!(int_value("12.7"), 12);
        assert_eq!(int_value("-3"), -3);
        assert_eq!(int_value(" 42 voices"), 42);
        assert_eq!(int_value("voices"), 0);
        assert_eq!(int_value("99999999999"), i32::MAX);
        assert_eq!(int_value("-99999999999"), i32::MIN);
    }

    #[test]
    fn whole_rounds_to_one_decimal_first() {
        assert_eq!(whole(99.99999), "100");
        assert_eq!(whole(25.555555), "25");
        assert_eq!(whole(499.00001), "499");
        assert_eq!(whole(-50.0), "-50");
    }

    #[test]
    fn values_rounding_to_zero_lose_the_minus_sign() {
        assert_eq!(fixed(-0.04, 1), "0.0");
        assert_eq!(fixed(-0.001, 2), "0.00");
        assert_eq!(fixed(-0.0, 0), "0");
        assert_eq!(fixed(-0.06, 1), "-0.1");
        assert_eq!(whole(-0.01), "0");
        assert_eq!(whole(-0.5), "0");
        assert_eq!(whole(-1.5), "-1");
    }

    #[test]
    fn suffix_match_ignores_case() {
        assert_eq!(strip_suffix_ignore_ascii_case("1.5kHz", "khz"), Some("1.5"));
        assert_eq!(strip_suffix_ignore_ascii_case("1.5KHZ", "khz"), Some("1.5"));
        assert_eq!(strip_suffix_ignore_ascii_case("hz", "khz"), None);
        assert_eq!(strip_suffix_ignore_ascii_case("10é", "hz"), None);
    }
}
