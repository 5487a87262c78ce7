//! Normalized parameter ranges.
//!
//! A [`Range`] maps a knob position (0.0..1.0) to a plain value in natural
//! units and back. The shape of the mapping is picked by [`Curve`]; the
//! builder functions below construct the common shapes.
//!
//! ```
//! use knob_taper::{int_range_with_midpoint, linear_range};
//!
//! let pan = linear_range(-1.0, 1.0);
//! assert_eq!(pan.from_normalized(0.5), 0.0);
//!
//! let voices = int_range_with_midpoint(0, 100, 80);
//! assert_eq!(voices.from_normalized_snapped(0.5), 80.0);
//! ```

use num_traits::AsPrimitive;

use crate::config::{validate_ascending, ConfigError};
use crate::curves::lerp;
use crate::decibels::{decibels_to_gain, gain_to_decibels, DEFAULT_MINIMUM_DB};

#[cfg(feature = "log-range")]
use crate::config::validate_exponent;
#[cfg(feature = "log-range")]
use crate::curves::{exponential, logarithmic};

/// Exponent used by the logarithmic ranges when nothing else is asked for.
/// Halfway on a knob lands at about 11% of the span.
#[cfg(feature = "log-range")]
pub const DEFAULT_EXPONENT: f32 = 6.0;

/// Knob position where the linear start hands over to the logarithmic part.
#[cfg(feature = "log-range")]
pub const DEFAULT_BREAKPOINT_NORMALIZED: f32 = 0.25;

/// Shape of the mapping between normalized and plain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Straight line from start to end.
    Linear,

    /// Exponential taper: detail is bunched near the start.
    #[cfg(feature = "log-range")]
    Logarithmic { exponent: f32 },

    /// Logarithmic taper with the knob reversed: 0.0 maps to end, 1.0 to start.
    #[cfg(feature = "log-range")]
    ReversedLogarithmic { exponent: f32 },

    /// Linear from start to `breakpoint_value` over `0.0..breakpoint_normalized`,
    /// logarithmic from there to end.
    #[cfg(feature = "log-range")]
    LogarithmicWithLinearStart {
        exponent: f32,
        breakpoint_value: f32,
        breakpoint_normalized: f32,
    },

    /// Two linear halves meeting at `midpoint` when the knob is centered.
    /// Plain values snap to whole numbers.
    IntWithMidpoint { midpoint: f32 },

    /// Geometric interpolation of amplitude between start and end dB.
    Decibels,

    /// Normalized value is a gain scaled by `1 / harmonic`, plain value is dB.
    HarmonicDecibels { harmonic: u32 },
}

/// Bidirectional mapping between 0.0..1.0 and `start..end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    start: f32,
    end: f32,
    curve: Curve,
}

impl Range {
    pub(crate) const fn new(start: f32, end: f32, curve: Curve) -> Self {
        Self { start, end, curve }
    }

    /// Lower plain bound (the first argument given to the builder).
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Upper plain bound.
    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Step between legal plain values; 0.0 means continuous.
    pub fn interval(&self) -> f32 {
        match self.curve {
            Curve::IntWithMidpoint { .. } => 1.0,
            _ => 0.0,
        }
    }

    /// Clamp a plain value into the range bounds.
    pub fn clamp(&self, value: f32) -> f32 {
        let low = self.start.min(self.end);
        let high = self.start.max(self.end);
        value.max(low).min(high)
    }

    /// Check the builder preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (start, end) = (self.start, self.end);

        match self.curve {
            Curve::Linear => {
                if start == end || start.is_nan() || end.is_nan() {
                    return Err(ConfigError::EmptyRange);
                }
                Ok(())
            }

            #[cfg(feature = "log-range")]
            Curve::Logarithmic { exponent } | Curve::ReversedLogarithmic { exponent } => {
                validate_ascending(start, end)?;
                validate_exponent(exponent)
            }

            #[cfg(feature = "log-range")]
            Curve::LogarithmicWithLinearStart {
                exponent,
                breakpoint_value,
                breakpoint_normalized,
            } => {
                validate_ascending(start, end)?;
                validate_exponent(exponent)?;
                if !(breakpoint_value >= start && breakpoint_value < end) {
                    return Err(ConfigError::BreakpointOutOfRange);
                }
                if !(breakpoint_normalized > 0.0 && breakpoint_normalized < 1.0) {
                    return Err(ConfigError::BreakpointNormalizedOutOfRange);
                }
                Ok(())
            }

            Curve::IntWithMidpoint { midpoint } => {
                validate_ascending(start, end)?;
                if !(midpoint >= start && midpoint <= end) {
                    return Err(ConfigError::MidpointOutOfRange);
                }
                Ok(())
            }

            Curve::Decibels => {
                if !(start < 0.0) {
                    return Err(ConfigError::NonNegativeFloor);
                }
                validate_ascending(start, end)
            }

            Curve::HarmonicDecibels { harmonic } => {
                if harmonic == 0 {
                    return Err(ConfigError::ZeroHarmonic);
                }
                if !(start < 0.0) {
                    return Err(ConfigError::NonNegativeFloor);
                }
                Ok(())
            }
        }
    }

    /// Convert a plain value to its knob position.
    pub fn to_normalized(&self, value: f32) -> f32 {
        let (start, end) = (self.start, self.end);

        match self.curve {
            Curve::Linear | Curve::Decibels => proportion(value, start, end),

            #[cfg(feature = "log-range")]
            Curve::Logarithmic { exponent } => logarithmic(proportion(value, start, end), exponent),

            #[cfg(feature = "log-range")]
            Curve::ReversedLogarithmic { exponent } => {
                1.0 - logarithmic(proportion(value, start, end), exponent)
            }

            #[cfg(feature = "log-range")]
            Curve::LogarithmicWithLinearStart {
                exponent,
                breakpoint_value,
                breakpoint_normalized,
            } => {
                // Zero-width linear segment: start sits at knob position 0
                if breakpoint_value == start && value <= start {
                    return 0.0;
                }
                if value < breakpoint_value {
                    return proportion(value, start, breakpoint_value) * breakpoint_normalized;
                }
                let shaped = logarithmic(proportion(value, breakpoint_value, end), exponent);
                lerp(breakpoint_normalized, 1.0, shaped)
            }

            Curve::IntWithMidpoint { midpoint } => {
                if value <= midpoint {
                    if midpoint == start {
                        return 0.0;
                    }
                    ((value - start) / (midpoint - start) / 2.0).clamp(0.0, 1.0)
                } else {
                    if end == midpoint {
                        return 1.0;
                    }
                    (0.5 + (value - midpoint) / (end - midpoint) / 2.0).clamp(0.0, 1.0)
                }
            }

            Curve::HarmonicDecibels { harmonic } => {
                // Rounding can push the product just past 1.0 near the top
                if value >= end {
                    return 1.0;
                }
                (harmonic as f32 * decibels_to_gain(value, start)).min(1.0)
            }
        }
    }

    /// Convert a knob position to its plain value, without snapping.
    pub fn from_normalized(&self, normalized: f32) -> f32 {
        let (start, end) = (self.start, self.end);

        match self.curve {
            Curve::Linear | Curve::Decibels => lerp(start, end, normalized),

            #[cfg(feature = "log-range")]
            Curve::Logarithmic { exponent } => lerp(start, end, exponential(normalized, exponent)),

            #[cfg(feature = "log-range")]
            Curve::ReversedLogarithmic { exponent } => {
                lerp(start, end, exponential(1.0 - normalized, exponent))
            }

            #[cfg(feature = "log-range")]
            Curve::LogarithmicWithLinearStart {
                exponent,
                breakpoint_value,
                breakpoint_normalized,
            } => {
                if normalized < breakpoint_normalized {
                    return start + (normalized / breakpoint_normalized) * (breakpoint_value - start);
                }
                let x = (normalized - breakpoint_normalized) / (1.0 - breakpoint_normalized);
                lerp(breakpoint_value, end, exponential(x, exponent))
            }

            Curve::IntWithMidpoint { midpoint } => {
                let value = if normalized <= 0.5 {
                    lerp(start, midpoint, normalized * 2.0)
                } else {
                    lerp(midpoint, end, (normalized - 0.5) * 2.0)
                };
                self.clamp(value)
            }

            Curve::HarmonicDecibels { harmonic } => {
                gain_to_decibels(normalized / harmonic as f32, start)
            }
        }
    }

    /// Quantize a plain value to the nearest legal one.
    pub fn snap(&self, value: f32) -> f32 {
        match self.curve {
            Curve::IntWithMidpoint { .. } => libm::roundf(self.clamp(value)),
            _ => value,
        }
    }

    /// [`Range::from_normalized`] followed by [`Range::snap`].
    pub fn from_normalized_snapped(&self, normalized: f32) -> f32 {
        self.snap(self.from_normalized(normalized))
    }
}

#[inline]
fn proportion(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

fn validated(range: Range) -> Result<Range, ConfigError> {
    range.validate()?;
    Ok(range)
}

/// Builders take precondition violations as programming errors: they panic
/// in debug builds and hand back a range producing NaN/inf in release builds.
#[inline]
fn checked(range: Range) -> Range {
    debug_assert!(
        range.validate().is_ok(),
        "invalid range {:?}: {:?}",
        range,
        range.validate().err()
    );
    range
}

/// Linear mapping from `start` to `end`. `end` may be below `start`.
pub fn linear_range(start: f32, end: f32) -> Range {
    checked(Range::new(start, end, Curve::Linear))
}

pub fn try_linear_range(start: f32, end: f32) -> Result<Range, ConfigError> {
    validated(Range::new(start, end, Curve::Linear))
}

/// Logarithmic mapping from `start` to `end`.
///
/// The exponent controls how strongly detail is bunched toward `start`; see
/// [`DEFAULT_EXPONENT`].
#[cfg(feature = "log-range")]
pub fn logarithmic_range(start: f32, end: f32, exponent: f32) -> Range {
    checked(Range::new(start, end, Curve::Logarithmic { exponent }))
}

#[cfg(feature = "log-range")]
pub fn try_logarithmic_range(start: f32, end: f32, exponent: f32) -> Result<Range, ConfigError> {
    validated(Range::new(start, end, Curve::Logarithmic { exponent }))
}

/// Logarithmic mapping where higher knob positions give smaller values,
/// leaving the top of the knob for fine control of low values.
#[cfg(feature = "log-range")]
pub fn reversed_logarithmic_range(start: f32, end: f32, exponent: f32) -> Range {
    checked(Range::new(start, end, Curve::ReversedLogarithmic { exponent }))
}

#[cfg(feature = "log-range")]
pub fn try_reversed_logarithmic_range(
    start: f32,
    end: f32,
    exponent: f32,
) -> Result<Range, ConfigError> {
    validated(Range::new(start, end, Curve::ReversedLogarithmic { exponent }))
}

/// Put a linear section in front of a logarithmic range.
///
/// Useful when a long slider needs detail at the very start, e.g. the
/// 0-30 ms region of a 20 s release. The knob moves linearly up to
/// `breakpoint_value` over `0.0..breakpoint_normalized`
/// (see [`DEFAULT_BREAKPOINT_NORMALIZED`]), then logarithmically to `end`.
#[cfg(feature = "log-range")]
pub fn logarithmic_range_with_linear_start(
    start: f32,
    end: f32,
    exponent: f32,
    breakpoint_value: f32,
    breakpoint_normalized: f32,
) -> Range {
    checked(Range::new(
        start,
        end,
        Curve::LogarithmicWithLinearStart {
            exponent,
            breakpoint_value,
            breakpoint_normalized,
        },
    ))
}

#[cfg(feature = "log-range")]
pub fn try_logarithmic_range_with_linear_start(
    start: f32,
    end: f32,
    exponent: f32,
    breakpoint_value: f32,
    breakpoint_normalized: f32,
) -> Result<Range, ConfigError> {
    validated(Range::new(
        start,
        end,
        Curve::LogarithmicWithLinearStart {
            exponent,
            breakpoint_value,
            breakpoint_normalized,
        },
    ))
}

/// Integer range where the centered knob always lands on `midpoint`.
pub fn int_range_with_midpoint<T>(min: T, max: T, midpoint: T) -> Range
where
    T: Copy + AsPrimitive<f32>,
{
    checked(midpoint_range(min, max, midpoint))
}

pub fn try_int_range_with_midpoint<T>(min: T, max: T, midpoint: T) -> Result<Range, ConfigError>
where
    T: Copy + AsPrimitive<f32>,
{
    validated(midpoint_range(min, max, midpoint))
}

fn midpoint_range<T>(min: T, max: T, midpoint: T) -> Range
where
    T: Copy + AsPrimitive<f32>,
{
    Range::new(
        min.as_(),
        max.as_(),
        Curve::IntWithMidpoint {
            midpoint: midpoint.as_(),
        },
    )
}

/// Decibel range interpolating amplitude geometrically:
/// `amp = min_amp * (max_amp / min_amp)^n`.
///
/// In the dB domain that is a straight line, which is how it is evaluated.
pub fn decibel_range(minimum_db: f32, maximum_db: f32) -> Range {
    checked(Range::new(minimum_db, maximum_db, Curve::Decibels))
}

pub fn try_decibel_range(minimum_db: f32, maximum_db: f32) -> Result<Range, ConfigError> {
    validated(Range::new(minimum_db, maximum_db, Curve::Decibels))
}

/// Decibel range for one harmonic of a sound.
///
/// The normalized value is read as a gain; the loudest a harmonic may get is
/// `1 / harmonic` of the fundamental, so the whole knob covers
/// `minimum_db..gain_to_decibels(1 / harmonic)`.
pub fn decibel_range_for_harmonic(harmonic: u32, minimum_db: f32) -> Range {
    checked(harmonic_range(harmonic, minimum_db))
}

pub fn try_decibel_range_for_harmonic(harmonic: u32, minimum_db: f32) -> Result<Range, ConfigError> {
    validated(harmonic_range(harmonic, minimum_db))
}

fn harmonic_range(harmonic: u32, minimum_db: f32) -> Range {
    let max_gain = 1.0 / harmonic as f32;
    Range::new(
        minimum_db,
        gain_to_decibels(max_gain, minimum_db),
        Curve::HarmonicDecibels { harmonic },
    )
}

/// Generic gain <-> decibel range: silence (-100 dB) to unity (0 dB).
pub fn gain_range() -> Range {
    decibel_range_for_harmonic(1, DEFAULT_MINIMUM_DB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_one_only_for_int_ranges() {
        assert_eq!(linear_range(0.0, 1.0).interval(), 0.0);
        assert_eq!(int_range_with_midpoint(0, 10, 3).interval(), 1.0);
    }

    #[test]
    fn clamp_handles_descending_linear_ranges() {
        let range = linear_range(10.0, -10.0);
        assert_eq!(range.clamp(20.0), 10.0);
        assert_eq!(range.clamp(-20.0), -10.0);
        assert_eq!(range.clamp(3.0), 3.0);
    }

    #[test]
    fn snap_leaves_continuous_values_alone() {
        let range = decibel_range(-30.0, 0.0);
        assert_eq!(range.snap(-12.34), -12.34);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn builders_panic_on_empty_range_in_debug() {
        let _ = linear_range(1.0, 1.0);
    }

    #[test]
    fn zero_width_halves_do_not_divide_by_zero() {
        let range = int_range_with_midpoint(0, 10, 0);
        assert_eq!(range.to_normalized(0.0), 0.0);
        assert_eq!(range.to_normalized(10.0), 1.0);

        let range = int_range_with_midpoint(0, 10, 10);
        assert_eq!(range.to_normalized(10.0), 0.5);
        assert_eq!(range.to_normalized(0.0), 0.0);
    }
}
