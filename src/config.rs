#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    EmptyRange,
    InvalidExponent,
    BreakpointOutOfRange,
    BreakpointNormalizedOutOfRange,
    MidpointOutOfRange,
    NonNegativeFloor,
    ZeroHarmonic,
    DefaultOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyRange => write!(f, "start must be less than end"),
            ConfigError::InvalidExponent => write!(f, "exponent must be in (0, 128)"),
            ConfigError::BreakpointOutOfRange => {
                write!(f, "breakpoint value must be in start..end")
            }
            ConfigError::BreakpointNormalizedOutOfRange => {
                write!(f, "normalized breakpoint must be in (0.0, 1.0)")
            }
            ConfigError::MidpointOutOfRange => write!(f, "midpoint must be in min..=max"),
            ConfigError::NonNegativeFloor => write!(f, "minimum dB must be below 0 dB"),
            ConfigError::ZeroHarmonic => write!(f, "harmonic number must be at least 1"),
            ConfigError::DefaultOutOfRange => write!(f, "default value must be in start..=end"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Positive exponent whose `2^exponent` still fits in an f32.
#[cfg(feature = "log-range")]
pub(crate) fn validate_exponent(exponent: f32) -> Result<(), ConfigError> {
    if exponent > 0.0 && libm::exp2f(exponent).is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidExponent)
    }
}

/// `start < end`, rejecting NaN bounds as well.
pub(crate) fn validate_ascending(start: f32, end: f32) -> Result<(), ConfigError> {
    if start < end {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange)
    }
}
