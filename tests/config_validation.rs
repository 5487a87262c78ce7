use knob_taper::{
    try_decibel_range, try_decibel_range_for_harmonic, try_int_range_with_midpoint,
    try_linear_range, ConfigError,
};

#[cfg(feature = "log-range")]
use knob_taper::{
    try_logarithmic_range, try_logarithmic_range_with_linear_start, try_reversed_logarithmic_range,
};

#[test]
fn test_empty_linear_range() {
    let result = try_linear_range(1.0, 1.0);
    assert!(matches!(result, Err(ConfigError::EmptyRange)));
}

#[test]
fn test_nan_linear_range() {
    let result = try_linear_range(f32::NAN, 1.0);
    assert!(matches!(result, Err(ConfigError::EmptyRange)));
}

#[test]
fn test_descending_linear_range_is_valid() {
    assert!(try_linear_range(1.0, -1.0).is_ok());
}

#[cfg(feature = "log-range")]
#[test]
fn test_inverted_logarithmic_range() {
    let result = try_logarithmic_range(10.0, 0.0, 6.0);
    assert!(matches!(result, Err(ConfigError::EmptyRange)));

    let result = try_reversed_logarithmic_range(10.0, 10.0, 6.0);
    assert!(matches!(result, Err(ConfigError::EmptyRange)));
}

#[cfg(feature = "log-range")]
#[test]
fn test_invalid_exponent() {
    assert_eq!(try_logarithmic_range(0.0, 1.0, 0.0), Err(ConfigError::InvalidExponent));
    assert_eq!(try_logarithmic_range(0.0, 1.0, -2.0), Err(ConfigError::InvalidExponent));
    assert_eq!(
        try_reversed_logarithmic_range(0.0, 1.0, f32::INFINITY),
        Err(ConfigError::InvalidExponent)
    );
    assert_eq!(try_logarithmic_range(0.0, 1.0, f32::NAN), Err(ConfigError::InvalidExponent));
}

#[cfg(feature = "log-range")]
#[test]
fn test_exponent_overflowing_f32_is_rejected() {
    assert_eq!(try_logarithmic_range(0.0, 1.0, 128.0), Err(ConfigError::InvalidExponent));
    assert_eq!(try_logarithmic_range(0.0, 1.0, 200.0), Err(ConfigError::InvalidExponent));
    assert_eq!(
        try_logarithmic_range_with_linear_start(0.0, 1.0, 200.0, 0.5, 0.25),
        Err(ConfigError::InvalidExponent)
    );

    let steep = try_logarithmic_range(0.0, 1.0, 100.0).unwrap();
    assert_eq!(steep.from_normalized(0.0), 0.0);
    assert_eq!(steep.from_normalized(1.0), 1.0);
    assert_eq!(steep.to_normalized(1.0), 1.0);
}

#[cfg(feature = "log-range")]
#[test]
fn test_breakpoint_below_start() {
    let result = try_logarithmic_range_with_linear_start(100.0, 1000.0, 6.0, 50.0, 0.25);
    assert_eq!(result, Err(ConfigError::BreakpointOutOfRange));
}

#[cfg(feature = "log-range")]
#[test]
fn test_breakpoint_at_end() {
    let result = try_logarithmic_range_with_linear_start(0.0, 1000.0, 6.0, 1000.0, 0.25);
    assert_eq!(result, Err(ConfigError::BreakpointOutOfRange));
}

#[cfg(feature = "log-range")]
#[test]
fn test_breakpoint_normalized_outside_knob() {
    for breakpoint_normalized in [0.0, 1.0, -0.5, 1.5] {
        let result =
            try_logarithmic_range_with_linear_start(0.0, 1000.0, 6.0, 100.0, breakpoint_normalized);
        assert_eq!(result, Err(ConfigError::BreakpointNormalizedOutOfRange));
    }
}

#[cfg(feature = "log-range")]
#[test]
fn test_breakpoint_at_start_keeps_exact_endpoints() {
    let range = try_logarithmic_range_with_linear_start(0.0, 1000.0, 6.0, 0.0, 0.25).unwrap();

    assert_eq!(range.from_normalized(0.0), 0.0);
    assert_eq!(range.to_normalized(0.0), 0.0);
    assert_eq!(range.from_normalized(1.0), 1000.0);
    assert_eq!(range.to_normalized(1000.0), 1.0);

    // The empty linear segment holds start until the breakpoint
    assert_eq!(range.from_normalized(0.1), 0.0);
    assert_eq!(range.from_normalized(0.25), 0.0);

    let offset = try_logarithmic_range_with_linear_start(20.0, 1000.0, 6.0, 20.0, 0.25).unwrap();
    assert_eq!(offset.to_normalized(20.0), 0.0);
    assert_eq!(offset.from_normalized(0.0), 20.0);
}

#[test]
fn test_midpoint_outside_range() {
    assert_eq!(try_int_range_with_midpoint(0, 100, 120), Err(ConfigError::MidpointOutOfRange));
    assert_eq!(try_int_range_with_midpoint(0, 100, -1), Err(ConfigError::MidpointOutOfRange));
    assert!(try_int_range_with_midpoint(0, 100, 100).is_ok());
}

#[test]
fn test_inverted_int_range() {
    assert_eq!(try_int_range_with_midpoint(100, 0, 50), Err(ConfigError::EmptyRange));
}

#[test]
fn test_decibel_floor_must_be_negative() {
    assert_eq!(try_decibel_range(0.0, 6.0), Err(ConfigError::NonNegativeFloor));
    assert_eq!(try_decibel_range_for_harmonic(1, 0.0), Err(ConfigError::NonNegativeFloor));
}

#[test]
fn test_inverted_decibel_range() {
    assert_eq!(try_decibel_range(-6.0, -30.0), Err(ConfigError::EmptyRange));
}

#[test]
fn test_zero_harmonic() {
    assert_eq!(try_decibel_range_for_harmonic(0, -100.0), Err(ConfigError::ZeroHarmonic));
}

#[test]
fn test_error_messages() {
    assert_eq!(ConfigError::EmptyRange.to_string(), "start must be less than end");
    assert_eq!(ConfigError::ZeroHarmonic.to_string(), "harmonic number must be at least 1");
    assert_eq!(ConfigError::InvalidExponent.to_string(), "exponent must be in (0, 128)");
}
