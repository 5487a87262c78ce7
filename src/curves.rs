//! Curve shaping math.
//!
//! Everything here works on proportions of a span (0.0..1.0 in, 0.0..1.0 out).
//! [`crate::Range`] scales the results onto its plain-value bounds.

/// Interpolate between `a` and `b` by `t`.
///
/// Exact at both ends: `t == 0.0` returns `a` and `t == 1.0` returns `b`
/// bit for bit, which `a + t * (b - a)` does not guarantee for arbitrary floats.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t < 0.5 {
        a + t * (b - a)
    } else {
        b - (1.0 - t) * (b - a)
    }
}

/// Exponential taper: proportion of the span reached at `normalized`.
///
/// output = (2^(n*k) - 1) / (2^k - 1)
///
/// With the default exponent of 6 the halfway point of a knob lands at
/// roughly 11% of the span. Larger exponents bunch more detail near 0.
#[cfg(feature = "log-range")]
#[inline]
pub fn exponential(normalized: f32, exponent: f32) -> f32 {
    let base = libm::exp2f(exponent) - 1.0;
    (libm::exp2f(normalized * exponent) - 1.0) / base
}

/// Inverse of [`exponential`].
///
/// output = log2(p * (2^k - 1) + 1) / k
///
/// The divisor is computed as `log2(base + 1)` so a proportion of exactly 1.0
/// maps back to exactly 1.0 for non-integer exponents too.
///
/// Undefined (NaN) when `proportion * (2^k - 1) + 1 <= 0`.
#[cfg(feature = "log-range")]
#[inline]
pub fn logarithmic(proportion: f32, exponent: f32) -> f32 {
    let base = libm::exp2f(exponent) - 1.0;
    libm::log2f(proportion * base + 1.0) / libm::log2f(base + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_is_exact_at_both_ends() {
        assert_eq!(lerp(0.1, 0.7, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
    }

    #[cfg(feature = "log-range")]
    #[test]
    fn exponential_endpoints() {
        assert_eq!(exponential(0.0, 6.0), 0.0);
        assert_eq!(exponential(1.0, 6.0), 1.0);
        assert_eq!(exponential(1.0, 3.7), 1.0);
    }

    #[cfg(feature = "log-range")]
    #[test]
    fn logarithmic_endpoints() {
        assert_eq!(logarithmic(0.0, 6.0), 0.0);
        assert_eq!(logarithmic(1.0, 6.0), 1.0);
        assert_eq!(logarithmic(1.0, 3.7), 1.0);
    }

    #[cfg(feature = "log-range")]
    #[test]
    fn halfway_lands_near_eleven_percent() {
        let half = exponential(0.5, 6.0);
        assert!(libm::fabsf(half - 0.11111) < 1e-5, "got {}", half);
    }
}
