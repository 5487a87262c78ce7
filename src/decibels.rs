//! Gain <-> decibel conversion with a silence floor.

/// Decibel level treated as silence (gain 0.0) unless a range says otherwise.
pub const DEFAULT_MINIMUM_DB: f32 = -100.0;

/// Convert a linear gain to decibels.
///
/// Gains of zero or below, and anything quieter than `minus_infinity_db`,
/// come out as `minus_infinity_db`.
#[inline]
pub fn gain_to_decibels(gain: f32, minus_infinity_db: f32) -> f32 {
    if gain > 0.0 {
        (libm::log10f(gain) * 20.0).max(minus_infinity_db)
    } else {
        minus_infinity_db
    }
}

/// Convert decibels to a linear gain.
///
/// Levels at or below `minus_infinity_db` are silence (0.0).
#[inline]
pub fn decibels_to_gain(db: f32, minus_infinity_db: f32) -> f32 {
    if db > minus_infinity_db {
        libm::powf(10.0, db * 0.05)
    } else {
        0.0
    }
}
