use crate::models::{Axis, Direction};
use crate::utils::constants::{MINUTES_PER_DEGREE, SECONDS_PER_DEGREE};

/// Convert a degrees/minutes/seconds triple and hemisphere to signed decimal degrees.
///
/// No range check happens here; out-of-range results are rejected when the point is built.
///
/// # Examples
/// ```
/// use whereintheworld::models::Direction;
/// use whereintheworld::utils::to_decimal;
///
/// let decimal = to_decimal(50, 30.0, 15.0, Direction::North);
/// assert!((decimal - 50.504167).abs() < 0.000001);
/// ```
pub fn to_decimal(degrees: u32, minutes: f64, seconds: f64, direction: Direction) -> f64 {
    let decimal_value =
        f64::from(degrees) + minutes / MINUTES_PER_DEGREE + seconds / SECONDS_PER_DEGREE;

    if direction.is_negative() {
        -decimal_value
    } else {
        decimal_value
    }
}

/// Render decimal degrees as DMS with a hemisphere letter, e.g. `40°42'46.00"N`
pub fn decimal_to_dms(decimal: f64, axis: Axis) -> String {
    let hemisphere = Direction::of_value(axis, decimal);
    // Work in whole hundredths of a second so rounding never yields 60.00"
    let hundredths = (decimal.abs() * SECONDS_PER_DEGREE * 100.0).round() as u64;

    let degrees = hundredths / 360_000;
    let minutes = (hundredths % 360_000) / 6_000;
    let seconds = (hundredths % 6_000) as f64 / 100.0;

    format!(
        "{}°{:02}'{:05.2}\"{}",
        degrees, minutes, seconds, hemisphere
    )
}
