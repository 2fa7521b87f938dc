//! Compiled patterns for each coordinate notation, plus the capture helpers shared by
//! the recognizers.
//!
//! Every pattern is anchored at the start of the trimmed line. Only the
//! degrees-minutes-seconds pattern is also anchored at the end: its label must be
//! parenthesised, so bare trailing text is a non-match. The other patterns tolerate
//! trailing text that does not fit the optional label group.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::{Axis, Direction};

/// `40.7128, -74.0060 label` or `40.7128 -74.0060`
pub(crate) static PLAIN_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<lat>-?[0-9]{1,3}(?:\.[0-9]+)?)(?:, | )(?P<lon>-?[0-9]{1,3}(?:\.[0-9]+)?)(?: (?P<label>.+))?",
    )
    .unwrap()
});

/// `74.0060 W, 40.7128 N label`
pub(crate) static INVERTED_COMPASS_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<lon>-?[0-9]+(?:\.[0-9]+)?)\s*(?P<lon_dir>[EWew]),?\s*(?P<lat>-?[0-9]+(?:\.[0-9]+)?)\s*(?P<lat_dir>[NSns])(?: (?P<label>.+))?",
    )
    .unwrap()
});

/// `40.7128 N, 74.0060 W label`
pub(crate) static COMPASS_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<lat>-?[0-9]+(?:\.[0-9]+)?)\s*(?P<lat_dir>[NSns]),?\s*(?P<lon>-?[0-9]+(?:\.[0-9]+)?)\s*(?P<lon_dir>[EWew])(?: (?P<label>.+))?",
    )
    .unwrap()
});

/// `40.7128° N, 74.0060° W label`
pub(crate) static DEGREE_COMPASS_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<lat>[0-9]+(?:\.[0-9]+)?)°\s*(?P<lat_dir>[NSns]),?\s*(?P<lon>[0-9]+(?:\.[0-9]+)?)°\s*(?P<lon_dir>[EWew])(?: (?P<label>.+))?",
    )
    .unwrap()
});

/// `40°42.768' N, 74°0.36' W label` or `40 42.768 N, 74 0.36 W`
pub(crate) static DEGREES_MINUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<lat_deg>[0-9]+)[°\s]+(?P<lat_min>[0-9]+(?:\.[0-9]+)?)['\s]*(?P<lat_dir>[NSns])\s*,?\s*(?P<lon_deg>[0-9]+)[°\s]+(?P<lon_min>[0-9]+(?:\.[0-9]+)?)['\s]*(?P<lon_dir>[EWew])(?: (?P<label>.+))?",
    )
    .unwrap()
});

/// `40°42'45.9936"N, 74°0'21.5064"W (label)`
pub(crate) static DEGREES_MINUTES_SECONDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?P<lat_deg>[0-9]+)°\s*(?P<lat_min>[0-9]+)'\s*(?P<lat_sec>[0-9]+(?:\.[0-9]+)?)"?\s*(?P<lat_dir>[NSns]),?\s*(?P<lon_deg>[0-9]+)°\s*(?P<lon_min>[0-9]+)'\s*(?P<lon_sec>[0-9]+(?:\.[0-9]+)?)"?\s*(?P<lon_dir>[EWew])(?:\s*\((?P<label>.+)\))?$"#,
    )
    .unwrap()
});

/// Parse a captured decimal numeral.
///
/// The patterns only admit ASCII digits, so parsing does not fail in practice. A
/// missing group yields NaN, which the range check rejects.
pub(crate) fn decimal(caps: &Captures<'_>, name: &str) -> f64 {
    caps.name(name)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse captured whole degrees. Values too large for `u32` saturate and are
/// rejected by the range check instead of aborting the match.
pub(crate) fn whole_degrees(caps: &Captures<'_>, name: &str) -> u32 {
    caps.name(name)
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Read a captured hemisphere letter, refusing a letter from the wrong axis
pub(crate) fn hemisphere(caps: &Captures<'_>, name: &str, axis: Axis) -> Option<Direction> {
    Direction::for_axis(caps.name(name)?.as_str(), axis)
}

pub(crate) fn label_or(caps: &Captures<'_>, default: &str) -> String {
    caps.name("label")
        .map_or_else(|| default.to_string(), |m| m.as_str().to_string())
}
