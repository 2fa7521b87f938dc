use regex::{Captures, Regex};

use crate::models::{Axis, Notation};
use crate::parsers::patterns::{
    decimal, hemisphere, label_or, whole_degrees, COMPASS_PAIR, DEGREES_MINUTES,
    DEGREES_MINUTES_SECONDS, DEGREE_COMPASS_PAIR, INVERTED_COMPASS_PAIR, PLAIN_PAIR,
};
use crate::utils::coordinates::to_decimal;

/// Values extracted by a structural match, before range validation
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// One textual notation the format chain can try.
///
/// `try_match` returns `None` when the line does not have the notation's shape. It
/// never validates ranges; a structural match with impossible values is still `Some`.
pub trait Recognizer: Send + Sync {
    fn notation(&self) -> Notation;

    fn try_match(&self, line: &str) -> Option<Candidate>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPairRecognizer;

impl Recognizer for PlainPairRecognizer {
    fn notation(&self) -> Notation {
        Notation::PlainPair
    }

    fn try_match(&self, line: &str) -> Option<Candidate> {
        let caps = PLAIN_PAIR.captures(line)?;

        // No hemisphere letters: the literal sign of each number stands
        Some(Candidate {
            latitude: decimal(&caps, "lat"),
            longitude: decimal(&caps, "lon"),
            label: label_or(&caps, self.notation().default_label()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InvertedCompassPairRecognizer;

impl Recognizer for InvertedCompassPairRecognizer {
    fn notation(&self) -> Notation {
        Notation::InvertedCompassPair
    }

    fn try_match(&self, line: &str) -> Option<Candidate> {
        compass_match(&INVERTED_COMPASS_PAIR, line, self.notation())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompassPairRecognizer;

impl Recognizer for CompassPairRecognizer {
    fn notation(&self) -> Notation {
        Notation::CompassPair
    }

    fn try_match(&self, line: &str) -> Option<Candidate> {
        compass_match(&COMPASS_PAIR, line, self.notation())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeCompassPairRecognizer;

impl Recognizer for DegreeCompassPairRecognizer {
    fn notation(&self) -> Notation {
        Notation::DegreeCompassPair
    }

    fn try_match(&self, line: &str) -> Option<Candidate> {
        compass_match(&DEGREE_COMPASS_PAIR, line, self.notation())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DegreesMinutesRecognizer;

impl Recognizer for DegreesMinutesRecognizer {
    fn notation(&self) -> Notation {
        Notation::DegreesMinutes
    }

    fn try_match(&self, line: &str) -> Option<Candidate> {
        dms_match(&DEGREES_MINUTES, line, self.notation())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DegreesMinutesSecondsRecognizer;

impl Recognizer for DegreesMinutesSecondsRecognizer {
    fn notation(&self) -> Notation {
        Notation::DegreesMinutesSeconds
    }

    fn try_match(&self, line: &str) -> Option<Candidate> {
        dms_match(&DEGREES_MINUTES_SECONDS, line, self.notation())
    }
}

/// Decimal magnitudes signed by their hemisphere letters
fn compass_match(pattern: &Regex, line: &str, notation: Notation) -> Option<Candidate> {
    let caps = pattern.captures(line)?;
    let lat_dir = hemisphere(&caps, "lat_dir", Axis::Latitude)?;
    let lon_dir = hemisphere(&caps, "lon_dir", Axis::Longitude)?;

    Some(Candidate {
        latitude: lat_dir.apply(decimal(&caps, "lat")),
        longitude: lon_dir.apply(decimal(&caps, "lon")),
        label: label_or(&caps, notation.default_label()),
    })
}

/// Degrees, minutes and optional seconds per axis, converted to decimal degrees
fn dms_match(pattern: &Regex, line: &str, notation: Notation) -> Option<Candidate> {
    let caps = pattern.captures(line)?;
    let lat_dir = hemisphere(&caps, "lat_dir", Axis::Latitude)?;
    let lon_dir = hemisphere(&caps, "lon_dir", Axis::Longitude)?;

    Some(Candidate {
        latitude: to_decimal(
            whole_degrees(&caps, "lat_deg"),
            decimal(&caps, "lat_min"),
            seconds(&caps, "lat_sec"),
            lat_dir,
        ),
        longitude: to_decimal(
            whole_degrees(&caps, "lon_deg"),
            decimal(&caps, "lon_min"),
            seconds(&caps, "lon_sec"),
            lon_dir,
        ),
        label: label_or(&caps, notation.default_label()),
    })
}

/// Seconds are implicitly zero for notations without a seconds group
fn seconds(caps: &Captures<'_>, name: &str) -> f64 {
    if caps.name(name).is_some() {
        decimal(caps, name)
    } else {
        0.0
    }
}
