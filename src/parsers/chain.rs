use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::ParseError;
use crate::models::{build_point, CanonicalPoint, Notation};
use crate::parsers::recognizers::{
    Candidate, CompassPairRecognizer, DegreeCompassPairRecognizer,
    DegreesMinutesRecognizer, DegreesMinutesSecondsRecognizer,
    InvertedCompassPairRecognizer, PlainPairRecognizer, Recognizer,
};

static STANDARD_CHAIN: Lazy<FormatChain> = Lazy::new(FormatChain::new);

/// A line that was recognized and passed range validation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCoordinate {
    pub notation: Notation,
    pub point: CanonicalPoint,
}

/// Ordered recognizers; the first structural match decides the outcome.
///
/// A structural match whose values are out of range ends the search with
/// [`ParseError::OutOfRange`]; later recognizers are not consulted.
pub struct FormatChain {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl FormatChain {
    /// The standard chain, in [`Notation::PRIORITY`] order
    pub fn new() -> Self {
        Self::with_recognizers(vec![
            Box::new(PlainPairRecognizer),
            Box::new(InvertedCompassPairRecognizer),
            Box::new(CompassPairRecognizer),
            Box::new(DegreeCompassPairRecognizer),
            Box::new(DegreesMinutesRecognizer),
            Box::new(DegreesMinutesSecondsRecognizer),
        ])
    }

    pub fn with_recognizers(recognizers: Vec<Box<dyn Recognizer>>) -> Self {
        Self { recognizers }
    }

    pub fn notations(&self) -> Vec<Notation> {
        self.recognizers.iter().map(|r| r.notation()).collect()
    }

    /// First structural match for an already-trimmed line
    pub fn recognize(&self, line: &str) -> Option<(Notation, Candidate)> {
        self.recognizers
            .iter()
            .find_map(|r| r.try_match(line).map(|candidate| (r.notation(), candidate)))
    }

    /// Classify one raw line and build its point
    pub fn parse(&self, line: &str) -> std::result::Result<ParsedCoordinate, ParseError> {
        let trimmed = line.trim();

        let (notation, candidate) =
            self.recognize(trimmed)
                .ok_or_else(|| ParseError::NoStructuralMatch {
                    line: trimmed.to_string(),
                })?;

        debug!(%notation, line = trimmed, "structural match");

        let point = build_point(candidate.latitude, candidate.longitude, candidate.label)
            .map_err(|source| ParseError::OutOfRange { notation, source })?;

        Ok(ParsedCoordinate { notation, point })
    }
}

impl Default for FormatChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one line with the standard chain
pub fn parse_coordinate(line: &str) -> std::result::Result<ParsedCoordinate, ParseError> {
    STANDARD_CHAIN.parse(line)
}
