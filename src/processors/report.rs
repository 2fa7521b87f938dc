use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::models::{Axis, Notation};
use crate::parsers::ParsedCoordinate;

#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub total_lines: usize,
    pub accepted: usize,
    pub no_match: usize,
    pub out_of_range: usize,
    pub notation_counts: BTreeMap<Notation, usize>,
    pub failures: Vec<LineFailure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    pub line_number: usize,
    pub text: String,
    pub kind: FailureKind,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoStructuralMatch,
    OutOfRange(Axis),
}

impl ParseReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&mut self, parsed: &ParsedCoordinate) {
        self.total_lines += 1;
        self.accepted += 1;
        *self.notation_counts.entry(parsed.notation).or_default() += 1;
    }

    pub fn record_failure(&mut self, line_number: usize, text: &str, error: &ParseError) {
        self.total_lines += 1;

        let kind = match error {
            ParseError::NoStructuralMatch { .. } => {
                self.no_match += 1;
                FailureKind::NoStructuralMatch
            }
            ParseError::OutOfRange { source, .. } => {
                self.out_of_range += 1;
                FailureKind::OutOfRange(source.axis)
            }
        };

        self.failures.push(LineFailure {
            line_number,
            text: text.to_string(),
            kind,
            details: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn count_for(&self, notation: Notation) -> usize {
        self.notation_counts.get(&notation).copied().unwrap_or(0)
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Coordinate Parse Report\n\
            ========================\n\
            Lines processed: {}\n\
            Points accepted: {}\n\
            Unrecognized format: {}\n\
            Out of range: {}\n",
            self.total_lines, self.accepted, self.no_match, self.out_of_range
        );

        if !self.notation_counts.is_empty() {
            summary.push_str("\nNotations:\n");
            for (notation, count) in &self.notation_counts {
                summary.push_str(&format!("  {}: {}\n", notation, count));
            }
        }

        if self.has_failures() {
            summary.push_str("\nRejected lines:\n");
            for failure in self.failures.iter().take(10) {
                summary.push_str(&format!(
                    "  line {}: {}\n",
                    failure.line_number, failure.details
                ));
            }
            if self.failures.len() > 10 {
                summary.push_str(&format!("  ... and {} more\n", self.failures.len() - 10));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_coordinate;

    #[test]
    fn test_report_counts() {
        let mut report = ParseReport::new();

        for (number, line) in ["45.9 S, 170.5 E", "95, 10", "nowhere", "1 2"]
            .iter()
            .enumerate()
        {
            match parse_coordinate(line) {
                Ok(parsed) => report.record_accepted(&parsed),
                Err(e) => report.record_failure(number + 1, line, &e),
            }
        }

        assert_eq!(report.total_lines, 4);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.no_match, 1);
        assert_eq!(report.out_of_range, 1);
        assert_eq!(report.count_for(Notation::CompassPair), 1);
        assert_eq!(report.count_for(Notation::PlainPair), 1);
        assert_eq!(report.count_for(Notation::DegreesMinutes), 0);

        assert_eq!(report.failures[0].line_number, 2);
        assert_eq!(
            report.failures[0].kind,
            FailureKind::OutOfRange(Axis::Latitude)
        );
        assert_eq!(report.failures[1].kind, FailureKind::NoStructuralMatch);

        let summary = report.summary();
        assert!(summary.contains("Points accepted: 2"));
        assert!(summary.contains("line 3: Unrecognized coordinate format: 'nowhere'"));
    }

    #[test]
    fn test_empty_report() {
        let report = ParseReport::new();
        assert!(!report.has_failures());
        assert!(!report.summary().contains("Rejected lines"));
    }
}
