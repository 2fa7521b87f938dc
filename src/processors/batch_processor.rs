use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ParseError, ProcessingError, Result};
use crate::models::PointCollection;
use crate::parsers::{FormatChain, ParsedCoordinate};
use crate::processors::report::ParseReport;
use crate::readers::{InputLine, InputReader};
use crate::utils::constants::SESSION_END_SENTINEL;
use crate::utils::progress::ProgressReporter;

pub struct BatchProcessor {
    max_workers: usize,
    sentinel: String,
    chain: FormatChain,
}

impl BatchProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            sentinel: SESSION_END_SENTINEL.to_string(),
            chain: FormatChain::new(),
        }
    }

    pub fn with_sentinel(mut self, sentinel: &str) -> Self {
        self.sentinel = sentinel.to_string();
        self
    }

    pub fn with_chain(mut self, chain: FormatChain) -> Self {
        self.chain = chain;
        self
    }

    /// Read and parse every coordinate line of a file
    pub fn process_file(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<(PointCollection, ParseReport)> {
        if let Some(p) = progress {
            p.set_message("Reading coordinates...");
        }

        let reader = InputReader::with_sentinel(&self.sentinel);
        let lines = reader.read_lines(path)?;
        info!("Read {} coordinate lines from {}", lines.len(), path.display());

        self.process_lines(&lines, progress)
    }

    /// Recognize lines in parallel, then append accepted points in input order on the
    /// calling thread.
    pub fn process_lines(
        &self,
        lines: &[InputLine],
        progress: Option<&ProgressReporter>,
    ) -> Result<(PointCollection, ParseReport)> {
        if let Some(p) = progress {
            p.set_message(&format!("Parsing {} lines...", lines.len()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        let outcomes: Vec<std::result::Result<ParsedCoordinate, ParseError>> = pool.install(|| {
            lines
                .par_iter()
                .map(|line| {
                    let outcome = self.chain.parse(&line.text);
                    if let Some(p) = progress {
                        p.increment(1);
                    }
                    outcome
                })
                .collect()
        });

        let mut collection = PointCollection::new();
        let mut report = ParseReport::new();

        for (line, outcome) in lines.iter().zip(outcomes) {
            match outcome {
                Ok(parsed) => {
                    debug!(line_number = line.number, notation = %parsed.notation, "accepted");
                    report.record_accepted(&parsed);
                    collection.push(parsed.point);
                }
                Err(e) => {
                    warn!(line_number = line.number, line = %line.text, "{}", e);
                    report.record_failure(line.number, &line.text, &e);
                }
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!(
                "Parsed {} lines, accepted {} points",
                report.total_lines, report.accepted
            ));
        }

        Ok((collection, report))
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lines(texts: &[&str]) -> Vec<InputLine> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| InputLine {
                number: i + 1,
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_process_lines_preserves_order() -> Result<()> {
        let processor = BatchProcessor::new(4);
        let input: Vec<String> = (0..200)
            .map(|i| format!("{}.5, {}.25 p{}", i % 80, i % 170, i))
            .collect();
        let input_refs: Vec<&str> = input.iter().map(String::as_str).collect();

        let (collection, report) = processor.process_lines(&lines(&input_refs), None)?;

        assert_eq!(collection.len(), 200);
        assert_eq!(report.accepted, 200);
        for (i, point) in collection.points().iter().enumerate() {
            assert_eq!(point.label(), format!("p{}", i));
        }
        Ok(())
    }

    #[test]
    fn test_failures_are_reported_not_appended() -> Result<()> {
        let processor = BatchProcessor::new(2);
        let input = lines(&["45.9 S, 170.5 E", "not a coordinate", "95, 10", "10 N, 20 E"]);

        let (collection, report) = processor.process_lines(&input, None)?;

        assert_eq!(collection.len(), 2);
        assert_eq!(report.no_match, 1);
        assert_eq!(report.out_of_range, 1);
        assert_eq!(report.failures[0].line_number, 2);
        assert_eq!(report.failures[1].line_number, 3);
        Ok(())
    }

    #[test]
    fn test_custom_chain() -> Result<()> {
        use crate::parsers::recognizers::PlainPairRecognizer;

        let chain = FormatChain::with_recognizers(vec![Box::new(PlainPairRecognizer)]);
        let processor = BatchProcessor::new(1).with_chain(chain);

        let (collection, report) =
            processor.process_lines(&lines(&["1 2", "45.9 S, 170.5 E"]), None)?;

        assert_eq!(collection.len(), 1);
        assert_eq!(report.no_match, 1);
        Ok(())
    }

    #[test]
    fn test_process_file_with_sentinel() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "40.7128, -74.0060 NYC")?;
        writeln!(temp_file, "STOP")?;
        writeln!(temp_file, "51.5074 -0.1278 London")?;

        let processor = BatchProcessor::new(1).with_sentinel("STOP");
        let (collection, report) = processor.process_file(temp_file.path(), None)?;

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.points()[0].label(), "NYC");
        assert_eq!(report.total_lines, 1);
        Ok(())
    }
}
