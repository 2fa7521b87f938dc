use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::models::{Notation, PointCollection};
use crate::parsers::FormatChain;
use crate::processors::report::ParseReport;
use crate::utils::constants::{
    ACCEPTED_MESSAGE, REJECTED_MESSAGE, SESSION_END_SENTINEL, SESSION_PROMPT,
};

/// Line-by-line collection of points from an interactive source.
///
/// Each line runs through the format chain to completion before the next is read, and
/// accepted points are appended to a collection owned by the session.
pub struct Session {
    chain: FormatChain,
    sentinel: String,
    collection: PointCollection,
    report: ParseReport,
    lines_read: usize,
}

impl Session {
    pub fn new() -> Self {
        Self {
            chain: FormatChain::new(),
            sentinel: SESSION_END_SENTINEL.to_string(),
            collection: PointCollection::new(),
            report: ParseReport::new(),
            lines_read: 0,
        }
    }

    pub fn with_sentinel(mut self, sentinel: &str) -> Self {
        self.sentinel = sentinel.to_string();
        self
    }

    /// True when the line is the end-of-session signal; it must not be parsed
    pub fn is_sentinel(&self, line: &str) -> bool {
        line == self.sentinel
    }

    pub fn collection(&self) -> &PointCollection {
        &self.collection
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    /// Parse one coordinate line, appending the point on success
    pub fn handle_line(&mut self, line: &str) -> std::result::Result<Notation, ParseError> {
        self.lines_read += 1;

        match self.chain.parse(line) {
            Ok(parsed) => {
                debug!(notation = %parsed.notation, label = parsed.point.label(), "accepted");
                let notation = parsed.notation;
                self.report.record_accepted(&parsed);
                self.collection.push(parsed.point);
                Ok(notation)
            }
            Err(e) => {
                warn!(line = %line, "{}", e);
                self.report.record_failure(self.lines_read, line, &e);
                Err(e)
            }
        }
    }

    /// Read lines until the sentinel or end of input, answering each on `output`
    pub async fn run<R, W>(mut self, input: R, output: &mut W) -> Result<(PointCollection, ParseReport)>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_line(output, SESSION_PROMPT).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            write_line(output, "Checking Input").await?;

            if self.is_sentinel(&line) {
                debug!("sentinel received, ending session");
                break;
            }

            match self.handle_line(&line) {
                Ok(_) => write_line(output, ACCEPTED_MESSAGE).await?,
                Err(_) => write_line(output, &format!("{} {}", REJECTED_MESSAGE, line)).await?,
            }
        }

        output.flush().await?;
        Ok((self.collection, self.report))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, message: &str) -> Result<()> {
    output.write_all(message.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[test]
    fn test_handle_line() {
        let mut session = Session::new();

        assert_eq!(
            session.handle_line("45.9 S, 170.5 E"),
            Ok(Notation::CompassPair)
        );
        assert!(session.handle_line("95, 10").is_err());
        assert!(session.handle_line("garbage").is_err());

        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.report().total_lines, 3);
        assert_eq!(session.report().failures[1].line_number, 3);
    }

    #[tokio::test]
    async fn test_run_stops_at_sentinel() -> Result<()> {
        let input = "40.7128, -74.0060 NYC\nnope\ndisplay\n51.5 -0.12\n";
        let mut output = Vec::new();

        let (collection, report) = Session::new()
            .run(BufReader::new(input.as_bytes()), &mut output)
            .await?;

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.points()[0].label(), "NYC");
        assert_eq!(report.no_match, 1);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with(SESSION_PROMPT));
        assert!(transcript.contains(ACCEPTED_MESSAGE));
        assert!(transcript.contains("Unable to process: nope"));
        assert!(!transcript.contains("51.5"));
        Ok(())
    }

    #[tokio::test]
    async fn test_run_ends_at_eof() -> Result<()> {
        let input = "10 N, 20 E\n";
        let mut output = Vec::new();

        let (collection, _) = Session::new()
            .with_sentinel("quit")
            .run(BufReader::new(input.as_bytes()), &mut output)
            .await?;

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.points()[0].label(), "");
        Ok(())
    }

    #[test]
    fn test_sentinel_is_exact() {
        let session = Session::new();
        assert!(session.is_sentinel("display"));
        assert!(!session.is_sentinel("Display"));
        assert!(!session.is_sentinel("display now"));
    }
}
