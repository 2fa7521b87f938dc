use encoding_rs::{UTF_8, WINDOWS_1252};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::constants::SESSION_END_SENTINEL;

/// One non-blank input line and its 1-based position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub number: usize,
    pub text: String,
}

pub struct InputReader {
    sentinel: String,
}

impl InputReader {
    pub fn new() -> Self {
        Self {
            sentinel: SESSION_END_SENTINEL.to_string(),
        }
    }

    pub fn with_sentinel(sentinel: &str) -> Self {
        Self {
            sentinel: sentinel.to_string(),
        }
    }

    pub fn is_sentinel(&self, line: &str) -> bool {
        line == self.sentinel
    }

    /// Read coordinate lines from a file using memory-mapped I/O.
    ///
    /// Blank lines are skipped and a sentinel line ends input; the sentinel itself is
    /// never returned.
    pub fn read_lines(&self, path: &Path) -> Result<Vec<InputLine>> {
        let file = File::open(path)?;

        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }

        let mmap = unsafe { Mmap::map(&file)? };
        let content = decode(&mmap);

        Ok(self.collect_lines(&content))
    }

    /// Split already-decoded text into coordinate lines
    pub fn collect_lines(&self, content: &str) -> Vec<InputLine> {
        let mut lines = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if self.is_sentinel(line) {
                debug!(line_number = index + 1, "sentinel reached, ignoring remaining input");
                break;
            }

            if line.trim().is_empty() {
                continue;
            }

            lines.push(InputLine {
                number: index + 1,
                text: line.to_string(),
            });
        }

        lines
    }
}

impl Default for InputReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode as UTF-8 (honouring a BOM), falling back to Windows-1252 so a Latin-1
/// degree sign (0xB0) still reads as `°`
fn decode(bytes: &[u8]) -> String {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);

    if !had_errors {
        debug!(encoding = encoding.name(), "decoded input");
        return text.into_owned();
    }

    warn!("Input is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}
