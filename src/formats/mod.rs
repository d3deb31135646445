use std::io::BufRead;

use thiserror::Error;

pub mod election;
pub mod geography;

pub use election::parse_election_results;
pub use geography::parse_geography;

/// Errors produced while parsing the geography or election input files.
///
/// Every variant carries a 1-based line number so a malformed file aborts
/// the run with a diagnostic pointing at the offending line.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("read failed at line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unexpected end of input, expected {expected}")]
    Truncated { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

/// Positional reader over a line-oriented source.
///
/// Tracks the current 1-based line number and turns truncation or a
/// non-numeric field into a single located [`FormatError`] instead of
/// failing somewhere mid-parse.
pub struct LineCursor<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// Line number of the most recently consumed line
    pub fn line(&self) -> usize {
        self.line
    }

    /// Consume the next line, without its trailing newline.
    ///
    /// `expected` names the content this line was supposed to hold; it only
    /// shows up in the error when the input ends early.
    pub fn read_line(&mut self, expected: &'static str) -> Result<String, FormatError> {
        self.line += 1;
        let mut buf = String::new();
        let bytes = self
            .reader
            .read_line(&mut buf)
            .map_err(|source| FormatError::Io {
                line: self.line,
                source,
            })?;
        if bytes == 0 {
            return Err(FormatError::Truncated {
                line: self.line,
                expected,
            });
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    /// Consume a line holding a single non-negative integer
    pub fn read_count(&mut self, expected: &'static str) -> Result<usize, FormatError> {
        let raw = self.read_line(expected)?;
        raw.trim().parse().map_err(|_| FormatError::Malformed {
            line: self.line,
            expected,
            found: raw.trim().to_string(),
        })
    }

    /// Consume a line holding two whitespace-separated floats
    pub fn read_pair(&mut self, expected: &'static str) -> Result<(f64, f64), FormatError> {
        let raw = self.read_line(expected)?;
        let mut fields = raw.split_whitespace();
        let x = self.parse_float(fields.next(), expected, &raw)?;
        let y = self.parse_float(fields.next(), expected, &raw)?;
        Ok((x, y))
    }

    fn parse_float(
        &self,
        field: Option<&str>,
        expected: &'static str,
        raw: &str,
    ) -> Result<f64, FormatError> {
        field
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| FormatError::Malformed {
                line: self.line,
                expected,
                found: raw.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cursor_tracks_line_numbers() {
        let mut cursor = LineCursor::new(Cursor::new("first\n42\n1.5 -2.5\n"));
        assert_eq!(cursor.read_line("header").unwrap(), "first");
        assert_eq!(cursor.read_count("count").unwrap(), 42);
        assert_eq!(cursor.read_pair("coordinates").unwrap(), (1.5, -2.5));
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_cursor_truncation_is_located() {
        let mut cursor = LineCursor::new(Cursor::new("only\n"));
        cursor.read_line("header").unwrap();
        let err = cursor.read_line("region name").unwrap_err();
        match err {
            FormatError::Truncated { line, expected } => {
                assert_eq!(line, 2);
                assert_eq!(expected, "region name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cursor_rejects_non_numeric_pair() {
        let mut cursor = LineCursor::new(Cursor::new("abc def\n"));
        let err = cursor.read_pair("coordinates").unwrap_err();
        assert!(matches!(err, FormatError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_cursor_strips_crlf() {
        let mut cursor = LineCursor::new(Cursor::new("Fairfield County\r\n"));
        assert_eq!(cursor.read_line("name").unwrap(), "Fairfield County");
    }
}
