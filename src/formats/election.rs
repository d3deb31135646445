use std::io::Read;

use csv::ReaderBuilder;

use super::FormatError;
use crate::domain::{VoteResults, VoteTuple};

/// Parse an election results CSV into a vote lookup table.
///
/// The first line is a header and is discarded unconditionally. Each data
/// row carries at least four fields: region name, then Republican, Democrat
/// and Other counts. The name field is stored verbatim, whitespace included:
/// geography names must match it byte-for-byte or the lookup misses. A name
/// appearing twice keeps the later row's counts.
pub fn parse_election_results<R: Read>(reader: R) -> Result<VoteResults, FormatError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut results = VoteResults::new();
    for (idx, record) in csv_reader.records().enumerate() {
        // 1-based file line, accounting for the header
        let line = idx + 2;
        let record = record.map_err(|source| FormatError::Csv { line, source })?;

        let name = field(&record, 0, "region name", line)?;
        let republican = parse_count(field(&record, 1, "Republican votes", line)?, line)?;
        let democrat = parse_count(field(&record, 2, "Democrat votes", line)?, line)?;
        let other = parse_count(field(&record, 3, "Other votes", line)?, line)?;

        results.insert(name.to_string(), VoteTuple::new(republican, democrat, other));
    }
    Ok(results)
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    expected: &'static str,
    line: usize,
) -> Result<&'r str, FormatError> {
    record
        .get(index)
        .ok_or(FormatError::Truncated { line, expected })
}

fn parse_count(raw: &str, line: usize) -> Result<u64, FormatError> {
    raw.parse().map_err(|_| FormatError::Malformed {
        line,
        expected: "integer vote count",
        found: raw.to_string(),
    })
}
