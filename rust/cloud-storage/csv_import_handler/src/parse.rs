//! Parsing of comma separated objects into [RowRecord]s

use crate::error::ImportError;

/// One data line of the object, zipped with the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    line: u64,
    fields: Vec<(String, String)>,
}

impl RowRecord {
    /// The 1-based line of the object this row starts on
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Gets the value of a column. If the header repeats the column, the last one wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// The header and every data row of an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedObject {
    pub headers: Vec<String>,
    pub rows: Vec<RowRecord>,
}

impl ParsedObject {
    /// Fails with the first of `columns` the header does not name
    pub fn require_columns(&self, columns: &[&'static str]) -> Result<(), ImportError> {
        for column in columns {
            if !self.headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn { column: *column });
            }
        }

        Ok(())
    }
}

/// Decodes the object as utf-8 and parses it as csv with a header line.
///
/// Every row must have exactly as many fields as the header. The first row that does not
/// fails the whole object, so nothing is written for a malformed file.
#[tracing::instrument(skip(bytes), fields(size = bytes.len()))]
pub fn parse_object(bytes: &[u8]) -> Result<ParsedObject, ImportError> {
    let text = std::str::from_utf8(bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let parse_error = |source: csv::Error| ImportError::Parse {
        line: source.position().map(|p| line_at(text, p.byte())),
        source,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_error)?;
        let line = record
            .position()
            .map(|p| line_at(text, p.byte()))
            .unwrap_or_default();

        rows.push(RowRecord {
            line,
            fields: headers
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        });
    }

    Ok(ParsedObject { headers, rows })
}

/// The 1-based line of the first record starting at or after `byte`.
/// The csv line counter treats `\r\n` as two terminators, so the line is counted from the text.
fn line_at(text: &str, byte: u64) -> u64 {
    let start = usize::try_from(byte).unwrap_or(text.len()).min(text.len());
    let start = text[start..]
        .find(|c| c != '\r' && c != '\n')
        .map_or(text.len(), |offset| start + offset);

    text.as_bytes()[..start].iter().filter(|b| **b == b'\n').count() as u64 + 1
}
