//! Quote-aware CSV parsing for archive exports.
//!
//! The format is deliberately loose: the first non-blank line is the header,
//! rows are matched to headers by position, short rows are padded with empty
//! strings and surplus fields are ignored.

use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{DatasetError, DatasetResult};
use crate::models::RawRecord;

/// Parsed CSV content: the header row plus one record per data row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

/// Split one CSV line into fields.
///
/// A comma is a separator only when it is followed by an even number of
/// double quotes up to the end of the line. One leading and one trailing quote
/// are stripped from each field and `""` collapses to `"`.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let total_quotes = line.bytes().filter(|&b| b == b'"').count();
    let mut seen_quotes = 0;
    let mut fields = Vec::new();
    let mut start = 0;

    for (i, b) in line.bytes().enumerate() {
        match b {
            b'"' => seen_quotes += 1,
            b',' if (total_quotes - seen_quotes) % 2 == 0 => {
                fields.push(clean_field(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));
    fields
}

fn clean_field(raw: &str) -> String {
    let stripped = raw.strip_prefix('"').unwrap_or(raw);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.replace("\"\"", "\"")
}

/// Parse CSV text into a header row and records.
pub fn parse_csv_table(text: &str) -> CsvTable {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return CsvTable::default();
    };
    let headers = split_csv_line(header_line);

    let records = lines
        .map(|line| {
            let mut cols = split_csv_line(line).into_iter();
            headers
                .iter()
                .map(|h| (h.clone(), cols.next().unwrap_or_default()))
                .collect::<RawRecord>()
        })
        .collect();

    CsvTable { headers, records }
}

/// Parse CSV text into records, discarding the header row.
pub fn parse_csv(text: &str) -> Vec<RawRecord> {
    parse_csv_table(text).records
}

/// Read and parse a CSV file.
///
/// A missing file is reported as [`DatasetError::NotFound`] so callers can
/// distinguish it from other I/O failures.
pub fn read_csv_file(path: &Path) -> DatasetResult<(String, CsvTable)> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            DatasetError::NotFound {
                searched: vec![path.to_path_buf()],
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let table = parse_csv_table(&content);
    debug!(
        "Parsed {} rows ({} columns) from {}",
        table.records.len(),
        table.headers.len(),
        path.display()
    );
    Ok((content, table))
}
