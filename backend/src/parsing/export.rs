//! CSV export of flat records.
//!
//! Intended for homogeneous rows such as a synthetic cohort: the header line
//! is taken from the first row's keys.

use crate::models::FlatRecord;

/// Quote a value when it contains a comma, a double quote or a newline.
pub fn escape_csv_value(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize rows to CSV text with `\n` line endings and no trailing newline.
///
/// Values are looked up by header name, so later rows may list their columns
/// in a different order; missing columns export as empty strings.
pub fn to_csv(rows: &[FlatRecord]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.iter().map(|(k, _)| k.as_str()).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let line = headers
            .iter()
            .map(|h| {
                let value = row
                    .iter()
                    .find(|(k, _)| k.as_str() == *h)
                    .map(|(_, v)| v.as_str())
                    .unwrap_or("");
                escape_csv_value(value)
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }
    lines.join("\n")
}
