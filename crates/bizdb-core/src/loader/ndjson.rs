// crates/bizdb-core/src/loader/ndjson.rs

//! Payload parsing for the two dataset shapes: a whole-document JSON array
//! and newline-delimited JSON.

use crate::error::Result;
use crate::raw::{BusinessRaw, BusinessesRaw};
use std::io::Read;
use tracing::warn;

/// Outcome of a source parse: how many records parsed, how many lines were
/// skipped as malformed. For a well-formed source,
/// `parsed == total lines − skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub parsed: usize,
    pub skipped: usize,
}

/// Reads raw business records from `reader`.
///
/// The first non-whitespace byte decides the shape: `[` means a
/// whole-document JSON array, anything else is parsed line-by-line as
/// newline-delimited JSON.
///
/// A malformed NDJSON line is skipped and logged, never fatal. A malformed
/// whole-document array *is* fatal since nothing can be salvaged from it.
pub fn read_records<R: Read>(mut reader: R) -> Result<(BusinessesRaw, LoadReport)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        let records: BusinessesRaw = serde_json::from_str(trimmed)?;
        let report = LoadReport {
            parsed: records.len(),
            skipped: 0,
        };
        return Ok((records, report));
    }

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<BusinessRaw>(line) {
            Ok(record) => {
                report.parsed += 1;
                records.push(record);
            }
            Err(err) => {
                report.skipped += 1;
                warn!(line = lineno + 1, %err, "skipping malformed dataset line");
            }
        }
    }

    Ok((records, report))
}
