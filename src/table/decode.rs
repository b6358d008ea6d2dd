use super::ResultTable;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n)+").expect("line break pattern is valid"));
static FIELD_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+").expect("field break pattern is valid"));

/// Decodes a tab-delimited response body.
///
/// Lines are split on runs of newlines and fields on runs of tabs. The first
/// line names the columns. The service terminates every line, so the segment
/// after the last newline is normally empty and is dropped; when the body is
/// not newline-terminated the last line is kept rather than lost.
///
/// Fails with [`Error::ResponseFormat`] on an empty body, an empty header,
/// repeated column names, or a row whose field count differs from the header.
pub fn decode(body: &str) -> Result<ResultTable> {
    let mut lines: Vec<&str> = LINE_BREAKS
        .split(body)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    } else if let Some(last) = lines.last() {
        warn!(
            "Response body is not newline-terminated, keeping final line ({} bytes)",
            last.len()
        );
    }

    let Some((header, data)) = lines.split_first() else {
        return Err(Error::response_format("empty response body"));
    };
    if header.is_empty() {
        return Err(Error::response_format("missing header line"));
    }

    let columns = split_fields(header);
    let rows = data.iter().map(|line| split_fields(line)).collect();
    let table = ResultTable::new(columns, rows)?;

    debug!(
        "Decoded table with {} columns and {} rows",
        table.columns().len(),
        table.len()
    );
    Ok(table)
}

fn split_fields(line: &str) -> Vec<String> {
    FIELD_BREAKS.split(line).map(str::to_string).collect()
}
