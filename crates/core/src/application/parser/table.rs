// Column-aligned text table tokenizer

use regex::Regex;
use std::sync::LazyLock;

/// Columns are separated by two or more whitespace characters; a single
/// space belongs to the cell.
static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("column gap pattern is valid"));

/// Trimmed output split into lines
///
/// Blank output yields a single empty line, so callers can rely on
/// `lines.len() >= 1`.
pub fn lines(output: &str) -> Vec<&str> {
    output.trim().split('\n').collect()
}

/// Split one table line into cells
pub fn split_columns(line: &str) -> Vec<String> {
    COLUMN_GAP
        .split(line.trim())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// True for lines carrying cells: non-blank and not a dashed rule
pub fn is_data_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('-')
}

/// Data lines after skipping the first `skip` lines
pub fn data_rows(output: &str, skip: usize) -> impl Iterator<Item = Vec<String>> + '_ {
    lines(output)
        .into_iter()
        .skip(skip)
        .filter(|line| is_data_line(line))
        .map(split_columns)
}
