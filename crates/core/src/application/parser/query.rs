// `mf query` output

use super::{decode, stringify, table};
use crate::application::constants::EXPLAIN_COLUMN;
use crate::domain::{Metadata, QueryResult};
use serde_json::Value;

/// Parse query output.
///
/// With `dry_run` the raw text is the generated SQL and is returned verbatim
/// as a single cell, even if it happens to be valid JSON.
pub fn parse_query_result(output: &str, dry_run: bool) -> QueryResult {
    if dry_run {
        return explain_result(output);
    }

    if let Some(Value::Object(obj)) = decode(output) {
        if let (Some(columns), Some(data)) = (obj.get("columns"), obj.get("data")) {
            return QueryResult {
                columns: columns
                    .as_array()
                    .map(|cols| cols.iter().map(stringify).collect())
                    .unwrap_or_default(),
                data: data
                    .as_array()
                    .map(|rows| rows.iter().map(row_values).collect())
                    .unwrap_or_default(),
                metadata: obj
                    .get("metadata")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default(),
            };
        }
    }

    parse_query_table(output)
}

fn explain_result(output: &str) -> QueryResult {
    let mut metadata = Metadata::new();
    metadata.insert("explain".to_string(), Value::Bool(true));
    metadata.insert("sql".to_string(), Value::String(output.to_string()));

    QueryResult {
        columns: vec![EXPLAIN_COLUMN.to_string()],
        data: vec![vec![Value::String(output.to_string())]],
        metadata,
    }
}

/// A JSON row; a bare scalar becomes a one-cell row
fn row_values(row: &Value) -> Vec<Value> {
    match row {
        Value::Array(cells) => cells.clone(),
        other => vec![other.clone()],
    }
}

/// Header line, one separator line (always dropped), then data lines
fn parse_query_table(output: &str) -> QueryResult {
    let lines = table::lines(output);
    if lines.len() < 2 {
        return QueryResult::empty();
    }

    let columns = table::split_columns(lines[0]);
    let data = lines[2..]
        .iter()
        .filter(|line| table::is_data_line(line))
        .map(|line| {
            table::split_columns(line)
                .into_iter()
                .map(Value::String)
                .collect()
        })
        .collect();

    QueryResult {
        columns,
        data,
        metadata: Metadata::new(),
    }
}
