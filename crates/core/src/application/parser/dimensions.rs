// `mf list-dimensions` output

use super::{decode, string_list, table};
use crate::application::constants::LIST_TABLE_HEADER_LINES;
use serde_json::Value;

/// Parse `list-dimensions` output (JSON array, `{"dimensions": [...]}`, or table)
pub fn parse_dimensions_output(output: &str) -> Vec<String> {
    match decode(output) {
        Some(value @ Value::Array(_)) => string_list(Some(&value)),
        Some(Value::Object(obj)) => string_list(obj.get("dimensions")),
        Some(_) => Vec::new(),
        None => table::data_rows(output, LIST_TABLE_HEADER_LINES)
            .filter_map(|cells| cells.into_iter().next())
            .collect(),
    }
}
