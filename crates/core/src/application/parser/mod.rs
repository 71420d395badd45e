// Output Parsers
//
// `mf` answers either with a JSON document or with a column-aligned text
// table. Every parser tries JSON first and falls back to the table tokenizer
// when the output does not decode. Parsing never fails: malformed input
// degrades to whatever tokens can be recovered.

pub mod dimensions;
pub mod metrics;
pub mod query;
pub mod table;
pub mod validation;

pub use dimensions::parse_dimensions_output;
pub use metrics::{filter_by_path, paginate, parse_metrics_output};
pub use query::parse_query_result;
pub use validation::parse_validation_errors;

use serde_json::Value;

/// Decode `output` as JSON, or `None` if it is not a JSON document
fn decode(output: &str) -> Option<Value> {
    serde_json::from_str(output).ok()
}

/// Render a JSON scalar as plain text (strings unquoted)
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(stringify).collect())
        .unwrap_or_default()
}
