// `mf list-metrics` output

use super::{decode, string_list, stringify, table};
use crate::application::constants::LIST_TABLE_HEADER_LINES;
use crate::domain::{Metadata, MetricDefinition, MetricType};
use serde_json::Value;

/// Parse `list-metrics` output (JSON array, `{"metrics": [...]}`, or table)
///
/// Valid JSON of any other shape yields no metrics.
pub fn parse_metrics_output(output: &str) -> Vec<MetricDefinition> {
    match decode(output) {
        Some(Value::Array(items)) => items.iter().filter_map(metric_from_value).collect(),
        Some(Value::Object(obj)) => obj
            .get("metrics")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(metric_from_value).collect())
            .unwrap_or_default(),
        Some(_) => Vec::new(),
        None => parse_metrics_table(output),
    }
}

/// Map one JSON object onto a metric; non-objects are skipped
fn metric_from_value(value: &Value) -> Option<MetricDefinition> {
    let obj = value.as_object()?;

    // Non-string segments keep their position
    let path = obj
        .get("path")
        .and_then(Value::as_array)
        .map(|segments| segments.iter().map(stringify).collect());

    Some(MetricDefinition {
        name: obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        metric_type: obj
            .get("type")
            .and_then(Value::as_str)
            .and_then(MetricType::from_label),
        dimensions: string_list(obj.get("dimensions")),
        measures: string_list(obj.get("measures")),
        path,
        metadata: obj.clone(),
    })
}

/// Table form: name and description only
fn parse_metrics_table(output: &str) -> Vec<MetricDefinition> {
    table::data_rows(output, LIST_TABLE_HEADER_LINES)
        .filter_map(|cells| {
            let mut cells = cells.into_iter();
            let name = cells.next()?;
            Some(MetricDefinition {
                name,
                description: cells.next(),
                metadata: Metadata::new(),
                ..Default::default()
            })
        })
        .collect()
}

/// Keep metrics whose path starts with `prefix`.
///
/// An empty prefix keeps everything.
pub fn filter_by_path(metrics: Vec<MetricDefinition>, prefix: &[String]) -> Vec<MetricDefinition> {
    if prefix.is_empty() {
        return metrics;
    }
    metrics.into_iter().filter(|m| m.is_under(prefix)).collect()
}

/// Skip `offset` metrics, then take at most `limit`
pub fn paginate(metrics: Vec<MetricDefinition>, offset: usize, limit: usize) -> Vec<MetricDefinition> {
    metrics.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(metrics: &[MetricDefinition]) -> Vec<&str> {
        metrics.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_json_array() {
        let output = r#"[
            {"name": "revenue", "description": "Gross revenue", "type": "SIMPLE",
             "dimensions": ["metric_time", "customer__region"], "measures": ["order_total"]},
            {"name": "aov", "type": "ratio"}
        ]"#;

        let metrics = parse_metrics_output(output);

        assert_eq!(names(&metrics), vec!["revenue", "aov"]);
        assert_eq!(metrics[0].description.as_deref(), Some("Gross revenue"));
        assert_eq!(metrics[0].metric_type, Some(MetricType::Simple));
        assert_eq!(metrics[0].dimensions, vec!["metric_time", "customer__region"]);
        assert_eq!(metrics[0].measures, vec!["order_total"]);
        assert_eq!(metrics[0].metadata["measures"][0], "order_total");
        assert_eq!(metrics[1].metric_type, Some(MetricType::Ratio));
        assert!(metrics[1].dimensions.is_empty());
        assert!(metrics[1].measures.is_empty());
    }

    #[test]
    fn test_json_object_with_metrics_key() {
        let output = r#"{"metrics": [{"name": "orders", "type": "conversion"}, {"description": "no name"}]}"#;

        let metrics = parse_metrics_output(output);

        assert_eq!(names(&metrics), vec!["orders", ""]);
        assert_eq!(metrics[0].metric_type, None);
        assert_eq!(metrics[1].description.as_deref(), Some("no name"));
    }

    #[test]
    fn test_json_path_is_read() {
        let output = r#"[{"name": "revenue", "path": ["sales", "revenue"]}]"#;
        let metrics = parse_metrics_output(output);
        assert_eq!(
            metrics[0].path,
            Some(vec!["sales".to_string(), "revenue".to_string()])
        );
    }

    #[test]
    fn test_json_path_keeps_non_string_segments() {
        let output = r#"[{"name": "q1_revenue", "path": ["sales", 2024, "q1"]}]"#;
        let metrics = parse_metrics_output(output);
        assert_eq!(
            metrics[0].path,
            Some(vec!["sales".to_string(), "2024".to_string(), "q1".to_string()])
        );

        let by_year = filter_by_path(metrics.clone(), &["sales".to_string(), "q1".to_string()]);
        assert!(by_year.is_empty());
        let kept = filter_by_path(metrics, &["sales".to_string(), "2024".to_string()]);
        assert_eq!(names(&kept), vec!["q1_revenue"]);
    }

    #[test]
    fn test_other_json_shapes_yield_nothing() {
        assert!(parse_metrics_output(r#"{"items": [{"name": "x"}]}"#).is_empty());
        assert!(parse_metrics_output("42").is_empty());
        assert!(parse_metrics_output(r#"[1, "revenue", null]"#).is_empty());
    }

    #[test]
    fn test_table() {
        let output = "\
Name            Description
--------------  ------------------------
revenue         Gross revenue in USD
order_count

-------------
active_users    Distinct users per day
";

        let metrics = parse_metrics_output(output);

        assert_eq!(names(&metrics), vec!["revenue", "order_count", "active_users"]);
        assert_eq!(metrics[0].description.as_deref(), Some("Gross revenue in USD"));
        assert_eq!(metrics[1].description, None);
        assert!(metrics.iter().all(|m| m.metric_type.is_none() && m.path.is_none()));
    }

    #[test]
    fn test_table_skips_two_lines_even_without_separator() {
        let output = "Name  Description\nrevenue  first row is lost\norders  kept";
        assert_eq!(names(&parse_metrics_output(output)), vec!["orders"]);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_metrics_output("").is_empty());
        assert!(parse_metrics_output("\n\n").is_empty());
    }

    #[test]
    fn test_filter_by_path() {
        let metrics = vec![
            MetricDefinition::new("revenue").with_path(["sales", "revenue"]),
            MetricDefinition::new("ctr").with_path(["marketing"]),
            MetricDefinition::new("orders"),
        ];

        let kept = filter_by_path(metrics.clone(), &["sales".to_string()]);
        assert_eq!(names(&kept), vec!["revenue"]);

        let all = filter_by_path(metrics, &[]);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_paginate() {
        let metrics: Vec<MetricDefinition> = (0..10)
            .map(|i| MetricDefinition::new(format!("m{}", i)))
            .collect();

        assert_eq!(names(&paginate(metrics.clone(), 3, 2)), vec!["m3", "m4"]);
        assert_eq!(names(&paginate(metrics.clone(), 8, 100)), vec!["m8", "m9"]);
        assert!(paginate(metrics.clone(), 10, 5).is_empty());
        assert!(paginate(metrics, 0, 0).is_empty());
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let output = r#"{"metrics": [{"name": "a", "type": "derived"}, {"name": "b"}]}"#;
        assert_eq!(parse_metrics_output(output), parse_metrics_output(output));
    }
}
