//! Human and JSON rendering of adapter results

use anyhow::Result;
use colored::Colorize;
use metricflow_core::domain::{MetricDefinition, QueryResult, Severity, ValidationResult};
use serde::Serialize;
use serde_json::Value;
use tabled::{builder::Builder, Table, Tabled};

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    metric_type: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Dimensions")]
    dimensions: String,
}

impl From<&MetricDefinition> for MetricRow {
    fn from(metric: &MetricDefinition) -> Self {
        Self {
            name: metric.name.clone(),
            metric_type: metric
                .metric_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            description: metric.description.clone().unwrap_or_default(),
            dimensions: metric.dimensions.join(", "),
        }
    }
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Message")]
    message: String,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_metrics(metrics: &[MetricDefinition]) {
    if metrics.is_empty() {
        println!("{}", "No metrics found".yellow());
        return;
    }

    let rows: Vec<MetricRow> = metrics.iter().map(MetricRow::from).collect();
    println!("{}", Table::new(rows));
    println!("{}", format!("{} metric(s)", metrics.len()).dimmed());
}

pub fn print_dimensions(metric: &str, dimensions: &[String]) {
    println!("{}", format!("Dimensions for {}:", metric).cyan().bold());
    if dimensions.is_empty() {
        println!("{}", "  (none)".yellow());
    }
    for dimension in dimensions {
        println!("  {}", dimension);
    }
}

pub fn print_query_result(result: &QueryResult) {
    if result.is_explain() {
        println!("{}", "Generated SQL:".cyan().bold());
        let sql = result
            .metadata
            .get("sql")
            .and_then(Value::as_str)
            .unwrap_or_default();
        println!("{}", sql);
        return;
    }

    if result.is_empty() {
        println!("{}", "Query returned no output".yellow());
        return;
    }

    println!("{}", render_table(result));
    println!("{}", format!("{} row(s)", result.row_count()).dimmed());
}

pub fn print_validation(result: &ValidationResult) {
    if result.valid {
        println!("{}", "✓ MetricFlow configuration is valid".green().bold());
        return;
    }

    println!(
        "{}",
        format!(
            "✗ MetricFlow configuration is invalid ({} error(s), {} warning(s))",
            result.count(Severity::Error),
            result.count(Severity::Warning)
        )
        .red()
        .bold()
    );

    if !result.issues.is_empty() {
        let rows: Vec<IssueRow> = result
            .issues
            .iter()
            .map(|issue| IssueRow {
                severity: severity_label(issue.severity),
                message: issue.message.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Error => severity.as_str().red().to_string(),
        Severity::Warning => severity.as_str().yellow().to_string(),
        Severity::Info => severity.as_str().blue().to_string(),
    }
}

/// Query result as a text table; ragged rows are padded with empty cells
fn render_table(result: &QueryResult) -> String {
    let width = result
        .data
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(result.columns.len()))
        .max()
        .unwrap_or(0);

    let mut builder = Builder::default();
    builder.push_record(pad(result.columns.clone(), width));
    for row in &result.data {
        builder.push_record(pad(row.iter().map(cell_text).collect(), width));
    }

    builder.build().to_string()
}

fn pad(mut cells: Vec<String>, width: usize) -> Vec<String> {
    cells.resize(width, String::new());
    cells
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_table_pads_ragged_rows() {
        let result = QueryResult {
            columns: vec!["metric_time".to_string(), "revenue".to_string()],
            data: vec![
                vec![json!("2024-01-01"), json!(12.5)],
                vec![json!("2024-01-02")],
            ],
            ..Default::default()
        };

        let table = render_table(&result);

        assert!(table.contains("metric_time"));
        assert!(table.contains("12.5"));
        assert!(table.contains("2024-01-02"));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("EMEA")), "EMEA");
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(3)), "3");
    }

    #[test]
    fn test_metric_row() {
        let mut metric = MetricDefinition::new("revenue").with_description("Gross revenue");
        metric.dimensions = vec!["metric_time".to_string(), "region".to_string()];

        let row = MetricRow::from(&metric);
        assert_eq!(row.metric_type, "");
        assert_eq!(row.dimensions, "metric_time, region");
    }
}
