// Request Models

use super::query::TimeRange;
use serde::{Deserialize, Serialize};

/// Default page size for metric listings
pub const DEFAULT_LIST_LIMIT: usize = 100;

fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

/// List metrics request
///
/// Filtering and paging happen after the tool output is parsed; `mf` itself
/// only ever sees `list-metrics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMetricsRequest {
    /// Subject area prefix; `None` or empty disables filtering
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for ListMetricsRequest {
    fn default() -> Self {
        Self {
            path: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// Metric query request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub metrics: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Accepted for interface parity with other semantic layers; not sent to `mf`
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// Filter expression, passed through verbatim
    #[serde(default, rename = "where")]
    pub where_clause: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub order_by: Vec<String>,
    #[serde(default)]
    pub dry_run: bool,
}

impl QueryRequest {
    pub fn new<I, S>(metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            metrics: metrics.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn group_by<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    pub fn filter(mut self, where_clause: impl Into<String>) -> Self {
        self.where_clause = Some(where_clause.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn explain(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_request_defaults_from_json() {
        let req: ListMetricsRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, ListMetricsRequest::default());
        assert_eq!(req.limit, 100);
    }

    #[test]
    fn test_query_request_where_field_name() {
        let req: QueryRequest = serde_json::from_value(json!({
            "metrics": ["revenue"],
            "where": "{{ Dimension('order__region') }} = 'EU'"
        }))
        .unwrap();

        assert_eq!(req.metrics, vec!["revenue"]);
        assert_eq!(
            req.where_clause.as_deref(),
            Some("{{ Dimension('order__region') }} = 'EU'")
        );
        assert!(!req.dry_run);
    }
}
