// Query Domain Model

use super::error::DomainError;
use super::metric::Metadata;
use serde::{Deserialize, Serialize};

/// Time bucketing resolution for time-series queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Granularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            "year" => Ok(Granularity::Year),
            other => Err(DomainError::InvalidGranularity(other.to_string())),
        }
    }
}

/// Time window for a query.
///
/// `start` and `end` are passed to the tool untouched (ISO-8601 or
/// natural language, whatever `mf` accepts).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<String>,
    pub end: Option<String>,
    pub granularity: Option<Granularity>,
}

impl TimeRange {
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            granularity: None,
        }
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }
}

/// Tabular query result
///
/// Rows are aligned positionally with `columns`, but ragged rows coming from
/// the tool are kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub data: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.data.is_empty()
    }

    /// True when the result carries generated SQL instead of data
    pub fn is_explain(&self) -> bool {
        self.metadata
            .get("explain")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_parse() {
        assert_eq!("Week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!("quarter".parse::<Granularity>().unwrap(), Granularity::Quarter);

        let err = "fortnight".parse::<Granularity>().unwrap_err();
        assert!(err.to_string().contains("fortnight"));
    }

    #[test]
    fn test_empty_result() {
        let result = QueryResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.row_count(), 0);
        assert!(!result.is_explain());
    }
}
