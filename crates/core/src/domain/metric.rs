// Metric Domain Model

use serde::{Deserialize, Serialize};

/// Free-form metadata attached to parsed results
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Metric Type (as reported by `mf list-metrics`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Simple,
    Ratio,
    Cumulative,
    Derived,
}

impl MetricType {
    /// Case-insensitive lookup; `None` for unknown labels
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "simple" => Some(MetricType::Simple),
            "ratio" => Some(MetricType::Ratio),
            "cumulative" => Some(MetricType::Cumulative),
            "derived" => Some(MetricType::Derived),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Simple => "simple",
            MetricType::Ratio => "ratio",
            MetricType::Cumulative => "cumulative",
            MetricType::Derived => "derived",
        }
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metric definition as listed by the semantic layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub metric_type: Option<MetricType>,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub measures: Vec<String>,
    /// Subject area path, outermost segment first
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl MetricDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = Some(path.into_iter().map(Into::into).collect());
        self
    }

    /// True if this metric's path starts with every segment of `prefix`.
    ///
    /// A metric without a path never matches.
    pub fn is_under(&self, prefix: &[String]) -> bool {
        match &self.path {
            Some(path) => path.len() >= prefix.len() && path[..prefix.len()] == *prefix,
            None => false,
        }
    }
}
