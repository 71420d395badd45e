// Semantic Adapter Port
// Uniform interface over semantic-layer backends

use crate::domain::{
    ListMetricsRequest, MetricDefinition, QueryRequest, QueryResult, ValidationResult,
};
use crate::error::Result;
use async_trait::async_trait;

/// Semantic layer adapter
///
/// Implementations:
/// - MetricFlowAdapter: shells out to the `mf` CLI
#[async_trait]
pub trait SemanticAdapter: Send + Sync {
    /// Backend identifier (e.g. "metricflow")
    fn service_type(&self) -> &str;

    /// Look up the semantic model behind a physical table.
    ///
    /// Backends that keep their models internal return `None`.
    fn get_semantic_model(
        &self,
        table_name: &str,
        catalog: Option<&str>,
        database: Option<&str>,
        schema: Option<&str>,
    ) -> Option<serde_json::Value>;

    /// Names of semantic models visible in the given scope
    fn list_semantic_models(
        &self,
        catalog: Option<&str>,
        database: Option<&str>,
        schema: Option<&str>,
    ) -> Vec<String>;

    /// List metrics, filtered by subject area and paged
    async fn list_metrics(&self, req: ListMetricsRequest) -> Result<Vec<MetricDefinition>>;

    /// Dimensions available for one metric
    async fn get_dimensions(
        &self,
        metric_name: &str,
        path: Option<&[String]>,
    ) -> Result<Vec<String>>;

    /// Run (or explain) a metric query
    async fn query_metrics(&self, req: QueryRequest) -> Result<QueryResult>;

    /// Validate the semantic layer configuration
    ///
    /// An invalid configuration is a normal result, not an error.
    async fn validate_semantic(&self) -> Result<ValidationResult>;
}
