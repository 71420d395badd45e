// Domain Layer - Value objects exchanged with the semantic layer

pub mod error;
pub mod metric;
pub mod query;
pub mod request;
pub mod validation;

// Re-exports
pub use error::DomainError;
pub use metric::{Metadata, MetricDefinition, MetricType};
pub use query::{Granularity, QueryResult, TimeRange};
pub use request::{ListMetricsRequest, QueryRequest, DEFAULT_LIST_LIMIT};
pub use validation::{Severity, ValidationIssue, ValidationResult};
