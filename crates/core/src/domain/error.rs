// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid time granularity: {0} (expected hour, day, week, month, quarter or year)")]
    InvalidGranularity(String),
}
