// Central Error Type for the Adapter

use thiserror::Error;

/// Adapter-level error type
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error(transparent)]
    Execution(#[from] crate::port::ExecutionError),

    /// Non-zero exit from an operation that must succeed
    #[error("{context}: {stderr}")]
    CommandFailed {
        context: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdapterError {
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            AdapterError::Execution(crate::port::ExecutionError::Timeout(_))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AdapterError::Execution(crate::port::ExecutionError::NotFound(_))
        )
    }
}

/// Result type alias using AdapterError
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::ExecutionError;
    use std::time::Duration;

    #[test]
    fn test_execution_errors_convert_and_classify() {
        let timeout: AdapterError = ExecutionError::Timeout(Duration::from_secs(3)).into();
        assert!(timeout.is_timeout());
        assert!(!timeout.is_not_found());

        let missing: AdapterError = ExecutionError::NotFound("mf".to_string()).into();
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "MetricFlow CLI not found at: mf");
    }

    #[test]
    fn test_command_failed_message() {
        let err = AdapterError::CommandFailed {
            context: "Query failed".to_string(),
            exit_code: 1,
            stderr: "unknown metric".to_string(),
        };
        assert_eq!(err.to_string(), "Query failed: unknown metric");
        assert!(!err.is_timeout());
    }
}
