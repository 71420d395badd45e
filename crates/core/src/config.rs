// Adapter Configuration

use crate::application::constants::{DEFAULT_CLI_PATH, DEFAULT_SERVICE_TYPE, DEFAULT_TIMEOUT_SECS};
use crate::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

fn default_service_type() -> String {
    DEFAULT_SERVICE_TYPE.to_string()
}

fn default_cli_path() -> String {
    DEFAULT_CLI_PATH.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// MetricFlow adapter configuration
///
/// Unknown keys are kept in `extra` so that callers can thread their own
/// settings through the same document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricFlowConfig {
    pub namespace: String,

    #[serde(default = "default_service_type")]
    pub service_type: String,

    /// Path to the MetricFlow CLI executable
    #[serde(default = "default_cli_path")]
    pub cli_path: String,

    /// Root directory of the MetricFlow project
    #[serde(default)]
    pub project_root: Option<String>,

    /// Environment name (if using profiles)
    #[serde(default)]
    pub environment: Option<String>,

    /// Command timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MetricFlowConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            service_type: default_service_type(),
            cli_path: default_cli_path(),
            project_root: None,
            environment: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            extra: HashMap::new(),
        }
    }

    pub fn with_cli_path(mut self, cli_path: impl Into<String>) -> Self {
        self.cli_path = cli_path.into();
        self
    }

    pub fn with_project_root(mut self, project_root: impl Into<String>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = timeout_secs;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cli_path.trim().is_empty() {
            return Err(AdapterError::Config("cli_path cannot be empty".to_string()));
        }
        if self.timeout == 0 {
            return Err(AdapterError::Config(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}
