// Adapter constants (no magic values)
use std::time::Duration;

/// Executable looked up on PATH when no cli_path is configured
pub const DEFAULT_CLI_PATH: &str = "mf";

/// Service identifier reported by the MetricFlow adapter
pub const DEFAULT_SERVICE_TYPE: &str = "metricflow";

/// Default command timeout (5 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Grace period between SIGTERM and SIGKILL when a command times out
pub const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Leading lines (header + separator) dropped from `list-*` table output
pub const LIST_TABLE_HEADER_LINES: usize = 2;

/// Column name used for explain (dry-run) results
pub const EXPLAIN_COLUMN: &str = "sql";
