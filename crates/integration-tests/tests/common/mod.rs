//! Fake `mf` executable for end-to-end tests
//!
//! Each fake is a small `sh` script in its own temp directory. It records its
//! argv (one token per line) to `args.txt` next to itself, then runs `body`.

#![allow(dead_code)]

use metricflow_core::port::SemanticAdapter;
use metricflow_core::{MetricFlowAdapter, MetricFlowConfig};
use metricflow_infra_system::SubprocessRunner;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub struct FakeMf {
    dir: TempDir,
    path: PathBuf,
}

impl FakeMf {
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("mf");
        let args_file = dir.path().join("args.txt");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{}\n",
            args_file.display(),
            body
        );
        std::fs::write(&path, script).expect("write fake mf");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake mf");

        Self { dir, path }
    }

    /// Fake that prints `stdout` verbatim and exits 0
    pub fn printing(stdout: &str) -> Self {
        Self::new(&format!("cat <<'MF_EOF'\n{}\nMF_EOF", stdout))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Arguments of the last invocation
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("args.txt"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn config(&self, namespace: &str) -> MetricFlowConfig {
        MetricFlowConfig::new(namespace).with_cli_path(self.path.display().to_string())
    }

    pub fn adapter(&self, config: MetricFlowConfig) -> MetricFlowAdapter {
        let runner = SubprocessRunner::with_grace_period(Duration::from_millis(200));
        MetricFlowAdapter::new(config, Arc::new(runner)).expect("valid config")
    }
}

/// Boxed trait object, the way callers hold the adapter
pub fn as_semantic_adapter(adapter: MetricFlowAdapter) -> Arc<dyn SemanticAdapter> {
    Arc::new(adapter)
}
