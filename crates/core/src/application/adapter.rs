// MetricFlow Adapter - use cases over the `mf` CLI

use crate::application::command::{CommandBuilder, MfCommand};
use crate::application::parser::{
    filter_by_path, paginate, parse_dimensions_output, parse_metrics_output, parse_query_result,
    parse_validation_errors,
};
use crate::config::MetricFlowConfig;
use crate::domain::{
    ListMetricsRequest, MetricDefinition, QueryRequest, QueryResult, ValidationResult,
};
use crate::error::{AdapterError, Result};
use crate::port::{CommandOutput, CommandRunner, SemanticAdapter};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// MetricFlow semantic layer adapter
///
/// Every call spawns one `mf` process through the injected runner; the
/// adapter holds no mutable state and can be shared across tasks.
pub struct MetricFlowAdapter {
    config: MetricFlowConfig,
    runner: Arc<dyn CommandRunner>,
}

impl MetricFlowAdapter {
    pub fn new(config: MetricFlowConfig, runner: Arc<dyn CommandRunner>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, runner })
    }

    pub fn config(&self) -> &MetricFlowConfig {
        &self.config
    }

    fn commands(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(&self.config)
    }

    async fn run(&self, cmd: MfCommand) -> Result<CommandOutput> {
        debug!(command = %cmd, timeout_secs = self.config.timeout, "Running MetricFlow command");

        let output = self
            .runner
            .run(&cmd.program, &cmd.args, self.config.timeout_duration())
            .await?;

        if !output.success() {
            warn!(
                exit_code = output.exit_code,
                stderr = %output.stderr.trim(),
                "MetricFlow command exited with non-zero status"
            );
        }

        Ok(output)
    }

    /// Run a command whose non-zero exit is a hard failure
    async fn run_checked(&self, cmd: MfCommand, context: impl Into<String>) -> Result<CommandOutput> {
        let output = self.run(cmd).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(AdapterError::CommandFailed {
                context: context.into(),
                exit_code: output.exit_code,
                stderr: output.stderr,
            })
        }
    }
}

#[async_trait]
impl SemanticAdapter for MetricFlowAdapter {
    fn service_type(&self) -> &str {
        &self.config.service_type
    }

    /// MetricFlow does not expose semantic models directly
    fn get_semantic_model(
        &self,
        _table_name: &str,
        _catalog: Option<&str>,
        _database: Option<&str>,
        _schema: Option<&str>,
    ) -> Option<serde_json::Value> {
        None
    }

    /// MetricFlow keeps its semantic models internal
    fn list_semantic_models(
        &self,
        _catalog: Option<&str>,
        _database: Option<&str>,
        _schema: Option<&str>,
    ) -> Vec<String> {
        Vec::new()
    }

    async fn list_metrics(&self, req: ListMetricsRequest) -> Result<Vec<MetricDefinition>> {
        let output = self
            .run_checked(self.commands().list_metrics(), "Failed to list metrics")
            .await?;

        let mut metrics = parse_metrics_output(&output.stdout);
        let parsed = metrics.len();

        if let Some(path) = &req.path {
            metrics = filter_by_path(metrics, path);
        }
        let metrics = paginate(metrics, req.offset, req.limit);

        info!(
            parsed,
            returned = metrics.len(),
            offset = req.offset,
            limit = req.limit,
            "Listed metrics"
        );

        Ok(metrics)
    }

    async fn get_dimensions(
        &self,
        metric_name: &str,
        _path: Option<&[String]>,
    ) -> Result<Vec<String>> {
        let output = self
            .run_checked(
                self.commands().list_dimensions(metric_name),
                format!("Failed to get dimensions for {}", metric_name),
            )
            .await?;

        let dimensions = parse_dimensions_output(&output.stdout);
        info!(metric = %metric_name, count = dimensions.len(), "Listed dimensions");

        Ok(dimensions)
    }

    async fn query_metrics(&self, req: QueryRequest) -> Result<QueryResult> {
        let output = self
            .run_checked(self.commands().query(&req), "Query failed")
            .await?;

        let result = parse_query_result(&output.stdout, req.dry_run);
        info!(
            metrics = ?req.metrics,
            dry_run = req.dry_run,
            columns = result.columns.len(),
            rows = result.row_count(),
            duration_ms = output.duration_ms,
            "Query completed"
        );

        Ok(result)
    }

    async fn validate_semantic(&self) -> Result<ValidationResult> {
        let output = self.run(self.commands().validate_configs()).await?;

        if output.success() {
            info!("MetricFlow configuration is valid");
            return Ok(ValidationResult::valid());
        }

        let issues = parse_validation_errors(&output.stderr);
        info!(issues = issues.len(), "MetricFlow configuration is invalid");

        Ok(ValidationResult::invalid(issues))
    }
}
