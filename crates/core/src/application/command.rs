// Command Builder
// Maps typed requests onto `mf` argument tokens

use crate::config::MetricFlowConfig;
use crate::domain::QueryRequest;

/// A fully built `mf` invocation
///
/// Arguments stay discrete tokens all the way to the process spawn; nothing is
/// ever joined into a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MfCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl MfCommand {
    /// Program followed by its arguments
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl std::fmt::Display for MfCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// Builds `mf` invocations from adapter configuration.
///
/// Global options surround the subcommand: `--namespace` goes before it,
/// `--project-root` and `--environment` after its arguments.
pub struct CommandBuilder<'a> {
    config: &'a MetricFlowConfig,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a MetricFlowConfig) -> Self {
        Self { config }
    }

    pub fn list_metrics(&self) -> MfCommand {
        self.wrap(vec!["list-metrics".to_string()])
    }

    pub fn list_dimensions(&self, metric_name: &str) -> MfCommand {
        self.wrap(vec![
            "list-dimensions".to_string(),
            "--metrics".to_string(),
            metric_name.to_string(),
        ])
    }

    pub fn query(&self, req: &QueryRequest) -> MfCommand {
        self.wrap(query_args(req))
    }

    pub fn validate_configs(&self) -> MfCommand {
        self.wrap(vec!["validate-configs".to_string()])
    }

    fn wrap(&self, subcommand: Vec<String>) -> MfCommand {
        let mut args = Vec::with_capacity(subcommand.len() + 6);

        if !self.config.namespace.is_empty() {
            push_option(&mut args, "--namespace", &self.config.namespace);
        }

        args.extend(subcommand);

        if let Some(root) = non_empty(&self.config.project_root) {
            push_option(&mut args, "--project-root", root);
        }

        if let Some(env) = non_empty(&self.config.environment) {
            push_option(&mut args, "--environment", env);
        }

        MfCommand {
            program: self.config.cli_path.clone(),
            args,
        }
    }
}

/// `query` subcommand and its arguments
fn query_args(req: &QueryRequest) -> Vec<String> {
    let mut args = vec!["query".to_string()];
    push_option(&mut args, "--metrics", &req.metrics.join(","));

    if !req.dimensions.is_empty() {
        push_option(&mut args, "--group-by", &req.dimensions.join(","));
    }

    if let Some(range) = &req.time_range {
        if let Some(start) = non_empty(&range.start) {
            push_option(&mut args, "--start-time", start);
        }
        if let Some(end) = non_empty(&range.end) {
            push_option(&mut args, "--end-time", end);
        }
        if let Some(granularity) = range.granularity {
            push_option(&mut args, "--time-granularity", granularity.as_str());
        }
    }

    if let Some(where_clause) = non_empty(&req.where_clause) {
        push_option(&mut args, "--where", where_clause);
    }

    // A zero limit means "no limit"
    if let Some(limit) = req.limit.filter(|l| *l > 0) {
        push_option(&mut args, "--limit", &limit.to_string());
    }

    if !req.order_by.is_empty() {
        push_option(&mut args, "--order", &req.order_by.join(","));
    }

    if req.dry_run {
        args.push("--explain".to_string());
    }

    args
}

fn push_option(args: &mut Vec<String>, flag: &str, value: &str) {
    args.push(flag.to_string());
    args.push(value.to_string());
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
