//! MetricFlow Adapter CLI
//! Lists metrics, dimensions, runs queries and validates configs through `mf`

mod logging;
mod output;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

use metricflow_core::domain::{Granularity, ListMetricsRequest, QueryRequest, TimeRange};
use metricflow_core::port::SemanticAdapter;
use metricflow_core::MetricFlowAdapter;
use metricflow_infra_system::SubprocessRunner;

#[derive(Parser)]
#[command(name = "mf-adapter")]
#[command(about = "Typed front end for the MetricFlow CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "MF_ADAPTER_CONFIG")]
    config: Option<PathBuf>,

    /// MetricFlow namespace
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// Path to the `mf` executable
    #[arg(long, global = true)]
    cli_path: Option<String>,

    /// MetricFlow project root
    #[arg(long, global = true)]
    project_root: Option<String>,

    /// Profile / environment name
    #[arg(long, global = true)]
    environment: Option<String>,

    /// Command timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List available metrics
    ListMetrics {
        /// Subject area filter, e.g. "sales/revenue"
        #[arg(long)]
        path: Option<String>,

        /// Maximum metrics to return
        #[arg(long, default_value_t = metricflow_core::domain::DEFAULT_LIST_LIMIT)]
        limit: usize,

        /// Number of metrics to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// List dimensions of a metric
    Dimensions {
        /// Metric name
        metric: String,
    },

    /// Query metrics
    Query {
        /// Metric names (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        metrics: Vec<String>,

        /// Dimensions to group by (comma separated)
        #[arg(long, value_delimiter = ',')]
        group_by: Vec<String>,

        /// Start of the time window
        #[arg(long)]
        start_time: Option<String>,

        /// End of the time window
        #[arg(long)]
        end_time: Option<String>,

        /// hour, day, week, month, quarter or year
        #[arg(long)]
        granularity: Option<Granularity>,

        /// Filter expression, passed to MetricFlow verbatim
        #[arg(long = "where")]
        where_clause: Option<String>,

        /// Row limit
        #[arg(long)]
        limit: Option<usize>,

        /// Columns to order by (comma separated, prefix with - for descending)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        order: Vec<String>,

        /// Show the generated SQL instead of running the query
        #[arg(long)]
        explain: bool,
    },

    /// Validate the MetricFlow configuration
    Validate,
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn time_range(
    start: Option<String>,
    end: Option<String>,
    granularity: Option<Granularity>,
) -> Option<TimeRange> {
    if start.is_none() && end.is_none() && granularity.is_none() {
        return None;
    }
    Some(TimeRange {
        start,
        end,
        granularity,
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let overrides = settings::Overrides {
        namespace: cli.namespace.clone(),
        cli_path: cli.cli_path.clone(),
        project_root: cli.project_root.clone(),
        environment: cli.environment.clone(),
        timeout: cli.timeout,
    };
    let config = settings::load(cli.config.as_deref(), overrides)?;
    debug!(config = ?config, "Loaded configuration");

    let adapter = MetricFlowAdapter::new(config, Arc::new(SubprocessRunner::new()))?;

    match cli.command {
        Commands::ListMetrics {
            path,
            limit,
            offset,
        } => {
            let req = ListMetricsRequest {
                path: path.as_deref().map(split_path),
                limit,
                offset,
            };
            let metrics = adapter
                .list_metrics(req)
                .await
                .context("list-metrics failed")?;

            if cli.json {
                output::print_json(&metrics)?;
            } else {
                output::print_metrics(&metrics);
            }
        }

        Commands::Dimensions { metric } => {
            let dimensions = adapter
                .get_dimensions(&metric, None)
                .await
                .context("list-dimensions failed")?;

            if cli.json {
                output::print_json(&dimensions)?;
            } else {
                output::print_dimensions(&metric, &dimensions);
            }
        }

        Commands::Query {
            metrics,
            group_by,
            start_time,
            end_time,
            granularity,
            where_clause,
            limit,
            order,
            explain,
        } => {
            let req = QueryRequest {
                metrics,
                dimensions: group_by,
                path: None,
                time_range: time_range(start_time, end_time, granularity),
                where_clause,
                limit,
                order_by: order,
                dry_run: explain,
            };
            let result = adapter.query_metrics(req).await.context("query failed")?;

            if cli.json {
                output::print_json(&result)?;
            } else {
                output::print_query_result(&result);
            }
        }

        Commands::Validate => {
            let result = adapter
                .validate_semantic()
                .await
                .context("validate-configs failed")?;

            if cli.json {
                output::print_json(&result)?;
            } else {
                output::print_validation(&result);
            }

            if !result.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
