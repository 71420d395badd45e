//! Configuration loading
//!
//! Sources, lowest precedence first:
//! 1. optional config file (`--config`, TOML/YAML/JSON by extension)
//! 2. `METRICFLOW_*` environment variables (e.g. `METRICFLOW_NAMESPACE`)
//! 3. command-line overrides

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use metricflow_core::MetricFlowConfig;
use std::path::Path;

pub const ENV_PREFIX: &str = "METRICFLOW";

/// Names the config file itself; never part of the adapter configuration
const CONFIG_FILE_KEY: &str = "config";

/// Values given on the command line; `None` leaves lower layers untouched
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub cli_path: Option<String>,
    pub project_root: Option<String>,
    pub environment: Option<String>,
    pub timeout: Option<u64>,
}

pub fn load(file: Option<&Path>, overrides: Overrides) -> Result<MetricFlowConfig> {
    load_from(
        file,
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .ignore_empty(true),
        overrides,
    )
}

fn load_from(
    file: Option<&Path>,
    env: Environment,
    overrides: Overrides,
) -> Result<MetricFlowConfig> {
    let mut builder = Config::builder();

    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(env)
        .set_override_option("namespace", overrides.namespace)?
        .set_override_option("cli_path", overrides.cli_path)?
        .set_override_option("project_root", overrides.project_root)?
        .set_override_option("environment", overrides.environment)?
        .set_override_option("timeout", overrides.timeout.map(|t| t as i64))?
        .build()
        .context("Failed to read configuration")?;

    let mut config: MetricFlowConfig = settings
        .try_deserialize()
        .context("Invalid MetricFlow configuration (is `namespace` set?)")?;

    config.extra.remove(CONFIG_FILE_KEY);
    config.cli_path = shellexpand::tilde(&config.cli_path).into_owned();
    config.project_root = config
        .project_root
        .map(|root| shellexpand::tilde(&root).into_owned());

    config.validate()?;
    Ok(config)
}
