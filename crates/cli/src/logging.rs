//! Logging setup
//!
//! Logs go to stderr so stdout stays parseable (`--json`).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `metricflow=warn`)
//! - `MF_ADAPTER_LOG_FORMAT`: `json` for structured logs, anything else for pretty

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "metricflow=warn,mf_adapter=info";

pub fn init(verbose: bool) -> Result<()> {
    let log_format =
        std::env::var("MF_ADAPTER_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = if verbose {
        EnvFilter::try_new("metricflow=debug,mf_adapter=debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?
    };

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
