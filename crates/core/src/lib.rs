// MetricFlow Core - Domain Models, Ports & Output Parsing
// NO process or config-loading dependencies (hexagonal core)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use application::MetricFlowAdapter;
pub use config::MetricFlowConfig;
pub use error::{AdapterError, Result};
