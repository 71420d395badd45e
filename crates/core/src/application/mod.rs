// Application Layer - Command building, output parsing and adapter use cases

pub mod adapter;
pub mod command;
pub mod constants;
pub mod parser;

// Re-exports
pub use adapter::MetricFlowAdapter;
pub use command::{CommandBuilder, MfCommand};
