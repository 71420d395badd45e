// Port Layer - Interfaces for external dependencies

pub mod command_runner;
pub mod semantic_adapter;

// Re-exports
pub use command_runner::{CommandOutput, CommandRunner, ExecutionError};
pub use semantic_adapter::SemanticAdapter;
