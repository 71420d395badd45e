// MetricFlow Infrastructure - System Adapters
// Implements: CommandRunner

pub mod subprocess_runner;

pub use subprocess_runner::SubprocessRunner;
