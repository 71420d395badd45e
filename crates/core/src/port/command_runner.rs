// Command Runner Port
// Abstraction for running the external CLI as a child process

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Captured result of a finished process
///
/// A non-zero `exit_code` is not an error at this level; callers decide what
/// it means for their operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration_ms: u64,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("MetricFlow CLI not found at: {0}")]
    NotFound(String),

    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("MetricFlow command timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(String),
}

/// Command Runner trait
///
/// Implementations:
/// - SubprocessRunner (infra-system): spawns the real executable
/// - MockCommandRunner: replays scripted outputs in tests
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and collect both output streams
    ///
    /// # Errors
    /// - ExecutionError::NotFound if `program` cannot be located
    /// - ExecutionError::SpawnFailed if the process cannot be started
    /// - ExecutionError::Timeout if it runs longer than `timeout` (the child is terminated)
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Scripted response for one call
    #[derive(Debug, Clone)]
    pub enum MockResponse {
        /// Process finished with the given streams and exit code
        Output {
            stdout: String,
            stderr: String,
            exit_code: i32,
        },
        /// Executable missing
        NotFound,
        /// Timed out after the requested duration
        Timeout,
    }

    impl MockResponse {
        pub fn stdout(stdout: impl Into<String>) -> Self {
            MockResponse::Output {
                stdout: stdout.into(),
                stderr: String::new(),
                exit_code: 0,
            }
        }

        pub fn failure(stderr: impl Into<String>, exit_code: i32) -> Self {
            MockResponse::Output {
                stdout: String::new(),
                stderr: stderr.into(),
                exit_code,
            }
        }
    }

    /// A recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation {
        pub program: String,
        pub args: Vec<String>,
        pub timeout: Duration,
    }

    /// Mock Command Runner for testing
    ///
    /// Pops one scripted response per call; once the script is exhausted the
    /// last response is repeated.
    #[derive(Clone)]
    pub struct MockCommandRunner {
        responses: Arc<Mutex<VecDeque<MockResponse>>>,
        last: Arc<Mutex<Option<MockResponse>>>,
        invocations: Arc<Mutex<Vec<Invocation>>>,
    }

    impl MockCommandRunner {
        pub fn new(responses: Vec<MockResponse>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                last: Arc::new(Mutex::new(None)),
                invocations: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn with_stdout(stdout: impl Into<String>) -> Self {
            Self::new(vec![MockResponse::stdout(stdout)])
        }

        pub fn invocations(&self) -> Vec<Invocation> {
            self.invocations.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.invocations.lock().unwrap().len()
        }

        /// Arguments of the most recent call
        pub fn last_args(&self) -> Option<Vec<String>> {
            self.invocations.lock().unwrap().last().map(|i| i.args.clone())
        }

        fn next_response(&self) -> MockResponse {
            let mut last = self.last.lock().unwrap();
            if let Some(response) = self.responses.lock().unwrap().pop_front() {
                *last = Some(response);
            }
            last.clone().unwrap_or_else(|| MockResponse::stdout(""))
        }
    }

    #[async_trait]
    impl CommandRunner for MockCommandRunner {
        async fn run(
            &self,
            program: &str,
            args: &[String],
            timeout: Duration,
        ) -> Result<CommandOutput, ExecutionError> {
            self.invocations.lock().unwrap().push(Invocation {
                program: program.to_string(),
                args: args.to_vec(),
                timeout,
            });

            match self.next_response() {
                MockResponse::Output {
                    stdout,
                    stderr,
                    exit_code,
                } => Ok(CommandOutput {
                    stdout,
                    stderr,
                    exit_code,
                    duration_ms: 1,
                }),
                MockResponse::NotFound => Err(ExecutionError::NotFound(program.to_string())),
                MockResponse::Timeout => Err(ExecutionError::Timeout(timeout)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_carries_seconds() {
        let err = ExecutionError::Timeout(Duration::from_secs(300));
        assert_eq!(err.to_string(), "MetricFlow command timed out after 300s");
    }

    #[test]
    fn test_not_found_message_carries_path() {
        let err = ExecutionError::NotFound("/opt/mf".to_string());
        assert_eq!(err.to_string(), "MetricFlow CLI not found at: /opt/mf");
    }
}
