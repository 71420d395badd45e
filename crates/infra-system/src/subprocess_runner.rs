// Subprocess runner implementation
// reason: async-trait, tokio for async process management
use async_trait::async_trait;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{info, warn};

use metricflow_core::application::constants::GRACEFUL_SHUTDOWN_TIMEOUT;
use metricflow_core::port::command_runner::{CommandOutput, CommandRunner, ExecutionError};

/// Subprocess runner
///
/// Spawns the executable directly (no shell) with stdout/stderr piped and
/// stdin closed. The child handle is owned for the whole call, so every exit
/// path (including a dropped future) terminates and reaps it.
pub struct SubprocessRunner {
    grace_period: Duration,
}

impl SubprocessRunner {
    /// Create a runner using the default SIGTERM grace period
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessRunner::new();
    /// let output = runner.run("mf", &["list-metrics".into()], Duration::from_secs(300)).await?;
    /// ```
    pub fn new() -> Self {
        Self::with_grace_period(GRACEFUL_SHUTDOWN_TIMEOUT)
    }

    /// Create a runner that waits `grace_period` after SIGTERM before SIGKILL
    pub fn with_grace_period(grace_period: Duration) -> Self {
        Self { grace_period }
    }

    fn spawn(&self, program: &str, args: &[String]) -> Result<Child, ExecutionError> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ExecutionError::NotFound(program.to_string()),
                _ => ExecutionError::SpawnFailed(format!("{}: {}", program, e)),
            })
    }

    /// Wait for exit while draining both pipes, bounded by `limit`
    async fn wait_with_timeout(
        &self,
        child: &mut Child,
        limit: Duration,
    ) -> Result<(ExitStatus, Vec<u8>, Vec<u8>), ExecutionError> {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let collect = async {
            tokio::try_join!(child.wait(), read_all(stdout), read_all(stderr))
        };

        match timeout(limit, collect).await {
            Ok(Ok(collected)) => Ok(collected),
            Ok(Err(e)) => Err(ExecutionError::Io(e.to_string())),
            Err(_) => Err(ExecutionError::Timeout(limit)),
        }
    }

    /// Stop a child that outlived its deadline: SIGTERM first, SIGKILL if needed
    async fn terminate(&self, child: &mut Child) {
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            if let Some(pid) = child.id() {
                info!(pid = %pid, "Sending SIGTERM for graceful shutdown");
                if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                    warn!(pid = %pid, error = %e, "SIGTERM failed");
                }

                if let Ok(Ok(status)) = timeout(self.grace_period, child.wait()).await {
                    info!(pid = %pid, status = %status, "Process exited gracefully after SIGTERM");
                    return;
                }

                warn!(pid = %pid, "Process did not exit after SIGTERM, sending SIGKILL");
            }
        }

        // Kill and reap
        if let Err(e) = child.kill().await {
            warn!(error = %e, "Failed to kill timed out process");
        }
    }

    async fn run_internal(
        &self,
        program: &str,
        args: &[String],
        limit: Duration,
    ) -> Result<CommandOutput, ExecutionError> {
        let start = Instant::now();

        info!(
            command = %program,
            args = ?args,
            timeout_ms = limit.as_millis() as u64,
            "Starting subprocess execution"
        );

        let mut child = self.spawn(program, args)?;

        let (status, stdout, stderr) = match self.wait_with_timeout(&mut child, limit).await {
            Ok(collected) => collected,
            Err(e) => {
                warn!(command = %program, error = %e, "Subprocess execution aborted");
                self.terminate(&mut child).await;
                return Err(e);
            }
        };

        let output = CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            exit_code: exit_code(&status),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            command = %program,
            duration_ms = %output.duration_ms,
            exit_code = %output.exit_code,
            "Subprocess execution completed"
        );

        Ok(output)
    }
}

impl Default for SubprocessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, ExecutionError> {
        self.run_internal(program, args, timeout).await
    }
}

async fn read_all<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Exit code, or the negated signal number for a signal-terminated child
fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
