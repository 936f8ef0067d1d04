//! Command execution trait and the tokio-backed production runner.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

use super::DecodePolicy;

/// Captured result of a successfully completed external command.
///
/// Produced synchronously per invocation and never retained beyond the
/// call that consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Decoded standard output.
    pub stdout: String,
    /// Decoded standard error.
    pub stderr: String,
}

/// Error type for command execution.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command binary could not be located.
    #[error("command '{command}' not found")]
    NotFound {
        /// The command that was requested.
        command: String,
    },

    /// The process could not be spawned or awaited.
    #[error("failed to run '{command}': {source}")]
    Spawn {
        /// The command that was requested.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The command exited with a non-zero status.
    ///
    /// `stderr` has already been decoded through the same two-tier policy
    /// as the success path, so the diagnostic text stays legible.
    #[error("command '{command}' exited with {}: {stderr}", code.map_or_else(|| "unknown status".to_owned(), |c| format!("status {c}")))]
    Failed {
        /// The command that was requested.
        command: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Decoded standard error.
        stderr: String,
    },

    /// The command did not finish within the configured timeout.
    #[error("command '{command}' timed out after {timeout:?}")]
    TimedOut {
        /// The command that was requested.
        command: String,
        /// The timeout that was exceeded.
        timeout: Duration,
    },
}

/// Trait for invoking external commands.
///
/// # Design
///
/// - The single seam through which every OS command flows
/// - Enables dependency injection for testing with scripted implementations
/// - Implementations spawn one process per call; no retry, no concurrency
pub trait CommandRunner: Send + Sync {
    /// Runs `command` with `args`, capturing and decoding both output streams.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when:
    /// - The binary cannot be located ([`CommandError::NotFound`])
    /// - The process cannot be spawned ([`CommandError::Spawn`])
    /// - The process exits non-zero ([`CommandError::Failed`], carrying decoded stderr)
    /// - The process outlives the configured timeout ([`CommandError::TimedOut`])
    fn run(
        &self,
        command: &str,
        args: &[&str],
    ) -> impl std::future::Future<Output = Result<CommandOutput, CommandError>> + Send;

    /// Probes whether `command` can be invoked at all, via a lightweight
    /// help/usage call.
    ///
    /// Never fails: any spawn error, timeout, or non-zero exit status is
    /// reported as `false`, not propagated.
    fn is_available(&self, command: &str) -> impl std::future::Future<Output = bool> + Send;
}

impl<R: CommandRunner> CommandRunner for &R {
    fn run(
        &self,
        command: &str,
        args: &[&str],
    ) -> impl std::future::Future<Output = Result<CommandOutput, CommandError>> + Send {
        (**self).run(command, args)
    }

    fn is_available(&self, command: &str) -> impl std::future::Future<Output = bool> + Send {
        (**self).is_available(command)
    }
}

/// Arguments used by the availability probe.
#[cfg(windows)]
const PROBE_ARGS: &[&str] = &["/?"];
#[cfg(not(windows))]
const PROBE_ARGS: &[&str] = &["--help"];

/// Keep child console windows from flashing up on Windows.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Production command runner over `tokio::process`.
///
/// Every invocation is bounded by a timeout so a hung external command
/// cannot block the session indefinitely.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use dns_switch::command::{CommandRunner, DecodePolicy, SystemRunner};
///
/// # async fn example() -> Result<(), dns_switch::command::CommandError> {
/// let runner = SystemRunner::new(DecodePolicy::default(), Duration::from_secs(30));
/// let output = runner.run("netsh", &["interface", "show", "interface"]).await?;
/// println!("{}", output.stdout);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SystemRunner {
    decode: DecodePolicy,
    timeout: Duration,
}

impl SystemRunner {
    /// Creates a runner with the given decode policy and per-command timeout.
    #[must_use]
    pub const fn new(decode: DecodePolicy, timeout: Duration) -> Self {
        Self { decode, timeout }
    }

    /// Spawns the process and waits for it, without interpreting the exit
    /// status.
    async fn output(
        &self,
        command: &str,
        args: &[&str],
    ) -> Result<std::process::Output, CommandError> {
        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => Err(CommandError::NotFound {
                command: command.to_owned(),
            }),
            Ok(Err(e)) => Err(CommandError::Spawn {
                command: command.to_owned(),
                source: e,
            }),
            Err(_) => Err(CommandError::TimedOut {
                command: command.to_owned(),
                timeout: self.timeout,
            }),
        }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let output = self.output(command, args).await?;
        let stdout = self.decode.decode(&output.stdout);
        let stderr = self.decode.decode(&output.stderr);
        let code = output.status.code();
        tracing::debug!(command, ?args, ?code, "external command finished");

        if output.status.success() {
            Ok(CommandOutput {
                code,
                stdout,
                stderr,
            })
        } else {
            Err(CommandError::Failed {
                command: command.to_owned(),
                code,
                stderr,
            })
        }
    }

    async fn is_available(&self, command: &str) -> bool {
        match self.output(command, PROBE_ARGS).await {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }
}
