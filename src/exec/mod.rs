//! exec
//!
//! Subprocess execution for rendered argument tokens.
//!
//! # Architecture
//!
//! The [`Runner`] trait is the seam between the facade and the operating
//! system. [`SystemRunner`] spawns real processes; [`mock::ScriptedRunner`]
//! replays canned output for tests.
//!
//! # Failure categories
//!
//! - [`ExecError::Spawn`]: the program could not be started
//! - [`ExecError::Failed`]: the process exited with a non-zero status
//! - [`ExecError::Signaled`]: the process was terminated by a signal
//! - [`ExecError::TimedOut`]: the process outlived its timeout and was killed

pub mod mock;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors from running a subprocess.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The program could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Non-zero exit status.
    #[error("'{command}' exited with status {status}: {}", .stderr.trim())]
    Failed {
        command: String,
        status: i32,
        stdout: String,
        stderr: String,
    },

    /// Terminated by a signal.
    #[error("'{command}' was terminated by signal {signal}")]
    Signaled { command: String, signal: i32 },

    /// Killed after exceeding its timeout.
    #[error("'{command}' timed out after {timeout:?}")]
    TimedOut { command: String, timeout: Duration },

    /// Reading the child's output failed.
    #[error("i/o error while running '{command}': {source}")]
    Io {
        command: String,
        source: std::io::Error,
    },
}

/// Per-call execution settings: the execution-only side channel of a bind
/// merged with configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Working directory for the child
    pub cwd: Option<PathBuf>,
    /// Kill the child after this long
    pub timeout: Option<Duration>,
    /// Extra environment variables
    pub env: BTreeMap<String, String>,
}

/// Captured result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

/// Something that can run a program with arguments.
pub trait Runner: Send + Sync {
    /// Run `program` with `args`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecError`] for spawn failures, non-zero exits, signals
    /// and timeouts.
    fn run(&self, program: &str, args: &[String], options: &ExecOptions)
        -> Result<Output, ExecError>;
}

/// Runs real processes via `std::process`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    poll_interval: Option<Duration>,
}

impl SystemRunner {
    const DEFAULT_POLL: Duration = Duration::from_millis(10);

    pub fn new() -> Self {
        Self::default()
    }

    /// How often to check a child with a timeout for completion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }
}

impl Runner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> Result<Output, ExecError> {
        let command_line = display_command(program, args);
        let started = Instant::now();
        debug!(command = %command_line, cwd = ?options.cwd, "running");

        let mut command = Command::new(program);
        command
            .args(args)
            .envs(&options.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &options.cwd {
            command.current_dir(cwd);
        }

        let mut child = command.spawn().map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

        // Drain both pipes on their own threads so a chatty child cannot
        // block on a full pipe while we poll for exit.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let io_error = |source| ExecError::Io {
            command: command_line.clone(),
            source,
        };

        let status = match options.timeout {
            None => child.wait().map_err(io_error)?,
            Some(timeout) => loop {
                if let Some(status) = child.try_wait().map_err(io_error)? {
                    break status;
                }
                if started.elapsed() >= timeout {
                    warn!(command = %command_line, ?timeout, "killing timed out process");
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExecError::TimedOut {
                        command: command_line,
                        timeout,
                    });
                }
                thread::sleep(self.poll_interval.unwrap_or(Self::DEFAULT_POLL));
            },
        };

        let output = Output {
            stdout: join(stdout),
            stderr: join(stderr),
            status: status.code().unwrap_or(-1),
        };

        debug!(
            command = %command_line,
            status = ?status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "finished"
        );

        classify(command_line, status, output)
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join(handle: Option<thread::JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

fn classify(command: String, status: ExitStatus, output: Output) -> Result<Output, ExecError> {
    if status.success() {
        return Ok(output);
    }
    if let Some(code) = status.code() {
        return Err(ExecError::Failed {
            command,
            status: code,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }
    Err(ExecError::Signaled {
        command,
        signal: signal_of(status),
    })
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(-1)
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> i32 {
    -1
}

/// Human-readable command line for logs and errors.
pub fn display_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("{:?}", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}
