//! exec::mock
//!
//! A [`Runner`] that records invocations and replays scripted results.
//!
//! # Example
//!
//! ```
//! use gitbind::exec::mock::ScriptedRunner;
//! use gitbind::exec::{ExecOptions, Runner};
//!
//! let runner = ScriptedRunner::new();
//! runner.push_stdout("* main\n");
//!
//! let out = runner
//!     .run("git", &["branch".to_string()], &ExecOptions::default())
//!     .unwrap();
//! assert_eq!(out.stdout, "* main\n");
//! assert_eq!(runner.calls()[0].args, ["branch"]);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{ExecError, ExecOptions, Output, Runner};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub options: ExecOptions,
}

/// Replays queued results in order; an empty queue yields empty success.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<Result<Output, ExecError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run with the given stdout.
    pub fn push_stdout(&self, stdout: impl Into<String>) {
        self.push(Ok(Output {
            stdout: stdout.into(),
            ..Default::default()
        }));
    }

    /// Queue an arbitrary result.
    pub fn push(&self, response: Result<Output, ExecError>) {
        lock(&self.responses).push_back(response);
    }

    /// Every invocation so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    /// Arguments of the most recent invocation.
    pub fn last_args(&self) -> Option<Vec<String>> {
        lock(&self.calls).last().map(|c| c.args.clone())
    }
}

impl Runner for ScriptedRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> Result<Output, ExecError> {
        lock(&self.calls).push(Call {
            program: program.to_string(),
            args: args.to_vec(),
            options: options.clone(),
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(Output::default()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn replays_in_order() {
        let runner = ScriptedRunner::new();
        runner.push_stdout("one");
        runner.push(Err(ExecError::TimedOut {
            command: "git fetch".into(),
            timeout: Duration::from_secs(1),
        }));

        let opts = ExecOptions::default();
        assert_eq!(runner.run("git", &[], &opts).unwrap().stdout, "one");
        assert!(runner.run("git", &[], &opts).is_err());
        assert_eq!(runner.run("git", &[], &opts).unwrap(), Output::default());
        assert_eq!(runner.calls().len(), 3);
    }
}
