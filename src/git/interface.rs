//! git::interface
//!
//! The `Git` facade.
//!
//! # Architecture
//!
//! Every operation follows the same path:
//!
//! 1. build [`CallArgs`] from the method's parameters
//! 2. bind them against the static definition in [`crate::commands`]
//! 3. merge the bind's execution-only values with configured defaults into
//!    [`ExecOptions`]
//! 4. run the configured git binary through the [`Runner`]
//! 5. parse stdout with [`crate::parse`] when the operation returns records
//!
//! # Error Handling
//!
//! Failures keep their layer:
//! - [`GitError::Arguments`]: the call did not satisfy the definition
//! - [`GitError::Exec`]: git could not be run, failed, or timed out
//! - [`GitError::Parse`]: git's output had an unexpected shape
//! - [`GitError::Config`]: configuration could not be loaded
//! - [`GitError::InvalidName`]: a branch name was rejected before running git
//!
//! # Example
//!
//! ```no_run
//! use gitbind::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new(".")).unwrap();
//! for branch in git.branches(false).unwrap() {
//!     println!("{}{}", if branch.current { "* " } else { "  " }, branch.name);
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::commands::{branch, checkout, history, index, remote, repo, stash, tag};
use crate::core::args::{ArgumentError, Bound, CallArgs, Spec, Value};
use crate::core::config::{Config, ConfigError};
use crate::core::types::{BranchName, Oid, TypeError};
use crate::exec::{ExecError, ExecOptions, Output, Runner, SystemRunner};
use crate::parse::{self, ParseError};

/// Errors from facade operations.
#[derive(Debug, Error)]
pub enum GitError {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidName(#[from] TypeError),

    /// An execution-only value could not be interpreted.
    #[error("invalid execution option '{name}': {message}")]
    ExecutionOption { name: String, message: String },

    /// Not inside a git working tree.
    #[error("not a git repository: {path}")]
    NotARepo { path: PathBuf },
}

/// How far `reset` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    Soft,
    Mixed,
    Hard,
}

impl ResetMode {
    fn flag(self) -> &'static str {
        match self {
            ResetMode::Soft => "soft",
            ResetMode::Mixed => "mixed",
            ResetMode::Hard => "hard",
        }
    }
}

/// Facade over the git command line.
pub struct Git {
    work_dir: PathBuf,
    config: Config,
    runner: Arc<dyn Runner>,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("work_dir", &self.work_dir)
            .field("binary", &self.config.binary())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Facade for `work_dir` without checking that it is a repository.
    ///
    /// Used before `init` and `clone`. Loads configuration for `work_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Config`] if a config file exists but is invalid.
    pub fn new(work_dir: impl Into<PathBuf>) -> Result<Self, GitError> {
        let work_dir = work_dir.into();
        let config = Config::load(Some(&work_dir))?;
        Ok(Self::with_runner(work_dir, config, Arc::new(SystemRunner::new())))
    }

    /// Facade for the working tree containing `path`.
    ///
    /// Runs `git rev-parse --show-toplevel` from `path`, so any directory
    /// inside the tree works.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if `path` is not inside a working tree
    /// - [`GitError::Config`] if a config file is invalid
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let toplevel_git = Self::with_runner(
            path.to_path_buf(),
            Config::load(None)?,
            Arc::new(SystemRunner::new()),
        );
        let toplevel = match toplevel_git.run(
            history::rev_parse(),
            CallArgs::new().set("show_toplevel", true),
        ) {
            Ok(output) => PathBuf::from(output.stdout.trim()),
            Err(GitError::Exec(ExecError::Failed { .. })) => {
                return Err(GitError::NotARepo {
                    path: path.to_path_buf(),
                })
            }
            Err(err) => return Err(err),
        };
        debug!(toplevel = %toplevel.display(), "opened repository");
        Self::new(toplevel)
    }

    /// Facade with an explicit configuration and runner.
    pub fn with_runner(
        work_dir: impl Into<PathBuf>,
        config: Config,
        runner: Arc<dyn Runner>,
    ) -> Self {
        Git {
            work_dir: work_dir.into(),
            config,
            runner,
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Generic execution
    // =========================================================================

    /// Bind `args` against `spec` and run the result.
    pub fn run(&self, spec: &Spec, args: CallArgs) -> Result<Output, GitError> {
        let bound = spec.bind(args)?;
        self.run_bound(&bound)
    }

    /// Run an already bound call.
    pub fn run_bound(&self, bound: &Bound<'_>) -> Result<Output, GitError> {
        let options = self.exec_options(bound)?;
        Ok(self
            .runner
            .run(self.config.binary(), bound.tokens(), &options)?)
    }

    /// Execution settings for one call: execution-only values win over
    /// configuration.
    pub fn exec_options(&self, bound: &Bound<'_>) -> Result<ExecOptions, GitError> {
        let timeout = match bound.execution_option("timeout") {
            Some(value) => Some(parse_timeout(value)?),
            None => self.config.timeout(),
        };

        let mut env = self.config.env();
        if let Some(value) = bound.execution_option("env") {
            match value {
                Value::Map(pairs) => env.extend(pairs.iter().cloned()),
                other => {
                    return Err(GitError::ExecutionOption {
                        name: "env".to_string(),
                        message: format!("expected a map, got {}", other.type_name()),
                    })
                }
            }
        }

        Ok(ExecOptions {
            cwd: Some(self.work_dir.clone()),
            timeout,
            env,
        })
    }

    fn stdout(&self, spec: &Spec, args: CallArgs) -> Result<String, GitError> {
        Ok(self.run(spec, args)?.stdout)
    }

    // =========================================================================
    // Repository
    // =========================================================================

    /// `git init` in the working directory.
    pub fn init(&self, bare: bool, initial_branch: Option<&str>) -> Result<(), GitError> {
        self.run(
            repo::init(),
            CallArgs::new()
                .set_flag("bare", bare)
                .set_flag("quiet", true)
                .set_opt("initial_branch", initial_branch),
        )?;
        Ok(())
    }

    /// `git clone <url> [<directory>]` from the working directory.
    pub fn clone_repo(
        &self,
        url: &str,
        directory: Option<&str>,
        depth: Option<u32>,
        timeout: Option<Duration>,
    ) -> Result<(), GitError> {
        self.run(
            remote::clone(),
            CallArgs::new()
                .arg(url)
                .arg_opt(directory)
                .set_flag("quiet", true)
                .set_opt("depth", depth)
                .set_opt("timeout", timeout.map(format_timeout)),
        )?;
        Ok(())
    }

    /// Value of a config key, `None` when unset.
    pub fn config_get(&self, key: &str) -> Result<Option<String>, GitError> {
        match self.stdout(repo::config_get(), CallArgs::new().arg(key)) {
            Ok(out) => Ok(Some(out.trim_end_matches('\n').to_string())),
            // `git config --get` exits 1 for a missing key
            Err(GitError::Exec(ExecError::Failed { status: 1, .. })) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn config_set(&self, key: &str, value: &str) -> Result<(), GitError> {
        self.run(repo::config_set(), CallArgs::new().arg(key).arg(value))?;
        Ok(())
    }

    pub fn config_list(&self) -> Result<Vec<parse::config::ConfigEntry>, GitError> {
        let out = self.stdout(repo::config_list(), CallArgs::new())?;
        Ok(parse::config::parse(&out)?)
    }

    // =========================================================================
    // Index and commits
    // =========================================================================

    pub fn add(&self, paths: &[&str]) -> Result<(), GitError> {
        self.run(index::add(), CallArgs::new().arg(Value::list(paths.iter().copied())))?;
        Ok(())
    }

    pub fn add_all(&self) -> Result<(), GitError> {
        self.run(index::add(), CallArgs::new().set("all", true))?;
        Ok(())
    }

    pub fn rm(&self, paths: &[&str], cached: bool) -> Result<(), GitError> {
        self.run(
            index::rm(),
            CallArgs::new()
                .arg(Value::list(paths.iter().copied()))
                .set_flag("cached", cached)
                .set_flag("quiet", true),
        )?;
        Ok(())
    }

    /// Commit staged changes and return the new HEAD.
    pub fn commit(&self, message: &str, allow_empty: bool) -> Result<Oid, GitError> {
        self.run(
            index::commit(),
            CallArgs::new()
                .set("message", message)
                .set_flag("allow_empty", allow_empty),
        )?;
        self.rev_parse("HEAD")
    }

    /// Porcelain status including the branch header.
    pub fn status(&self) -> Result<parse::status::Status, GitError> {
        let out = self.stdout(index::status(), CallArgs::new().set("branch", true))?;
        Ok(parse::status::parse(&out)?)
    }

    pub fn reset(&self, mode: ResetMode, commit: Option<&str>) -> Result<(), GitError> {
        self.run(
            index::reset(),
            CallArgs::new()
                .arg_opt(commit)
                .set(mode.flag(), true)
                .set_flag("quiet", true),
        )?;
        Ok(())
    }

    // =========================================================================
    // Switching and merging
    // =========================================================================

    pub fn checkout(&self, target: &str) -> Result<(), GitError> {
        self.run(
            checkout::checkout(),
            CallArgs::new().arg(target).set_flag("quiet", true),
        )?;
        Ok(())
    }

    /// `git checkout -b <name> [<start>]`; the name is validated first.
    pub fn checkout_new_branch(
        &self,
        name: &str,
        start: Option<&str>,
    ) -> Result<BranchName, GitError> {
        let name = BranchName::new(name)?;
        self.run(
            checkout::checkout(),
            CallArgs::new()
                .arg_opt(start)
                .set("b", name.as_str())
                .set_flag("quiet", true),
        )?;
        Ok(name)
    }

    pub fn merge(&self, commit: &str, no_ff: bool, message: Option<&str>) -> Result<(), GitError> {
        let mut args = CallArgs::new().arg(commit).set_opt("message", message);
        if no_ff {
            args = args.set("ff", false);
        }
        self.run(checkout::merge(), args)?;
        Ok(())
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Commits reachable from HEAD, newest first.
    pub fn log(&self, max_count: Option<usize>) -> Result<Vec<parse::log::Commit>, GitError> {
        let out = self.stdout(history::log(), CallArgs::new().set_opt("max_count", max_count))?;
        Ok(parse::log::parse(&out)?)
    }

    /// Commits in `to` but not in `from`.
    pub fn log_between(&self, from: &str, to: &str) -> Result<Vec<parse::log::Commit>, GitError> {
        let out = self.stdout(
            history::log(),
            CallArgs::new().set("between", Value::list([from, to])),
        )?;
        Ok(parse::log::parse(&out)?)
    }

    pub fn show(&self, object: &str) -> Result<String, GitError> {
        self.stdout(history::show(), CallArgs::new().arg(object))
    }

    pub fn diff_numstat(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<parse::diff::FileStat>, GitError> {
        let out = self.stdout(history::diff(), CallArgs::new().arg_opt(from).arg_opt(to))?;
        Ok(parse::diff::parse(&out)?)
    }

    /// Resolve a revision to a full object id.
    pub fn rev_parse(&self, rev: &str) -> Result<Oid, GitError> {
        let out = self.stdout(
            history::rev_parse(),
            CallArgs::new().arg(rev).set("verify", true).set("quiet", true),
        )?;
        Ok(Oid::new(out.trim())?)
    }

    /// The checked-out branch, `None` when HEAD is detached.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let out = self.stdout(
            history::rev_parse(),
            CallArgs::new().arg("HEAD").set("abbrev_ref", true),
        )?;
        let name = out.trim();
        Ok((name != "HEAD").then(|| name.to_string()))
    }

    // =========================================================================
    // Branches
    // =========================================================================

    pub fn branches(&self, all: bool) -> Result<Vec<parse::branch::BranchEntry>, GitError> {
        let out = self.stdout(branch::list(), CallArgs::new().set_flag("all", all))?;
        Ok(parse::branch::parse(&out)?)
    }

    pub fn create_branch(&self, name: &str, start: Option<&str>) -> Result<BranchName, GitError> {
        let name = BranchName::new(name)?;
        self.run(branch::create(), CallArgs::new().arg(name.as_str()).arg_opt(start))?;
        Ok(name)
    }

    /// `git branch --copy [<old>] <new>`.
    ///
    /// With one name the current branch is copied. Returns the name that
    /// the binder placed in the required `new_branch` slot.
    pub fn copy_branch(
        &self,
        old: Option<&str>,
        new: &str,
        force: bool,
    ) -> Result<BranchName, GitError> {
        self.relocate_branch(branch::copy(), old, new, force)
    }

    /// `git branch --move [<old>] <new>`; same slot rules as [`copy_branch`](Self::copy_branch).
    pub fn rename_branch(
        &self,
        old: Option<&str>,
        new: &str,
        force: bool,
    ) -> Result<BranchName, GitError> {
        self.relocate_branch(branch::rename(), old, new, force)
    }

    fn relocate_branch(
        &self,
        spec: &Spec,
        old: Option<&str>,
        new: &str,
        force: bool,
    ) -> Result<BranchName, GitError> {
        BranchName::new(new)?;
        let args = CallArgs::new()
            .arg_opt(old)
            .arg(new)
            .set_flag("force", force);
        let bound = spec.bind(args)?;
        self.run_bound(&bound)?;

        let target = bound.str("new_branch").unwrap_or(new);
        Ok(BranchName::new(target)?)
    }

    pub fn delete_branches(&self, names: &[&str], force: bool) -> Result<(), GitError> {
        self.run(
            branch::delete(),
            CallArgs::new()
                .arg(Value::list(names.iter().copied()))
                .set_flag("force", force),
        )?;
        Ok(())
    }

    // =========================================================================
    // Tags
    // =========================================================================

    pub fn tags(&self) -> Result<Vec<String>, GitError> {
        let out = self.stdout(tag::list(), CallArgs::new())?;
        Ok(parse::tag::parse(&out)?)
    }

    /// Lightweight tag, or annotated when `message` is given.
    pub fn create_tag(
        &self,
        name: &str,
        message: Option<&str>,
        commit: Option<&str>,
    ) -> Result<(), GitError> {
        self.run(
            tag::create(),
            CallArgs::new()
                .arg(name)
                .arg_opt(commit)
                .set_flag("annotate", message.is_some())
                .set_opt("message", message),
        )?;
        Ok(())
    }

    pub fn delete_tags(&self, names: &[&str]) -> Result<(), GitError> {
        self.run(tag::delete(), CallArgs::new().arg(Value::list(names.iter().copied())))?;
        Ok(())
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    pub fn remotes(&self) -> Result<Vec<parse::remote::Remote>, GitError> {
        let out = self.stdout(remote::list(), CallArgs::new())?;
        Ok(parse::remote::parse(&out)?)
    }

    pub fn add_remote(&self, name: &str, url: &str) -> Result<(), GitError> {
        self.run(remote::add(), CallArgs::new().arg(name).arg(url))?;
        Ok(())
    }

    pub fn remove_remote(&self, name: &str) -> Result<(), GitError> {
        self.run(remote::remove(), CallArgs::new().arg(name))?;
        Ok(())
    }

    pub fn fetch(
        &self,
        remote_name: Option<&str>,
        prune: bool,
        timeout: Option<Duration>,
    ) -> Result<(), GitError> {
        let args = match remote_name {
            Some(name) => CallArgs::new().arg(name),
            None => CallArgs::new().set("all", true),
        };
        self.run(
            remote::fetch(),
            args.set_flag("prune", prune)
                .set_flag("quiet", true)
                .set_opt("timeout", timeout.map(format_timeout)),
        )?;
        Ok(())
    }

    pub fn push(
        &self,
        remote_name: &str,
        refspecs: &[&str],
        set_upstream: bool,
        timeout: Option<Duration>,
    ) -> Result<(), GitError> {
        self.run(
            remote::push(),
            CallArgs::new()
                .arg(remote_name)
                .arg(Value::list(refspecs.iter().copied()))
                .set_flag("set_upstream", set_upstream)
                .set_opt("timeout", timeout.map(format_timeout)),
        )?;
        Ok(())
    }

    // =========================================================================
    // Stash
    // =========================================================================

    pub fn stash_push(
        &self,
        message: Option<&str>,
        include_untracked: bool,
    ) -> Result<(), GitError> {
        self.run(
            stash::push(),
            CallArgs::new()
                .set_opt("message", message)
                .set_flag("include_untracked", include_untracked)
                .set_flag("quiet", true),
        )?;
        Ok(())
    }

    pub fn stash_pop(&self, stash_ref: Option<&str>) -> Result<(), GitError> {
        self.run(
            stash::pop(),
            CallArgs::new().arg_opt(stash_ref).set_flag("quiet", true),
        )?;
        Ok(())
    }

    pub fn stash_list(&self) -> Result<Vec<parse::stash::StashEntry>, GitError> {
        let out = self.stdout(stash::list(), CallArgs::new())?;
        Ok(parse::stash::parse(&out)?)
    }
}

fn format_timeout(timeout: Duration) -> String {
    timeout.as_secs_f64().to_string()
}

/// Seconds, possibly fractional, as a string.
fn parse_timeout(value: &Value) -> Result<Duration, GitError> {
    let invalid = |message: String| GitError::ExecutionOption {
        name: "timeout".to_string(),
        message,
    };
    let text = value
        .as_str()
        .ok_or_else(|| invalid(format!("expected seconds, got {}", value.type_name())))?;
    let secs: f64 = text
        .parse()
        .map_err(|_| invalid(format!("{:?} is not a number of seconds", text)))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(invalid(format!("{:?} must be positive", text)));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| invalid(format!("{:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::mock::ScriptedRunner;

    fn facade() -> (Git, Arc<ScriptedRunner>) {
        let runner = Arc::new(ScriptedRunner::new());
        let git = Git::with_runner("/repo", Config::default(), runner.clone());
        (git, runner)
    }

    mod execution {
        use super::*;

        #[test]
        fn runs_configured_binary_in_work_dir() {
            let (git, runner) = facade();
            git.add(&["a.txt"]).unwrap();

            let call = &runner.calls()[0];
            assert_eq!(call.program, "git");
            assert_eq!(call.args, ["add", "--", "a.txt"]);
            assert_eq!(call.options.cwd.as_deref(), Some(Path::new("/repo")));
            assert!(call.options.timeout.is_none());
        }

        #[test]
        fn execution_timeout_reaches_runner_not_argv() {
            let (git, runner) = facade();
            git.fetch(Some("origin"), false, Some(Duration::from_millis(1500)))
                .unwrap();

            let call = &runner.calls()[0];
            assert_eq!(call.args, ["fetch", "--quiet", "origin"]);
            assert_eq!(call.options.timeout, Some(Duration::from_millis(1500)));
        }

        #[test]
        fn config_timeout_is_default() {
            let runner = Arc::new(ScriptedRunner::new());
            let mut config = Config::default();
            config.global.timeout_secs = Some(7);
            let git = Git::with_runner("/repo", config, runner.clone());

            git.fetch(None, true, None).unwrap();
            assert_eq!(runner.calls()[0].options.timeout, Some(Duration::from_secs(7)));
            assert_eq!(runner.calls()[0].args, ["fetch", "--all", "--prune", "--quiet"]);
        }

        #[test]
        fn execution_env_overrides_config() {
            let runner = Arc::new(ScriptedRunner::new());
            let mut config = Config::default();
            config.global.env = Some(
                [("GIT_TERMINAL_PROMPT", "1"), ("LANG", "C")]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            );
            let git = Git::with_runner("/repo", config, runner.clone());

            git.run(
                remote::fetch(),
                CallArgs::new()
                    .arg("origin")
                    .set("env", Value::map([("GIT_TERMINAL_PROMPT", "0")])),
            )
            .unwrap();

            let env = &runner.calls()[0].options.env;
            assert_eq!(env["GIT_TERMINAL_PROMPT"], "0");
            assert_eq!(env["LANG"], "C");
        }

        #[test]
        fn bad_timeout_value() {
            let (git, _) = facade();
            let err = git
                .run(remote::fetch(), CallArgs::new().set("timeout", "soon"))
                .unwrap_err();
            assert!(matches!(err, GitError::ExecutionOption { .. }));

            let err = git
                .run(remote::fetch(), CallArgs::new().set("timeout", "-1"))
                .unwrap_err();
            assert!(matches!(err, GitError::ExecutionOption { .. }));

            let err = git
                .run(remote::fetch(), CallArgs::new().set("timeout", "1e30"))
                .unwrap_err();
            assert!(matches!(err, GitError::ExecutionOption { .. }));
        }

        #[test]
        fn argument_errors_never_run() {
            let (git, runner) = facade();
            let err = git.run(branch::copy(), CallArgs::new()).unwrap_err();
            assert!(matches!(err, GitError::Arguments(_)));
            assert!(runner.calls().is_empty());
        }
    }

    mod operations {
        use super::*;

        const HEAD: &str = "0123456789abcdef0123456789abcdef01234567";

        #[test]
        fn commit_returns_head() {
            let (git, runner) = facade();
            runner.push_stdout("");
            runner.push_stdout(format!("{}\n", HEAD));

            let oid = git.commit("initial", false).unwrap();
            assert_eq!(oid.as_str(), HEAD);
            let calls = runner.calls();
            assert_eq!(calls[0].args, ["commit", "--message", "initial"]);
            assert_eq!(calls[1].args, ["rev-parse", "--verify", "--quiet", "HEAD"]);
        }

        #[test]
        fn copy_branch_reads_back_target() {
            let (git, runner) = facade();
            let name = git.copy_branch(None, "backup", false).unwrap();
            assert_eq!(name.as_str(), "backup");
            assert_eq!(runner.last_args().unwrap(), ["branch", "--copy", "backup"]);

            git.copy_branch(Some("main"), "main-copy", true).unwrap();
            assert_eq!(
                runner.last_args().unwrap(),
                ["branch", "--copy", "--force", "main", "main-copy"]
            );
        }

        #[test]
        fn invalid_branch_name_rejected_before_running() {
            let (git, runner) = facade();
            let err = git.create_branch("bad..name", None).unwrap_err();
            assert!(matches!(err, GitError::InvalidName(_)));
            assert!(runner.calls().is_empty());
        }

        #[test]
        fn branches_are_parsed() {
            let (git, runner) = facade();
            runner.push_stdout("* main\n  topic\n");
            let branches = git.branches(false).unwrap();
            assert_eq!(branches.len(), 2);
            assert!(branches[0].current);
        }

        #[test]
        fn config_get_missing_key_is_none() {
            let (git, runner) = facade();
            runner.push(Err(ExecError::Failed {
                command: "git config --get x.y".into(),
                status: 1,
                stdout: String::new(),
                stderr: String::new(),
            }));
            assert_eq!(git.config_get("x.y").unwrap(), None);
        }

        #[test]
        fn current_branch_detached() {
            let (git, runner) = facade();
            runner.push_stdout("HEAD\n");
            assert_eq!(git.current_branch().unwrap(), None);
            runner.push_stdout("main\n");
            assert_eq!(git.current_branch().unwrap().as_deref(), Some("main"));
        }

        #[test]
        fn reset_mode_flag() {
            let (git, runner) = facade();
            git.reset(ResetMode::Hard, Some("HEAD~1")).unwrap();
            assert_eq!(
                runner.last_args().unwrap(),
                ["reset", "--hard", "--quiet", "HEAD~1"]
            );
        }

        #[test]
        fn annotated_tag_when_message_given() {
            let (git, runner) = facade();
            git.create_tag("v1", Some("first"), None).unwrap();
            assert_eq!(
                runner.last_args().unwrap(),
                ["tag", "--annotate", "--message", "first", "v1"]
            );
        }

        #[test]
        fn parse_errors_surface() {
            let (git, runner) = facade();
            runner.push_stdout("garbage\n");
            let err = git.branches(false).unwrap_err();
            assert!(matches!(err, GitError::Parse(_)));
        }
    }
}
