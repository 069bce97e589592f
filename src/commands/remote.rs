//! commands::remote
//!
//! Remote management plus the network operations: clone, fetch and push.
//! The network operations accept execution-only `timeout` (seconds) and
//! `env` (map) values that never reach git's argument vector.

use crate::core::args::{OperandSpec, OptionSpec, Spec};

command! {
    /// `git remote --verbose`, parsed by [`crate::parse::remote`].
    pub fn list = "remote --verbose",
    Spec::builder().literals(["remote", "--verbose"])
}

command! {
    /// `git remote add <name> <url>`
    pub fn add = "remote add",
    Spec::builder()
        .literals(["remote", "add"])
        .flag(["fetch", "f"])
        .flag("tags")
        .option(OptionSpec::value(["t", "track"]).repeatable())
        .value(["m", "master"])
        .option(OptionSpec::flag_or_value("mirror").inline().allowed_values(["fetch", "push"]))
        .operand(OperandSpec::new("name").required())
        .operand(OperandSpec::new("url").required())
        .conflicts(["mirror", "t"])
}

command! {
    /// `git remote remove <name>`
    pub fn remove = "remote remove",
    Spec::builder()
        .literals(["remote", "remove"])
        .operand(OperandSpec::new("name").required())
}

command! {
    /// `git clone <repository> [<directory>]`
    pub fn clone = "clone",
    Spec::builder()
        .literal("clone")
        .flag("bare")
        .flag("mirror")
        .flag(["quiet", "q"])
        .value(["branch", "b"])
        .value(["origin", "o"])
        .option(OptionSpec::value("depth").inline())
        .option(OptionSpec::flag("single_branch").negatable())
        .flag("recurse_submodules")
        .option(OptionSpec::key_value(["config", "c"]))
        .execution_only("timeout")
        .execution_only("env")
        .operand(OperandSpec::new("repository").required())
        .operand("directory")
        .conflicts(["bare", "mirror"])
}

command! {
    /// `git fetch [<remote> [<refspec>...]]`
    pub fn fetch = "fetch",
    Spec::builder()
        .literal("fetch")
        .flag("all")
        .flag(["prune", "p"])
        .option(OptionSpec::flag(["tags", "t"]).negatable())
        .flag(["force", "f"])
        .flag(["quiet", "q"])
        .option(OptionSpec::value("depth").inline())
        .execution_only("timeout")
        .execution_only("env")
        .operand("remote")
        .operand(OperandSpec::new("refspecs").repeatable())
        .conflicts(["all", "remote"])
}

command! {
    /// `git push [<remote> [<refspec>...]]`
    pub fn push = "push",
    Spec::builder()
        .literal("push")
        .flag("all")
        .flag("tags")
        .flag(["force", "f"])
        .option(OptionSpec::flag_or_value("force_with_lease").inline())
        .flag(["set_upstream", "u"])
        .flag(["delete", "d"])
        .flag(["dry_run", "n"])
        .option(OptionSpec::flag("verify").negatable())
        .execution_only("timeout")
        .execution_only("env")
        .operand("remote")
        .operand(OperandSpec::new("refspecs").repeatable())
        .conflicts(["all", "tags"])
        .conflicts(["all", "delete"])
        .requires("delete", "refspecs")
        .requires("set_upstream", "remote")
}
