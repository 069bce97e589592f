//! commands::repo
//!
//! Repository creation and `git config` access.

use crate::core::args::{OperandSpec, OptionSpec, Spec};

command! {
    /// `git init [<directory>]`
    pub fn init = "init",
    Spec::builder()
        .literal("init")
        .flag("bare")
        .flag(["quiet", "q"])
        .option(OptionSpec::value(["initial_branch", "b"]).inline())
        .operand("directory")
}

command! {
    /// `git config --get <name>`
    pub fn config_get = "config --get",
    Spec::builder()
        .literals(["config", "--get"])
        .flag("global")
        .flag("local")
        .operand(OperandSpec::new("name").required())
        .conflicts(["global", "local"])
}

command! {
    /// `git config <name> <value>`
    pub fn config_set = "config",
    Spec::builder()
        .literal("config")
        .flag("global")
        .flag("local")
        .flag("add")
        .operand(OperandSpec::new("name").required())
        .operand(OperandSpec::new("value").required())
        .conflicts(["global", "local"])
}

command! {
    /// `git config --list`, parsed by [`crate::parse::config`].
    pub fn config_list = "config --list",
    Spec::builder()
        .literals(["config", "--list"])
        .flag("global")
        .flag("local")
        .conflicts(["global", "local"])
}
