//! commands::history
//!
//! Read-only history commands: log, show, diff and rev-parse.

use crate::core::args::{OperandSpec, OptionSpec, Spec, Value};

/// Log format understood by [`crate::parse::log`].
///
/// Fields are separated by `\x1f` and records terminated by `\x1e`, so
/// subjects and bodies may contain anything but those two bytes.
pub const LOG_FORMAT: &str =
    "%H%x1f%P%x1f%an%x1f%ae%x1f%aI%x1f%cn%x1f%ce%x1f%cI%x1f%s%x1f%b%x1e";

/// `between: [from, to]` renders `from..to`; a scalar renders as given.
fn render_range(value: &Value) -> Vec<String> {
    match value {
        Value::List(ends) if ends.len() == 2 => vec![format!("{}..{}", ends[0], ends[1])],
        other => other.as_strs().into_iter().map(String::from).collect(),
    }
}

fn is_zero(value: &Value) -> bool {
    value.as_str() == Some("0")
}

command! {
    /// `git log` with a machine-readable format.
    pub fn log = "log",
    Spec::builder()
        .literal("log")
        .option(OptionSpec::value(["max_count", "n"]).inline())
        .option(OptionSpec::value("skip").inline())
        .option(OptionSpec::value("format").inline().default(LOG_FORMAT))
        .option(OptionSpec::value("author").inline())
        .option(OptionSpec::value("since").inline())
        .option(OptionSpec::value("until").inline())
        .option(OptionSpec::value("grep").inline().repeatable())
        .flag("all")
        .flag("first_parent")
        .flag("merges")
        .flag("no_merges")
        .flag("follow")
        .custom("between", render_range)
        .operand("revision_range")
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .conflicts(["merges", "no_merges"])
        .conflicts(["between", "revision_range"])
        .requires("follow", "paths")
        .requires_when("skip", "max_count", is_zero)
}

command! {
    /// `git show [<object>...]`
    pub fn show = "show",
    Spec::builder()
        .literal("show")
        .option(OptionSpec::value("format").inline())
        .flag("stat")
        .flag(["no_patch", "s"])
        .operand(OperandSpec::new("objects").repeatable())
}

command! {
    /// `git diff --numstat [<commit> [<commit>]] [-- <paths>...]`
    pub fn diff = "diff --numstat",
    Spec::builder()
        .literals(["diff", "--numstat"])
        .flag(["cached", "staged"])
        .flag(["ignore_all_space", "w"])
        .option(OptionSpec::value("diff_filter").inline())
        .operand("from")
        .operand("to")
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
}

command! {
    /// `git rev-parse [<args>...]`
    pub fn rev_parse = "rev-parse",
    Spec::builder()
        .literal("rev-parse")
        .flag("verify")
        .flag(["quiet", "q"])
        .flag("abbrev_ref")
        .option(OptionSpec::flag_or_value("short").inline())
        .flag("show_toplevel")
        .flag("git_dir")
        .flag("is_inside_work_tree")
        .operand(OperandSpec::new("revisions").repeatable())
}
