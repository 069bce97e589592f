//! commands::checkout
//!
//! Branch switching and merging.

use crate::core::args::{OperandSpec, OptionSpec, Spec, Value};

command! {
    /// `git checkout [-b <new>] [<commit>] [-- <paths>...]`
    pub fn checkout = "checkout",
    Spec::builder()
        .literal("checkout")
        .flag(["force", "f"])
        .flag(["quiet", "q"])
        .value(["b", "new_branch"])
        .value(["B", "reset_branch"])
        .value("orphan")
        .flag("detach")
        .option(OptionSpec::flag_or_value("track").inline().negatable())
        .operand("commit")
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .conflicts(["b", "B", "orphan", "detach"])
        .requires("track", "b")
}

command! {
    /// `git merge [<commit>...]`
    pub fn merge = "merge",
    Spec::builder()
        .literal("merge")
        .option(OptionSpec::flag("ff").negatable())
        .flag("ff_only")
        .flag("squash")
        .option(OptionSpec::flag("commit").negatable())
        .value(["message", "m"])
        .value(["strategy", "s"])
        .option(OptionSpec::value(["strategy_option", "X"]).repeatable())
        .flag("abort")
        .flag(["quiet", "q"])
        .operand(OperandSpec::new("commits").repeatable())
        .conflicts(["ff", "ff_only"])
        .conflicting_values(
            ["squash", "commit"],
            [[Value::Bool(true), Value::Bool(true)]],
        )
        .conflicting_values(
            ["squash", "ff"],
            [[Value::Bool(true), Value::Bool(false)]],
        )
        .conflicts(["abort", "commits"])
}
