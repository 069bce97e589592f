//! commands::tag

use crate::core::args::{OperandSpec, OptionSpec, Spec};

command! {
    /// `git tag --list`, one name per line.
    pub fn list = "tag --list",
    Spec::builder()
        .literals(["tag", "--list"])
        .option(OptionSpec::value("sort").inline().repeatable())
        .option(OptionSpec::value("contains").inline())
        .option(OptionSpec::value("points_at").inline())
        .operand(OperandSpec::new("patterns").repeatable())
}

command! {
    /// `git tag <name> [<commit>]`
    ///
    /// An annotated tag needs a message; the wrapper never opens an editor.
    pub fn create = "tag",
    Spec::builder()
        .literal("tag")
        .flag(["annotate", "a"])
        .flag(["sign", "s"])
        .flag(["force", "f"])
        .value(["message", "m"])
        .operand(OperandSpec::new("tag_name").required())
        .operand("commit")
        .requires("annotate", "message")
        .requires("sign", "message")
}

command! {
    /// `git tag --delete <name>...`
    pub fn delete = "tag --delete",
    Spec::builder()
        .literals(["tag", "--delete"])
        .operand(OperandSpec::new("tag_names").repeatable().required())
}
