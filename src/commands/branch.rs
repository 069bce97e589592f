//! commands::branch
//!
//! `git branch` in its list, create, copy, move and delete forms.

use crate::core::args::{OperandSpec, OptionSpec, Spec};

command! {
    /// `git branch --list`, output parsed by [`crate::parse::branch`].
    pub fn list = "branch --list",
    Spec::builder()
        .literals(["branch", "--list"])
        .flag(["all", "a"])
        .flag(["remotes", "r"])
        .value("contains")
        .option(OptionSpec::flag_or_value("merged").inline())
        .option(OptionSpec::flag_or_value("no_merged").inline())
        .option(OptionSpec::value("sort").inline().repeatable())
        .operand(OperandSpec::new("patterns").repeatable())
        .conflicts(["all", "remotes"])
        .conflicts(["merged", "no_merged"])
}

command! {
    /// `git branch <name> [<start-point>]`
    pub fn create = "branch",
    Spec::builder()
        .literal("branch")
        .flag(["force", "f"])
        .option(OptionSpec::flag_or_value("track").inline().negatable())
        .operand(OperandSpec::new("branch_name").required())
        .operand("start_point")
}

command! {
    /// `git branch --copy [<old>] <new>`; a single operand copies the current branch.
    pub fn copy = "branch --copy",
    Spec::builder()
        .literals(["branch", "--copy"])
        .flag(["force", "f"])
        .operand("old_branch")
        .operand(OperandSpec::new("new_branch").required())
}

command! {
    /// `git branch --move [<old>] <new>`; a single operand renames the current branch.
    pub fn rename = "branch --move",
    Spec::builder()
        .literals(["branch", "--move"])
        .flag(["force", "f"])
        .operand("old_branch")
        .operand(OperandSpec::new("new_branch").required())
}

command! {
    /// `git branch --delete <name>...`
    pub fn delete = "branch --delete",
    Spec::builder()
        .literals(["branch", "--delete"])
        .flag(["force", "f"])
        .flag(["remotes", "r"])
        .operand(OperandSpec::new("branch_names").repeatable().required())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::args::{ArgumentError, CallArgs, Value};

    #[test]
    fn copy_single_operand_targets_new_branch() {
        let bound = copy().bind(CallArgs::new().arg("new-name")).unwrap();
        assert_eq!(bound.tokens(), ["branch", "--copy", "new-name"]);
        assert_eq!(bound.str("new_branch"), Some("new-name"));
        assert!(bound.get("old_branch").unwrap().is_nil());
    }

    #[test]
    fn copy_two_operands_with_force() {
        let bound = copy()
            .bind(
                CallArgs::new()
                    .arg("old-name")
                    .arg("new-name")
                    .set("force", true),
            )
            .unwrap();
        assert_eq!(
            bound.tokens(),
            ["branch", "--copy", "--force", "old-name", "new-name"]
        );
    }

    #[test]
    fn list_sort_renders_inline_in_order() {
        let bound = list()
            .bind(CallArgs::new().set("sort", Value::list(["refname", "-date"])))
            .unwrap();
        assert_eq!(
            bound.tokens(),
            ["branch", "--list", "--sort=refname", "--sort=-date"]
        );
    }

    #[test]
    fn list_all_and_remotes_conflict() {
        let err = list()
            .bind(CallArgs::new().set("a", true).set("r", true))
            .unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Conflict {
                names: vec!["all".into(), "remotes".into()]
            }
        );
    }

    #[test]
    fn create_with_negated_track() {
        let bound = create()
            .bind(CallArgs::new().arg("topic").arg("main").set("track", false))
            .unwrap();
        assert_eq!(bound.tokens(), ["branch", "--no-track", "topic", "main"]);
    }

    #[test]
    fn delete_requires_a_name() {
        let err = delete().bind(CallArgs::new()).unwrap_err();
        assert!(matches!(err, ArgumentError::MissingOperands { .. }));
    }

    #[test]
    fn delete_accepts_a_list() {
        let bound = delete()
            .bind(CallArgs::new().arg(Value::list(["a", "b"])).set("f", true))
            .unwrap();
        assert_eq!(bound.tokens(), ["branch", "--delete", "--force", "a", "b"]);
    }
}
