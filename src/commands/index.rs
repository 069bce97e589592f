//! commands::index
//!
//! Commands that read or write the index: add, rm, commit, status, reset.

use crate::core::args::{OperandSpec, OptionSpec, Spec};

command! {
    /// `git add [-- <paths>...]`
    pub fn add = "add",
    Spec::builder()
        .literal("add")
        .flag(["all", "A"])
        .flag(["update", "u"])
        .flag(["force", "f"])
        .flag(["dry_run", "n"])
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .conflicts(["all", "update"])
        .requires_one_of(["all", "update", "paths"])
}

command! {
    /// `git rm -- <paths>...`
    pub fn rm = "rm",
    Spec::builder()
        .literal("rm")
        .flag("cached")
        .flag(["force", "f"])
        .flag("r")
        .flag(["quiet", "q"])
        .operand(OperandSpec::new("paths").repeatable().required().separator("--"))
}

command! {
    /// `git commit`; never opens an editor, so a message source is required.
    pub fn commit = "commit",
    Spec::builder()
        .literal("commit")
        .flag(["all", "a"])
        .flag("amend")
        .flag("allow_empty")
        .flag("no_edit")
        .option(OptionSpec::flag("verify").negatable())
        .value(["message", "m"])
        .value("author")
        .value("date")
        .option(OptionSpec::key_value("trailer").inline())
        .option(OptionSpec::flag_or_value(["gpg_sign", "S"]).inline().negatable())
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .requires_exactly_one_of(["message", "no_edit"])
        .requires("no_edit", "amend")
        .conflicts(["all", "paths"])
}

command! {
    /// `git status --porcelain=v1`, parsed by [`crate::parse::status`].
    pub fn status = "status",
    Spec::builder()
        .literal("status")
        .option(OptionSpec::value("porcelain").inline().default("v1"))
        .flag(["branch", "b"])
        .option(
            OptionSpec::flag_or_value(["untracked_files", "u"])
                .inline()
                .allowed_values(["no", "normal", "all"]),
        )
        .flag("ignored")
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .allowed_values("porcelain", ["v1"])
}

command! {
    /// `git reset [<mode>] [<commit>] [-- <paths>...]`
    pub fn reset = "reset",
    Spec::builder()
        .literal("reset")
        .flag("soft")
        .flag("mixed")
        .flag("hard")
        .flag("merge")
        .flag("keep")
        .flag(["quiet", "q"])
        .operand("commit")
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .conflicts(["soft", "mixed", "hard", "merge", "keep"])
        .conflicts(["hard", "paths"])
        .conflicts(["soft", "paths"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::args::{ArgumentError, CallArgs, Value};

    #[test]
    fn add_needs_something_to_stage() {
        let err = add().bind(CallArgs::new()).unwrap_err();
        assert!(matches!(err, ArgumentError::RequiresOneOf { .. }));

        let bound = add().bind(CallArgs::new().set("A", true)).unwrap();
        assert_eq!(bound.tokens(), ["add", "-A"]);
    }

    #[test]
    fn commit_message_xor_no_edit() {
        let bound = commit()
            .bind(CallArgs::new().set("m", "initial"))
            .unwrap();
        assert_eq!(bound.tokens(), ["commit", "--message", "initial"]);

        let err = commit().bind(CallArgs::new()).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::RequiresExactlyOneOf {
                names: vec!["message".into(), "no_edit".into()],
                present: vec![],
            }
        );
    }

    #[test]
    fn commit_no_edit_requires_amend() {
        let err = commit().bind(CallArgs::new().set("no_edit", true)).unwrap_err();
        assert!(matches!(err, ArgumentError::MissingRequirement { .. }));

        let bound = commit()
            .bind(CallArgs::new().set("no_edit", true).set("amend", true))
            .unwrap();
        assert_eq!(bound.tokens(), ["commit", "--amend", "--no-edit"]);
    }

    #[test]
    fn commit_trailers_and_signing() {
        let bound = commit()
            .bind(
                CallArgs::new()
                    .set("message", "fix")
                    .set("verify", false)
                    .set("trailer", Value::map([("Signed-off-by", "A <a@b.c>")]))
                    .set("S", "KEYID"),
            )
            .unwrap();
        assert_eq!(
            bound.tokens(),
            [
                "commit",
                "--no-verify",
                "--message",
                "fix",
                "--trailer=Signed-off-by=A <a@b.c>",
                "--gpg-sign=KEYID"
            ]
        );
    }

    #[test]
    fn status_defaults_to_porcelain_v1() {
        let bound = status().bind(CallArgs::new()).unwrap();
        assert_eq!(bound.tokens(), ["status", "--porcelain=v1"]);
    }

    #[test]
    fn status_rejects_unknown_untracked_mode() {
        let err = status()
            .bind(CallArgs::new().set("untracked_files", "some"))
            .unwrap_err();
        assert_eq!(
            err,
            ArgumentError::DisallowedValue {
                name: "untracked_files".into(),
                value: "some".into(),
                allowed: vec!["no".into(), "normal".into(), "all".into()],
            }
        );
    }

    #[test]
    fn reset_modes_are_exclusive() {
        let err = reset()
            .bind(CallArgs::new().set("soft", true).set("hard", true))
            .unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Conflict {
                names: vec!["soft".into(), "hard".into()]
            }
        );
    }

    #[test]
    fn reset_paths() {
        let bound = reset()
            .bind(CallArgs::new().arg("HEAD").arg("a.txt").arg("b.txt"))
            .unwrap();
        assert_eq!(bound.tokens(), ["reset", "HEAD", "--", "a.txt", "b.txt"]);
    }
}
