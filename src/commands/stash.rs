//! commands::stash

use crate::core::args::{OperandSpec, OptionSpec, Spec};

/// `stash list` format: selector, commit and subject separated by `\x1f`.
pub const STASH_FORMAT: &str = "%gd%x1f%H%x1f%gs";

command! {
    /// `git stash push [-- <paths>...]`
    pub fn push = "stash push",
    Spec::builder()
        .literals(["stash", "push"])
        .value(["message", "m"])
        .flag(["include_untracked", "u"])
        .flag(["all", "a"])
        .option(OptionSpec::flag(["keep_index", "k"]).negatable())
        .flag(["quiet", "q"])
        .operand(OperandSpec::new("paths").repeatable().separator("--"))
        .conflicts(["include_untracked", "all"])
}

command! {
    /// `git stash pop [<stash>]`
    pub fn pop = "stash pop",
    Spec::builder()
        .literals(["stash", "pop"])
        .flag("index")
        .flag(["quiet", "q"])
        .operand("stash")
}

command! {
    /// `git stash list`, parsed by [`crate::parse::stash`].
    pub fn list = "stash list",
    Spec::builder()
        .literals(["stash", "list"])
        .option(OptionSpec::value("format").inline().default(STASH_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::args::CallArgs;

    #[test]
    fn push_with_paths_emits_separator() {
        let bound = push()
            .bind(
                CallArgs::new()
                    .arg("src/a.rs")
                    .arg("src/b.rs")
                    .set("message", "wip"),
            )
            .unwrap();
        assert_eq!(
            bound.tokens(),
            ["stash", "push", "--message", "wip", "--", "src/a.rs", "src/b.rs"]
        );
    }

    #[test]
    fn push_without_paths_has_no_separator() {
        let bound = push().bind(CallArgs::new().set("k", false)).unwrap();
        assert_eq!(bound.tokens(), ["stash", "push", "--no-keep-index"]);
    }

    #[test]
    fn list_uses_default_format() {
        let bound = list().bind(CallArgs::new()).unwrap();
        assert_eq!(
            bound.tokens(),
            ["stash", "list", "--format=%gd%x1f%H%x1f%gs"]
        );
        assert!(!bound.is_present("format"));
    }
}
