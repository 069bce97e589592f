//! commands
//!
//! Static argument specifications for every wrapped git operation.
//!
//! Each definition is built once, on first use, and shared for the life of
//! the process. Definitions are plain declarations: all validation and
//! rendering happens in [`crate::core::args`].
//!
//! # Registry
//!
//! [`registry`] lists every definition under a stable dotted name
//! (`branch.copy`, `stash.list`, ...). The CLI's `render` subcommand and the
//! test-suite use it; the facade calls the definition functions directly.
//!
//! # Example
//!
//! ```
//! use gitbind::commands;
//! use gitbind::core::args::CallArgs;
//!
//! let bound = commands::branch::copy()
//!     .bind(CallArgs::new().arg("old").arg("new"))
//!     .unwrap();
//! assert_eq!(bound.tokens(), ["branch", "--copy", "old", "new"]);
//! ```

use crate::core::args::{Spec, SpecBuilder};

/// Declare a lazily built, process-wide specification.
macro_rules! command {
    ($(#[$doc:meta])* $vis:vis fn $fn_name:ident = $label:literal, $build:expr) => {
        $(#[$doc])*
        $vis fn $fn_name() -> &'static $crate::core::args::Spec {
            static SPEC: ::std::sync::OnceLock<$crate::core::args::Spec> =
                ::std::sync::OnceLock::new();
            SPEC.get_or_init(|| $crate::commands::define($label, $build))
        }
    };
}

pub mod branch;
pub mod checkout;
pub mod history;
pub mod index;
pub mod remote;
pub mod repo;
pub mod stash;
pub mod tag;

/// Freeze a definition.
///
/// Definitions are constants of this crate; a broken one is a programming
/// error caught by `every_definition_builds` below, so it panics.
pub(crate) fn define(label: &str, builder: SpecBuilder) -> Spec {
    builder
        .build()
        .unwrap_or_else(|err| panic!("invalid definition for `git {}`: {}", label, err))
}

/// A registered command definition.
#[derive(Debug, Clone, Copy)]
pub struct Definition {
    /// Stable dotted name, e.g. `branch.copy`
    pub name: &'static str,
    /// One-line description
    pub about: &'static str,
    spec: fn() -> &'static Spec,
}

impl Definition {
    pub fn spec(&self) -> &'static Spec {
        (self.spec)()
    }
}

const fn def(name: &'static str, about: &'static str, spec: fn() -> &'static Spec) -> Definition {
    Definition { name, about, spec }
}

static REGISTRY: &[Definition] = &[
    def("init", "Create an empty repository", repo::init),
    def("clone", "Clone a repository", remote::clone),
    def("config.get", "Read a config value", repo::config_get),
    def("config.set", "Write a config value", repo::config_set),
    def("config.list", "List config values", repo::config_list),
    def("add", "Stage paths", index::add),
    def("rm", "Remove paths from the index", index::rm),
    def("commit", "Record staged changes", index::commit),
    def("status", "Porcelain working tree status", index::status),
    def("reset", "Reset HEAD or paths", index::reset),
    def("checkout", "Switch branches or restore paths", checkout::checkout),
    def("merge", "Join histories", checkout::merge),
    def("log", "Commit history in a parseable format", history::log),
    def("show", "Show objects", history::show),
    def("diff", "Numstat diff", history::diff),
    def("rev-parse", "Resolve revisions", history::rev_parse),
    def("branch.list", "List branches", branch::list),
    def("branch.create", "Create a branch", branch::create),
    def("branch.copy", "Copy a branch", branch::copy),
    def("branch.move", "Rename a branch", branch::rename),
    def("branch.delete", "Delete branches", branch::delete),
    def("tag.list", "List tags", tag::list),
    def("tag.create", "Create a tag", tag::create),
    def("tag.delete", "Delete tags", tag::delete),
    def("remote.list", "List remotes with URLs", remote::list),
    def("remote.add", "Add a remote", remote::add),
    def("remote.remove", "Remove a remote", remote::remove),
    def("fetch", "Download objects and refs", remote::fetch),
    def("push", "Update remote refs", remote::push),
    def("stash.push", "Stash local changes", stash::push),
    def("stash.pop", "Apply and drop a stash", stash::pop),
    def("stash.list", "List stashes in a parseable format", stash::list),
];

/// Every registered definition, in a stable order.
pub fn registry() -> &'static [Definition] {
    REGISTRY
}

/// Find a definition by its dotted name.
pub fn lookup(name: &str) -> Option<&'static Definition> {
    REGISTRY.iter().find(|d| d.name == name)
}
