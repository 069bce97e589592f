//! core::args
//!
//! The Arguments engine: declare a command's full argument surface once,
//! then bind each call's arguments into an ordered token list.
//!
//! # Components
//!
//! - [`spec`] - declaration DSL and the immutable [`Spec`]
//! - [`allocate`] - positional operand allocation
//! - [`constraints`] - cross-option rule evaluation
//! - [`render`] - per-kind token rendering
//! - [`bind`] - the binder and the [`Bound`] result
//!
//! # Invariants
//!
//! - Specs are immutable once built and safe to share between threads.
//! - Binding is pure: no I/O, no shared mutable state.
//! - Rendering order equals declaration order, never grouped by kind.
//! - Every error is raised before any token is rendered.
//!
//! # Example
//!
//! ```
//! use gitbind::core::args::{CallArgs, OptionSpec, Spec, Value};
//!
//! let spec = Spec::builder()
//!     .literal("branch")
//!     .option(OptionSpec::value("sort").inline().repeatable())
//!     .build()
//!     .unwrap();
//!
//! let bound = spec
//!     .bind(CallArgs::new().set("sort", Value::list(["refname", "-date"])))
//!     .unwrap();
//! assert_eq!(bound.tokens(), ["branch", "--sort=refname", "--sort=-date"]);
//! ```

pub mod allocate;
pub mod bind;
pub mod constraints;
pub mod error;
pub mod render;
pub mod spec;
pub mod value;

pub use bind::Bound;
pub use error::{ArgumentError, DefinitionError};
pub use spec::{
    Constraint, CustomRenderer, IntoNames, Item, OperandSpec, OptionKind, OptionSpec, Spec,
    SpecBuilder, ValuePredicate,
};
pub use value::{CallArgs, Value};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn spec_is_shareable() {
        assert_send_sync::<Spec>();
    }
}
