//! core::args::spec
//!
//! Declaration DSL: literals, options, operands and constraints, frozen
//! into an immutable [`Spec`].
//!
//! # Invariants
//!
//! - Declaration order is preserved and equals rendering order.
//! - Every name and alias is unique across options and operands.
//! - Constraints only reference declared names (resolved to canonical names
//!   when the spec is built).
//! - At most one repeatable operand, and no optional operand after it.
//!
//! # Example
//!
//! ```
//! use gitbind::core::args::{CallArgs, OperandSpec, Spec};
//!
//! let spec = Spec::builder()
//!     .literal("branch")
//!     .literal("--copy")
//!     .flag(["force", "f"])
//!     .operand("old_branch")
//!     .operand(OperandSpec::new("new_branch").required())
//!     .build()
//!     .unwrap();
//!
//! let bound = spec.bind(CallArgs::new().arg("new-name")).unwrap();
//! assert_eq!(bound.tokens(), ["branch", "--copy", "new-name"]);
//! ```

use std::collections::HashMap;
use std::fmt;

use super::bind::check_option_value;
use super::error::DefinitionError;
use super::value::Value;

/// Caller-supplied rendering for shapes the built-in kinds do not cover.
pub type CustomRenderer = fn(&Value) -> Vec<String>;

/// Guard evaluated against the value of the requiring option.
pub type ValuePredicate = fn(&Value) -> bool;

/// How a named option turns its value into tokens.
#[derive(Clone, Copy)]
pub enum OptionKind {
    /// Boolean switch.
    Flag,
    /// Flag followed by a value.
    Value,
    /// Bare flag for `true`, flag plus value for a scalar.
    FlagOrValue,
    /// One `flag key=value` occurrence per map entry.
    KeyValue,
    /// Rendered by a caller-supplied function.
    Custom(CustomRenderer),
    /// Never rendered; handed to the executor instead.
    ExecutionOnly,
}

impl OptionKind {
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Flag => "flag",
            OptionKind::Value => "value",
            OptionKind::FlagOrValue => "flag_or_value",
            OptionKind::KeyValue => "key_value",
            OptionKind::Custom(_) => "custom",
            OptionKind::ExecutionOnly => "execution_only",
        }
    }
}

impl fmt::Debug for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything usable as a list of option names (first one is canonical).
pub trait IntoNames {
    fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl<const N: usize> IntoNames for [&str; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoNames for &[&str] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoNames for Vec<&str> {
    fn into_names(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

impl IntoNames for Vec<String> {
    fn into_names(self) -> Vec<String> {
        self
    }
}

/// Format a declared name as a command-line flag.
///
/// Single characters use one dash, longer names two; `_` becomes `-`.
pub fn flag_token(name: &str) -> String {
    let dashed = name.replace('_', "-");
    if dashed.chars().count() == 1 {
        format!("-{}", dashed)
    } else {
        format!("--{}", dashed)
    }
}

/// One declared named option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    names: Vec<String>,
    kind: OptionKind,
    negatable: bool,
    inline: bool,
    repeatable: bool,
    required: bool,
    default: Option<Value>,
    allowed_values: Option<Vec<String>>,
}

impl OptionSpec {
    fn new(names: impl IntoNames, kind: OptionKind) -> Self {
        Self {
            names: names.into_names(),
            kind,
            negatable: false,
            inline: false,
            repeatable: false,
            required: false,
            default: None,
            allowed_values: None,
        }
    }

    pub fn flag(names: impl IntoNames) -> Self {
        Self::new(names, OptionKind::Flag)
    }

    pub fn value(names: impl IntoNames) -> Self {
        Self::new(names, OptionKind::Value)
    }

    pub fn flag_or_value(names: impl IntoNames) -> Self {
        Self::new(names, OptionKind::FlagOrValue)
    }

    pub fn key_value(names: impl IntoNames) -> Self {
        Self::new(names, OptionKind::KeyValue)
    }

    pub fn custom(names: impl IntoNames, render: CustomRenderer) -> Self {
        Self::new(names, OptionKind::Custom(render))
    }

    pub fn execution_only(names: impl IntoNames) -> Self {
        Self::new(names, OptionKind::ExecutionOnly)
    }

    /// Render explicit `false` as `--no-<name>`.
    pub fn negatable(mut self) -> Self {
        self.negatable = true;
        self
    }

    /// Join flag and value with `=` into one token.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Accept a list, rendering one occurrence per element.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restrict the value to a closed set.
    pub fn allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn is_negatable(&self) -> bool {
        self.negatable
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The rendered flag, e.g. `--force` or `-f`.
    pub fn flag_token(&self) -> String {
        flag_token(self.name())
    }

    /// The negated flag, always long form.
    pub fn negated_token(&self) -> String {
        format!("--no-{}", self.name().replace('_', "-"))
    }

    fn check_modifiers(&self) -> Result<(), DefinitionError> {
        let invalid = |message: &str| DefinitionError::InvalidModifier {
            name: self.name().to_string(),
            message: format!("{} on a {} option", message, self.kind.label()),
        };
        if self.negatable && !matches!(self.kind, OptionKind::Flag | OptionKind::FlagOrValue) {
            return Err(invalid("negatable"));
        }
        if self.inline
            && !matches!(
                self.kind,
                OptionKind::Value | OptionKind::FlagOrValue | OptionKind::KeyValue
            )
        {
            return Err(invalid("inline"));
        }
        if self.repeatable && !matches!(self.kind, OptionKind::Value) {
            return Err(invalid("repeatable"));
        }
        if self.allowed_values.is_some()
            && matches!(self.kind, OptionKind::Flag | OptionKind::KeyValue)
        {
            return Err(invalid("allowed_values"));
        }
        if let Some(default) = &self.default {
            self.check_default(default)?;
        }
        Ok(())
    }

    /// A default must fit the kind and any closed set of values.
    fn check_default(&self, default: &Value) -> Result<(), DefinitionError> {
        let invalid = |message: String| DefinitionError::InvalidModifier {
            name: self.name().to_string(),
            message,
        };
        if let Err(err) = check_option_value(self, default) {
            return Err(invalid(format!("default: {}", err)));
        }
        if let Some(allowed) = &self.allowed_values {
            if let Some(bad) = default
                .as_strs()
                .into_iter()
                .find(|v| !allowed.iter().any(|a| a == v))
            {
                return Err(invalid(format!(
                    "default '{}' is not one of {}",
                    bad,
                    allowed.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// One declared positional slot.
#[derive(Debug, Clone)]
pub struct OperandSpec {
    name: String,
    required: bool,
    repeatable: bool,
    allow_nil: bool,
    default: Option<Value>,
    separator: Option<String>,
}

impl OperandSpec {
    /// An optional, single-valued operand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            repeatable: false,
            allow_nil: false,
            default: None,
            separator: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Absorb every value not needed by later required slots.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    pub fn allow_nil(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Emit `token` right before this operand's values.
    pub fn separator(mut self, token: impl Into<String>) -> Self {
        self.separator = Some(token.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn allows_nil(&self) -> bool {
        self.allow_nil
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn separator_token(&self) -> Option<&str> {
        self.separator.as_deref()
    }
}

impl From<&str> for OperandSpec {
    fn from(name: &str) -> Self {
        OperandSpec::new(name)
    }
}

/// A declared item, in declaration order.
#[derive(Debug, Clone)]
pub enum Item {
    /// Fixed tokens emitted unconditionally.
    Literal(Vec<String>),
    Option(OptionSpec),
    Operand(OperandSpec),
}

impl Item {
    /// Canonical name, if the item has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Item::Literal(_) => None,
            Item::Option(opt) => Some(opt.name()),
            Item::Operand(op) => Some(op.name()),
        }
    }
}

/// A cross-cutting rule over declared names.
#[derive(Clone)]
pub enum Constraint {
    /// At most one of `names` may be present.
    Conflicts { names: Vec<String> },
    /// `names` may not take any of the listed value tuples together.
    ConflictingValues {
        names: Vec<String>,
        tuples: Vec<Vec<Value>>,
    },
    /// `name` present (and `when` holding) implies `requires` present.
    Requires {
        name: String,
        requires: String,
        when: Option<ValuePredicate>,
    },
    /// At least one of `names` must be present.
    RequiresOneOf { names: Vec<String> },
    /// Exactly one of `names` must be present.
    RequiresExactlyOneOf { names: Vec<String> },
    /// The present value of `name` must be a member of `values`.
    AllowedValues { name: String, values: Vec<String> },
}

impl Constraint {
    fn label(&self) -> &'static str {
        match self {
            Constraint::Conflicts { .. } => "conflicts",
            Constraint::ConflictingValues { .. } => "conflicting_values",
            Constraint::Requires { .. } => "requires",
            Constraint::RequiresOneOf { .. } => "requires_one_of",
            Constraint::RequiresExactlyOneOf { .. } => "requires_exactly_one_of",
            Constraint::AllowedValues { .. } => "allowed_values",
        }
    }

    /// Rewrite every referenced name to its canonical form.
    fn canonicalize(
        self,
        resolve: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DefinitionError> {
        let label = self.label();
        let one = |name: String| {
            resolve(&name).ok_or(DefinitionError::UnknownName {
                name,
                constraint: label,
            })
        };
        let many = |names: Vec<String>| names.into_iter().map(&one).collect::<Result<Vec<_>, _>>();

        Ok(match self {
            Constraint::Conflicts { names } => Constraint::Conflicts {
                names: many(names)?,
            },
            Constraint::ConflictingValues { names, tuples } => Constraint::ConflictingValues {
                names: many(names)?,
                tuples,
            },
            Constraint::Requires {
                name,
                requires,
                when,
            } => Constraint::Requires {
                name: one(name)?,
                requires: one(requires)?,
                when,
            },
            Constraint::RequiresOneOf { names } => Constraint::RequiresOneOf {
                names: many(names)?,
            },
            Constraint::RequiresExactlyOneOf { names } => Constraint::RequiresExactlyOneOf {
                names: many(names)?,
            },
            Constraint::AllowedValues { name, values } => Constraint::AllowedValues {
                name: one(name)?,
                values,
            },
        })
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Conflicts { names }
            | Constraint::RequiresOneOf { names }
            | Constraint::RequiresExactlyOneOf { names } => {
                write!(f, "{}({})", self.label(), names.join(", "))
            }
            Constraint::ConflictingValues { names, tuples } => {
                write!(f, "{}({}; {:?})", self.label(), names.join(", "), tuples)
            }
            Constraint::Requires {
                name,
                requires,
                when,
            } => write!(
                f,
                "requires({} -> {}{})",
                name,
                requires,
                if when.is_some() { ", when: <fn>" } else { "" }
            ),
            Constraint::AllowedValues { name, values } => {
                write!(f, "allowed_values({}: {})", name, values.join(", "))
            }
        }
    }
}

/// An immutable argument specification for one command.
#[derive(Debug, Clone)]
pub struct Spec {
    items: Vec<Item>,
    constraints: Vec<Constraint>,
    lookup: HashMap<String, usize>,
}

impl Spec {
    pub fn builder() -> SpecBuilder {
        SpecBuilder::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Index of the item declaring `name` (canonical or alias).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// The item declaring `name` (canonical or alias).
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.position(name).map(|i| &self.items[i])
    }

    /// Declared operands, in order.
    pub fn operands(&self) -> impl Iterator<Item = &OperandSpec> {
        self.items.iter().filter_map(|item| match item {
            Item::Operand(op) => Some(op),
            _ => None,
        })
    }

    /// Declared options, in order.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.items.iter().filter_map(|item| match item {
            Item::Option(opt) => Some(opt),
            _ => None,
        })
    }
}

/// Accumulates declarations; [`build`](SpecBuilder::build) validates and freezes them.
#[derive(Debug, Default)]
pub struct SpecBuilder {
    items: Vec<Item>,
    constraints: Vec<Constraint>,
}

impl SpecBuilder {
    /// A fixed token emitted at this position on every call.
    pub fn literal(self, token: impl Into<String>) -> Self {
        self.literals([token.into()])
    }

    /// Several fixed tokens at this position.
    pub fn literals<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items
            .push(Item::Literal(tokens.into_iter().map(Into::into).collect()));
        self
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.items.push(Item::Option(option));
        self
    }

    pub fn flag(self, names: impl IntoNames) -> Self {
        self.option(OptionSpec::flag(names))
    }

    pub fn value(self, names: impl IntoNames) -> Self {
        self.option(OptionSpec::value(names))
    }

    pub fn flag_or_value(self, names: impl IntoNames) -> Self {
        self.option(OptionSpec::flag_or_value(names))
    }

    pub fn key_value(self, names: impl IntoNames) -> Self {
        self.option(OptionSpec::key_value(names))
    }

    pub fn custom(self, names: impl IntoNames, render: CustomRenderer) -> Self {
        self.option(OptionSpec::custom(names, render))
    }

    pub fn execution_only(self, names: impl IntoNames) -> Self {
        self.option(OptionSpec::execution_only(names))
    }

    pub fn operand(mut self, operand: impl Into<OperandSpec>) -> Self {
        self.items.push(Item::Operand(operand.into()));
        self
    }

    pub fn conflicts(mut self, names: impl IntoNames) -> Self {
        self.constraints.push(Constraint::Conflicts {
            names: names.into_names(),
        });
        self
    }

    /// Forbid specific value combinations rather than mere co-presence.
    pub fn conflicting_values<I, T>(mut self, names: impl IntoNames, tuples: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = Value>,
    {
        self.constraints.push(Constraint::ConflictingValues {
            names: names.into_names(),
            tuples: tuples
                .into_iter()
                .map(|t| t.into_iter().collect())
                .collect(),
        });
        self
    }

    pub fn requires(mut self, name: impl Into<String>, requires: impl Into<String>) -> Self {
        self.constraints.push(Constraint::Requires {
            name: name.into(),
            requires: requires.into(),
            when: None,
        });
        self
    }

    pub fn requires_when(
        mut self,
        name: impl Into<String>,
        requires: impl Into<String>,
        when: ValuePredicate,
    ) -> Self {
        self.constraints.push(Constraint::Requires {
            name: name.into(),
            requires: requires.into(),
            when: Some(when),
        });
        self
    }

    pub fn requires_one_of(mut self, names: impl IntoNames) -> Self {
        self.constraints.push(Constraint::RequiresOneOf {
            names: names.into_names(),
        });
        self
    }

    pub fn requires_exactly_one_of(mut self, names: impl IntoNames) -> Self {
        self.constraints.push(Constraint::RequiresExactlyOneOf {
            names: names.into_names(),
        });
        self
    }

    pub fn allowed_values<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.push(Constraint::AllowedValues {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Validate the declarations and freeze them.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] for duplicate or empty names, modifiers
    /// that do not apply to their kind, ambiguous operand layouts, and
    /// constraints naming undeclared items.
    pub fn build(self) -> Result<Spec, DefinitionError> {
        let mut lookup = HashMap::new();
        let mut constraints = Vec::new();
        let mut repeatable: Option<&str> = None;

        for (index, item) in self.items.iter().enumerate() {
            let names: Vec<&str> = match item {
                Item::Literal(_) => continue,
                Item::Option(opt) => {
                    if opt.names.is_empty() {
                        return Err(DefinitionError::EmptyNames);
                    }
                    opt.check_modifiers()?;
                    if let Some(values) = &opt.allowed_values {
                        constraints.push(Constraint::AllowedValues {
                            name: opt.name().to_string(),
                            values: values.clone(),
                        });
                    }
                    opt.names.iter().map(String::as_str).collect()
                }
                Item::Operand(op) => {
                    if op.required && op.default.is_some() {
                        return Err(DefinitionError::InvalidModifier {
                            name: op.name.clone(),
                            message: "a required operand cannot have a default".into(),
                        });
                    }
                    if let Some(first) = repeatable {
                        if op.repeatable {
                            return Err(DefinitionError::MultipleRepeatable {
                                first: first.to_string(),
                                second: op.name.clone(),
                            });
                        }
                        if !op.required {
                            return Err(DefinitionError::AmbiguousOperands {
                                repeatable: first.to_string(),
                                optional: op.name.clone(),
                            });
                        }
                    }
                    if op.repeatable {
                        repeatable = Some(op.name.as_str());
                    }
                    vec![op.name.as_str()]
                }
            };

            for name in names {
                if name.is_empty() {
                    return Err(DefinitionError::EmptyNames);
                }
                if lookup.insert(name.to_string(), index).is_some() {
                    return Err(DefinitionError::DuplicateName {
                        name: name.to_string(),
                    });
                }
            }
        }

        let items = self.items;
        let resolve = |name: &str| {
            lookup
                .get(name)
                .and_then(|&i| items[i].name())
                .map(str::to_string)
        };
        for constraint in self.constraints {
            if let Constraint::ConflictingValues { names, tuples } = &constraint {
                if let Some(tuple) = tuples.iter().find(|t| t.len() != names.len()) {
                    return Err(DefinitionError::InvalidModifier {
                        name: names.join(", "),
                        message: format!(
                            "conflicting_values tuple has {} values for {} names",
                            tuple.len(),
                            names.len()
                        ),
                    });
                }
            }
            constraints.push(constraint.canonicalize(&resolve)?);
        }

        Ok(Spec {
            items,
            constraints,
            lookup,
        })
    }
}
