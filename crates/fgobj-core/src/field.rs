// ── Field descriptors ──
//
// Declarative metadata for one configurable attribute: the name callers
// use, the name the device expects, the rules every assignment must pass,
// and the flags the serializers consult.

use strum::Display;

use crate::error::ModelError;
use crate::validate::{Rejection, Rule};
use crate::value::FieldValue;

/// Placeholder shown instead of secret values in errors and `Debug` output.
pub const REDACTED: &str = "********";

/// Broad type of a field, used for introspection and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Secret,
    Integer,
    IntChoice,
    Ipv4,
    Ipv4Interface,
    Choice,
    ChoiceList,
    IntChoiceList,
}

/// Value a field takes when it is constructed or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Int(i64),
    Text(&'static str),
}

impl From<FieldDefault> for FieldValue {
    fn from(default: FieldDefault) -> Self {
        match default {
            FieldDefault::Int(n) => Self::Int(n),
            FieldDefault::Text(s) => Self::Text(s.to_owned()),
        }
    }
}

/// Metadata for one declared field of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Local name, as used by callers.
    pub name: &'static str,
    /// Attribute name in the device's JSON and CLI.
    pub wire_name: &'static str,
    pub kind: FieldKind,
    /// Applied left to right; the first failure wins.
    pub rules: &'static [Rule],
    /// Omit from `set` lines (e.g. the object id, already used by `edit`).
    pub ignore_in_cli: bool,
    /// Stored instead of "unset" at construction and on clear.
    pub default: Option<FieldDefault>,
    /// Text values (any case) that mean "unset", e.g. `standard` for an
    /// interface type the device has no keyword for.
    pub unset_aliases: &'static [&'static str],
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        wire_name: &'static str,
        kind: FieldKind,
        rules: &'static [Rule],
    ) -> Self {
        Self {
            name,
            wire_name,
            kind,
            rules,
            ignore_in_cli: false,
            default: None,
            unset_aliases: &[],
        }
    }

    pub const fn ignore_in_cli(mut self) -> Self {
        self.ignore_in_cli = true;
        self
    }

    pub const fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn unset_when(mut self, aliases: &'static [&'static str]) -> Self {
        self.unset_aliases = aliases;
        self
    }

    /// What an unset slot holds for this field.
    pub fn initial_value(&self) -> Option<FieldValue> {
        self.default.map(FieldValue::from)
    }

    /// Multi-valued fields are stored as a list and rendered space-joined.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self.kind, FieldKind::ChoiceList | FieldKind::IntChoiceList)
    }

    pub fn is_secret(&self) -> bool {
        self.kind == FieldKind::Secret
    }

    /// Run every rule over `value` and return the canonical form to store.
    pub fn validate(&self, value: FieldValue) -> Result<FieldValue, ModelError> {
        self.rules
            .iter()
            .try_fold(value, |value, rule| rule.check(value))
            .map_err(|rejection| self.error_from(rejection))
    }

    /// Canonical slot content for an assignment: `None` and unset aliases
    /// fall back to the default, anything else must pass every rule.
    pub fn resolve(&self, value: Option<FieldValue>) -> Result<Option<FieldValue>, ModelError> {
        match value {
            Some(FieldValue::Text(ref s)) if self.is_unset_alias(s) => Ok(self.initial_value()),
            Some(value) => self.validate(value).map(Some),
            None => Ok(self.initial_value()),
        }
    }

    fn is_unset_alias(&self, raw: &str) -> bool {
        let lowered = raw.trim().to_lowercase();
        self.unset_aliases.contains(&lowered.as_str())
    }

    /// Human description of all rules, for introspection output.
    pub fn describe_rules(&self) -> String {
        self.rules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn error_from(&self, rejection: Rejection) -> ModelError {
        match rejection {
            Rejection::Domain { rule, offending } => ModelError::Domain {
                field: self.name.to_owned(),
                value: if self.is_secret() {
                    REDACTED.to_owned()
                } else {
                    offending
                },
                rule,
            },
            Rejection::Unsupported { offending } => ModelError::Unsupported {
                field: self.name.to_owned(),
                value: offending,
            },
        }
    }
}
