// ── Model error types ──
//
// One flat enum for every failure the object model can raise. Assignment
// failures leave the record untouched; serialization failures leave it
// unchanged by construction (serializers only borrow).

use thiserror::Error;

/// Unified error type for the object model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A value failed a single-field validator.
    #[error("{field}: {rule} (got {value})")]
    Domain {
        field: String,
        value: String,
        rule: String,
    },

    /// A keyword that is neither a declared field nor a reserved
    /// identity/scope keyword.
    #[error("{keyword} is not a declared field of {resource}")]
    UnknownField { keyword: String, resource: String },

    /// The value is recognized but deliberately not supported yet.
    #[error("{field}: {value} is recognized but not yet supported")]
    Unsupported { field: String, value: String },

    /// A field required at serialization time is missing.
    #[error("{resource}: {field} {reason}")]
    CrossField {
        resource: String,
        field: String,
        reason: String,
    },
}

impl ModelError {
    /// The field (or keyword) the error is about.
    pub fn field(&self) -> &str {
        match self {
            Self::Domain { field, .. }
            | Self::Unsupported { field, .. }
            | Self::CrossField { field, .. } => field,
            Self::UnknownField { keyword, .. } => keyword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_message_names_field_rule_and_value() {
        let err = ModelError::Domain {
            field: "keepalive".into(),
            value: "5".into(),
            rule: "must be an integer between 10 and 900".into(),
        };
        assert_eq!(
            err.to_string(),
            "keepalive: must be an integer between 10 and 900 (got 5)"
        );
    }

    #[test]
    fn unknown_field_message() {
        let err = ModelError::UnknownField {
            keyword: "colour".into(),
            resource: "phase1-interface".into(),
        };
        assert_eq!(
            err.to_string(),
            "colour is not a declared field of phase1-interface"
        );
        assert_eq!(err.field(), "colour");
    }
}
