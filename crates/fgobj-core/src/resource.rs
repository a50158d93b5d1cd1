// ── Resource base ──
//
// A `Schema` is the static description of one resource type (identity +
// ordered field table). A `ResourceRecord` is one instance: a slot per
// declared field plus an optional VDOM scope. Every write goes through the
// field's descriptor, so a slot is either empty ("inherit the device
// default") or holds a value that passed all of its rules.

use std::fmt;

use crate::error::ModelError;
use crate::field::{FieldDescriptor, REDACTED};
use crate::serialize::{self, ApiAction, ApiPayload, ApiRequest, CliBlock};
use crate::validate::{Rejection, Rule};
use crate::value::FieldValue;

/// Reserved keyword carrying the VDOM scope.
pub const SCOPE_KEYWORD: &str = "vdom";

/// Rules applied to the VDOM scope.
pub const SCOPE_RULES: &[Rule] = &[Rule::Text { min: 1, max: 31 }, Rule::Printable];

/// Where a resource lives on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceIdentity {
    /// API family, e.g. `cmdb`.
    pub api: &'static str,
    /// API path, e.g. `vpn.ipsec`.
    pub api_path: &'static str,
    /// API object name, e.g. `phase1-interface`.
    pub api_name: &'static str,
    /// CLI context line, e.g. `config vpn ipsec phase1-interface`.
    pub cli_path: &'static str,
    /// Local name of the field that holds the object id.
    pub id_field: &'static str,
    /// Serialization fails without an object id.
    pub id_required: bool,
}

impl ResourceIdentity {
    /// `api/api_path/api_name`, e.g. `cmdb/vpn.ipsec/phase1-interface`.
    pub fn method_path(&self) -> String {
        format!("{}/{}/{}", self.api, self.api_path, self.api_name)
    }
}

/// Conditional requirement checked before serialization: when `field`
/// holds `equals`, every field in `requires` must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub field: &'static str,
    pub equals: &'static str,
    pub requires: &'static [&'static str],
}

/// Static description of a resource type.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    /// Resource name used in messages and lookups, e.g. `phase1-interface`.
    pub resource: &'static str,
    pub identity: ResourceIdentity,
    /// Declaration order is serialization order.
    pub fields: &'static [FieldDescriptor],
    pub requirements: &'static [Requirement],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, ModelError> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| self.unknown(name))
    }

    fn unknown(&self, keyword: &str) -> ModelError {
        ModelError::UnknownField {
            keyword: keyword.to_owned(),
            resource: self.resource.to_owned(),
        }
    }
}

/// Borrowed view of a record's wire identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    pub api_path: &'static str,
    pub api_name: &'static str,
    pub cli_path: &'static str,
    pub object_id: Option<&'a str>,
    pub scope: Option<&'a str>,
}

/// One configuration resource instance.
#[derive(Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    schema: &'static Schema,
    values: Vec<Option<FieldValue>>,
    vdom: Option<String>,
}

impl ResourceRecord {
    /// An instance with every field unset and no scope.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: schema
                .fields
                .iter()
                .map(FieldDescriptor::initial_value)
                .collect(),
            vdom: None,
        }
    }

    /// Build an instance from keyword/value pairs.
    ///
    /// Keywords are declared field names or the `vdom` scope keyword. A
    /// `None` value leaves the field unset. The first invalid entry aborts
    /// construction.
    pub fn from_entries<I, K>(schema: &'static Schema, entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, Option<FieldValue>)>,
        K: AsRef<str>,
    {
        let mut record = Self::new(schema);
        for (keyword, value) in entries {
            let keyword = keyword.as_ref();
            if keyword == SCOPE_KEYWORD {
                record.set_vdom(value)?;
            } else {
                record.assign(keyword, value)?;
            }
        }
        Ok(record)
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn identity(&self) -> Identity<'_> {
        let id = &self.schema.identity;
        Identity {
            api_path: id.api_path,
            api_name: id.api_name,
            cli_path: id.cli_path,
            object_id: self.object_id(),
            scope: self.vdom(),
        }
    }

    /// Current value of a field; `None` means "device default".
    pub fn get(&self, name: &str) -> Result<Option<&FieldValue>, ModelError> {
        let idx = self.schema.position(name)?;
        Ok(self.values.get(idx).and_then(Option::as_ref))
    }

    /// Validate and store a value. On failure the stored value is unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), ModelError> {
        self.assign(name, Some(value.into()))
    }

    /// Reset a field to its declared default, or to "device default" when
    /// it has none.
    pub fn clear(&mut self, name: &str) -> Result<(), ModelError> {
        self.assign(name, None)
    }

    /// Set or clear, depending on `value`.
    pub fn assign(&mut self, name: &str, value: Option<FieldValue>) -> Result<(), ModelError> {
        let idx = self.schema.position(name)?;
        let descriptor = &self.schema.fields[idx];

        let canonical = match descriptor.resolve(value) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(
                    resource = self.schema.resource,
                    field = descriptor.name,
                    error = %err,
                    "assignment rejected"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            resource = self.schema.resource,
            field = descriptor.name,
            cleared = canonical.is_none(),
            "field assigned"
        );
        self.values[idx] = canonical;
        Ok(())
    }

    /// Stored value in its device representation (lists space-joined with
    /// a trailing space).
    pub fn rendered(&self, name: &str) -> Result<Option<String>, ModelError> {
        Ok(self.get(name)?.map(FieldValue::to_wire_string))
    }

    pub fn object_id(&self) -> Option<&str> {
        self.get(self.schema.identity.id_field)
            .ok()
            .flatten()
            .and_then(FieldValue::as_text)
    }

    pub fn vdom(&self) -> Option<&str> {
        self.vdom.as_deref()
    }

    /// Set or clear the VDOM scope.
    pub fn set_vdom(&mut self, vdom: Option<FieldValue>) -> Result<(), ModelError> {
        let Some(value) = vdom else {
            self.vdom = None;
            return Ok(());
        };

        let mut value = value;
        for rule in SCOPE_RULES {
            value = rule.check(value).map_err(|rejection| match rejection {
                Rejection::Domain { rule, offending } => ModelError::Domain {
                    field: SCOPE_KEYWORD.to_owned(),
                    value: offending,
                    rule,
                },
                Rejection::Unsupported { offending } => {
                    ModelError::Unsupported {
                        field: SCOPE_KEYWORD.to_owned(),
                        value: offending,
                    }
                }
            })?;
        }

        self.vdom = value.as_text().map(str::to_owned);
        Ok(())
    }

    /// Fields that hold a value, in declaration order.
    pub fn iter_set_fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &FieldValue)> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter_map(|(descriptor, value)| value.as_ref().map(|v| (descriptor, v)))
    }

    /// Check the rules that span more than one field: the object id (when
    /// required) and the schema's conditional requirements.
    pub fn check_complete(&self) -> Result<(), ModelError> {
        let identity = &self.schema.identity;
        if identity.id_required && self.object_id().is_none() {
            return Err(ModelError::CrossField {
                resource: self.schema.resource.to_owned(),
                field: identity.id_field.to_owned(),
                reason: "is required before serialization".to_owned(),
            });
        }

        for req in self.schema.requirements {
            let triggered = self
                .get(req.field)?
                .and_then(FieldValue::as_text)
                .is_some_and(|v| v == req.equals);
            if !triggered {
                continue;
            }
            for required in req.requires {
                if self.get(required)?.is_none() {
                    return Err(ModelError::CrossField {
                        resource: self.schema.resource.to_owned(),
                        field: (*required).to_owned(),
                        reason: format!("is required when {} is {}", req.field, req.equals),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.schema.resource);
        if let Some(vdom) = &self.vdom {
            s.field(SCOPE_KEYWORD, vdom);
        }
        for (descriptor, value) in self.iter_set_fields() {
            if descriptor.is_secret() {
                s.field(descriptor.name, &REDACTED);
            } else {
                s.field(descriptor.name, value);
            }
        }
        s.finish()
    }
}

/// Behaviour shared by every concrete resource type.
///
/// Implementors only hand out their record; serialization comes for free.
pub trait Resource {
    fn record(&self) -> &ResourceRecord;
    fn record_mut(&mut self) -> &mut ResourceRecord;

    fn api_payload(&self) -> Result<ApiPayload, ModelError> {
        serialize::api_payload(self.record())
    }

    fn api_request(&self, action: ApiAction) -> Result<ApiRequest, ModelError> {
        Ok(serialize::api_payload(self.record())?.request(action))
    }

    fn cli_block(&self) -> Result<CliBlock, ModelError> {
        serialize::cli_block(self.record())
    }

    fn cli_delete(&self) -> Result<CliBlock, ModelError> {
        serialize::cli_delete(self.record())
    }
}

impl Resource for ResourceRecord {
    fn record(&self) -> &ResourceRecord {
        self
    }

    fn record_mut(&mut self) -> &mut ResourceRecord {
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    static FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor::new(
            "name",
            "name",
            FieldKind::Text,
            &[Rule::Text { min: 1, max: 35 }],
        )
        .ignore_in_cli(),
        FieldDescriptor::new(
            "mode",
            "mode",
            FieldKind::Choice,
            &[Rule::Choice(&["a", "b"])],
        ),
        FieldDescriptor::new(
            "count",
            "count",
            FieldKind::Integer,
            &[Rule::Int { min: 1, max: 3 }],
        ),
    ];

    static SCHEMA: Schema = Schema {
        resource: "widget",
        identity: ResourceIdentity {
            api: "cmdb",
            api_path: "test",
            api_name: "widget",
            cli_path: "config test widget",
            id_field: "name",
            id_required: true,
        },
        fields: &FIELDS,
        requirements: &[Requirement {
            field: "mode",
            equals: "b",
            requires: &["count"],
        }],
    };

    #[test]
    fn unknown_keyword_is_rejected() {
        let err = ResourceRecord::from_entries(&SCHEMA, [("colour", Some("red".into()))])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownField {
                keyword: "colour".into(),
                resource: "widget".into(),
            }
        );
    }

    #[test]
    fn failed_assignment_leaves_value_untouched() {
        let mut r = ResourceRecord::new(&SCHEMA);
        r.set("count", 2).unwrap();
        assert!(r.set("count", 9).is_err());
        assert_eq!(r.get("count").unwrap(), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn clear_returns_field_to_unset() {
        let mut r = ResourceRecord::new(&SCHEMA);
        r.set("mode", "A").unwrap();
        assert_eq!(r.get("mode").unwrap(), Some(&FieldValue::from("a")));
        r.clear("mode").unwrap();
        assert_eq!(r.get("mode").unwrap(), None);
    }

    #[test]
    fn iter_set_fields_follows_declaration_order() {
        let r = ResourceRecord::from_entries(
            &SCHEMA,
            [
                ("count", Some(FieldValue::from(1))),
                ("name", Some(FieldValue::from("w1"))),
                ("mode", None),
            ],
        )
        .unwrap();
        let names: Vec<_> = r.iter_set_fields().map(|(d, _)| d.name).collect();
        assert_eq!(names, ["name", "count"]);
    }

    #[test]
    fn identity_reports_id_and_scope() {
        let r = ResourceRecord::from_entries(
            &SCHEMA,
            [("name", Some("w1".into())), ("vdom", Some("root".into()))],
        )
        .unwrap();
        let id = r.identity();
        assert_eq!(id.object_id, Some("w1"));
        assert_eq!(id.scope, Some("root"));
        assert_eq!(id.cli_path, "config test widget");
        assert_eq!(SCHEMA.identity.method_path(), "cmdb/test/widget");
    }

    #[test]
    fn blank_vdom_is_rejected() {
        let mut r = ResourceRecord::new(&SCHEMA);
        let err = r.set_vdom(Some("  ".into())).unwrap_err();
        assert_eq!(err.field(), "vdom");
        assert_eq!(r.vdom(), None);
    }

    #[test]
    fn missing_id_is_a_cross_field_error() {
        let r = ResourceRecord::new(&SCHEMA);
        assert!(matches!(
            r.check_complete(),
            Err(ModelError::CrossField { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn conditional_requirement() {
        let mut r = ResourceRecord::new(&SCHEMA);
        r.set("name", "w1").unwrap();
        r.set("mode", "b").unwrap();
        assert!(matches!(
            r.check_complete(),
            Err(ModelError::CrossField { ref field, .. }) if field == "count"
        ));
        r.set("count", 3).unwrap();
        assert!(r.check_complete().is_ok());
    }
}
