// ── REST API payloads ──

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::ModelError;
use crate::resource::{ResourceRecord, SCOPE_KEYWORD};
use crate::value::FieldValue;

/// VDOM scope parameter of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub vdom: String,
}

/// JSON body plus the routing metadata an HTTP client needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiPayload {
    /// e.g. `cmdb/vpn.ipsec/phase1-interface`
    pub method_path: String,
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Set fields only, in declaration order, keyed by wire name. The
    /// object id travels in `object_id`, not here.
    pub body: IndexMap<String, Value>,

    #[serde(skip)]
    id_wire_name: &'static str,
}

/// What the request should do with the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApiAction {
    Add,
    #[default]
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

/// A fully routed request, ready for an HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// e.g. `cmdb/vpn.ipsec/phase1-interface/vpn-a`
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<IndexMap<String, Value>>,
}

impl ApiPayload {
    /// `method_path/<object id>`, with the id percent-encoded. Falls back to
    /// the bare method path for resources without an id.
    pub fn object_path(&self) -> String {
        match &self.object_id {
            Some(id) => format!("{}/{}", self.method_path, urlencoding::encode(id)),
            None => self.method_path.clone(),
        }
    }

    /// Route this payload for `action`.
    ///
    /// - add: `POST method_path`, body with the object id first
    /// - update: `PUT method_path/<id>`, body as is
    /// - delete: `DELETE method_path/<id>`, no body
    pub fn request(&self, action: ApiAction) -> ApiRequest {
        let query = self
            .scope
            .as_ref()
            .map(|s| vec![(SCOPE_KEYWORD.to_owned(), s.vdom.clone())])
            .unwrap_or_default();

        let (method, path, json) = match action {
            ApiAction::Add => {
                let mut json = IndexMap::with_capacity(self.body.len() + 1);
                if let Some(id) = &self.object_id {
                    json.insert(self.id_wire_name.to_owned(), Value::String(id.clone()));
                }
                json.extend(self.body.iter().map(|(k, v)| (k.clone(), v.clone())));
                (HttpMethod::Post, self.method_path.clone(), Some(json))
            }
            ApiAction::Update => (HttpMethod::Put, self.object_path(), Some(self.body.clone())),
            ApiAction::Delete => (HttpMethod::Delete, self.object_path(), None),
        };

        ApiRequest {
            method,
            path,
            query,
            json,
        }
    }
}

/// Build the API payload for `record`.
pub fn api_payload(record: &ResourceRecord) -> Result<ApiPayload, ModelError> {
    record.check_complete()?;

    let schema = record.schema();
    let id_field = schema.identity.id_field;

    let body: IndexMap<String, Value> = record
        .iter_set_fields()
        .filter(|(descriptor, _)| descriptor.name != id_field)
        .map(|(descriptor, value)| (descriptor.wire_name.to_owned(), to_json(value)))
        .collect();

    tracing::debug!(
        resource = schema.resource,
        fields = body.len(),
        "rendered API payload"
    );

    Ok(ApiPayload {
        method_path: schema.identity.method_path(),
        object_id: record.object_id().map(str::to_owned),
        scope: record.vdom().map(|vdom| Scope {
            vdom: vdom.to_owned(),
        }),
        body,
        id_wire_name: schema
            .field(id_field)
            .map_or(id_field, |descriptor| descriptor.wire_name),
    })
}

fn to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Int(n) => Value::from(*n),
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::List(_) => Value::String(value.to_wire_string()),
    }
}
