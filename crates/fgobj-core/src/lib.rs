//! Validated configuration object model for FortiGate resources.
//!
//! Resources are typed, constrained records that render to the two forms
//! a FortiGate accepts: CLI blocks for a terminal session and JSON bodies
//! plus routing metadata for the REST API.
//!
//! - **[`FieldDescriptor`]**: static metadata for one attribute (local
//!   name, wire name, [`Rule`]s, CLI flags). Every assignment runs the
//!   rules before anything is stored; a failed assignment changes nothing.
//!
//! - **[`ResourceRecord`]**: one instance: a slot per declared field plus
//!   an optional VDOM scope. Slots start at the field's [`FieldDefault`],
//!   if any. An empty slot means "keep the device default" and is omitted
//!   from both outputs.
//!
//! - **Serializers** ([`serialize`]): [`ApiPayload`] / [`ApiRequest`] for
//!   the REST API and [`CliBlock`] for the CLI. Both follow field
//!   declaration order and never mutate the record.
//!
//! - **Resources** ([`model`]): [`Phase1Interface`] and
//!   [`SystemInterface`], each a static [`Schema`] plus typed setters.
//!
//! There is no I/O here; sending payloads to a device is the caller's job.

pub mod error;
pub mod field;
pub mod model;
pub mod resource;
pub mod serialize;
pub mod validate;
pub mod value;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::ModelError;
pub use field::{FieldDefault, FieldDescriptor, FieldKind};
pub use model::{Phase1Interface, ResourceKind, SystemInterface};
pub use resource::{
    Identity, Requirement, Resource, ResourceIdentity, ResourceRecord, SCOPE_KEYWORD, Schema,
};
pub use serialize::{ApiAction, ApiPayload, ApiRequest, CliBlock, HttpMethod, Scope};
pub use validate::Rule;
pub use value::FieldValue;
