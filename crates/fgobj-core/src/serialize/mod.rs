// ── Serializers ──
//
// Pure transformations from a `ResourceRecord` to the two device-facing
// forms. Both walk `iter_set_fields()` so field order always equals
// declaration order, and both only borrow the record.

mod api;
mod cli;

pub use api::{ApiAction, ApiPayload, ApiRequest, HttpMethod, Scope, api_payload};
pub use cli::{CliBlock, cli_block, cli_delete, quote};
