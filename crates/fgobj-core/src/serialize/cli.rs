// ── CLI blocks ──

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::error::ModelError;
use crate::field::FieldDescriptor;
use crate::resource::ResourceRecord;
use crate::value::FieldValue;

/// Ordered CLI directives for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CliBlock {
    lines: Vec<String>,
}

impl CliBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for CliBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Quote a CLI token unless it is a simple identifier.
///
/// Simple means non-empty and made only of ASCII alphanumerics and
/// `- _ . : / @`. Anything else is wrapped in double quotes with embedded
/// `"` and `\` backslash-escaped.
pub fn quote(token: &str) -> Cow<'_, str> {
    let simple = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '/' | '@'));
    if simple {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(always_quote(token))
    }
}

fn always_quote(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 2);
    out.push('"');
    for c in token.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn format_value(descriptor: &FieldDescriptor, value: &FieldValue) -> String {
    match value {
        FieldValue::Int(n) => n.to_string(),
        FieldValue::Text(s) => quote(s).into_owned(),
        FieldValue::List(_) => {
            debug_assert!(descriptor.is_multi_valued());
            value.to_wire_string()
        }
    }
}

/// Opening context lines. The `edit` line is omitted for resources without
/// an object id (singleton settings).
fn open_context(record: &ResourceRecord, lines: &mut Vec<String>) {
    if let Some(vdom) = record.vdom() {
        lines.push("config vdom".to_owned());
        lines.push(format!("edit {}", quote(vdom)));
    }
    lines.push(record.schema().identity.cli_path.to_owned());
}

fn close_context(record: &ResourceRecord, lines: &mut Vec<String>) {
    lines.push("end".to_owned());
    if record.vdom().is_some() {
        lines.push("end".to_owned());
    }
}

/// Build the `config … / edit … / set … / end` block for `record`.
pub fn cli_block(record: &ResourceRecord) -> Result<CliBlock, ModelError> {
    record.check_complete()?;

    let mut lines = Vec::new();
    open_context(record, &mut lines);
    if let Some(id) = record.object_id() {
        lines.push(format!("edit {}", always_quote(id)));
    }

    for (descriptor, value) in record.iter_set_fields() {
        if descriptor.ignore_in_cli {
            continue;
        }
        let line = format!("set {} {}", descriptor.wire_name, format_value(descriptor, value));
        if descriptor.is_secret() {
            tracing::trace!(field = descriptor.name, "set <redacted>");
        } else {
            tracing::trace!(field = descriptor.name, %line);
        }
        lines.push(line);
    }

    close_context(record, &mut lines);

    tracing::debug!(
        resource = record.schema().resource,
        lines = lines.len(),
        "rendered CLI block"
    );
    Ok(CliBlock { lines })
}

/// Build the block that removes `record`'s object from the device.
pub fn cli_delete(record: &ResourceRecord) -> Result<CliBlock, ModelError> {
    let schema = record.schema();
    let Some(id) = record.object_id() else {
        return Err(ModelError::CrossField {
            resource: schema.resource.to_owned(),
            field: schema.identity.id_field.to_owned(),
            reason: "is required to delete an object".to_owned(),
        });
    };

    let mut lines = Vec::new();
    open_context(record, &mut lines);
    lines.push(format!("delete {}", always_quote(id)));
    close_context(record, &mut lines);
    Ok(CliBlock { lines })
}
