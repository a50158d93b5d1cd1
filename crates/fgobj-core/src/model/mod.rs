// ── Concrete resources ──
//
// Each resource is a static `Schema` plus a thin typed wrapper around a
// `ResourceRecord`. Adding a resource means adding a module here and a
// `ResourceKind` variant; validators and serializers stay untouched.

pub mod phase1_interface;
pub mod system_interface;

use strum::{Display, EnumIter, EnumString};

use crate::error::ModelError;
use crate::resource::{ResourceRecord, Schema};
use crate::value::FieldValue;

pub use phase1_interface::Phase1Interface;
pub use system_interface::SystemInterface;

/// Registry of resource types, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ResourceKind {
    #[strum(to_string = "phase1-interface", serialize = "phase1")]
    Phase1Interface,
    #[strum(to_string = "system-interface", serialize = "interface")]
    SystemInterface,
}

impl ResourceKind {
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Phase1Interface => &phase1_interface::SCHEMA,
            Self::SystemInterface => &system_interface::SCHEMA,
        }
    }

    /// Build a record of this kind from keyword/value pairs.
    pub fn build<I, K>(self, entries: I) -> Result<ResourceRecord, ModelError>
    where
        I: IntoIterator<Item = (K, Option<FieldValue>)>,
        K: AsRef<str>,
    {
        ResourceRecord::from_entries(self.schema(), entries)
    }
}
