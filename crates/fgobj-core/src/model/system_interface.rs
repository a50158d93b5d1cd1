// ── System interface ──
//
// `config system interface` / `cmdb/system/interface`, limited to the IPv4
// attributes of physical, VLAN and loopback interfaces.

use crate::error::ModelError;
use crate::field::{FieldDefault, FieldDescriptor, FieldKind};
use crate::resource::{Requirement, Resource, ResourceIdentity, ResourceRecord, Schema};
use crate::validate::Rule;
use crate::value::FieldValue;

/// Services accepted in `allowaccess`.
pub const ALLOW_ACCESS: &[&str] = &[
    "ping",
    "http",
    "https",
    "snmp",
    "ssh",
    "telnet",
    "fgfm",
    "radius-acct",
    "probe-response",
    "capwap",
    "ftm",
];

static FIELDS: [FieldDescriptor; 12] = [
    FieldDescriptor::new(
        "name",
        "name",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 14 }, Rule::Printable],
    )
    .ignore_in_cli(),
    FieldDescriptor::new("ip", "ip", FieldKind::Ipv4Interface, &[Rule::Ipv4Interface]),
    FieldDescriptor::new(
        "mode",
        "mode",
        FieldKind::Choice,
        &[Rule::Choice(&["static", "dhcp"])],
    )
    .with_default(FieldDefault::Text("dhcp")),
    FieldDescriptor::new(
        "intf_type",
        "type",
        FieldKind::Choice,
        &[Rule::Choice(&["vlan", "loopback"])],
    )
    .unset_when(&["standard"]),
    FieldDescriptor::new(
        "vrf",
        "vrf",
        FieldKind::Integer,
        &[Rule::Int { min: 0, max: 31 }],
    ),
    FieldDescriptor::new(
        "allowaccess",
        "allowaccess",
        FieldKind::ChoiceList,
        &[Rule::MemberOf {
            label: "management service",
            allowed: ALLOW_ACCESS,
        }],
    ),
    FieldDescriptor::new(
        "role",
        "role",
        FieldKind::Choice,
        &[Rule::Choice(&["wan", "lan", "dmz", "undefined"])],
    ),
    FieldDescriptor::new(
        "vlanid",
        "vlanid",
        FieldKind::Integer,
        &[Rule::Int { min: 1, max: 4096 }],
    ),
    FieldDescriptor::new(
        "phys_intf",
        "interface",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 31 }],
    ),
    FieldDescriptor::new(
        "device_ident",
        "device-identification",
        FieldKind::Choice,
        &[Rule::Choice(&["enable", "disable"])],
    ),
    FieldDescriptor::new(
        "alias",
        "alias",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 25 }],
    ),
    FieldDescriptor::new(
        "description",
        "description",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 255 }],
    ),
];

pub static SCHEMA: Schema = Schema {
    resource: "system-interface",
    identity: ResourceIdentity {
        api: "cmdb",
        api_path: "system",
        api_name: "interface",
        cli_path: "config system interface",
        id_field: "name",
        id_required: true,
    },
    fields: &FIELDS,
    requirements: &[Requirement {
        field: "intf_type",
        equals: "vlan",
        requires: &["vlanid", "phys_intf"],
    }],
};

/// FortiGate system interface (IPv4 addressing only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInterface {
    record: ResourceRecord,
}

impl Default for SystemInterface {
    fn default() -> Self {
        Self {
            record: ResourceRecord::new(&SCHEMA),
        }
    }
}

impl SystemInterface {
    /// A physical or virtual interface: its name, with `mode dhcp`.
    pub fn standard(name: &str) -> Result<Self, ModelError> {
        let mut intf = Self::default();
        intf.record.set("name", name)?;
        Ok(intf)
    }

    /// A VLAN sub-interface of `phys_intf`, addressed statically.
    pub fn vlan(name: &str, vlanid: i64, phys_intf: &str) -> Result<Self, ModelError> {
        let mut intf = Self::standard(name)?;
        intf.record.set("mode", "static")?;
        intf.record.set("intf_type", "vlan")?;
        intf.record.set("vlanid", vlanid)?;
        intf.record.set("phys_intf", phys_intf)?;
        Ok(intf)
    }

    pub fn from_entries<I, K>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, Option<FieldValue>)>,
        K: AsRef<str>,
    {
        Ok(Self {
            record: ResourceRecord::from_entries(&SCHEMA, entries)?,
        })
    }

    pub fn schema() -> &'static Schema {
        &SCHEMA
    }

    pub fn with_vdom(mut self, vdom: &str) -> Result<Self, ModelError> {
        self.record.set_vdom(Some(vdom.into()))?;
        Ok(self)
    }

    pub fn set_ip(&mut self, ip: &str) -> Result<&mut Self, ModelError> {
        self.record.set("ip", ip)?;
        Ok(self)
    }

    pub fn set_mode(&mut self, mode: &str) -> Result<&mut Self, ModelError> {
        self.record.set("mode", mode)?;
        Ok(self)
    }

    /// `vlan`, `loopback`, or `standard` (clears the type).
    pub fn set_intf_type(&mut self, intf_type: &str) -> Result<&mut Self, ModelError> {
        self.record.set("intf_type", intf_type)?;
        Ok(self)
    }

    pub fn set_vrf(&mut self, vrf: i64) -> Result<&mut Self, ModelError> {
        self.record.set("vrf", vrf)?;
        Ok(self)
    }

    /// One service, a list, or a space-separated string (`"ping https"`),
    /// each from [`ALLOW_ACCESS`].
    pub fn set_allowaccess(
        &mut self,
        services: impl Into<FieldValue>,
    ) -> Result<&mut Self, ModelError> {
        self.record.set("allowaccess", services)?;
        Ok(self)
    }

    pub fn set_role(&mut self, role: &str) -> Result<&mut Self, ModelError> {
        self.record.set("role", role)?;
        Ok(self)
    }

    pub fn set_device_ident(&mut self, value: &str) -> Result<&mut Self, ModelError> {
        self.record.set("device_ident", value)?;
        Ok(self)
    }

    pub fn set_alias(&mut self, alias: &str) -> Result<&mut Self, ModelError> {
        self.record.set("alias", alias)?;
        Ok(self)
    }

    pub fn set_description(&mut self, description: &str) -> Result<&mut Self, ModelError> {
        self.record.set("description", description)?;
        Ok(self)
    }
}

impl Resource for SystemInterface {
    fn record(&self) -> &ResourceRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ResourceRecord {
        &mut self.record
    }
}
