// ── IPsec phase1-interface ──
//
// `config vpn ipsec phase1-interface` / `cmdb/vpn.ipsec/phase1-interface`.
// Covers dynamic and static tunnels using PSK authentication.

use crate::error::ModelError;
use crate::field::{FieldDescriptor, FieldKind};
use crate::resource::{Resource, ResourceIdentity, ResourceRecord, Schema};
use crate::validate::Rule;
use crate::value::FieldValue;

/// IKE phase1 proposals accepted by FortiOS.
pub const PROPOSALS: &[&str] = &[
    "des-md5",
    "des-sha",
    "des-sha256",
    "des-sha384",
    "des-sha512",
    "3des-md5",
    "3des-sha1",
    "3des-sha256",
    "3des-sha384",
    "3des-sha512",
    "aes128-md5",
    "aes128-sha1",
    "aes128-sha256",
    "aes128-sha384",
    "aes128-sha512",
    "aes192-md5",
    "aes192-sha1",
    "aes192-sha256",
    "aes192-sha384",
    "aes192-sha512",
    "aes256-md5",
    "aes256-sha1",
    "aes256-sha256",
    "aes256-sha384",
    "aes256-sha512",
    "aria128-md5",
    "aria128-sha1",
    "aria128-sha256",
    "aria128-sha384",
    "aria128-sha512",
    "aria192-md5",
    "aria192-sha1",
    "aria192-sha256",
    "aria192-sha384",
    "aria192-sha512",
    "aria256-md5",
    "aria256-sha1",
    "aria256-sha256",
    "aria256-sha384",
    "aria256-sha512",
    "seed-md5",
    "seed-sha1",
    "seed-sha256",
    "seed-sha384",
    "seed-sha512",
];

/// Diffie-Hellman groups accepted for phase1.
pub const DH_GROUPS: &[i64] = &[1, 2, 5, 14, 15, 16, 17, 18, 19, 20, 21, 27, 28, 30, 31, 32];

const ENABLE_DISABLE: &[&str] = &["enable", "disable"];

static FIELDS: [FieldDescriptor; 19] = [
    FieldDescriptor::new(
        "name",
        "name",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 35 }, Rule::Printable],
    )
    .ignore_in_cli(),
    FieldDescriptor::new(
        "p1_type",
        "type",
        FieldKind::Choice,
        &[
            Rule::NotYetSupported(&["ddns"]),
            Rule::Choice(&["dynamic", "static"]),
        ],
    ),
    // FortiOS caps interface names one character shorter than object names.
    FieldDescriptor::new(
        "interface",
        "interface",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 34 }],
    ),
    FieldDescriptor::new(
        "proposal",
        "proposal",
        FieldKind::ChoiceList,
        &[Rule::MemberOf {
            label: "phase1 proposal",
            allowed: PROPOSALS,
        }],
    ),
    FieldDescriptor::new(
        "ike_version",
        "ike-version",
        FieldKind::IntChoice,
        &[Rule::IntChoice(&[1, 2])],
    ),
    FieldDescriptor::new("local_gw", "local-gw", FieldKind::Ipv4, &[Rule::Ipv4]),
    FieldDescriptor::new("psksecret", "psksecret", FieldKind::Secret, &[Rule::Psk]),
    FieldDescriptor::new(
        "localid",
        "localid",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 63 }],
    ),
    FieldDescriptor::new("remote_gw", "remote-gw", FieldKind::Ipv4, &[Rule::Ipv4]),
    FieldDescriptor::new(
        "comment",
        "comments",
        FieldKind::Text,
        &[Rule::Text { min: 1, max: 1023 }],
    ),
    FieldDescriptor::new(
        "add_route",
        "add-route",
        FieldKind::Choice,
        &[Rule::Choice(ENABLE_DISABLE)],
    ),
    FieldDescriptor::new(
        "add_gw_route",
        "add-gw-route",
        FieldKind::Choice,
        &[Rule::Choice(ENABLE_DISABLE)],
    ),
    FieldDescriptor::new(
        "keepalive",
        "keepalive",
        FieldKind::Integer,
        &[Rule::Int { min: 10, max: 900 }],
    ),
    FieldDescriptor::new(
        "net_device",
        "net-device",
        FieldKind::Choice,
        &[Rule::Choice(ENABLE_DISABLE)],
    ),
    FieldDescriptor::new(
        "tunnel_search",
        "tunnel-search",
        FieldKind::Choice,
        &[Rule::Choice(&["selectors", "nexthop"])],
    ),
    FieldDescriptor::new(
        "dpd",
        "dpd",
        FieldKind::Choice,
        &[Rule::Choice(&["disable", "on-idle", "on-demand"])],
    ),
    FieldDescriptor::new(
        "dhgrp",
        "dhgrp",
        FieldKind::IntChoiceList,
        &[Rule::IntMemberOf(DH_GROUPS)],
    ),
    FieldDescriptor::new(
        "nattraversal",
        "nattraversal",
        FieldKind::Choice,
        &[Rule::Choice(&["enable", "disable", "forced"])],
    ),
    FieldDescriptor::new(
        "exchange_interface_ip",
        "exchange-interface-ip",
        FieldKind::Choice,
        &[Rule::Choice(ENABLE_DISABLE)],
    ),
];

pub static SCHEMA: Schema = Schema {
    resource: "phase1-interface",
    identity: ResourceIdentity {
        api: "cmdb",
        api_path: "vpn.ipsec",
        api_name: "phase1-interface",
        cli_path: "config vpn ipsec phase1-interface",
        id_field: "name",
        id_required: true,
    },
    fields: &FIELDS,
    requirements: &[],
};

/// FortiGate IPsec phase1-interface.
///
/// Every field starts unset, meaning "keep the device default", and is
/// omitted from both rendered forms until assigned.
///
/// ```
/// use fgobj_core::{Phase1Interface, Resource};
///
/// let mut p1 = Phase1Interface::new("vpn-a")?;
/// p1.set_p1_type("dynamic")?
///     .set_interface("wan1")?
///     .set_proposal(["aes256-sha256"])?
///     .set_psksecret("secret1")?;
///
/// let cli = p1.cli_block()?;
/// assert_eq!(cli.lines()[1], "edit \"vpn-a\"");
/// # Ok::<(), fgobj_core::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase1Interface {
    record: ResourceRecord,
}

impl Default for Phase1Interface {
    fn default() -> Self {
        Self {
            record: ResourceRecord::new(&SCHEMA),
        }
    }
}

macro_rules! setters {
    ($($(#[$doc:meta])* $setter:ident => $field:literal: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $setter(&mut self, value: $ty) -> Result<&mut Self, ModelError> {
                self.record.set($field, value)?;
                Ok(self)
            }
        )*
    };
}

impl Phase1Interface {
    pub fn new(name: &str) -> Result<Self, ModelError> {
        let mut p1 = Self::default();
        p1.record.set("name", name)?;
        Ok(p1)
    }

    /// Build from keyword/value pairs (declared field names plus `vdom`).
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

    pub fn name(&self) -> Option<&str> {
        self.record.object_id()
    }

    pub fn vdom(&self) -> Option<&str> {
        self.record.vdom()
    }

    /// Reset a field to the device default.
    pub fn clear(&mut self, field: &str) -> Result<&mut Self, ModelError> {
        self.record.clear(field)?;
        Ok(self)
    }

    setters! {
        set_name => "name": &str;
        /// `dynamic` or `static`; `ddns` yields [`ModelError::Unsupported`].
        set_p1_type => "p1_type": &str;
        set_interface => "interface": &str;
        /// One proposal or a list, each from [`PROPOSALS`].
        set_proposal => "proposal": impl Into<FieldValue>;
        set_ike_version => "ike_version": i64;
        set_local_gw => "local_gw": &str;
        set_psksecret => "psksecret": &str;
        set_localid => "localid": &str;
        set_remote_gw => "remote_gw": &str;
        set_comment => "comment": &str;
        set_add_route => "add_route": &str;
        set_add_gw_route => "add_gw_route": &str;
        /// Seconds, 10 to 900.
        set_keepalive => "keepalive": i64;
        set_net_device => "net_device": &str;
        set_tunnel_search => "tunnel_search": &str;
        set_dpd => "dpd": &str;
        /// One group or a list, each from [`DH_GROUPS`].
        set_dhgrp => "dhgrp": impl Into<FieldValue>;
        set_nattraversal => "nattraversal": &str;
        set_exchange_interface_ip => "exchange_interface_ip": &str;
    }
}

impl Resource for Phase1Interface {
    fn record(&self) -> &ResourceRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ResourceRecord {
        &mut self.record
    }
}
