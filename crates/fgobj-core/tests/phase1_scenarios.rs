#![allow(clippy::unwrap_used)]
// End-to-end rendering of phase1-interface resources.

use pretty_assertions::assert_eq;
use serde_json::json;

use fgobj_core::{
    ApiAction, FieldValue, HttpMethod, ModelError, Phase1Interface, Resource, ResourceKind,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn minimal_responder() -> Phase1Interface {
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    p1.set_p1_type("dynamic")
        .unwrap()
        .set_interface("wan1")
        .unwrap()
        .set_proposal(["aes256-sha256"])
        .unwrap()
        .set_psksecret("secret1")
        .unwrap();
    p1
}

fn body_keys(p1: &Phase1Interface) -> Vec<String> {
    p1.api_payload().unwrap().body.keys().cloned().collect()
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn minimal_dynamic_responder() {
    let p1 = minimal_responder();

    assert_eq!(
        p1.cli_block().unwrap().lines(),
        [
            "config vpn ipsec phase1-interface",
            "edit \"vpn-a\"",
            "set type dynamic",
            "set interface wan1",
            "set proposal aes256-sha256 ",
            "set psksecret secret1",
            "end",
        ]
    );

    let payload = p1.api_payload().unwrap();
    assert_eq!(payload.method_path, "cmdb/vpn.ipsec/phase1-interface");
    assert_eq!(payload.object_id.as_deref(), Some("vpn-a"));
    assert_eq!(payload.scope, None);
    assert_eq!(
        serde_json::to_value(&payload.body).unwrap(),
        json!({
            "type": "dynamic",
            "interface": "wan1",
            "proposal": "aes256-sha256 ",
            "psksecret": "secret1",
        })
    );
    assert_eq!(body_keys(&p1), ["type", "interface", "proposal", "psksecret"]);
}

#[test]
fn static_tunnel_with_remote_gateway_and_keepalive() {
    let mut p1 = minimal_responder();
    p1.set_p1_type("static")
        .unwrap()
        .set_remote_gw("198.51.100.7")
        .unwrap()
        .set_keepalive(20)
        .unwrap()
        .set_ike_version(2)
        .unwrap()
        .set_dhgrp(vec![14, 19])
        .unwrap();

    let body = p1.api_payload().unwrap().body;
    assert_eq!(body["remote-gw"], json!("198.51.100.7"));
    assert_eq!(body["keepalive"], json!(20));
    assert_eq!(body["ike-version"], json!(2));
    assert_eq!(body["dhgrp"], json!("14 19 "));

    let cli = p1.cli_block().unwrap();
    assert!(cli.lines().iter().any(|l| l == "set dhgrp 14 19 "));
    assert!(cli.lines().iter().any(|l| l == "set ike-version 2"));
    assert!(cli.lines().iter().any(|l| l == "set remote-gw 198.51.100.7"));
    assert!(cli.lines().iter().any(|l| l == "set keepalive 20"));

    // Declaration order, not assignment order.
    assert_eq!(
        body_keys(&p1),
        [
            "type",
            "interface",
            "proposal",
            "ike-version",
            "psksecret",
            "remote-gw",
            "keepalive",
            "dhgrp",
        ]
    );
}

#[test]
fn vdom_scoped_resource() {
    let p1 = minimal_responder().with_vdom("tenantA").unwrap();
    let cli = p1.cli_block().unwrap();
    let lines = cli.lines();

    assert_eq!(lines[0], "config vdom");
    assert_eq!(lines[1], "edit tenantA");
    assert_eq!(lines[2], "config vpn ipsec phase1-interface");
    assert_eq!(lines[3], "edit \"vpn-a\"");
    assert_eq!(&lines[lines.len() - 2..], ["end", "end"]);

    let payload = p1.api_payload().unwrap();
    assert_eq!(payload.scope.unwrap().vdom, "tenantA");
}

#[test]
fn out_of_range_keepalive_is_rejected_and_not_stored() {
    let mut p1 = minimal_responder();
    let err = p1.set_keepalive(5).unwrap_err();

    assert!(matches!(err, ModelError::Domain { ref field, .. } if field == "keepalive"));
    assert!(err.to_string().contains("between 10 and 900"));
    assert_eq!(p1.record().get("keepalive").unwrap(), None);
    assert!(!body_keys(&p1).contains(&"keepalive".to_owned()));
    assert!(
        !p1.cli_block()
            .unwrap()
            .lines()
            .iter()
            .any(|l| l.starts_with("set keepalive"))
    );
}

#[test]
fn unknown_proposal_element_is_rejected() {
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    let err = p1
        .set_proposal(["aes256-sha256", "not-a-proposal"])
        .unwrap_err();

    match err {
        ModelError::Domain { field, value, .. } => {
            assert_eq!(field, "proposal");
            assert_eq!(value, "\"not-a-proposal\"");
        }
        other => panic!("expected Domain error, got {other:?}"),
    }
    assert_eq!(p1.record().get("proposal").unwrap(), None);
}

#[test]
fn ddns_is_unsupported_not_invalid() {
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    let err = p1.set_p1_type("ddns").unwrap_err();
    assert_eq!(
        err,
        ModelError::Unsupported {
            field: "p1_type".into(),
            value: "ddns".into(),
        }
    );

    let err = p1.set_p1_type("bogus").unwrap_err();
    assert!(matches!(err, ModelError::Domain { .. }));
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn unset_resource_renders_only_context() {
    let p1 = Phase1Interface::new("vpn-a").unwrap();
    assert!(p1.api_payload().unwrap().body.is_empty());
    assert_eq!(
        p1.cli_block().unwrap().lines(),
        ["config vpn ipsec phase1-interface", "edit \"vpn-a\"", "end"]
    );
}

#[test]
fn serialization_is_idempotent() {
    let p1 = minimal_responder().with_vdom("root").unwrap();
    let before = p1.clone();

    assert_eq!(p1.cli_block().unwrap(), p1.cli_block().unwrap());
    assert_eq!(
        serde_json::to_string(&p1.api_payload().unwrap()).unwrap(),
        serde_json::to_string(&p1.api_payload().unwrap()).unwrap()
    );
    assert_eq!(p1, before);
}

#[test]
fn proposal_round_trip_uses_trailing_space() {
    let proposals = ["aes128-sha256", "aes256-sha256", "aes128-sha256"];
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    p1.set_proposal(proposals).unwrap();

    assert_eq!(
        p1.record().rendered("proposal").unwrap(),
        Some(format!("{} ", proposals.join(" ")))
    );
}

#[test]
fn missing_name_is_a_cross_field_error() {
    let mut p1 = Phase1Interface::default();
    p1.set_interface("wan1").unwrap();

    for err in [p1.api_payload().unwrap_err(), p1.cli_block().unwrap_err()] {
        assert!(matches!(err, ModelError::CrossField { ref field, .. } if field == "name"));
    }
}

#[test]
fn dhgrp_accepts_single_or_list() {
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    p1.set_dhgrp(5).unwrap();
    assert_eq!(p1.record().rendered("dhgrp").unwrap().as_deref(), Some("5 "));
    p1.set_dhgrp(vec![5, 14]).unwrap();
    assert_eq!(
        p1.record().rendered("dhgrp").unwrap().as_deref(),
        Some("5 14 ")
    );

    let err = p1.set_dhgrp(vec![5, 99]).unwrap_err();
    assert!(err.to_string().contains("(got 99)"));
    assert_eq!(
        p1.record().rendered("dhgrp").unwrap().as_deref(),
        Some("5 14 ")
    );
}

#[test]
fn ipv4_and_psk_boundaries() {
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    for ok in ["0.0.0.0", "255.255.255.255"] {
        assert!(p1.set_local_gw(ok).is_ok(), "{ok}");
    }
    for bad in ["256.0.0.0", "1.2.3", "::1", ""] {
        assert!(p1.set_remote_gw(bad).is_err(), "{bad}");
    }

    assert!(p1.set_psksecret(&"k".repeat(6)).is_ok());
    assert!(p1.set_psksecret(&"k".repeat(30)).is_ok());
    assert!(p1.set_psksecret(&"k".repeat(5)).is_err());
    assert!(p1.set_psksecret(&"k".repeat(31)).is_err());
}

#[test]
fn comment_with_spaces_is_quoted() {
    let mut p1 = Phase1Interface::new("vpn-a").unwrap();
    p1.set_comment("to branch \"east\"").unwrap();
    assert!(
        p1.cli_block()
            .unwrap()
            .lines()
            .contains(&"set comments \"to branch \\\"east\\\"\"".to_owned())
    );
    assert_eq!(
        p1.api_payload().unwrap().body["comments"],
        json!("to branch \"east\"")
    );
}

// ── Keyword construction and actions ────────────────────────────────

#[test]
fn from_entries_matches_typed_setters() {
    let entries = [
        ("name", Some(FieldValue::from("vpn-a"))),
        ("p1_type", Some("dynamic".into())),
        ("interface", Some("wan1".into())),
        ("proposal", Some(FieldValue::from(["aes256-sha256"]))),
        ("psksecret", Some("secret1".into())),
        ("keepalive", None),
    ];
    let p1 = Phase1Interface::from_entries(entries).unwrap();
    assert_eq!(p1, minimal_responder());
}

#[test]
fn from_entries_rejects_unknown_keyword() {
    let err = Phase1Interface::from_entries([("colour", Some(FieldValue::from("red")))])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "colour is not a declared field of phase1-interface"
    );
}

#[test]
fn registry_builds_records_from_yaml() {
    let doc = "
name: vpn-b
vdom: tenantB
p1_type: static
remote_gw: 203.0.113.5
dhgrp: [19, 20]
keepalive: 60
";
    let entries: indexmap::IndexMap<String, Option<FieldValue>> =
        serde_yaml::from_str(doc).unwrap();
    let record = ResourceKind::Phase1Interface.build(entries).unwrap();

    assert_eq!(record.vdom(), Some("tenantB"));
    assert_eq!(
        record.cli_block().unwrap().lines(),
        [
            "config vdom",
            "edit tenantB",
            "config vpn ipsec phase1-interface",
            "edit \"vpn-b\"",
            "set type static",
            "set remote-gw 203.0.113.5",
            "set keepalive 60",
            "set dhgrp 19 20 ",
            "end",
            "end",
        ]
    );
}

#[test]
fn api_actions_route_requests() {
    let p1 = minimal_responder().with_vdom("root").unwrap();

    let add = p1.api_request(ApiAction::Add).unwrap();
    assert_eq!(add.method, HttpMethod::Post);
    assert_eq!(add.path, "cmdb/vpn.ipsec/phase1-interface");
    let add_json = add.json.unwrap();
    assert_eq!(add_json.keys().next().map(String::as_str), Some("name"));

    let update = p1.api_request(ApiAction::Update).unwrap();
    assert_eq!(update.method, HttpMethod::Put);
    assert_eq!(update.path, "cmdb/vpn.ipsec/phase1-interface/vpn-a");
    assert_eq!(update.query, vec![("vdom".to_owned(), "root".to_owned())]);

    let delete = p1.api_request(ApiAction::Delete).unwrap();
    assert_eq!(delete.method, HttpMethod::Delete);
    assert!(delete.json.is_none());
}

#[test]
fn cli_delete_block() {
    let p1 = minimal_responder();
    assert_eq!(
        p1.cli_delete().unwrap().lines(),
        ["config vpn ipsec phase1-interface", "delete \"vpn-a\"", "end"]
    );
}
