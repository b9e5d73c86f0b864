/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Table entries for the WBB program's `acl_wbb_ingress_table`, the trap ACL
//! that steers discovery and traceroute packets to the controller.
//!
//! IDs are carried in a [`WbbSchema`] value instead of being hard-wired, so
//! the same encoder works against any compilation of the program.  The
//! default schema holds the IDs of the published `wbb.p4info`.

use proto::p4info::{
    self, ActionRef, ControllerPacketMetadata, ControllerPacketMetadata_Metadata,
    MatchField_MatchType, P4Info, Preamble,
};
use proto::p4runtime::{
    Action, Entity, FieldMatch, FieldMatch_Optional, FieldMatch_Ternary, TableAction,
    TableEntry, Update, Update_Type,
};

use protobuf::{RepeatedField, SingularPtrField};

use serde::{Deserialize, Serialize};

use tracing::warn;

use crate::error::P4Error;
use crate::schema::{encode_value, Switch};

pub const TABLE_NAME: &str = "acl_wbb_ingress_table";
pub const TRAP_ACTION_NAME: &str = "acl_wbb_ingress_trap";
pub const COPY_ACTION_NAME: &str = "acl_wbb_ingress_copy";
pub const PACKET_IN: &str = "packet_in";
pub const PACKET_OUT: &str = "packet_out";

/// Ether type of the Google Discovery Protocol.
pub const GDP_ETHER_TYPE: u16 = 0x6007;
/// Ether type of LLDP.
pub const LLDP_ETHER_TYPE: u16 = 0x88cc;

/// Cookie attached to the WBB pipeline when it is pushed.
pub const PIPELINE_COOKIE: u64 = 159;

/// P4Runtime IDs used when encoding WBB entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WbbSchema {
    pub table_id: u32,
    pub trap_action_id: u32,
    pub copy_action_id: u32,
    pub is_ipv4_id: u32,
    pub is_ipv6_id: u32,
    pub ether_type_id: u32,
    pub ttl_id: u32,
    pub outer_vlan_id_id: u32,
    /// Controller metadata IDs.
    pub packet_in_ingress_port_id: u32,
    pub packet_in_target_egress_port_id: u32,
    pub packet_out_egress_port_id: u32,
    pub packet_out_submit_to_ingress_id: u32,
    pub packet_out_unused_pad_id: u32,
}

impl Default for WbbSchema {
    fn default() -> Self {
        WbbSchema {
            table_id: 33554691,
            trap_action_id: 16777480,
            copy_action_id: 16777479,
            is_ipv4_id: 1,
            is_ipv6_id: 2,
            ether_type_id: 3,
            ttl_id: 4,
            outer_vlan_id_id: 5,
            packet_in_ingress_port_id: 1,
            packet_in_target_egress_port_id: 2,
            packet_out_egress_port_id: 1,
            packet_out_submit_to_ingress_id: 2,
            packet_out_unused_pad_id: 3,
        }
    }
}

impl WbbSchema {
    /// Looks the WBB objects up by name in an installed program.  Controller
    /// metadata is optional and keeps its default IDs when absent.
    pub fn from_switch(switch: &Switch) -> Result<Self, P4Error> {
        let table = switch.table_by_name(TABLE_NAME).ok_or_else(|| {
            P4Error::not_found(format!("P4Info has no table named {}", TABLE_NAME))
        })?;
        let action_id = |name: &str| {
            switch
                .action_by_name(name)
                .map(|a| a.preamble.id)
                .ok_or_else(|| P4Error::not_found(format!("P4Info has no action named {}", name)))
        };
        let field_id = |name: &str| {
            table
                .match_field_by_name(name)
                .map(|mf| mf.preamble.id)
                .ok_or_else(|| {
                    P4Error::not_found(format!("{} has no match field named {}", TABLE_NAME, name))
                })
        };

        let mut schema = WbbSchema {
            table_id: table.preamble.id,
            trap_action_id: action_id(TRAP_ACTION_NAME)?,
            copy_action_id: action_id(COPY_ACTION_NAME)?,
            is_ipv4_id: field_id("is_ipv4")?,
            is_ipv6_id: field_id("is_ipv6")?,
            ether_type_id: field_id("ether_type")?,
            ttl_id: field_id("ttl")?,
            outer_vlan_id_id: field_id("outer_vlan_id")?,
            ..Default::default()
        };
        if let Some(packet_in) = switch.packet_metadata(PACKET_IN) {
            if let Some(id) = packet_in.field_id("ingress_port") {
                schema.packet_in_ingress_port_id = id;
            }
            if let Some(id) = packet_in.field_id("target_egress_port") {
                schema.packet_in_target_egress_port_id = id;
            }
        }
        if let Some(packet_out) = switch.packet_metadata(PACKET_OUT) {
            if let Some(id) = packet_out.field_id("egress_port") {
                schema.packet_out_egress_port_id = id;
            }
            if let Some(id) = packet_out.field_id("submit_to_ingress") {
                schema.packet_out_submit_to_ingress_id = id;
            }
            if let Some(id) = packet_out.field_id("unused_pad") {
                schema.packet_out_unused_pad_id = id;
            }
        }
        Ok(schema)
    }
}

/// Update type of a descriptor, as it appears in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Unspecified,
    #[default]
    Insert,
    Modify,
    Delete,
}

impl From<UpdateKind> for Update_Type {
    fn from(k: UpdateKind) -> Self {
        match k {
            UpdateKind::Unspecified => Update_Type::UNSPECIFIED,
            UpdateKind::Insert => Update_Type::INSERT,
            UpdateKind::Modify => Update_Type::MODIFY,
            UpdateKind::Delete => Update_Type::DELETE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WbbAction {
    #[default]
    Trap,
    Copy,
}

/// One row of `acl_wbb_ingress_table`.  A zero value (or, for ternary
/// fields, a zero mask) leaves that field out of the match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclWbbIngressEntry {
    #[serde(rename = "type")]
    pub update_type: UpdateKind,
    pub is_ipv4: u8,
    pub is_ipv6: u8,
    pub ether_type: u16,
    pub ether_type_mask: u16,
    pub ttl: u8,
    pub ttl_mask: u8,
    pub outer_vlan_id: u16,
    pub outer_vlan_id_mask: u16,
    pub priority: u32,
    pub metadata: String,
    pub action: WbbAction,
}

impl AclWbbIngressEntry {
    /// Matches an exact ether type.
    pub fn ether_type(ether_type: u16, priority: u32) -> Self {
        AclWbbIngressEntry {
            ether_type,
            ether_type_mask: 0xffff,
            priority,
            ..Default::default()
        }
    }

    /// Matches IPv4 (or IPv6) packets with the given TTL (or hop limit).
    pub fn ttl(ipv4: bool, ttl: u8, ttl_mask: u8, priority: u32) -> Self {
        AclWbbIngressEntry {
            is_ipv4: ipv4 as u8,
            is_ipv6: !ipv4 as u8,
            ttl,
            ttl_mask,
            priority,
            ..Default::default()
        }
    }

    pub fn with_update(mut self, update_type: UpdateKind) -> Self {
        self.update_type = update_type;
        self
    }
}

/// The entries every WBB deployment installs: GDP, LLDP, and TTL 1 for both
/// address families.
pub fn default_entries() -> Vec<AclWbbIngressEntry> {
    vec![
        AclWbbIngressEntry::ether_type(GDP_ETHER_TYPE, 1),
        AclWbbIngressEntry::ether_type(LLDP_ETHER_TYPE, 1),
        AclWbbIngressEntry::ttl(true, 1, 0xff, 1),
        AclWbbIngressEntry::ttl(false, 1, 0xff, 1),
    ]
}

fn optional(field_id: u32, value: u8) -> FieldMatch {
    let mut optional = FieldMatch_Optional::new();
    optional.set_value(vec![value]);
    let mut fm = FieldMatch::new();
    fm.set_field_id(field_id);
    fm.set_optional(optional);
    fm
}

fn ternary(field_id: u32, value: Vec<u8>, mask: Vec<u8>) -> FieldMatch {
    let mut ternary = FieldMatch_Ternary::new();
    ternary.set_value(value);
    ternary.set_mask(mask);
    let mut fm = FieldMatch::new();
    fm.set_field_id(field_id);
    fm.set_ternary(ternary);
    fm
}

fn vlan_bytes(vid: u16) -> Vec<u8> {
    vec![((vid >> 8) & 0x0f) as u8, vid as u8]
}

/// Turns [`AclWbbIngressEntry`] descriptors into P4Runtime updates.
#[derive(Clone, Debug, Default)]
pub struct AclWbbEncoder {
    schema: WbbSchema,
}

impl AclWbbEncoder {
    pub fn new(schema: WbbSchema) -> Self {
        AclWbbEncoder { schema }
    }

    pub fn schema(&self) -> &WbbSchema {
        &self.schema
    }

    /// Match fields in table order: is_ipv4, is_ipv6, ether_type, ttl,
    /// outer_vlan_id.
    fn field_matches(&self, e: &AclWbbIngressEntry) -> Vec<FieldMatch> {
        let s = &self.schema;
        let mut matches = Vec::new();
        if e.is_ipv4 != 0 {
            matches.push(optional(s.is_ipv4_id, e.is_ipv4));
        }
        if e.is_ipv6 != 0 {
            matches.push(optional(s.is_ipv6_id, e.is_ipv6));
        }
        if e.ether_type_mask != 0 {
            matches.push(ternary(
                s.ether_type_id,
                encode_value(e.ether_type.into(), 16),
                encode_value(e.ether_type_mask.into(), 16),
            ));
        }
        if e.ttl_mask != 0 {
            matches.push(ternary(s.ttl_id, vec![e.ttl], vec![e.ttl_mask]));
        }
        if e.outer_vlan_id_mask != 0 {
            matches.push(ternary(
                s.outer_vlan_id_id,
                vlan_bytes(e.outer_vlan_id),
                vlan_bytes(e.outer_vlan_id_mask),
            ));
        }
        matches
    }

    pub fn table_entry(&self, e: &AclWbbIngressEntry) -> TableEntry {
        let matches = self.field_matches(e);

        // Ternary and optional matches are meaningless without a priority,
        // so an unset one becomes the lowest.
        let priority = if !matches.is_empty() && e.priority == 0 {
            1
        } else {
            i32::try_from(e.priority).unwrap_or_else(|_| {
                warn!("priority {} out of range, using {}", e.priority, i32::MAX);
                i32::MAX
            })
        };

        let mut action = Action::new();
        action.set_action_id(match e.action {
            WbbAction::Trap => self.schema.trap_action_id,
            WbbAction::Copy => self.schema.copy_action_id,
        });
        let mut table_action = TableAction::new();
        table_action.set_action(action);

        let mut te = TableEntry::new();
        te.set_table_id(self.schema.table_id);
        te.set_field_match(RepeatedField::from_vec(matches));
        te.set_action(table_action);
        te.set_priority(priority);
        te.set_metadata(e.metadata.as_bytes().to_vec());
        te
    }

    pub fn update(&self, e: &AclWbbIngressEntry) -> Update {
        let mut entity = Entity::new();
        entity.set_table_entry(self.table_entry(e));

        let mut update = Update::new();
        update.set_field_type(e.update_type.into());
        update.set_entity(entity);
        update
    }

    /// One update per descriptor, in order.
    pub fn updates(&self, entries: &[AclWbbIngressEntry]) -> Vec<Update> {
        entries.iter().map(|e| self.update(e)).collect()
    }
}

fn preamble(id: u32, name: &str) -> SingularPtrField<Preamble> {
    let alias = name.rsplit('.').next().unwrap_or(name);
    SingularPtrField::some(Preamble {
        id,
        name: name.into(),
        alias: alias.into(),
        ..Default::default()
    })
}

fn match_field(id: u32, name: &str, bitwidth: i32, match_type: MatchField_MatchType) -> p4info::MatchField {
    let mut mf = p4info::MatchField::new();
    mf.set_id(id);
    mf.set_name(name.into());
    mf.set_bitwidth(bitwidth);
    mf.set_match_type(match_type);
    mf
}

fn packet_metadata(id: u32, name: &str, fields: &[(u32, &str, i32)]) -> ControllerPacketMetadata {
    ControllerPacketMetadata {
        preamble: preamble(id, name),
        metadata: fields
            .iter()
            .map(|&(id, name, bitwidth)| ControllerPacketMetadata_Metadata {
                id,
                name: name.into(),
                bitwidth,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// The WBB program's P4Info, with IDs taken from `schema`.  Port metadata is
/// string-translated, so its bit width is 0.
pub fn p4info(schema: &WbbSchema) -> P4Info {
    use MatchField_MatchType::*;

    let action = |id: u32, name: &str| p4info::Action {
        preamble: preamble(id, &format!("ingress.acl_wbb_ingress.{}", name)),
        ..Default::default()
    };
    let action_ref = |id: u32| ActionRef {
        id,
        ..Default::default()
    };
    let table = p4info::Table {
        preamble: preamble(schema.table_id, &format!("ingress.acl_wbb_ingress.{}", TABLE_NAME)),
        match_fields: vec![
            match_field(schema.is_ipv4_id, "is_ipv4", 1, OPTIONAL),
            match_field(schema.is_ipv6_id, "is_ipv6", 1, OPTIONAL),
            match_field(schema.ether_type_id, "ether_type", 16, TERNARY),
            match_field(schema.ttl_id, "ttl", 8, TERNARY),
            match_field(schema.outer_vlan_id_id, "outer_vlan_id", 12, TERNARY),
        ]
        .into(),
        action_refs: vec![
            action_ref(schema.copy_action_id),
            action_ref(schema.trap_action_id),
        ]
        .into(),
        size: 8,
        ..Default::default()
    };

    let mut pkg_info = p4info::PkgInfo::new();
    pkg_info.set_name("wbb.p4".into());
    pkg_info.set_arch("v1model".into());

    P4Info {
        pkg_info: SingularPtrField::some(pkg_info),
        tables: vec![table].into(),
        actions: vec![
            action(schema.copy_action_id, COPY_ACTION_NAME),
            action(schema.trap_action_id, TRAP_ACTION_NAME),
        ]
        .into(),
        controller_packet_metadata: vec![
            packet_metadata(
                67146229,
                PACKET_IN,
                &[
                    (schema.packet_in_ingress_port_id, "ingress_port", 0),
                    (schema.packet_in_target_egress_port_id, "target_egress_port", 0),
                ],
            ),
            packet_metadata(
                67121543,
                PACKET_OUT,
                &[
                    (schema.packet_out_egress_port_id, "egress_port", 0),
                    (schema.packet_out_submit_to_ingress_id, "submit_to_ingress", 1),
                    (schema.packet_out_unused_pad_id, "unused_pad", 7),
                ],
            ),
        ]
        .into(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::p4runtime::FieldMatch_oneof_field_match_type as Kind;

    fn encode(e: &AclWbbIngressEntry) -> TableEntry {
        AclWbbEncoder::default().table_entry(e)
    }

    #[test]
    fn gdp_entry() {
        let te = encode(&AclWbbIngressEntry::ether_type(GDP_ETHER_TYPE, 0));
        assert_eq!(te.table_id, 33554691);
        assert_eq!(te.priority, 1);
        assert_eq!(te.get_action().get_action().action_id, 16777480);
        assert_eq!(te.field_match.len(), 1);
        let fm = &te.field_match[0];
        assert_eq!(fm.field_id, 3);
        match &fm.field_match_type {
            Some(Kind::ternary(t)) => {
                assert_eq!(t.value, vec![0x60, 0x07]);
                assert_eq!(t.mask, vec![0xff, 0xff]);
            }
            other => panic!("expected ternary match, got {:?}", other),
        }
    }

    #[test]
    fn ipv4_ttl_entry() {
        let te = encode(&AclWbbIngressEntry::ttl(true, 1, 0xff, 1));
        let ids: Vec<u32> = te.field_match.iter().map(|fm| fm.field_id).collect();
        assert_eq!(ids, vec![1, 4]);
        match &te.field_match[0].field_match_type {
            Some(Kind::optional(o)) => assert_eq!(o.value, vec![1]),
            other => panic!("expected optional match, got {:?}", other),
        }
    }

    #[test]
    fn empty_descriptor_keeps_priority_zero() {
        let te = encode(&AclWbbIngressEntry::default());
        assert!(te.field_match.is_empty());
        assert_eq!(te.priority, 0);
    }

    #[test]
    fn priority_saturates() {
        let te = encode(&AclWbbIngressEntry::ether_type(GDP_ETHER_TYPE, u32::MAX));
        assert_eq!(te.priority, i32::MAX);
        let te = encode(&AclWbbIngressEntry::ether_type(GDP_ETHER_TYPE, 1 << 31));
        assert_eq!(te.priority, i32::MAX);
    }

    #[test]
    fn zero_mask_omits_field() {
        let te = encode(&AclWbbIngressEntry {
            ether_type: 0x0800,
            ether_type_mask: 0,
            ..Default::default()
        });
        assert!(te.field_match.is_empty());
    }

    #[test]
    fn vlan_is_twelve_bits() {
        let te = encode(&AclWbbIngressEntry {
            outer_vlan_id: 0xf123,
            outer_vlan_id_mask: 0xffff,
            ..Default::default()
        });
        match &te.field_match[0].field_match_type {
            Some(Kind::ternary(t)) => {
                assert_eq!(t.value, vec![0x01, 0x23]);
                assert_eq!(t.mask, vec![0x0f, 0xff]);
            }
            other => panic!("expected ternary match, got {:?}", other),
        }
    }

    #[test]
    fn delete_differs_only_in_type() {
        let encoder = AclWbbEncoder::default();
        let insert = AclWbbIngressEntry::ether_type(LLDP_ETHER_TYPE, 2);
        let delete = insert.clone().with_update(UpdateKind::Delete);
        let (a, b) = (encoder.update(&insert), encoder.update(&delete));
        assert_eq!(a.field_type, Update_Type::INSERT);
        assert_eq!(b.field_type, Update_Type::DELETE);
        assert_eq!(a.get_entity(), b.get_entity());
    }

    #[test]
    fn metadata_is_raw_bytes() {
        let te = encode(&AclWbbIngressEntry {
            metadata: "gdp".into(),
            ..Default::default()
        });
        assert_eq!(te.metadata, b"gdp".to_vec());
    }

    #[test]
    fn schema_round_trips_through_p4info() {
        let schema = WbbSchema {
            table_id: 7,
            ttl_id: 9,
            ..Default::default()
        };
        let switch = Switch::try_from(&p4info(&schema)).unwrap();
        assert_eq!(WbbSchema::from_switch(&switch).unwrap(), schema);
    }

    #[test]
    fn descriptors_from_json() {
        let entries: Vec<AclWbbIngressEntry> = serde_json::from_str(
            r#"[{"ether_type": 24583, "ether_type_mask": 65535, "priority": 1},
                {"type": "delete", "is_ipv6": 1, "ttl": 1, "ttl_mask": 255, "action": "copy"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0], AclWbbIngressEntry::ether_type(GDP_ETHER_TYPE, 1));
        assert_eq!(entries[1].update_type, UpdateKind::Delete);
        assert_eq!(entries[1].action, WbbAction::Copy);
    }
}
