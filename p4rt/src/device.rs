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

//! Forwarding state of one emulated P4Runtime device: the installed pipeline,
//! its table entries, its ports, and the WBB packet path.

use grpcio::RpcStatusCode;

use proto::p4runtime::{
    Entity_oneof_entity, FieldMatch_oneof_field_match_type as FieldMatchType,
    ForwardingPipelineConfig, GetForwardingPipelineConfigRequest_ResponseType as ResponseType,
    PacketIn, PacketMetadata, PacketOut, SetForwardingPipelineConfigRequest_Action as PipelineAction,
    TableAction_oneof_type, TableEntry, Update, Update_Type, WriteRequest_Atomicity,
};

use protobuf::{RepeatedField, SingularPtrField};

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use crate::deviations::{Deviations, Scenario};
use crate::error::{P4Error, WriteError};
use crate::packet::{metadata_port, Egress, Frame, PacketFields};
use crate::schema::{decode_value, fits_bit_width, MatchType, Switch, Table};
use crate::wbb::WbbSchema;

/// An installed (or saved) forwarding pipeline.
#[derive(Clone, Debug)]
struct Pipeline {
    config: ForwardingPipelineConfig,
    switch: Switch,
    /// Present when the program is WBB.
    wbb: Option<WbbSchema>,
}

impl Pipeline {
    fn verify(config: &ForwardingPipelineConfig) -> Result<Self, P4Error> {
        if !config.has_p4info() {
            return Err(P4Error::invalid_argument("forwarding pipeline config has no P4Info"));
        }
        let switch = Switch::try_from(config.get_p4info())?;
        let wbb = WbbSchema::from_switch(&switch).ok();
        Ok(Pipeline {
            config: config.clone(),
            switch,
            wbb,
        })
    }
}

fn strip(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

/// A field match with leading zero bytes removed, so that `[0, 1]` and `[1]`
/// name the same entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum MatchKey {
    Exact(Vec<u8>),
    Ternary(Vec<u8>, Vec<u8>),
    Lpm(Vec<u8>, i32),
    Range(Vec<u8>, Vec<u8>),
    Optional(Vec<u8>),
}

impl MatchKey {
    fn new(fm: &FieldMatchType) -> Option<Self> {
        Some(match fm {
            FieldMatchType::exact(e) => MatchKey::Exact(strip(&e.value)),
            FieldMatchType::ternary(t) => MatchKey::Ternary(strip(&t.value), strip(&t.mask)),
            FieldMatchType::lpm(l) => MatchKey::Lpm(strip(&l.value), l.prefix_len),
            FieldMatchType::range(r) => MatchKey::Range(strip(&r.low), strip(&r.high)),
            FieldMatchType::optional(o) => MatchKey::Optional(strip(&o.value)),
            FieldMatchType::other(_) => return None,
        })
    }

    /// Whether a packet field with value `x` satisfies this match.
    fn accepts(&self, x: u64) -> bool {
        match self {
            MatchKey::Exact(v) | MatchKey::Optional(v) => decode_value(v) == Some(x),
            MatchKey::Ternary(v, m) => match (decode_value(v), decode_value(m)) {
                (Some(v), Some(m)) => x & m == v & m,
                _ => false,
            },
            MatchKey::Range(lo, hi) => match (decode_value(lo), decode_value(hi)) {
                (Some(lo), Some(hi)) => lo <= x && x <= hi,
                _ => false,
            },
            MatchKey::Lpm(..) => false,
        }
    }
}

/// What makes two entries the same entry: table, priority, and match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct EntryKey {
    table_id: u32,
    priority: i32,
    matches: BTreeMap<u32, MatchKey>,
}

fn match_keys(entry: &TableEntry) -> BTreeMap<u32, MatchKey> {
    entry
        .get_field_match()
        .iter()
        .filter_map(|fm| {
            fm.field_match_type
                .as_ref()
                .and_then(MatchKey::new)
                .map(|k| (fm.field_id, k))
        })
        .collect()
}

impl From<&TableEntry> for EntryKey {
    fn from(entry: &TableEntry) -> Self {
        EntryKey {
            table_id: entry.table_id,
            priority: entry.priority,
            matches: match_keys(entry),
        }
    }
}

/// True if `value` has a bit set where `mask` has none.  Both are
/// big-endian and may differ in length.
fn bits_outside_mask(value: &[u8], mask: &[u8]) -> bool {
    let len = value.len().max(mask.len());
    let byte = |bytes: &[u8], i: usize| {
        let pad = len - bytes.len();
        if i < pad {
            0
        } else {
            bytes[i - pad]
        }
    };
    (0..len).any(|i| byte(value, i) & !byte(mask, i) != 0)
}

/// Checks `entry` against the installed program.  Actions are only checked
/// when `with_action` is set, since a DELETE need not carry one.
fn validate<'a>(switch: &'a Switch, entry: &TableEntry, with_action: bool, deviations: &Deviations) -> Result<&'a Table, P4Error> {
    let malformed = |message: String| {
        P4Error::new(deviations.expected_code(Scenario::MalformedEntry), message)
    };
    let table = switch.table(entry.table_id).ok_or_else(|| {
        P4Error::new(
            deviations.expected_code(Scenario::UnknownTable),
            format!("table {} not found", entry.table_id),
        )
    })?;
    let name = &table.preamble.name;

    let mut seen = HashSet::new();
    for fm in entry.get_field_match() {
        let mf = table
            .match_field(fm.field_id)
            .ok_or_else(|| malformed(format!("{}: unknown match field {}", name, fm.field_id)))?;
        if !seen.insert(fm.field_id) {
            return Err(malformed(format!("{}: duplicate match field {}", name, mf.preamble.name)));
        }
        let width = mf.bit_width;
        let fits = |bytes: &[u8]| {
            if fits_bit_width(bytes, width) {
                Ok(())
            } else {
                Err(malformed(format!(
                    "{}: value of {} is wider than {} bits",
                    name, mf.preamble.name, width
                )))
            }
        };
        match (&mf.match_type, &fm.field_match_type) {
            (MatchType::Exact, Some(FieldMatchType::exact(e))) => fits(&e.value)?,
            (MatchType::Optional, Some(FieldMatchType::optional(o))) => fits(&o.value)?,
            (MatchType::Ternary, Some(FieldMatchType::ternary(t))) => {
                fits(&t.value)?;
                fits(&t.mask)?;
                if t.mask.iter().all(|b| *b == 0) {
                    return Err(malformed(format!(
                        "{}: ternary mask of {} is zero; omit the field instead",
                        name, mf.preamble.name
                    )));
                }
                if bits_outside_mask(&t.value, &t.mask) {
                    return Err(malformed(format!(
                        "{}: value of {} has bits outside its mask",
                        name, mf.preamble.name
                    )));
                }
            }
            (MatchType::Lpm, Some(FieldMatchType::lpm(l))) => {
                fits(&l.value)?;
                if l.prefix_len <= 0 || l.prefix_len > width {
                    return Err(malformed(format!(
                        "{}: prefix length {} of {} out of range",
                        name, l.prefix_len, mf.preamble.name
                    )));
                }
            }
            (MatchType::Range, Some(FieldMatchType::range(r))) => {
                fits(&r.low)?;
                fits(&r.high)?;
                if decode_value(&r.low) > decode_value(&r.high) {
                    return Err(malformed(format!("{}: empty range for {}", name, mf.preamble.name)));
                }
            }
            (match_type, _) => {
                return Err(malformed(format!(
                    "{}: {} is a {} match",
                    name, mf.preamble.name, match_type
                )))
            }
        }
    }
    if let Some(mf) = table
        .match_fields
        .iter()
        .find(|mf| mf.match_type == MatchType::Exact && !seen.contains(&mf.preamble.id))
    {
        return Err(malformed(format!("{}: exact field {} is missing", name, mf.preamble.name)));
    }

    if table.requires_priority() && entry.priority <= 0 {
        return Err(malformed(format!("{}: entries need a positive priority", name)));
    }
    if !table.requires_priority() && entry.priority != 0 {
        return Err(malformed(format!("{}: entries must not have a priority", name)));
    }

    if with_action {
        let action = match &entry.get_action().field_type {
            Some(TableAction_oneof_type::action(action)) => action,
            _ => return Err(malformed(format!("{}: entry has no action", name))),
        };
        let action_ref = table
            .action_ref(action.action_id)
            .filter(|ar| ar.may_be_entry)
            .ok_or_else(|| {
                malformed(format!("{}: action {} is not allowed", name, action.action_id))
            })?;
        let params = &action_ref.action.params;
        if action.get_params().len() != params.len() {
            return Err(malformed(format!(
                "{}: action {} takes {} parameters",
                name,
                action_ref.action.preamble.name,
                params.len()
            )));
        }
        for p in action.get_params() {
            let param = params
                .iter()
                .find(|x| x.preamble.id == p.param_id)
                .ok_or_else(|| malformed(format!("{}: unknown parameter {}", name, p.param_id)))?;
            if !fits_bit_width(&p.value, param.bit_width) {
                return Err(malformed(format!(
                    "{}: parameter {} is wider than {} bits",
                    name, param.preamble.name, param.bit_width
                )));
            }
        }
    }
    Ok(table)
}

/// One emulated device.
#[derive(Debug)]
pub struct Device {
    id: u64,
    /// Port ID to administrative state.
    ports: BTreeMap<u32, bool>,
    loopback: bool,
    deviations: Deviations,
    pipeline: Option<Pipeline>,
    saved: Option<ForwardingPipelineConfig>,
    entries: BTreeMap<EntryKey, TableEntry>,
    transmitted: Vec<(Egress, Frame)>,
}

impl Device {
    pub fn new<I: IntoIterator<Item = u32>>(id: u64, ports: I, loopback: bool, deviations: Deviations) -> Self {
        Device {
            id,
            ports: ports.into_iter().map(|p| (p, true)).collect(),
            loopback,
            deviations,
            pipeline: None,
            saved: None,
            entries: BTreeMap::new(),
            transmitted: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn ports(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.ports.iter().map(|(&p, &up)| (p, up))
    }

    pub fn has_pipeline(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn wbb_schema(&self) -> Option<&WbbSchema> {
        self.pipeline.as_ref().and_then(|p| p.wbb.as_ref())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Frames sent by PacketOut, oldest first.
    pub fn transmitted(&self) -> &[(Egress, Frame)] {
        &self.transmitted
    }

    fn error(&self, scenario: Scenario, message: String) -> P4Error {
        P4Error::new(self.deviations.expected_code(scenario), message)
    }

    pub fn set_pipeline(&mut self, action: PipelineAction, config: Option<&ForwardingPipelineConfig>) -> Result<(), P4Error> {
        let require_config = || config.ok_or_else(|| P4Error::invalid_argument("request has no config"));
        match action {
            PipelineAction::UNSPECIFIED => Err(P4Error::invalid_argument("pipeline action is unspecified")),
            PipelineAction::VERIFY => Pipeline::verify(require_config()?).map(|_| ()),
            PipelineAction::VERIFY_AND_SAVE => {
                let pipeline = Pipeline::verify(require_config()?)?;
                self.saved = Some(pipeline.config);
                Ok(())
            }
            PipelineAction::VERIFY_AND_COMMIT => {
                let pipeline = Pipeline::verify(require_config()?)?;
                self.install(pipeline, false);
                Ok(())
            }
            PipelineAction::RECONCILE_AND_COMMIT => {
                let pipeline = Pipeline::verify(require_config()?)?;
                self.install(pipeline, true);
                Ok(())
            }
            PipelineAction::COMMIT => {
                let saved = self
                    .saved
                    .take()
                    .ok_or_else(|| P4Error::failed_precondition("no saved pipeline to commit"))?;
                let pipeline = Pipeline::verify(&saved)?;
                self.install(pipeline, false);
                Ok(())
            }
        }
    }

    fn install(&mut self, pipeline: Pipeline, reconcile: bool) {
        let changed = self
            .pipeline
            .as_ref()
            .map_or(true, |old| old.config.get_p4info() != pipeline.config.get_p4info());
        if changed && !reconcile && !self.entries.is_empty() {
            info!("device {}: new program, dropping {} entries", self.id, self.entries.len());
            self.entries.clear();
        }
        info!(
            "device {}: installed pipeline (cookie {}, {} tables{})",
            self.id,
            pipeline.config.get_cookie().cookie,
            pipeline.switch.tables.len(),
            if pipeline.wbb.is_some() { ", WBB" } else { "" }
        );
        self.pipeline = Some(pipeline);
    }

    pub fn pipeline_config(&self, response_type: ResponseType) -> ForwardingPipelineConfig {
        let installed = match &self.pipeline {
            Some(p) => &p.config,
            None => return ForwardingPipelineConfig::new(),
        };
        let mut config = ForwardingPipelineConfig::new();
        config.cookie = installed.cookie.clone();
        match response_type {
            ResponseType::ALL => return installed.clone(),
            ResponseType::COOKIE_ONLY => (),
            ResponseType::P4INFO_AND_COOKIE => config.p4info = installed.p4info.clone(),
            ResponseType::DEVICE_CONFIG_AND_COOKIE => {
                config.p4_device_config = installed.p4_device_config.clone()
            }
        }
        config
    }

    /// Applies a batch.  On failure, returns one code per update.
    pub fn write(&mut self, updates: &[Update], atomicity: WriteRequest_Atomicity) -> Result<(), WriteError> {
        if self.pipeline.is_none() {
            return Err(self
                .error(Scenario::NoPipeline, format!("device {} has no pipeline", self.id))
                .into());
        }
        let snapshot = match atomicity {
            WriteRequest_Atomicity::CONTINUE_ON_ERROR => None,
            WriteRequest_Atomicity::ROLLBACK_ON_ERROR | WriteRequest_Atomicity::DATAPLANE_ATOMIC => {
                Some(self.entries.clone())
            }
        };

        let mut codes = Vec::with_capacity(updates.len());
        for update in updates {
            codes.push(match self.apply(update) {
                Ok(()) => RpcStatusCode::OK,
                Err(e) => {
                    warn!("device {}: {:?} failed: {}", self.id, update.get_field_type(), e);
                    e.code
                }
            });
        }
        if codes.iter().all(|c| *c == RpcStatusCode::OK) {
            return Ok(());
        }
        if let Some(snapshot) = snapshot {
            self.entries = snapshot;
            let aborted = self.deviations.expected_code(Scenario::BatchAborted);
            for code in codes.iter_mut().filter(|c| **c == RpcStatusCode::OK) {
                *code = aborted;
            }
        }
        Err(WriteError::Updates(codes))
    }

    fn apply(&mut self, update: &Update) -> Result<(), P4Error> {
        let d = self.deviations;
        let entry = match &update.get_entity().entity {
            Some(Entity_oneof_entity::table_entry(entry)) => entry,
            None => {
                return Err(P4Error::new(
                    d.expected_code(Scenario::MalformedEntry),
                    "update has no entity",
                ))
            }
        };
        let op = update.get_field_type();
        let unspecified = || {
            P4Error::new(
                d.expected_code(Scenario::UnspecifiedUpdate),
                "update type is unspecified",
            )
        };
        if op == Update_Type::UNSPECIFIED {
            return Err(unspecified());
        }
        let switch = match &self.pipeline {
            Some(p) => &p.switch,
            None => return Err(P4Error::new(d.expected_code(Scenario::NoPipeline), "no pipeline")),
        };
        let table = validate(switch, entry, op != Update_Type::DELETE, &d)?;
        let max_entries = table.max_entries;
        let key = EntryKey::from(entry);
        let exists = self.entries.contains_key(&key);
        match op {
            Update_Type::INSERT if exists => Err(P4Error::new(
                d.expected_code(Scenario::InsertExisting),
                "entry already exists",
            )),
            Update_Type::INSERT => {
                let in_table = self.entries.keys().filter(|k| k.table_id == key.table_id).count();
                if max_entries.map_or(false, |max| in_table as u64 >= max) {
                    return Err(P4Error::new(
                        d.expected_code(Scenario::TableFull),
                        format!("table {} is full", key.table_id),
                    ));
                }
                self.entries.insert(key, entry.clone());
                Ok(())
            }
            Update_Type::MODIFY if exists => {
                self.entries.insert(key, entry.clone());
                Ok(())
            }
            Update_Type::MODIFY => Err(P4Error::new(
                d.expected_code(Scenario::ModifyMissing),
                "no such entry to modify",
            )),
            Update_Type::DELETE if exists => {
                self.entries.remove(&key);
                Ok(())
            }
            Update_Type::DELETE => Err(P4Error::new(
                d.expected_code(Scenario::DeleteMissing),
                "no such entry to delete",
            )),
            Update_Type::UNSPECIFIED => Err(unspecified()),
        }
    }

    /// Entries selected by `filter`.  A zero table ID reads every table; a
    /// non-empty match or a non-zero priority narrows the result.
    pub fn read(&self, filter: &TableEntry) -> Result<Vec<TableEntry>, P4Error> {
        let pipeline = self.pipeline.as_ref().ok_or_else(|| {
            self.error(Scenario::NoPipeline, format!("device {} has no pipeline", self.id))
        })?;
        if filter.table_id != 0 && pipeline.switch.table(filter.table_id).is_none() {
            return Err(self.error(
                Scenario::UnknownTable,
                format!("table {} not found", filter.table_id),
            ));
        }
        let matches = match_keys(filter);
        Ok(self
            .entries
            .iter()
            .filter(|(k, _)| filter.table_id == 0 || k.table_id == filter.table_id)
            .filter(|(k, _)| filter.priority == 0 || k.priority == filter.priority)
            .filter(|(k, _)| matches.is_empty() || k.matches == matches)
            .map(|(_, e)| e.clone())
            .collect())
    }

    /// Runs a frame received on `port` through the WBB table.  Returns the
    /// PacketIn for the controller if an entry traps or copies it.
    pub fn receive(&self, port: u32, frame: &Frame) -> Option<PacketIn> {
        match self.ports.get(&port) {
            Some(true) => (),
            Some(false) => {
                debug!("device {}: port {} is down, dropping {:?}", self.id, port, frame);
                return None;
            }
            None => {
                debug!("device {}: no port {}, dropping frame", self.id, port);
                return None;
            }
        }
        let schema = self.wbb_schema()?;
        let fields = match PacketFields::parse(frame.as_bytes()) {
            Ok(fields) => fields,
            Err(e) => {
                debug!("device {}: {}", self.id, e);
                return None;
            }
        };
        let value = |field_id: u32| -> Option<u64> {
            if field_id == schema.is_ipv4_id {
                Some(fields.is_ipv4 as u64)
            } else if field_id == schema.is_ipv6_id {
                Some(fields.is_ipv6 as u64)
            } else if field_id == schema.ether_type_id {
                Some(fields.ether_type.into())
            } else if field_id == schema.ttl_id {
                fields.ttl.map(u64::from)
            } else if field_id == schema.outer_vlan_id_id {
                fields.vlan_id.map(u64::from)
            } else {
                None
            }
        };
        let hit = self
            .entries
            .iter()
            .filter(|(k, _)| k.table_id == schema.table_id)
            .filter(|(k, _)| {
                k.matches
                    .iter()
                    .all(|(id, m)| value(*id).map_or(false, |x| m.accepts(x)))
            })
            .max_by_key(|(k, _)| k.priority)
            .map(|(_, e)| e)?;
        debug!("device {}: port {} {:?} hit {:?}", self.id, port, frame, hit);

        let mut metadata = PacketMetadata::new();
        metadata.set_metadata_id(schema.packet_in_ingress_port_id);
        metadata.set_value(port.to_string().into_bytes());
        let mut packet_in = PacketIn::new();
        packet_in.set_payload(frame.0.clone());
        packet_in.set_metadata(RepeatedField::from_vec(vec![metadata]));
        Some(packet_in)
    }

    /// Sends a controller frame.  On a loopback device a frame sent out a
    /// port comes straight back in on it, and the resulting PacketIn, if
    /// any, is returned.
    pub fn packet_out(&mut self, out: &PacketOut) -> Result<Option<PacketIn>, P4Error> {
        let schema = self.wbb_schema().cloned().ok_or_else(|| {
            self.error(Scenario::NoPipeline, format!("device {} has no WBB pipeline", self.id))
        })?;
        let frame = Frame(out.payload.clone());
        let submit = out
            .get_metadata()
            .iter()
            .find(|m| m.metadata_id == schema.packet_out_submit_to_ingress_id)
            .and_then(|m| decode_value(&m.value))
            .unwrap_or(0);
        if submit != 0 {
            self.transmitted.push((Egress::SubmitToIngress, frame));
            return Ok(None);
        }

        let port = metadata_port(out.get_metadata(), schema.packet_out_egress_port_id)
            .ok_or_else(|| P4Error::invalid_argument("PacketOut has no valid egress_port"))?;
        match self.ports.get(&port) {
            None => Err(P4Error::invalid_argument(format!("port {} not found", port))),
            Some(false) => {
                debug!("device {}: port {} is down, PacketOut dropped", self.id, port);
                Ok(None)
            }
            Some(true) => {
                self.transmitted.push((Egress::Port(port), frame.clone()));
                Ok(if self.loopback {
                    self.receive(port, &frame)
                } else {
                    None
                })
            }
        }
    }

    pub fn set_port_state(&mut self, port: u32, up: bool) -> Result<(), P4Error> {
        let state = self
            .ports
            .get_mut(&port)
            .ok_or_else(|| P4Error::not_found(format!("port {} not found", port)))?;
        *state = up;
        info!("device {}: port {} {}", self.id, port, if up { "up" } else { "down" });
        Ok(())
    }

    /// Loses all forwarding state.  Ports come back up.
    pub fn reboot(&mut self) {
        self.pipeline = None;
        self.saved = None;
        self.entries.clear();
        self.transmitted.clear();
        for up in self.ports.values_mut() {
            *up = true;
        }
        info!("device {} rebooted", self.id);
    }
}

/// A `ForwardingPipelineConfig` for `p4info`, with the WBB cookie.
pub fn forwarding_pipeline_config(p4info: proto::p4info::P4Info, cookie: u64) -> ForwardingPipelineConfig {
    let mut c = proto::p4runtime::ForwardingPipelineConfig_Cookie::new();
    c.set_cookie(cookie);
    ForwardingPipelineConfig {
        p4info: SingularPtrField::some(p4info),
        cookie: SingularPtrField::some(c),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::{packet_out, GdpPacketIo, LldpPacketIo, PacketIo};
    use crate::wbb::{self, AclWbbEncoder, AclWbbIngressEntry, UpdateKind, PIPELINE_COOKIE};

    fn device(loopback: bool) -> Device {
        let mut d = Device::new(1, [1, 2], loopback, Deviations::default());
        let config = forwarding_pipeline_config(wbb::p4info(&WbbSchema::default()), PIPELINE_COOKIE);
        d.set_pipeline(PipelineAction::VERIFY_AND_COMMIT, Some(&config)).unwrap();
        d
    }

    fn codes(result: Result<(), WriteError>) -> Vec<RpcStatusCode> {
        match result {
            Ok(()) => vec![],
            Err(WriteError::Updates(codes)) => codes,
            Err(WriteError::Rejected(e)) => vec![e.code],
        }
    }

    fn insert(e: AclWbbIngressEntry) -> Update {
        AclWbbEncoder::default().update(&e)
    }

    #[test]
    fn pipeline_actions() {
        let mut d = Device::new(1, [1], false, Deviations::default());
        let config = forwarding_pipeline_config(wbb::p4info(&WbbSchema::default()), 7);

        d.set_pipeline(PipelineAction::VERIFY, Some(&config)).unwrap();
        assert!(!d.has_pipeline());
        d.set_pipeline(PipelineAction::VERIFY_AND_SAVE, Some(&config)).unwrap();
        assert!(!d.has_pipeline());
        d.set_pipeline(PipelineAction::COMMIT, None).unwrap();
        assert!(d.has_pipeline());
        assert_eq!(d.pipeline_config(ResponseType::COOKIE_ONLY).get_cookie().cookie, 7);
        assert!(!d.pipeline_config(ResponseType::COOKIE_ONLY).has_p4info());
        assert!(d.pipeline_config(ResponseType::ALL).has_p4info());

        let err = d.set_pipeline(PipelineAction::UNSPECIFIED, Some(&config)).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
        let err = d
            .set_pipeline(PipelineAction::VERIFY_AND_COMMIT, Some(&ForwardingPipelineConfig::new()))
            .unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
    }

    #[test]
    fn write_before_pipeline() {
        let mut d = Device::new(1, [1], false, Deviations::default());
        let update = insert(AclWbbIngressEntry::ether_type(0x6007, 1));
        assert_eq!(
            codes(d.write(&[update], WriteRequest_Atomicity::CONTINUE_ON_ERROR)),
            vec![RpcStatusCode::FAILED_PRECONDITION]
        );
        assert_eq!(
            d.read(&TableEntry::new()).unwrap_err().code,
            RpcStatusCode::FAILED_PRECONDITION
        );
    }

    #[test]
    fn insert_modify_delete() {
        let mut d = device(false);
        let gdp = AclWbbIngressEntry::ether_type(0x6007, 1);
        let ok = WriteRequest_Atomicity::CONTINUE_ON_ERROR;
        d.write(&[insert(gdp.clone())], ok).unwrap();
        assert_eq!(codes(d.write(&[insert(gdp.clone())], ok)), vec![RpcStatusCode::ALREADY_EXISTS]);
        d.write(&[insert(gdp.clone().with_update(UpdateKind::Modify))], ok).unwrap();
        d.write(&[insert(gdp.clone().with_update(UpdateKind::Delete))], ok).unwrap();
        assert_eq!(
            codes(d.write(&[insert(gdp.clone().with_update(UpdateKind::Delete))], ok)),
            vec![RpcStatusCode::NOT_FOUND]
        );
        assert_eq!(
            codes(d.write(&[insert(gdp.with_update(UpdateKind::Modify))], ok)),
            vec![RpcStatusCode::NOT_FOUND]
        );
        assert_eq!(
            codes(d.write(&[insert(AclWbbIngressEntry::default().with_update(UpdateKind::Unspecified))], ok)),
            vec![RpcStatusCode::INVALID_ARGUMENT]
        );
    }

    #[test]
    fn malformed_entries() {
        let mut d = device(false);
        let ok = WriteRequest_Atomicity::CONTINUE_ON_ERROR;

        let mut update = insert(AclWbbIngressEntry::ether_type(0x6007, 1));
        update.mut_entity().mut_table_entry().set_priority(0);
        assert_eq!(codes(d.write(&[update], ok)), vec![RpcStatusCode::INVALID_ARGUMENT]);

        let mut update = insert(AclWbbIngressEntry::ether_type(0x6007, 1));
        update.mut_entity().mut_table_entry().set_table_id(1234);
        assert_eq!(codes(d.write(&[update], ok)), vec![RpcStatusCode::NOT_FOUND]);

        let mut update = insert(AclWbbIngressEntry::ether_type(0x6007, 1));
        update.mut_entity().mut_table_entry().mut_action().mut_action().set_action_id(99);
        assert_eq!(codes(d.write(&[update], ok)), vec![RpcStatusCode::INVALID_ARGUMENT]);

        // TTL is 8 bits wide.
        let mut update = insert(AclWbbIngressEntry::ttl(true, 1, 0xff, 1));
        update.mut_entity().mut_table_entry().mut_field_match()[1]
            .mut_ternary()
            .set_value(vec![1, 0]);
        assert_eq!(codes(d.write(&[update], ok)), vec![RpcStatusCode::INVALID_ARGUMENT]);

        let mut update = insert(AclWbbIngressEntry {
            ether_type: 0x6007,
            ether_type_mask: 0xff00,
            priority: 1,
            ..Default::default()
        });
        assert_eq!(codes(d.write(&[update.clone()], ok)), vec![RpcStatusCode::INVALID_ARGUMENT]);
        update.mut_entity().mut_table_entry().mut_field_match()[0]
            .mut_ternary()
            .set_value(vec![0x60, 0x00]);
        assert!(d.write(&[update], ok).is_ok());
    }

    #[test]
    fn table_full() {
        let mut d = device(false);
        let updates: Vec<Update> = (0..9u16)
            .map(|i| insert(AclWbbIngressEntry::ether_type(0x9000 + i, 1)))
            .collect();
        let codes = codes(d.write(&updates, WriteRequest_Atomicity::CONTINUE_ON_ERROR));
        assert_eq!(codes[..8], [RpcStatusCode::OK; 8]);
        assert_eq!(codes[8], RpcStatusCode::RESOURCE_EXHAUSTED);
        assert_eq!(d.entry_count(), 8);
    }

    #[test]
    fn rollback_on_error() {
        let mut d = device(false);
        let gdp = insert(AclWbbIngressEntry::ether_type(0x6007, 1));
        let lldp = insert(AclWbbIngressEntry::ether_type(0x88cc, 1));
        let result = d.write(&[gdp.clone(), lldp, gdp], WriteRequest_Atomicity::ROLLBACK_ON_ERROR);
        assert_eq!(
            codes(result),
            vec![RpcStatusCode::ABORTED, RpcStatusCode::ABORTED, RpcStatusCode::ALREADY_EXISTS]
        );
        assert_eq!(d.entry_count(), 0);
    }

    #[test]
    fn read_filters() {
        let mut d = device(false);
        let encoder = AclWbbEncoder::default();
        d.write(&encoder.updates(&wbb::default_entries()), WriteRequest_Atomicity::CONTINUE_ON_ERROR)
            .unwrap();
        assert_eq!(d.read(&TableEntry::new()).unwrap().len(), 4);

        let gdp = encoder.table_entry(&AclWbbIngressEntry::ether_type(0x6007, 1));
        // Leading zero bytes don't make a different entry.
        let mut padded = gdp.clone();
        padded.mut_field_match()[0].mut_ternary().set_value(vec![0, 0x60, 0x07]);
        assert_eq!(d.read(&padded).unwrap(), vec![gdp]);

        let mut filter = TableEntry::new();
        filter.set_table_id(42);
        assert_eq!(d.read(&filter).unwrap_err().code, RpcStatusCode::NOT_FOUND);
    }

    #[test]
    fn trap_and_loopback() {
        let mut d = device(true);
        let gdp = GdpPacketIo::default();
        let frame = gdp.frame().unwrap();
        assert!(d.receive(1, &frame).is_none());

        d.write(
            &AclWbbEncoder::default().updates(&gdp.table_entries(UpdateKind::Insert)),
            WriteRequest_Atomicity::CONTINUE_ON_ERROR,
        )
        .unwrap();
        let packet_in = d.receive(2, &frame).unwrap();
        assert_eq!(packet_in.payload, frame.0);
        assert_eq!(metadata_port(packet_in.get_metadata(), 1), Some(2));
        assert!(d.receive(1, &LldpPacketIo::default().frame().unwrap()).is_none());

        let schema = WbbSchema::default();
        let looped = d.packet_out(&packet_out(&schema, &frame, Egress::Port(1))).unwrap();
        assert_eq!(metadata_port(looped.unwrap().get_metadata(), 1), Some(1));
        assert_eq!(d.transmitted(), &[(Egress::Port(1), frame.clone())]);

        d.set_port_state(1, false).unwrap();
        assert!(d.receive(1, &frame).is_none());
        assert!(d.packet_out(&packet_out(&schema, &frame, Egress::Port(1))).unwrap().is_none());
        assert_eq!(
            d.packet_out(&packet_out(&schema, &frame, Egress::Port(9))).unwrap_err().code,
            RpcStatusCode::INVALID_ARGUMENT
        );

        d.reboot();
        assert!(!d.has_pipeline());
        assert_eq!(d.entry_count(), 0);
    }
}
