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

//! Client arbitration.
//!
//! Every stream channel that sends a `MasterArbitrationUpdate` joins the group
//! of its (device ID, role ID).  Within a group at most one stream is primary;
//! the others are backups.  The [`Arbiter`] decides who is primary and which
//! streams must be told about it, and gates writes on the outcome.
//!
//! The arbiter knows nothing about the transport.  Streams are plain
//! [`StreamId`]s and the result of every state change is a list of
//! [`Advisory`] values for the caller to deliver.

use grpcio::RpcStatusCode;

use proto::p4runtime::{self, MasterArbitrationUpdate, StreamMessageResponse};
use proto::status::Status;

use protobuf::well_known_types::Any;

use serde::{Deserialize, Serialize};

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, info};

use crate::deviations::{Deviations, Scenario};
use crate::election::ElectionId;
use crate::error::P4Error;

pub type StreamId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Primary,
    Backup,
}

/// How a group picks its primary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimarySelection {
    /// The group remembers the highest election ID it has ever seen, and only
    /// a bid at least that high wins.  If the primary leaves or lowers its
    /// bid, the group stays without a primary until such a bid arrives.
    #[default]
    HighestElectionId,
    /// The connected stream with the highest election ID is primary.
    HighestConnected,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArbitrationRequest {
    pub device_id: u64,
    pub role_id: u64,
    /// `None` for a controller that only ever wants to be a backup.
    pub election_id: Option<ElectionId>,
    /// Opaque to the target; it only has to stay the same on a stream.
    pub role_config: Option<Any>,
}

impl ArbitrationRequest {
    pub fn new(device_id: u64, election_id: ElectionId) -> Self {
        ArbitrationRequest {
            device_id,
            role_id: 0,
            election_id: Some(election_id),
            role_config: None,
        }
    }

    pub fn without_election_id(device_id: u64) -> Self {
        ArbitrationRequest {
            device_id,
            role_id: 0,
            election_id: None,
            role_config: None,
        }
    }

    pub fn to_proto(&self) -> MasterArbitrationUpdate {
        let mut update = MasterArbitrationUpdate::new();
        update.set_device_id(self.device_id);
        if self.role_id != 0 || self.role_config.is_some() {
            let mut role = p4runtime::Role::new();
            role.set_id(self.role_id);
            if let Some(config) = &self.role_config {
                role.set_config(config.clone());
            }
            update.set_role(role);
        }
        if let Some(id) = self.election_id {
            update.set_election_id(id.into());
        }
        update
    }
}

impl From<&MasterArbitrationUpdate> for ArbitrationRequest {
    fn from(update: &MasterArbitrationUpdate) -> Self {
        ArbitrationRequest {
            device_id: update.device_id,
            role_id: update.get_role().id,
            election_id: if update.has_election_id() {
                Some(update.get_election_id().into())
            } else {
                None
            },
            role_config: if update.get_role().has_config() {
                Some(update.get_role().get_config().clone())
            } else {
                None
            },
        }
    }
}

/// An arbitration response owed to one stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advisory {
    pub stream: StreamId,
    pub device_id: u64,
    pub role_id: u64,
    /// Highest election ID of the group, if it ever had one.
    pub election_id: Option<ElectionId>,
    pub code: RpcStatusCode,
}

impl Advisory {
    pub fn role(&self) -> Role {
        if self.code == RpcStatusCode::OK {
            Role::Primary
        } else {
            Role::Backup
        }
    }

    pub fn to_proto(&self) -> StreamMessageResponse {
        let mut update = ArbitrationRequest {
            device_id: self.device_id,
            role_id: self.role_id,
            election_id: self.election_id,
            role_config: None,
        }
        .to_proto();
        let mut status = Status::new();
        status.set_code(self.code.into());
        status.set_message(
            match self.role() {
                Role::Primary => "primary",
                Role::Backup if self.code == RpcStatusCode::ALREADY_EXISTS => "backup, primary exists",
                Role::Backup => "backup, no primary",
            }
            .into(),
        );
        update.set_status(status);

        let mut response = StreamMessageResponse::new();
        response.set_arbitration(update);
        response
    }
}

type GroupKey = (u64, u64);

#[derive(Clone, Debug)]
struct Binding {
    device_id: u64,
    role_id: u64,
    election_id: Option<ElectionId>,
    role_config: Option<Any>,
}

impl Binding {
    fn group(&self) -> GroupKey {
        (self.device_id, self.role_id)
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Group {
    highest: Option<ElectionId>,
    primary: Option<StreamId>,
}

pub struct Arbiter {
    devices: BTreeSet<u64>,
    deviations: Deviations,
    selection: PrimarySelection,
    max_streams: usize,
    bindings: BTreeMap<StreamId, Binding>,
    groups: HashMap<GroupKey, Group>,
}

impl Arbiter {
    pub fn new<I>(devices: I, deviations: Deviations, selection: PrimarySelection, max_streams: usize) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Arbiter {
            devices: devices.into_iter().collect(),
            deviations,
            selection,
            max_streams,
            bindings: BTreeMap::new(),
            groups: HashMap::new(),
        }
    }

    pub fn hosts(&self, device_id: u64) -> bool {
        self.devices.contains(&device_id)
    }

    fn error(&self, scenario: Scenario, message: String) -> P4Error {
        P4Error::new(self.deviations.expected_code(scenario), message)
    }

    /// Zero is "unset" unless the target accepts it as a bid.
    fn effective(&self, election_id: Option<ElectionId>) -> Option<ElectionId> {
        election_id.filter(|id| !id.is_zero() || self.deviations.zero_election_id_primary_allowed)
    }

    fn members(&self, key: GroupKey) -> Vec<(StreamId, Option<ElectionId>)> {
        self.bindings
            .iter()
            .filter(|(_, b)| b.group() == key)
            .map(|(&s, b)| (s, b.election_id))
            .collect()
    }

    /// Handles an arbitration update from `stream`.  An error terminates the
    /// stream and leaves every other stream untouched.
    pub fn arbitrate(&mut self, stream: StreamId, req: &ArbitrationRequest) -> Result<Vec<Advisory>, P4Error> {
        if !self.hosts(req.device_id) {
            return Err(self.error(
                Scenario::UnknownDevice,
                format!("device {} not found", req.device_id),
            ));
        }
        let key = (req.device_id, req.role_id);
        match self.bindings.get(&stream) {
            Some(b) if b.group() != key => {
                return Err(self.error(
                    Scenario::StreamRebind,
                    format!(
                        "stream is already arbitrated for device {} role {}",
                        b.device_id, b.role_id
                    ),
                ));
            }
            Some(_) => (),
            None => {
                let open = self
                    .bindings
                    .values()
                    .filter(|b| b.device_id == req.device_id)
                    .count();
                if open >= self.max_streams {
                    return Err(self.error(
                        Scenario::StreamLimit,
                        format!("device {} already has {} streams", req.device_id, open),
                    ));
                }
            }
        }

        let election_id = self.effective(req.election_id);
        if let Some(id) = election_id {
            let duplicate = self
                .bindings
                .iter()
                .any(|(&s, b)| s != stream && b.group() == key && b.election_id == Some(id));
            if duplicate {
                return Err(self.error(
                    Scenario::DuplicateElectionId,
                    format!("election ID {} is already used by another controller", id),
                ));
            }
        }

        let before = self.groups.get(&key).copied().unwrap_or_default();
        let mut role_config = req.role_config.clone();
        let mut config_changed = false;
        if let Some(b) = self.bindings.get(&stream) {
            if b.role_config != req.role_config {
                if b.election_id != election_id {
                    return Err(self.error(
                        Scenario::RoleConfigMismatch,
                        format!(
                            "role config of device {} role {} changed along with the election ID",
                            req.device_id, req.role_id
                        ),
                    ));
                }
                // Only the primary may change the config of its role.
                if before.primary == Some(stream) {
                    config_changed = true;
                } else {
                    debug!("stream {}: backup's new role config ignored", stream);
                    role_config = b.role_config.clone();
                }
            }
        }

        self.bindings.insert(
            stream,
            Binding {
                device_id: req.device_id,
                role_id: req.role_id,
                election_id,
                role_config,
            },
        );
        self.elect(key, Some(stream));
        debug!(
            "stream {} bid {:?} for device {} role {}",
            stream, election_id, req.device_id, req.role_id
        );
        let after = self.groups.get(&key).copied().unwrap_or_default();
        let notify_group = config_changed || (after.primary.is_some() && after.highest != before.highest);
        Ok(self.advisories(key, Some(stream), before.primary, notify_group))
    }

    /// Forgets `stream`.  Returns the advisories owed to the rest of its group.
    pub fn disconnect(&mut self, stream: StreamId) -> Vec<Advisory> {
        let binding = match self.bindings.remove(&stream) {
            Some(binding) => binding,
            None => return Vec::new(),
        };
        let key = binding.group();
        let old_primary = self.groups.get(&key).and_then(|g| g.primary);
        self.elect(key, None);
        if old_primary == Some(stream) {
            info!("primary of device {} role {} disconnected", key.0, key.1);
        }
        self.advisories(key, None, old_primary, false)
    }

    fn elect(&mut self, key: GroupKey, requester: Option<StreamId>) {
        let members = self.members(key);
        let selection = self.selection;
        let group = self.groups.entry(key).or_default();
        let before = group.primary;
        match selection {
            PrimarySelection::HighestElectionId => {
                if let Some(requester) = requester {
                    let bid = members
                        .iter()
                        .find(|(s, _)| *s == requester)
                        .and_then(|(_, id)| *id);
                    match bid {
                        Some(id) if group.highest.map_or(true, |h| id >= h) => {
                            group.highest = Some(id);
                            group.primary = Some(requester);
                        }
                        _ if group.primary == Some(requester) => group.primary = None,
                        _ => (),
                    }
                }
                if let Some(primary) = group.primary {
                    if !members.iter().any(|(s, _)| *s == primary) {
                        group.primary = None;
                    }
                }
            }
            PrimarySelection::HighestConnected => {
                let best = members
                    .iter()
                    .filter_map(|(s, id)| id.map(|id| (id, *s)))
                    .max();
                group.highest = best.map(|(id, _)| id);
                group.primary = best.map(|(_, s)| s);
            }
        }
        if group.primary != before {
            info!(
                "device {} role {}: primary is now {:?} (was {:?})",
                key.0, key.1, group.primary, before
            );
        }
    }

    /// A changed primary concerns the whole group, as does anything the
    /// caller flags with `notify_group`; the rest concerns only the
    /// requester.
    fn advisories(
        &self,
        key: GroupKey,
        requester: Option<StreamId>,
        old_primary: Option<StreamId>,
        notify_group: bool,
    ) -> Vec<Advisory> {
        let group = self.groups.get(&key).copied().unwrap_or_default();
        let streams: Vec<StreamId> = if notify_group || group.primary != old_primary {
            self.members(key).into_iter().map(|(s, _)| s).collect()
        } else {
            requester.into_iter().collect()
        };
        streams
            .into_iter()
            .map(|stream| Advisory {
                stream,
                device_id: key.0,
                role_id: key.1,
                election_id: group.highest,
                code: if group.primary == Some(stream) {
                    RpcStatusCode::OK
                } else if group.primary.is_some() {
                    self.deviations.expected_code(Scenario::BackupWithPrimary)
                } else {
                    self.deviations.expected_code(Scenario::BackupWithoutPrimary)
                },
            })
            .collect()
    }

    pub fn role_of(&self, stream: StreamId) -> Option<Role> {
        let binding = self.bindings.get(&stream)?;
        match self.groups.get(&binding.group()) {
            Some(group) if group.primary == Some(stream) => Some(Role::Primary),
            _ => Some(Role::Backup),
        }
    }

    /// Device and role the stream arbitrated for.
    pub fn binding(&self, stream: StreamId) -> Option<(u64, u64)> {
        self.bindings.get(&stream).map(Binding::group)
    }

    pub fn primary(&self, device_id: u64, role_id: u64) -> Option<StreamId> {
        self.groups.get(&(device_id, role_id)).and_then(|g| g.primary)
    }

    /// Primaries of every role of `device_id`.
    pub fn primaries(&self, device_id: u64) -> Vec<StreamId> {
        let mut primaries: Vec<StreamId> = self
            .groups
            .iter()
            .filter(|((d, _), _)| *d == device_id)
            .filter_map(|(_, g)| g.primary)
            .collect();
        primaries.sort_unstable();
        primaries
    }

    /// Streams arbitrated for `device_id`, in any role.
    pub fn streams_for(&self, device_id: u64) -> Vec<StreamId> {
        self.bindings
            .iter()
            .filter(|(_, b)| b.device_id == device_id)
            .map(|(&s, _)| s)
            .collect()
    }

    /// Write, and SetForwardingPipelineConfig, are only accepted from the
    /// primary, identified by its exact election ID.
    pub fn check_write(&self, device_id: u64, role_id: u64, election_id: Option<ElectionId>) -> Result<(), P4Error> {
        let election_id = self.effective(election_id);
        let primary_id = self
            .primary(device_id, role_id)
            .and_then(|s| self.bindings.get(&s))
            .and_then(|b| b.election_id);
        match (election_id, primary_id) {
            (Some(id), Some(primary_id)) if id == primary_id => Ok(()),
            (_, Some(primary_id)) => Err(self.error(
                Scenario::WriteFromNonPrimary,
                format!(
                    "election ID {} is not the primary's ({})",
                    election_id.map_or_else(|| "unset".to_string(), |id| id.to_string()),
                    primary_id
                ),
            )),
            (_, None) => Err(self.error(
                Scenario::WriteFromNonPrimary,
                format!("device {} role {} has no primary", device_id, role_id),
            )),
        }
    }

    /// Drops all arbitration state of `device_id`, including the remembered
    /// election IDs.  Returns the streams that were bound to it.
    pub fn reset(&mut self, device_id: u64) -> Vec<StreamId> {
        let streams = self.streams_for(device_id);
        for stream in &streams {
            self.bindings.remove(stream);
        }
        self.groups.retain(|(d, _), _| *d != device_id);
        info!("arbitration state of device {} reset", device_id);
        streams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arbiter(deviations: Deviations) -> Arbiter {
        Arbiter::new([1, 2], deviations, PrimarySelection::default(), 4)
    }

    fn bid(device_id: u64, election_id: u128) -> ArbitrationRequest {
        ArbitrationRequest::new(device_id, ElectionId(election_id))
    }

    fn codes(advisories: &[Advisory]) -> Vec<(StreamId, RpcStatusCode)> {
        advisories.iter().map(|a| (a.stream, a.code)).collect()
    }

    #[test]
    fn primary_and_backup() {
        let mut a = arbiter(Deviations::default());
        let adv = a.arbitrate(1, &bid(1, 100)).unwrap();
        assert_eq!(codes(&adv), vec![(1, RpcStatusCode::OK)]);
        assert_eq!(adv[0].election_id, Some(ElectionId(100)));

        let adv = a.arbitrate(2, &bid(1, 90)).unwrap();
        assert_eq!(codes(&adv), vec![(2, RpcStatusCode::ALREADY_EXISTS)]);
        assert_eq!(adv[0].election_id, Some(ElectionId(100)));

        assert!(a.check_write(1, 0, Some(ElectionId(100))).is_ok());
        assert_eq!(
            a.check_write(1, 0, Some(ElectionId(90))).unwrap_err().code,
            RpcStatusCode::PERMISSION_DENIED
        );
        assert_eq!(
            a.check_write(1, 0, Some(ElectionId(101))).unwrap_err().code,
            RpcStatusCode::PERMISSION_DENIED
        );
    }

    #[test]
    fn replacement_advises_group() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 101)).unwrap();
        a.arbitrate(3, &bid(2, 50)).unwrap();
        let adv = a.arbitrate(2, &bid(1, 102)).unwrap();
        assert_eq!(
            codes(&adv),
            vec![(1, RpcStatusCode::ALREADY_EXISTS), (2, RpcStatusCode::OK)]
        );
        assert_eq!(a.role_of(1), Some(Role::Backup));
        assert_eq!(a.role_of(2), Some(Role::Primary));
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 100)).unwrap();
        let err = a.arbitrate(2, &bid(1, 100)).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
        assert_eq!(a.role_of(1), Some(Role::Primary));
        assert_eq!(a.role_of(2), None);

        // The same stream may repeat its own bid.
        let adv = a.arbitrate(1, &bid(1, 100)).unwrap();
        assert_eq!(codes(&adv), vec![(1, RpcStatusCode::OK)]);
    }

    #[test]
    fn raising_own_id_advises_group() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 100)).unwrap();
        a.arbitrate(2, &bid(1, 90)).unwrap();
        let adv = a.arbitrate(1, &bid(1, 105)).unwrap();
        assert_eq!(
            codes(&adv),
            vec![(1, RpcStatusCode::OK), (2, RpcStatusCode::ALREADY_EXISTS)]
        );
        assert!(adv.iter().all(|a| a.election_id == Some(ElectionId(105))));
    }

    fn with_config(mut req: ArbitrationRequest, type_url: &str) -> ArbitrationRequest {
        let mut config = Any::new();
        config.set_type_url(type_url.into());
        req.role_config = Some(config);
        req
    }

    #[test]
    fn role_config_changes() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &with_config(bid(1, 100), "test")).unwrap();
        a.arbitrate(2, &with_config(bid(1, 90), "test")).unwrap();

        // A new config with a new election ID is refused and the stream
        // terminated.
        let err = a.arbitrate(1, &with_config(bid(1, 101), "test1")).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
        a.disconnect(1);

        // The primary may change it under the same election ID, and the
        // whole group hears about it.
        a.arbitrate(3, &with_config(bid(1, 100), "test")).unwrap();
        let adv = a.arbitrate(3, &with_config(bid(1, 100), "test1")).unwrap();
        assert_eq!(
            codes(&adv),
            vec![(2, RpcStatusCode::ALREADY_EXISTS), (3, RpcStatusCode::OK)]
        );

        // A backup's change is ignored, so its old config still holds.
        let adv = a.arbitrate(2, &with_config(bid(1, 90), "test2")).unwrap();
        assert_eq!(codes(&adv), vec![(2, RpcStatusCode::ALREADY_EXISTS)]);
        let err = a.arbitrate(2, &with_config(bid(1, 91), "test2")).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
    }

    #[test]
    fn lowering_own_id_loses_primary() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 102)).unwrap();
        let adv = a.arbitrate(1, &bid(1, 99)).unwrap();
        assert_eq!(codes(&adv), vec![(1, RpcStatusCode::NOT_FOUND)]);
        assert_eq!(adv[0].election_id, Some(ElectionId(102)));
        assert!(a.check_write(1, 0, Some(ElectionId(99))).is_err());
    }

    #[test]
    fn reconnect_after_disconnect() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 100)).unwrap();
        a.arbitrate(2, &bid(1, 90)).unwrap();
        let adv = a.disconnect(1);
        assert_eq!(codes(&adv), vec![(2, RpcStatusCode::NOT_FOUND)]);

        let adv = a.arbitrate(3, &bid(1, 100)).unwrap();
        assert_eq!(
            codes(&adv),
            vec![(2, RpcStatusCode::ALREADY_EXISTS), (3, RpcStatusCode::OK)]
        );
    }

    #[test]
    fn highest_connected_promotes_backup() {
        let mut a = Arbiter::new([1], Deviations::default(), PrimarySelection::HighestConnected, 4);
        a.arbitrate(1, &bid(1, 100)).unwrap();
        a.arbitrate(2, &bid(1, 90)).unwrap();
        let adv = a.disconnect(1);
        assert_eq!(codes(&adv), vec![(2, RpcStatusCode::OK)]);
        assert_eq!(adv[0].election_id, Some(ElectionId(90)));
    }

    #[test]
    fn unset_and_zero_ids() {
        let mut a = arbiter(Deviations::default());
        let adv = a.arbitrate(1, &ArbitrationRequest::without_election_id(1)).unwrap();
        assert_eq!(codes(&adv), vec![(1, RpcStatusCode::NOT_FOUND)]);
        assert_eq!(adv[0].election_id, None);
        let adv = a.arbitrate(2, &bid(1, 0)).unwrap();
        assert_eq!(codes(&adv), vec![(2, RpcStatusCode::NOT_FOUND)]);

        let mut a = arbiter(Deviations {
            zero_election_id_primary_allowed: true,
            ..Default::default()
        });
        let adv = a.arbitrate(1, &bid(1, 0)).unwrap();
        assert_eq!(codes(&adv), vec![(1, RpcStatusCode::OK)]);
        let err = a.arbitrate(2, &bid(1, 0)).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
    }

    #[test]
    fn limits_and_rebinding() {
        let mut a = Arbiter::new([1, 2], Deviations::default(), PrimarySelection::default(), 2);
        a.arbitrate(1, &bid(1, 10)).unwrap();
        a.arbitrate(2, &bid(1, 11)).unwrap();
        let err = a.arbitrate(3, &bid(1, 12)).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::RESOURCE_EXHAUSTED);

        let err = a.arbitrate(1, &bid(2, 10)).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::FAILED_PRECONDITION);

        let err = a.arbitrate(4, &bid(7, 10)).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::NOT_FOUND);
    }

    #[test]
    fn disconnect_stays_within_device() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 100)).unwrap();
        a.arbitrate(2, &bid(1, 90)).unwrap();
        a.arbitrate(3, &bid(2, 100)).unwrap();
        let adv = a.disconnect(1);
        assert!(adv.iter().all(|a| a.device_id == 1 && a.stream != 3));
        assert_eq!(a.role_of(3), Some(Role::Primary));
    }

    #[test]
    fn reset_forgets_device() {
        let mut a = arbiter(Deviations::default());
        a.arbitrate(1, &bid(1, 100)).unwrap();
        a.arbitrate(2, &bid(2, 100)).unwrap();
        assert_eq!(a.reset(1), vec![1]);
        assert_eq!(a.role_of(1), None);
        assert_eq!(a.role_of(2), Some(Role::Primary));
        let adv = a.arbitrate(3, &bid(1, 5)).unwrap();
        assert_eq!(codes(&adv), vec![(3, RpcStatusCode::OK)]);
    }

    #[test]
    fn advisory_proto() {
        let adv = Advisory {
            stream: 1,
            device_id: 7,
            role_id: 0,
            election_id: Some(ElectionId::new(1, 2)),
            code: RpcStatusCode::NOT_FOUND,
        };
        let msg = adv.to_proto();
        let update = msg.get_arbitration();
        assert_eq!(update.device_id, 7);
        assert!(!update.has_role());
        assert_eq!(update.get_election_id().high, 1);
        assert_eq!(update.get_election_id().low, 2);
        assert_eq!(update.get_status().code, 5);
        assert_eq!(ArbitrationRequest::from(update).election_id, Some(ElectionId::new(1, 2)));
    }
}
