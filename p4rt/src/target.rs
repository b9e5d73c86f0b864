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

//! An emulated P4Runtime target: a set of devices behind one arbiter.
//!
//! Every operation is synchronous.  Messages owed to a stream channel, such
//! as advisories and PacketIns, go out through that stream's unbounded
//! sender; dropping the sender terminates the stream.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

use grpcio::RpcStatusCode;

use proto::p4runtime::{
    Entity, Entity_oneof_entity, ForwardingPipelineConfig, GetForwardingPipelineConfigRequest,
    PacketIn, PacketOut, PacketOutError, ReadRequest, SetForwardingPipelineConfigRequest,
    SetForwardingPipelineConfigRequest_Action as PipelineAction, StreamError, StreamMessageRequest,
    StreamMessageRequest_oneof_update, StreamMessageResponse, WriteRequest,
};

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use crate::arbitration::{Advisory, Arbiter, ArbitrationRequest, PrimarySelection, Role, StreamId};
use crate::deviations::{Deviations, Scenario};
use crate::election::ElectionId;
use crate::device::Device;
use crate::error::{P4Error, WriteError};
use crate::packet::{Egress, Frame};
use crate::trigger::Trigger;

pub struct Target {
    devices: BTreeMap<u64, Device>,
    deviations: Deviations,
    arbiter: Arbiter,
    streams: HashMap<StreamId, UnboundedSender<StreamMessageResponse>>,
    next_stream: StreamId,
}

fn election_id(has: bool, id: &proto::p4runtime::Uint128) -> Option<ElectionId> {
    if has {
        Some(id.into())
    } else {
        None
    }
}

impl Target {
    pub fn new(devices: Vec<Device>, deviations: Deviations, selection: PrimarySelection, max_streams: usize) -> Self {
        let devices: BTreeMap<u64, Device> = devices.into_iter().map(|d| (d.id(), d)).collect();
        let arbiter = Arbiter::new(devices.keys().copied(), deviations, selection, max_streams);
        Target {
            devices,
            deviations,
            arbiter,
            streams: HashMap::new(),
            next_stream: 1,
        }
    }

    pub fn device(&self, device_id: u64) -> Option<&Device> {
        self.devices.get(&device_id)
    }

    pub fn device_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.devices.keys().copied()
    }

    pub fn arbiter(&self) -> &Arbiter {
        &self.arbiter
    }

    fn device_mut(&mut self, device_id: u64) -> Result<&mut Device, P4Error> {
        let code = self.deviations.expected_code(Scenario::UnknownDevice);
        self.devices
            .get_mut(&device_id)
            .ok_or_else(|| P4Error::new(code, format!("device {} not found", device_id)))
    }

    fn send(&self, stream: StreamId, msg: StreamMessageResponse) {
        if let Some(tx) = self.streams.get(&stream) {
            if tx.unbounded_send(msg).is_err() {
                debug!("stream {} is gone, message dropped", stream);
            }
        }
    }

    fn deliver(&self, advisories: Vec<Advisory>) {
        for advisory in advisories {
            self.send(advisory.stream, advisory.to_proto());
        }
    }

    /// PacketIns go to the primary controllers of the device only.
    fn punt(&self, device_id: u64, packet_in: PacketIn) -> bool {
        let primaries = self.arbiter.primaries(device_id);
        for stream in &primaries {
            let mut msg = StreamMessageResponse::new();
            msg.set_packet(packet_in.clone());
            self.send(*stream, msg);
        }
        !primaries.is_empty()
    }

    pub fn open_stream(&mut self) -> (StreamId, UnboundedReceiver<StreamMessageResponse>) {
        let stream = self.next_stream;
        self.next_stream += 1;
        let (tx, rx) = unbounded();
        self.streams.insert(stream, tx);
        debug!("stream {} opened", stream);
        (stream, rx)
    }

    /// Handles one message from a stream channel.  An error means the stream
    /// must be terminated with it.
    pub fn stream_message(&mut self, stream: StreamId, req: &StreamMessageRequest) -> Result<(), P4Error> {
        match &req.update {
            Some(StreamMessageRequest_oneof_update::arbitration(update)) => {
                let advisories = self
                    .arbiter
                    .arbitrate(stream, &ArbitrationRequest::from(update))?;
                self.deliver(advisories);
            }
            Some(StreamMessageRequest_oneof_update::packet(out)) => {
                if let Err(e) = self.packet_out(stream, out) {
                    warn!("stream {}: PacketOut failed: {}", stream, e);
                    self.send(stream, stream_error(&e, out));
                }
            }
            Some(StreamMessageRequest_oneof_update::other(_)) | None => {
                debug!("stream {}: ignoring unsupported stream message", stream);
            }
        }
        Ok(())
    }

    fn packet_out(&mut self, stream: StreamId, out: &PacketOut) -> Result<(), P4Error> {
        let (device_id, _) = self
            .arbiter
            .binding(stream)
            .ok_or_else(|| P4Error::failed_precondition("stream has not arbitrated"))?;
        if self.arbiter.role_of(stream) != Some(Role::Primary) {
            return Err(P4Error::new(
                RpcStatusCode::PERMISSION_DENIED,
                "only the primary may send PacketOut",
            ));
        }
        if let Some(packet_in) = self.device_mut(device_id)?.packet_out(out)? {
            self.punt(device_id, packet_in);
        }
        Ok(())
    }

    pub fn close_stream(&mut self, stream: StreamId) {
        self.streams.remove(&stream);
        let advisories = self.arbiter.disconnect(stream);
        self.deliver(advisories);
        debug!("stream {} closed", stream);
    }

    pub fn write(&mut self, req: &WriteRequest) -> Result<(), WriteError> {
        self.device_mut(req.device_id)?;
        self.arbiter.check_write(
            req.device_id,
            req.role_id,
            election_id(req.has_election_id(), req.get_election_id()),
        )?;
        self.device_mut(req.device_id)?
            .write(req.get_updates(), req.atomicity)
    }

    pub fn read(&self, req: &ReadRequest) -> Result<Vec<Entity>, P4Error> {
        let device = self.devices.get(&req.device_id).ok_or_else(|| {
            P4Error::new(
                self.deviations.expected_code(Scenario::UnknownDevice),
                format!("device {} not found", req.device_id),
            )
        })?;
        let mut result = Vec::new();
        for entity in req.get_entities() {
            match &entity.entity {
                Some(Entity_oneof_entity::table_entry(filter)) => {
                    for entry in device.read(filter)? {
                        let mut e = Entity::new();
                        e.set_table_entry(entry);
                        result.push(e);
                    }
                }
                None => return Err(P4Error::invalid_argument("empty entity in read request")),
            }
        }
        Ok(result)
    }

    pub fn set_pipeline(&mut self, req: &SetForwardingPipelineConfigRequest) -> Result<(), P4Error> {
        self.device_mut(req.device_id)?;
        self.arbiter.check_write(
            req.device_id,
            req.role_id,
            election_id(req.has_election_id(), req.get_election_id()),
        )?;
        let config = if req.has_config() {
            Some(req.get_config())
        } else {
            None
        };
        self.device_mut(req.device_id)?.set_pipeline(req.action, config)
    }

    pub fn get_pipeline(&mut self, req: &GetForwardingPipelineConfigRequest) -> Result<ForwardingPipelineConfig, P4Error> {
        Ok(self.device_mut(req.device_id)?.pipeline_config(req.response_type))
    }

    /// Commits `config` on every device, as an operator would before any
    /// controller connects.
    pub fn install_pipeline(&mut self, config: &ForwardingPipelineConfig) -> Result<(), P4Error> {
        for device in self.devices.values_mut() {
            device.set_pipeline(PipelineAction::VERIFY_AND_COMMIT, Some(config))?;
        }
        Ok(())
    }

    /// Delivers a frame to `port` of a device, as if it came off the wire.
    /// Returns whether a PacketIn reached a controller.
    pub fn inject(&mut self, device_id: u64, port: u32, frame: &Frame) -> Result<bool, P4Error> {
        let packet_in = self.device_mut(device_id)?.receive(port, frame);
        Ok(match packet_in {
            Some(packet_in) => self.punt(device_id, packet_in),
            None => false,
        })
    }

    pub fn apply(&mut self, device_id: u64, trigger: &Trigger) -> Result<(), P4Error> {
        info!("device {}: {}", device_id, trigger);
        let device = self.device_mut(device_id)?;
        if let Trigger::PortState { port_id, up } = trigger {
            device.set_port_state(*port_id, *up)?;
        }
        if trigger.clears_forwarding_state() {
            device.reboot();
        }
        if trigger.drops_streams() {
            for stream in self.arbiter.reset(device_id) {
                // Dropping the sender ends the stream with UNAVAILABLE.
                self.streams.remove(&stream);
            }
        }
        Ok(())
    }

    pub fn transmitted(&self, device_id: u64) -> Vec<(Egress, Frame)> {
        self.devices
            .get(&device_id)
            .map(|d| d.transmitted().to_vec())
            .unwrap_or_default()
    }
}

fn stream_error(e: &P4Error, out: &PacketOut) -> StreamMessageResponse {
    let mut packet_out_error = PacketOutError::new();
    packet_out_error.set_packet_out(out.clone());
    let mut error = StreamError::new();
    error.set_canonical_code(e.code.into());
    error.set_message(e.message.clone());
    error.set_packet_out(packet_out_error);
    let mut msg = StreamMessageResponse::new();
    msg.set_error(error);
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::forwarding_pipeline_config;
    use crate::packet::{packet_out, GdpPacketIo, PacketIo};
    use crate::wbb::{self, AclWbbEncoder, UpdateKind, WbbSchema, PIPELINE_COOKIE};
    use proto::p4runtime::StreamMessageResponse_oneof_update;

    fn target() -> Target {
        Target::new(
            vec![Device::new(1, [1, 2], true, Deviations::default())],
            Deviations::default(),
            PrimarySelection::default(),
            8,
        )
    }

    fn arbitrate(t: &mut Target, stream: StreamId, id: u128) -> Result<(), P4Error> {
        let mut req = StreamMessageRequest::new();
        req.set_arbitration(ArbitrationRequest::new(1, ElectionId(id)).to_proto());
        t.stream_message(stream, &req)
    }

    fn drain(rx: &mut UnboundedReceiver<StreamMessageResponse>) -> Vec<StreamMessageResponse_oneof_update> {
        let mut msgs = Vec::new();
        while let Ok(Some(msg)) = rx.try_next() {
            msgs.extend(msg.update);
        }
        msgs
    }

    fn setup(t: &mut Target, id: u128) {
        let mut req = SetForwardingPipelineConfigRequest::new();
        req.set_device_id(1);
        req.set_election_id(ElectionId(id).into());
        req.set_action(PipelineAction::VERIFY_AND_COMMIT);
        req.set_config(forwarding_pipeline_config(wbb::p4info(&WbbSchema::default()), PIPELINE_COOKIE));
        t.set_pipeline(&req).unwrap();

        let mut req = WriteRequest::new();
        req.set_device_id(1);
        req.set_election_id(ElectionId(id).into());
        req.set_updates(
            AclWbbEncoder::default()
                .updates(&GdpPacketIo::default().table_entries(UpdateKind::Insert))
                .into(),
        );
        t.write(&req).unwrap();
    }

    #[test]
    fn packet_in_reaches_primary_only() {
        let mut t = target();
        let (primary, mut primary_rx) = t.open_stream();
        let (backup, mut backup_rx) = t.open_stream();
        arbitrate(&mut t, primary, 10).unwrap();
        arbitrate(&mut t, backup, 5).unwrap();
        setup(&mut t, 10);
        drain(&mut primary_rx);
        drain(&mut backup_rx);

        let frame = GdpPacketIo::default().frame().unwrap();
        assert!(t.inject(1, 2, &frame).unwrap());
        assert!(matches!(
            drain(&mut primary_rx).as_slice(),
            [StreamMessageResponse_oneof_update::packet(_)]
        ));
        assert!(drain(&mut backup_rx).is_empty());

        // PacketOut from the backup is refused on its own stream.
        let mut req = StreamMessageRequest::new();
        req.set_packet(packet_out(&WbbSchema::default(), &frame, Egress::Port(1)));
        t.stream_message(backup, &req).unwrap();
        match drain(&mut backup_rx).as_slice() {
            [StreamMessageResponse_oneof_update::error(e)] => {
                assert_eq!(e.canonical_code, i32::from(RpcStatusCode::PERMISSION_DENIED));
                assert!(e.has_packet_out());
            }
            other => panic!("unexpected {:?}", other),
        }

        // The loopback brings the primary's PacketOut back as a PacketIn.
        t.stream_message(primary, &req).unwrap();
        assert_eq!(drain(&mut primary_rx).len(), 1);
        assert_eq!(t.transmitted(1), vec![(Egress::Port(1), frame)]);
    }

    #[test]
    fn switchover_drops_streams_keeps_entries() {
        let mut t = target();
        let (primary, mut primary_rx) = t.open_stream();
        arbitrate(&mut t, primary, 10).unwrap();
        setup(&mut t, 10);

        t.apply(1, &Trigger::ControlProcessorSwitchover).unwrap();
        drain(&mut primary_rx);
        assert!(matches!(primary_rx.try_next(), Ok(None)));
        assert_eq!(t.device(1).unwrap().entry_count(), 1);

        // Arbitration starts over, so a lower ID wins now.
        let (stream, _rx) = t.open_stream();
        arbitrate(&mut t, stream, 3).unwrap();
        assert_eq!(t.arbiter().role_of(stream), Some(Role::Primary));

        t.apply(1, &Trigger::Reboot).unwrap();
        assert!(!t.device(1).unwrap().has_pipeline());
    }

    #[test]
    fn only_reboot_clears_forwarding_state() {
        let triggers = [
            Trigger::PortState { port_id: 2, up: false },
            Trigger::ProcessRestart,
            Trigger::ControlProcessorSwitchover,
            Trigger::Reboot,
        ];
        for trigger in &triggers {
            let mut t = target();
            let (primary, _rx) = t.open_stream();
            arbitrate(&mut t, primary, 10).unwrap();
            setup(&mut t, 10);

            t.apply(1, trigger).unwrap();
            let device = t.device(1).unwrap();
            assert_eq!(device.has_pipeline(), !trigger.clears_forwarding_state(), "{}", trigger);
            assert_eq!(device.entry_count(), if trigger.clears_forwarding_state() { 0 } else { 1 });
            assert_eq!(t.arbiter().role_of(primary).is_none(), trigger.drops_streams());
        }
    }

    #[test]
    fn write_gates() {
        let mut t = target();
        let (primary, _rx) = t.open_stream();
        arbitrate(&mut t, primary, 10).unwrap();

        let mut req = WriteRequest::new();
        req.set_device_id(1);
        req.set_election_id(ElectionId(10).into());
        match t.write(&req) {
            Err(WriteError::Rejected(e)) => assert_eq!(e.code, RpcStatusCode::FAILED_PRECONDITION),
            other => panic!("unexpected {:?}", other),
        }
        req.set_election_id(ElectionId(9).into());
        match t.write(&req) {
            Err(WriteError::Rejected(e)) => assert_eq!(e.code, RpcStatusCode::PERMISSION_DENIED),
            other => panic!("unexpected {:?}", other),
        }
        req.set_device_id(2);
        match t.write(&req) {
            Err(WriteError::Rejected(e)) => assert_eq!(e.code, RpcStatusCode::NOT_FOUND),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn duplicate_terminates_only_requester() {
        let mut t = target();
        let (a, mut a_rx) = t.open_stream();
        let (b, _b_rx) = t.open_stream();
        arbitrate(&mut t, a, 10).unwrap();
        drain(&mut a_rx);
        let err = arbitrate(&mut t, b, 10).unwrap_err();
        assert_eq!(err.code, RpcStatusCode::INVALID_ARGUMENT);
        t.close_stream(b);
        assert!(drain(&mut a_rx).is_empty());
        assert_eq!(t.arbiter().role_of(a), Some(Role::Primary));
    }
}
