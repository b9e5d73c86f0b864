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

//! A P4Runtime controller: one client connection with at most one open
//! stream channel.

use futures::{SinkExt, StreamExt};

use grpcio::{ChannelBuilder, ClientDuplexSender, EnvBuilder, RpcStatusCode, WriteFlags};

use proto::p4runtime::{
    CapabilitiesRequest, Entity, Entity_oneof_entity, ForwardingPipelineConfig,
    GetForwardingPipelineConfigRequest, GetForwardingPipelineConfigRequest_ResponseType as ResponseType,
    MasterArbitrationUpdate, PacketIn, PacketOut, ReadRequest, SetForwardingPipelineConfigRequest,
    SetForwardingPipelineConfigRequest_Action as PipelineAction, StreamError, StreamMessageRequest,
    StreamMessageResponse_oneof_update, TableEntry, Update, WriteRequest, WriteRequest_Atomicity,
};
use proto::p4runtime_grpc::P4RuntimeClient;

use protobuf::well_known_types::Any;
use protobuf::{Message, RepeatedField};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};

use tracing::{debug, info, warn};

use crate::arbitration::ArbitrationRequest;
use crate::election::ElectionId;
use crate::error::ClientError;

/// How long to wait for an arbitration response.
pub const ARBITRATION_TIMEOUT: Duration = Duration::from_secs(5);

/// PacketIns held for the test before new ones are dropped.
pub const DEFAULT_PACKET_QUEUE: usize = 1000;

/// An arbitration response or advisory, as the controller sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArbitrationResponse {
    pub device_id: u64,
    pub role_id: u64,
    pub election_id: Option<ElectionId>,
    pub code: RpcStatusCode,
    pub message: String,
}

impl ArbitrationResponse {
    pub fn is_primary(&self) -> bool {
        self.code == RpcStatusCode::OK
    }
}

impl From<&MasterArbitrationUpdate> for ArbitrationResponse {
    fn from(update: &MasterArbitrationUpdate) -> Self {
        let request = ArbitrationRequest::from(update);
        let status = update.get_status();
        ArbitrationResponse {
            device_id: request.device_id,
            role_id: request.role_id,
            election_id: request.election_id,
            code: RpcStatusCode::from(status.code),
            message: status.message.clone(),
        }
    }
}

struct StreamChannel {
    sender: ClientDuplexSender<StreamMessageRequest>,
    arbitration: mpsc::UnboundedReceiver<Result<ArbitrationResponse, ClientError>>,
    errors: mpsc::UnboundedReceiver<StreamError>,
    packets: mpsc::Receiver<PacketIn>,
    task: JoinHandle<()>,
}

pub struct P4rtClient {
    client: P4RuntimeClient,
    device_id: u64,
    role_id: u64,
    election_id: Option<ElectionId>,
    role_config: Option<Any>,
    packet_queue: usize,
    stream: Option<StreamChannel>,
}

/// Splits a failed Write into per-update codes when the server reported
/// them in the status details.
fn write_error(e: grpcio::Error) -> ClientError {
    let status = match &e {
        grpcio::Error::RpcFailure(status) => status,
        _ => return e.into(),
    };
    let details = match proto::status::Status::parse_from_bytes(status.details()) {
        Ok(details) if !details.get_details().is_empty() => details,
        _ => return e.into(),
    };
    let mut updates = Vec::with_capacity(details.get_details().len());
    for any in details.get_details() {
        match any.unpack::<proto::p4runtime::Error>() {
            Ok(Some(error)) => updates.push(RpcStatusCode::from(error.canonical_code)),
            _ => return ClientError::Unexpected(format!("bad write error detail {:?}", any)),
        }
    }
    ClientError::Write {
        code: status.code(),
        updates,
    }
}

impl P4rtClient {
    /// Creates a client for `device_id` at `addr` ("host:port").  The
    /// channel connects lazily.
    pub fn new(addr: &str, device_id: u64) -> Self {
        let env = Arc::new(EnvBuilder::new().build());
        let ch = ChannelBuilder::new(env).connect(addr);
        P4rtClient {
            client: P4RuntimeClient::new(ch),
            device_id,
            role_id: 0,
            election_id: None,
            role_config: None,
            packet_queue: DEFAULT_PACKET_QUEUE,
            stream: None,
        }
    }

    /// Creates a client and makes sure the server answers, trying up to
    /// `attempts` times with `delay` in between.
    pub async fn connect_with_retry(addr: &str, device_id: u64, attempts: usize, delay: Duration) -> Result<Self, ClientError> {
        let client = P4rtClient::new(addr, device_id);
        let mut attempt = 1;
        loop {
            match client.capabilities().await {
                Ok(version) => {
                    info!("{}: connected, P4Runtime {}", addr, version);
                    return Ok(client);
                }
                Err(e) if attempt < attempts => {
                    warn!("{}: attempt {} of {} failed ({}), retrying", addr, attempt, attempts, e);
                    attempt += 1;
                    sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn with_role(mut self, role_id: u64) -> Self {
        self.role_id = role_id;
        self
    }

    /// The role config sent with every arbitration update from now on.
    pub fn set_role_config(&mut self, config: Option<Any>) {
        self.role_config = config;
    }

    pub fn with_packet_queue(mut self, size: usize) -> Self {
        self.packet_queue = size.max(1);
        self
    }

    pub fn device_id(&self) -> u64 {
        self.device_id
    }

    pub fn election_id(&self) -> Option<ElectionId> {
        self.election_id
    }

    /// The election ID sent with writes and pipeline changes.  Arbitrating
    /// sets it too.
    pub fn set_election_id(&mut self, election_id: Option<ElectionId>) {
        self.election_id = election_id;
    }

    pub async fn capabilities(&self) -> Result<String, ClientError> {
        let reply = self
            .client
            .capabilities_async(&CapabilitiesRequest::new())?
            .await?;
        Ok(reply.p4runtime_api_version)
    }

    /// Opens the stream channel, if it is not open yet.  A background task
    /// reads it, queueing arbitration updates and stream errors without
    /// limit and PacketIns up to the packet queue size.
    pub fn open_stream(&mut self) -> Result<(), ClientError> {
        if self.stream.is_some() {
            return Ok(());
        }
        let (sender, mut receiver) = self.client.stream_channel()?;
        let (arbitration_tx, arbitration) = mpsc::unbounded_channel();
        let (errors_tx, errors) = mpsc::unbounded_channel();
        let (packets_tx, packets) = mpsc::channel(self.packet_queue);
        let device_id = self.device_id;
        let task = tokio::spawn(async move {
            while let Some(msg) = receiver.next().await {
                let msg = match msg {
                    Ok(msg) => msg,
                    Err(e) => {
                        debug!("device {}: stream channel ended: {}", device_id, e);
                        let e = match e {
                            grpcio::Error::RpcFailure(status) => ClientError::StreamTerminated {
                                code: status.code(),
                                message: status.message().to_string(),
                            },
                            e => e.into(),
                        };
                        let _ = arbitration_tx.send(Err(e));
                        return;
                    }
                };
                match msg.update {
                    Some(StreamMessageResponse_oneof_update::arbitration(update)) => {
                        let _ = arbitration_tx.send(Ok(ArbitrationResponse::from(&update)));
                    }
                    Some(StreamMessageResponse_oneof_update::packet(packet)) => {
                        if packets_tx.try_send(packet).is_err() {
                            warn!("device {}: PacketIn queue full, dropping packet", device_id);
                        }
                    }
                    Some(StreamMessageResponse_oneof_update::error(error)) => {
                        let _ = errors_tx.send(error);
                    }
                    Some(StreamMessageResponse_oneof_update::other(_)) | None => {
                        debug!("device {}: ignoring stream message", device_id)
                    }
                }
            }
        });
        self.stream = Some(StreamChannel {
            sender,
            arbitration,
            errors,
            packets,
            task,
        });
        Ok(())
    }

    fn stream(&mut self) -> Result<&mut StreamChannel, ClientError> {
        self.stream.as_mut().ok_or(ClientError::NoStream)
    }

    async fn send(&mut self, msg: StreamMessageRequest) -> Result<(), ClientError> {
        self.stream()?
            .sender
            .send((msg, WriteFlags::default()))
            .await?;
        Ok(())
    }

    /// Sends a MasterArbitrationUpdate without waiting for the response.
    pub async fn send_arbitration(&mut self, election_id: Option<ElectionId>) -> Result<(), ClientError> {
        self.open_stream()?;
        self.election_id = election_id;
        let request = ArbitrationRequest {
            device_id: self.device_id,
            role_id: self.role_id,
            election_id,
            role_config: self.role_config.clone(),
        };
        let mut msg = StreamMessageRequest::new();
        msg.set_arbitration(request.to_proto());
        self.send(msg).await
    }

    /// The next arbitration response or advisory on the stream.
    pub async fn next_arbitration(&mut self, wait: Duration) -> Result<ArbitrationResponse, ClientError> {
        let stream = self.stream()?;
        match timeout(wait, stream.arbitration.recv()).await {
            Err(_) => Err(ClientError::Timeout("arbitration response")),
            Ok(Some(response)) => response,
            Ok(None) => Err(ClientError::StreamTerminated {
                code: RpcStatusCode::OK,
                message: "stream closed".into(),
            }),
        }
    }

    /// Arbitrates and waits for the answer.  A backup answer is not an
    /// error; a terminated stream is.
    pub async fn arbitrate(&mut self, election_id: Option<ElectionId>) -> Result<ArbitrationResponse, ClientError> {
        self.send_arbitration(election_id).await?;
        let response = self.next_arbitration(ARBITRATION_TIMEOUT).await?;
        debug!(
            "device {}: election ID {:?} got {:?}",
            self.device_id, election_id, response.code
        );
        Ok(response)
    }

    pub async fn next_stream_error(&mut self, wait: Duration) -> Result<StreamError, ClientError> {
        let stream = self.stream()?;
        match timeout(wait, stream.errors.recv()).await {
            Ok(Some(error)) => Ok(error),
            Ok(None) => Err(ClientError::NoStream),
            Err(_) => Err(ClientError::Timeout("stream error")),
        }
    }

    /// Half-closes the stream channel and waits for the server to finish it.
    pub async fn close_stream(&mut self) -> Result<(), ClientError> {
        if let Some(mut stream) = self.stream.take() {
            // Fails if the server already ended the stream.
            if let Err(e) = stream.sender.close().await {
                debug!("device {}: closing stream: {}", self.device_id, e);
            }
            if stream.task.await.is_err() {
                warn!("device {}: stream reader panicked", self.device_id);
            }
        }
        Ok(())
    }

    pub async fn set_pipeline(&self, action: PipelineAction, config: ForwardingPipelineConfig) -> Result<(), ClientError> {
        let mut req = SetForwardingPipelineConfigRequest::new();
        req.set_device_id(self.device_id);
        req.set_role_id(self.role_id);
        if let Some(id) = self.election_id {
            req.set_election_id(id.into());
        }
        req.set_action(action);
        req.set_config(config);
        self.client
            .set_forwarding_pipeline_config_async(&req)?
            .await?;
        Ok(())
    }

    pub async fn get_pipeline(&self, response_type: ResponseType) -> Result<ForwardingPipelineConfig, ClientError> {
        let mut req = GetForwardingPipelineConfigRequest::new();
        req.set_device_id(self.device_id);
        req.set_response_type(response_type);
        let mut reply = self
            .client
            .get_forwarding_pipeline_config_async(&req)?
            .await?;
        Ok(reply.take_config())
    }

    pub async fn write(&self, updates: Vec<Update>, atomicity: WriteRequest_Atomicity) -> Result<(), ClientError> {
        let mut req = WriteRequest::new();
        req.set_device_id(self.device_id);
        req.set_role_id(self.role_id);
        if let Some(id) = self.election_id {
            req.set_election_id(id.into());
        }
        req.set_atomicity(atomicity);
        req.set_updates(RepeatedField::from_vec(updates));
        let reply = self.client.write_async(&req)?;
        reply.await.map_err(write_error)?;
        Ok(())
    }

    /// Reads the table entries that match `filter`.  A default filter reads
    /// every table.
    pub async fn read_table_entries(&self, filter: TableEntry) -> Result<Vec<TableEntry>, ClientError> {
        let mut entity = Entity::new();
        entity.set_table_entry(filter);
        let mut req = ReadRequest::new();
        req.set_device_id(self.device_id);
        req.set_entities(RepeatedField::from_vec(vec![entity]));

        let mut responses = self.client.read(&req)?;
        let mut entries = Vec::new();
        while let Some(response) = responses.next().await {
            for entity in response?.take_entities().into_iter() {
                match entity.entity {
                    Some(Entity_oneof_entity::table_entry(entry)) => entries.push(entry),
                    None => return Err(ClientError::Unexpected("empty entity in read response".into())),
                }
            }
        }
        Ok(entries)
    }

    pub async fn send_packet_out(&mut self, packet: PacketOut) -> Result<(), ClientError> {
        let mut msg = StreamMessageRequest::new();
        msg.set_packet(packet);
        self.send(msg).await
    }

    /// Collects PacketIns until `count` have arrived or `wait` has passed,
    /// whichever comes first.
    pub async fn capture_packets(&mut self, count: usize, wait: Duration) -> Result<Vec<PacketIn>, ClientError> {
        let deadline = Instant::now() + wait;
        let stream = self.stream()?;
        let mut packets = Vec::new();
        while packets.len() < count {
            match tokio::time::timeout_at(deadline, stream.packets.recv()).await {
                Ok(Some(packet)) => packets.push(packet),
                Ok(None) | Err(_) => break,
            }
        }
        Ok(packets)
    }
}
