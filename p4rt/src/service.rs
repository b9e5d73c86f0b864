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

//! gRPC front end for a [`Target`].

use anyhow::{Context, Result};

use futures::{future, stream, FutureExt, SinkExt, StreamExt, TryFutureExt};

use grpcio::{
    DuplexSink, Environment, RequestStream, RpcContext, RpcStatus, RpcStatusCode, Server,
    ServerBuilder, ServerStreamingSink, UnarySink, WriteFlags,
};

use proto::p4runtime::{
    CapabilitiesRequest, CapabilitiesResponse, GetForwardingPipelineConfigRequest,
    GetForwardingPipelineConfigResponse, ReadRequest, ReadResponse,
    SetForwardingPipelineConfigRequest, SetForwardingPipelineConfigResponse,
    StreamMessageRequest, StreamMessageResponse, WriteRequest, WriteResponse,
};
use proto::p4runtime_grpc::{create_p4_runtime, P4Runtime};

use protobuf::{well_known_types::Any, Message, RepeatedField};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::error::WriteError;
use crate::target::Target;

/// The P4Runtime API version reported by Capabilities.
pub const API_VERSION: &str = "1.3.0";

fn lock(target: &Mutex<Target>) -> MutexGuard<'_, Target> {
    target.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct P4RuntimeService {
    target: Arc<Mutex<Target>>,
}

impl P4RuntimeService {
    pub fn new(target: Arc<Mutex<Target>>) -> P4RuntimeService {
        P4RuntimeService { target }
    }
}

fn unary_fail<T>(ctx: &RpcContext, sink: UnarySink<T>, status: RpcStatus) {
    let f = sink
        .fail(status)
        .map_err(|e| error!("failed to send error: {:?}", e))
        .map(|_| ());
    ctx.spawn(f);
}

fn unary_success<T>(ctx: &RpcContext, sink: UnarySink<T>, reply: T) {
    let f = sink
        .success(reply)
        .map_err(|e: grpcio::Error| error!("failed to send reply: {:?}", e))
        .map(|_| ());
    ctx.spawn(f);
}

fn server_streaming_fail<T>(ctx: &RpcContext, sink: ServerStreamingSink<T>, status: RpcStatus) {
    let f = sink
        .fail(status)
        .map_err(|e| error!("failed to send error: {:?}", e))
        .map(|_| ());
    ctx.spawn(f);
}

fn server_streaming_success<T: Send + 'static>(ctx: &RpcContext, mut sink: ServerStreamingSink<T>, reply: Vec<T>) {
    let f = async move {
        for msg in reply {
            sink.send((msg, WriteFlags::default())).await?;
        }
        sink.close().await?;
        Ok(())
    }
    .map_err(|e: grpcio::Error| error!("failed to stream response: {:?}", e))
    .map(|_| ());
    ctx.spawn(f);
}

/// The status for a Write in which some updates failed: UNKNOWN, with a
/// `google.rpc.Status` in the details that holds one `p4.v1.Error` per
/// update.
fn write_failure(codes: &[RpcStatusCode]) -> RpcStatus {
    let mut errors = Vec::with_capacity(codes.len());
    for &code in codes {
        let mut e = proto::p4runtime::Error::new();
        e.set_canonical_code(code.into());
        if code != RpcStatusCode::OK {
            e.set_message(format!("{:?}", code));
        }
        match Any::pack(&e) {
            Ok(any) => errors.push(any),
            Err(err) => error!("could not pack p4.v1.Error: {}", err),
        }
    }
    let mut status = proto::status::Status::new();
    status.set_code(RpcStatusCode::UNKNOWN.into());
    status.set_message("write failure".into());
    status.set_details(RepeatedField::from_vec(errors));
    let details = status.write_to_bytes().unwrap_or_else(|err| {
        error!("could not encode write status: {}", err);
        Vec::new()
    });
    RpcStatus::with_details(RpcStatusCode::UNKNOWN, "write failure".into(), details)
}

enum Event {
    Request(StreamMessageRequest),
    Failed(grpcio::Error),
    /// The client half-closed the stream.
    Closed,
    Notify(StreamMessageResponse),
    /// The target dropped the stream.
    Dropped,
}

impl P4Runtime for P4RuntimeService {
    fn write(&mut self, ctx: RpcContext, req: WriteRequest, sink: UnarySink<WriteResponse>) {
        debug!(
            "write: device {} role {} {} update(s)",
            req.device_id,
            req.role_id,
            req.updates.len()
        );
        let result = lock(&self.target).write(&req);
        match result {
            Ok(()) => unary_success(&ctx, sink, WriteResponse::new()),
            Err(WriteError::Rejected(e)) => {
                info!("write rejected: {}", e);
                unary_fail(&ctx, sink, e.into())
            }
            Err(WriteError::Updates(codes)) => {
                info!("write failed: {:?}", codes);
                unary_fail(&ctx, sink, write_failure(&codes))
            }
        }
    }

    fn read(&mut self, ctx: RpcContext, req: ReadRequest, sink: ServerStreamingSink<ReadResponse>) {
        debug!("read: device {}", req.device_id);
        let result = lock(&self.target).read(&req);
        match result {
            Ok(entities) => {
                let mut response = ReadResponse::new();
                response.set_entities(RepeatedField::from_vec(entities));
                server_streaming_success(&ctx, sink, vec![response]);
            }
            Err(e) => {
                info!("read rejected: {}", e);
                server_streaming_fail(&ctx, sink, e.into());
            }
        }
    }

    fn set_forwarding_pipeline_config(
        &mut self,
        ctx: RpcContext,
        req: SetForwardingPipelineConfigRequest,
        sink: UnarySink<SetForwardingPipelineConfigResponse>,
    ) {
        debug!("set_forwarding_pipeline_config: device {} {:?}", req.device_id, req.action);
        let result = lock(&self.target).set_pipeline(&req);
        match result {
            Ok(()) => unary_success(&ctx, sink, SetForwardingPipelineConfigResponse::new()),
            Err(e) => {
                info!("set_forwarding_pipeline_config rejected: {}", e);
                unary_fail(&ctx, sink, e.into())
            }
        }
    }

    fn get_forwarding_pipeline_config(
        &mut self,
        ctx: RpcContext,
        req: GetForwardingPipelineConfigRequest,
        sink: UnarySink<GetForwardingPipelineConfigResponse>,
    ) {
        debug!("get_forwarding_pipeline_config: device {}", req.device_id);
        let result = lock(&self.target).get_pipeline(&req);
        match result {
            Ok(config) => {
                let mut reply = GetForwardingPipelineConfigResponse::new();
                reply.set_config(config);
                unary_success(&ctx, sink, reply)
            }
            Err(e) => unary_fail(&ctx, sink, e.into()),
        }
    }

    fn stream_channel(
        &mut self,
        ctx: RpcContext,
        requests: RequestStream<StreamMessageRequest>,
        mut sink: DuplexSink<StreamMessageResponse>,
    ) {
        let target = self.target.clone();
        let (id, outbound) = lock(&target).open_stream();
        let f = async move {
            let requests = requests
                .map(|r| match r {
                    Ok(req) => Event::Request(req),
                    Err(e) => Event::Failed(e),
                })
                .chain(stream::once(future::ready(Event::Closed)));
            let outbound = outbound
                .map(Event::Notify)
                .chain(stream::once(future::ready(Event::Dropped)));
            let events = stream::select(requests, outbound);
            futures::pin_mut!(events);

            while let Some(event) = events.next().await {
                match event {
                    Event::Request(req) => {
                        let result = lock(&target).stream_message(id, &req);
                        if let Err(e) = result {
                            info!("stream {} terminated: {}", id, e);
                            lock(&target).close_stream(id);
                            sink.fail(e.into()).await?;
                            return Ok(());
                        }
                    }
                    Event::Notify(msg) => sink.send((msg, WriteFlags::default())).await?,
                    Event::Closed => {
                        lock(&target).close_stream(id);
                        sink.close().await?;
                        return Ok(());
                    }
                    Event::Dropped => {
                        lock(&target).close_stream(id);
                        sink.fail(RpcStatus::with_message(
                            RpcStatusCode::UNAVAILABLE,
                            "stream terminated by the device".into(),
                        ))
                        .await?;
                        return Ok(());
                    }
                    Event::Failed(e) => {
                        lock(&target).close_stream(id);
                        return Err(e);
                    }
                }
            }
            Ok(())
        }
        .map_err(|e: grpcio::Error| warn!("stream_channel failed: {:?}", e))
        .map(|_| ());
        ctx.spawn(f)
    }

    fn capabilities(&mut self, ctx: RpcContext, _req: CapabilitiesRequest, sink: UnarySink<CapabilitiesResponse>) {
        let mut reply = CapabilitiesResponse::new();
        reply.set_p4runtime_api_version(API_VERSION.into());
        unary_success(&ctx, sink, reply)
    }
}

/// Starts serving `target` on `addr:port`.  Port 0 picks a free port; the
/// port actually bound is returned with the server, which stops when
/// dropped.
pub fn serve(target: Arc<Mutex<Target>>, addr: &str, port: u16) -> Result<(Server, u16)> {
    let env = Arc::new(Environment::new(1));
    let service = create_p4_runtime(P4RuntimeService::new(target));
    let mut server = ServerBuilder::new(env)
        .register_service(service)
        .bind(addr, port)
        .build()
        .with_context(|| format!("{}:{}: could not create P4Runtime server", addr, port))?;
    server.start();
    let port = server
        .bind_addrs()
        .next()
        .map(|(_, port)| port)
        .context("server is not bound to any port")?;
    Ok((server, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use protobuf::Message;

    #[test]
    fn write_failure_details() {
        let codes = [RpcStatusCode::OK, RpcStatusCode::NOT_FOUND];
        let status = write_failure(&codes);
        assert_eq!(status.code(), RpcStatusCode::UNKNOWN);
        let details = proto::status::Status::parse_from_bytes(status.details()).unwrap();
        let errors: Vec<proto::p4runtime::Error> = details
            .get_details()
            .iter()
            .map(|any| any.unpack().unwrap().unwrap())
            .collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].canonical_code, 0);
        assert_eq!(errors[1].canonical_code, i32::from(RpcStatusCode::NOT_FOUND));
    }
}
