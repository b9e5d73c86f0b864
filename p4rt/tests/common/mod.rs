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

//! Starts an emulated target on a free local port.

#![allow(dead_code)]

use anyhow::Result;

use grpcio::Server;

use p4rt::client::P4rtClient;
use p4rt::device::forwarding_pipeline_config;
use p4rt::wbb::{self, WbbSchema, PIPELINE_COOKIE};
use p4rt::{ElectionId, Target, TargetConfig};

use proto::p4runtime::{ForwardingPipelineConfig, SetForwardingPipelineConfigRequest_Action};

use std::sync::{Arc, Mutex, MutexGuard};

pub const DEVICE_ID: u64 = 1;

pub struct Harness {
    pub target: Arc<Mutex<Target>>,
    pub addr: String,
    _server: Server,
}

impl Harness {
    pub fn start(config: TargetConfig) -> Result<Harness> {
        let target = Arc::new(Mutex::new(config.build()));
        let (server, port) = p4rt::service::serve(target.clone(), "127.0.0.1", 0)?;
        Ok(Harness {
            target,
            addr: format!("127.0.0.1:{}", port),
            _server: server,
        })
    }

    /// One loopback device with ports 1 and 2.
    pub fn loopback() -> Result<Harness> {
        let config: TargetConfig = serde_json::from_str(
            r#"{"devices": [{"id": 1, "ports": [1, 2], "loopback": true}]}"#,
        )?;
        Harness::start(config)
    }

    pub fn target(&self) -> MutexGuard<'_, Target> {
        self.target.lock().unwrap()
    }

    pub fn client(&self) -> P4rtClient {
        P4rtClient::new(&self.addr, DEVICE_ID)
    }

    /// A client that arbitrated with `election_id`, whatever the outcome.
    pub async fn arbitrated(&self, election_id: u128) -> Result<P4rtClient> {
        let mut client = self.client();
        client.arbitrate(Some(ElectionId(election_id))).await?;
        Ok(client)
    }
}

pub fn wbb_config() -> ForwardingPipelineConfig {
    forwarding_pipeline_config(wbb::p4info(&WbbSchema::default()), PIPELINE_COOKIE)
}

/// Pushes the WBB pipeline from `client`, which must be primary.
pub async fn push_wbb(client: &P4rtClient) -> Result<()> {
    client
        .set_pipeline(SetForwardingPipelineConfigRequest_Action::VERIFY_AND_COMMIT, wbb_config())
        .await?;
    Ok(())
}
