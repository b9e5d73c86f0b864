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

mod common;

use anyhow::Result;

use common::{push_wbb, Harness, DEVICE_ID};

use grpcio::RpcStatusCode;

use p4rt::client::{P4rtClient, ARBITRATION_TIMEOUT};
use p4rt::packet::{GdpPacketIo, PacketIo};
use p4rt::wbb::{AclWbbEncoder, UpdateKind};
use p4rt::{ClientError, ElectionId, TargetConfig, Trigger};

use proto::p4runtime::{TableEntry, WriteRequest_Atomicity};

use protobuf::well_known_types::Any;

use std::time::Duration;

use tracing_test::traced_test;

const QUIET: Duration = Duration::from_millis(300);

fn role_config(type_url: &str) -> Option<Any> {
    let mut config = Any::new();
    config.set_type_url(type_url.into());
    Some(config)
}

fn gdp_updates(kind: UpdateKind) -> Vec<proto::p4runtime::Update> {
    AclWbbEncoder::default().updates(&GdpPacketIo::default().table_entries(kind))
}

async fn can_write(client: &P4rtClient) -> Result<bool> {
    match client
        .write(gdp_updates(UpdateKind::Insert), WriteRequest_Atomicity::CONTINUE_ON_ERROR)
        .await
    {
        Ok(()) => {
            client
                .write(gdp_updates(UpdateKind::Delete), WriteRequest_Atomicity::CONTINUE_ON_ERROR)
                .await?;
            Ok(true)
        }
        Err(e) if e.code() == Some(RpcStatusCode::PERMISSION_DENIED) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn assert_quiet(result: Result<p4rt::ArbitrationResponse, ClientError>) {
    match result {
        Err(ClientError::Timeout(_)) => (),
        other => panic!("expected no arbitration update, got {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn highest_election_id_is_primary() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut primary = h.arbitrated(100).await?;
    let mut backup = h.client();
    let response = backup.arbitrate(Some(ElectionId(90))).await?;
    assert_eq!(response.code, RpcStatusCode::ALREADY_EXISTS);
    assert_eq!(response.election_id, Some(ElectionId(100)));
    assert_quiet(primary.next_arbitration(QUIET).await);

    push_wbb(&primary).await?;
    assert!(can_write(&primary).await?);
    assert!(!can_write(&backup).await?);

    // A backup may still read.
    primary
        .write(gdp_updates(UpdateKind::Insert), WriteRequest_Atomicity::CONTINUE_ON_ERROR)
        .await?;
    assert_eq!(backup.read_table_entries(TableEntry::new()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn reconnect_with_same_election_id() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut primary = h.arbitrated(100).await?;
    let mut backup = h.arbitrated(90).await?;

    primary.close_stream().await?;
    let advisory = backup.next_arbitration(ARBITRATION_TIMEOUT).await?;
    assert_eq!(advisory.code, RpcStatusCode::NOT_FOUND);

    let response = primary.arbitrate(Some(ElectionId(100))).await?;
    assert!(response.is_primary());
    let advisory = backup.next_arbitration(ARBITRATION_TIMEOUT).await?;
    assert_eq!(advisory.code, RpcStatusCode::ALREADY_EXISTS);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn duplicate_election_id_is_rejected() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut first = h.arbitrated(100).await?;
    push_wbb(&first).await?;

    let mut second = h.client();
    match second.arbitrate(Some(ElectionId(100))).await {
        Err(e) => assert_eq!(e.code(), Some(RpcStatusCode::INVALID_ARGUMENT)),
        Ok(r) => panic!("duplicate election ID accepted: {:?}", r),
    }

    assert_quiet(first.next_arbitration(QUIET).await);
    assert!(can_write(&first).await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn replaced_primary_loses_write() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut old = h.arbitrated(101).await?;
    let new = h.arbitrated(102).await?;

    let advisory = old.next_arbitration(ARBITRATION_TIMEOUT).await?;
    assert_eq!(advisory.code, RpcStatusCode::ALREADY_EXISTS);
    assert_eq!(advisory.election_id, Some(ElectionId(102)));

    push_wbb(&new).await?;
    assert!(can_write(&new).await?);
    assert!(!can_write(&old).await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn raising_own_election_id_advises_backups() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut primary = h.arbitrated(100).await?;
    let mut backup = h.arbitrated(90).await?;

    let response = primary.arbitrate(Some(ElectionId(110))).await?;
    assert!(response.is_primary());
    assert_eq!(response.election_id, Some(ElectionId(110)));
    let advisory = backup.next_arbitration(ARBITRATION_TIMEOUT).await?;
    assert_eq!(advisory.code, RpcStatusCode::ALREADY_EXISTS);
    assert_eq!(advisory.election_id, Some(ElectionId(110)));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn role_config_change_on_stream() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut client = h.client();
    client.set_role_config(role_config("test"));
    assert!(client.arbitrate(Some(ElectionId(100))).await?.is_primary());

    client.set_role_config(role_config("test1"));
    match client.arbitrate(Some(ElectionId(101))).await {
        Err(e) => assert_eq!(e.code(), Some(RpcStatusCode::INVALID_ARGUMENT)),
        Ok(r) => panic!("role config change accepted: {:?}", r),
    }

    // The stream is gone, so a fresh controller can take over.
    let mut again = h.client();
    again.set_role_config(role_config("test1"));
    assert!(again.arbitrate(Some(ElectionId(101))).await?.is_primary());
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn lowering_own_election_id() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut client = h.arbitrated(10).await?;
    push_wbb(&client).await?;

    let response = client.arbitrate(Some(ElectionId(5))).await?;
    assert_eq!(response.code, RpcStatusCode::NOT_FOUND);
    assert_eq!(response.election_id, Some(ElectionId(10)));
    assert!(!can_write(&client).await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn unset_election_id_is_backup() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut client = h.client();
    let response = client.arbitrate(None).await?;
    assert_eq!(response.code, RpcStatusCode::NOT_FOUND);
    assert_eq!(response.election_id, None);

    let primary = h.arbitrated(1).await?;
    push_wbb(&primary).await?;
    assert!(!can_write(&client).await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn zero_election_id() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut client = h.client();
    assert_eq!(
        client.arbitrate(Some(ElectionId(0))).await?.code,
        RpcStatusCode::NOT_FOUND
    );

    let h = Harness::start(serde_json::from_str(r#"{"vendor": "cisco"}"#)?)?;
    let mut first = h.client();
    assert!(first.arbitrate(Some(ElectionId(0))).await?.is_primary());
    let mut second = h.client();
    let e = second.arbitrate(Some(ElectionId(0))).await.unwrap_err();
    assert_eq!(e.code(), Some(RpcStatusCode::INVALID_ARGUMENT));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn arista_backup_without_primary() -> Result<()> {
    let h = Harness::start(serde_json::from_str(r#"{"vendor": "arista"}"#)?)?;
    let mut client = h.client();
    assert_eq!(client.arbitrate(None).await?.code, RpcStatusCode::ALREADY_EXISTS);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn advisories_stay_within_device() -> Result<()> {
    let h = Harness::start(serde_json::from_str(
        r#"{"devices": [{"id": 1}, {"id": 2}]}"#,
    )?)?;
    let mut primary = h.arbitrated(20).await?;
    let mut backup = h.arbitrated(10).await?;
    let mut other = P4rtClient::new(&h.addr, 2);
    assert!(other.arbitrate(Some(ElectionId(5))).await?.is_primary());

    primary.close_stream().await?;
    assert_eq!(
        backup.next_arbitration(ARBITRATION_TIMEOUT).await?.code,
        RpcStatusCode::NOT_FOUND
    );
    assert_quiet(other.next_arbitration(QUIET).await);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn stream_limit() -> Result<()> {
    let h = Harness::start(serde_json::from_str(r#"{"max_streams_per_device": 2}"#)?)?;
    let _a = h.arbitrated(1).await?;
    let _b = h.arbitrated(2).await?;
    let mut c = h.client();
    let e = c.arbitrate(Some(ElectionId(3))).await.unwrap_err();
    assert_eq!(e.code(), Some(RpcStatusCode::RESOURCE_EXHAUSTED));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn unknown_device() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut client = P4rtClient::new(&h.addr, 42);
    let e = client.arbitrate(Some(ElectionId(1))).await.unwrap_err();
    assert_eq!(e.code(), Some(RpcStatusCode::NOT_FOUND));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn switchover_terminates_streams() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let mut primary = h.arbitrated(100).await?;
    push_wbb(&primary).await?;
    primary
        .write(gdp_updates(UpdateKind::Insert), WriteRequest_Atomicity::CONTINUE_ON_ERROR)
        .await?;

    h.target().apply(DEVICE_ID, &Trigger::ControlProcessorSwitchover)?;
    let e = primary.next_arbitration(ARBITRATION_TIMEOUT).await.unwrap_err();
    assert_eq!(e.code(), Some(RpcStatusCode::UNAVAILABLE));

    // Forwarding state survives and a reconnecting controller can take over
    // with a lower election ID.
    let mut again = h.client();
    assert!(again.arbitrate(Some(ElectionId(50))).await?.is_primary());
    assert_eq!(again.read_table_entries(TableEntry::new()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn reboot_clears_pipeline() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let primary = h.arbitrated(100).await?;
    push_wbb(&primary).await?;
    h.target().apply(DEVICE_ID, &Trigger::Reboot)?;

    let mut again = h.client();
    assert!(again.arbitrate(Some(ElectionId(1))).await?.is_primary());
    let e = again
        .write(gdp_updates(UpdateKind::Insert), WriteRequest_Atomicity::CONTINUE_ON_ERROR)
        .await
        .unwrap_err();
    assert_eq!(e.code(), Some(RpcStatusCode::FAILED_PRECONDITION));
    Ok(())
}
