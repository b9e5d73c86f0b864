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

use common::{push_wbb, Harness};

use grpcio::RpcStatusCode;

use p4rt::client::P4rtClient;
use p4rt::wbb::{AclWbbEncoder, AclWbbIngressEntry, UpdateKind, WbbSchema, LLDP_ETHER_TYPE};
use p4rt::{ClientError, TargetConfig};

use proto::p4runtime::{TableEntry, Update, Update_Type, WriteRequest_Atomicity as Atomicity};

use tracing_test::traced_test;

fn updates(entries: &[AclWbbIngressEntry]) -> Vec<Update> {
    AclWbbEncoder::default().updates(entries)
}

fn gdp() -> AclWbbIngressEntry {
    AclWbbIngressEntry::ether_type(0x6007, 1)
}

fn lldp() -> AclWbbIngressEntry {
    AclWbbIngressEntry::ether_type(LLDP_ETHER_TYPE, 1)
}

fn ttl1() -> AclWbbIngressEntry {
    AclWbbIngressEntry::ttl(true, 1, 0xff, 1)
}

fn update_codes(result: Result<(), ClientError>) -> Vec<RpcStatusCode> {
    match result {
        Err(e @ ClientError::Write { .. }) => {
            assert_eq!(e.code(), Some(RpcStatusCode::UNKNOWN));
            e.update_codes()
        }
        other => panic!("expected a per-update failure, got {:?}", other),
    }
}

async fn setup() -> Result<(Harness, P4rtClient)> {
    let h = Harness::start(TargetConfig::default())?;
    let client = h.arbitrated(1).await?;
    push_wbb(&client).await?;
    Ok((h, client))
}

async fn entry_count(client: &P4rtClient) -> Result<usize> {
    Ok(client.read_table_entries(TableEntry::new()).await?.len())
}

#[tokio::test]
#[traced_test]
async fn insert_modify_delete() -> Result<()> {
    let (_h, client) = setup().await?;
    client.write(updates(&[gdp()]), Atomicity::CONTINUE_ON_ERROR).await?;
    assert_eq!(
        update_codes(client.write(updates(&[gdp()]), Atomicity::CONTINUE_ON_ERROR).await),
        vec![RpcStatusCode::ALREADY_EXISTS]
    );

    client
        .write(updates(&[gdp().with_update(UpdateKind::Modify)]), Atomicity::CONTINUE_ON_ERROR)
        .await?;
    assert_eq!(
        update_codes(
            client
                .write(updates(&[lldp().with_update(UpdateKind::Modify)]), Atomicity::CONTINUE_ON_ERROR)
                .await
        ),
        vec![RpcStatusCode::NOT_FOUND]
    );

    client
        .write(updates(&[gdp().with_update(UpdateKind::Delete)]), Atomicity::CONTINUE_ON_ERROR)
        .await?;
    assert_eq!(
        update_codes(
            client
                .write(updates(&[gdp().with_update(UpdateKind::Delete)]), Atomicity::CONTINUE_ON_ERROR)
                .await
        ),
        vec![RpcStatusCode::NOT_FOUND]
    );
    assert_eq!(entry_count(&client).await?, 0);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn read_back_matches_write() -> Result<()> {
    let (_h, client) = setup().await?;
    let written = updates(&p4rt::wbb::default_entries());
    client.write(written.clone(), Atomicity::CONTINUE_ON_ERROR).await?;

    let mut read = client.read_table_entries(TableEntry::new()).await?;
    let mut expected: Vec<TableEntry> = written
        .iter()
        .map(|u| u.get_entity().get_table_entry().clone())
        .collect();
    let key = |e: &TableEntry| (e.priority, format!("{:?}", e.get_field_match()));
    read.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(read, expected);

    let mut filter = TableEntry::new();
    filter.set_table_id(WbbSchema::default().table_id);
    filter.set_field_match(expected[0].get_field_match().to_vec().into());
    filter.set_priority(expected[0].priority);
    assert_eq!(client.read_table_entries(filter).await?, vec![expected[0].clone()]);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn continue_on_error_keeps_good_updates() -> Result<()> {
    let (_h, client) = setup().await?;
    client.write(updates(&[gdp()]), Atomicity::CONTINUE_ON_ERROR).await?;
    assert_eq!(
        update_codes(client.write(updates(&[lldp(), gdp()]), Atomicity::CONTINUE_ON_ERROR).await),
        vec![RpcStatusCode::OK, RpcStatusCode::ALREADY_EXISTS]
    );
    assert_eq!(entry_count(&client).await?, 2);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn rollback_on_error_aborts_batch() -> Result<()> {
    let (_h, client) = setup().await?;
    client.write(updates(&[gdp()]), Atomicity::CONTINUE_ON_ERROR).await?;
    assert_eq!(
        update_codes(client.write(updates(&[ttl1(), gdp()]), Atomicity::ROLLBACK_ON_ERROR).await),
        vec![RpcStatusCode::ABORTED, RpcStatusCode::ALREADY_EXISTS]
    );
    assert_eq!(entry_count(&client).await?, 1);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn malformed_updates() -> Result<()> {
    let (_h, client) = setup().await?;

    let foreign = AclWbbEncoder::new(WbbSchema {
        table_id: 99,
        ..Default::default()
    });
    let mut unspecified = updates(&[gdp()]);
    unspecified[0].set_field_type(Update_Type::UNSPECIFIED);
    let mut no_priority = updates(&[lldp()]);
    no_priority[0].mut_entity().mut_table_entry().set_priority(0);

    let mut no_entity = Update::new();
    no_entity.set_field_type(Update_Type::INSERT);

    let mut batch = foreign.updates(&[gdp()]);
    batch.extend(unspecified);
    batch.extend(no_priority);
    batch.push(no_entity);
    assert_eq!(
        update_codes(client.write(batch, Atomicity::CONTINUE_ON_ERROR).await),
        vec![
            RpcStatusCode::NOT_FOUND,
            RpcStatusCode::INVALID_ARGUMENT,
            RpcStatusCode::INVALID_ARGUMENT,
            RpcStatusCode::INVALID_ARGUMENT
        ]
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn table_full() -> Result<()> {
    let (_h, client) = setup().await?;
    let entries: Vec<AclWbbIngressEntry> = (0..9)
        .map(|i| AclWbbIngressEntry::ether_type(0x9000 + i, 1))
        .collect();
    let codes = update_codes(client.write(updates(&entries), Atomicity::CONTINUE_ON_ERROR).await);
    assert!(codes[..8].iter().all(|c| *c == RpcStatusCode::OK));
    assert_eq!(codes[8], RpcStatusCode::RESOURCE_EXHAUSTED);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn write_before_pipeline() -> Result<()> {
    let h = Harness::start(TargetConfig::default())?;
    let client = h.arbitrated(1).await?;
    let e = client
        .write(updates(&[gdp()]), Atomicity::CONTINUE_ON_ERROR)
        .await
        .unwrap_err();
    assert_eq!(e.code(), Some(RpcStatusCode::FAILED_PRECONDITION));
    assert!(e.update_codes().is_empty());
    Ok(())
}
