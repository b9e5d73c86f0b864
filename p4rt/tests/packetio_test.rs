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

use p4rt::client::P4rtClient;
use p4rt::packet::{
    metadata_port, Egress, GdpPacketIo, LldpPacketIo, PacketFields, PacketIo, TraceroutePacketIo,
};
use p4rt::wbb::{AclWbbEncoder, UpdateKind, WbbSchema};
use p4rt::Trigger;

use proto::p4runtime::WriteRequest_Atomicity;

use std::net::IpAddr;
use std::time::Duration;

use tokio::time::sleep;

use tracing_test::traced_test;

const CAPTURE: Duration = Duration::from_secs(2);
const QUIET: Duration = Duration::from_millis(300);

async fn install(client: &P4rtClient, io: &dyn PacketIo) -> Result<()> {
    let updates = AclWbbEncoder::default().updates(&io.table_entries(UpdateKind::Insert));
    client.write(updates, WriteRequest_Atomicity::CONTINUE_ON_ERROR).await?;
    Ok(())
}

/// A primary (election ID 10) with the WBB pipeline and a backup (5).
async fn setup() -> Result<(Harness, P4rtClient, P4rtClient)> {
    let h = Harness::loopback()?;
    let primary = h.arbitrated(10).await?;
    let backup = h.arbitrated(5).await?;
    push_wbb(&primary).await?;
    Ok((h, primary, backup))
}

#[tokio::test]
#[traced_test]
async fn packet_in_goes_to_primary_only() -> Result<()> {
    const COUNT: usize = 20;
    let (h, mut primary, mut backup) = setup().await?;
    let gdp = GdpPacketIo::default();
    install(&primary, &gdp).await?;
    let frame = gdp.frame()?;

    let inject = async {
        for _ in 0..COUNT {
            h.target().inject(DEVICE_ID, 2, &frame)?;
            sleep(Duration::from_millis(5)).await;
        }
        Ok::<_, anyhow::Error>(())
    };
    let (to_primary, to_backup, injected) = tokio::join!(
        primary.capture_packets(COUNT, CAPTURE),
        backup.capture_packets(1, CAPTURE),
        inject
    );
    injected?;

    let to_primary = to_primary?;
    assert_eq!(to_primary.len(), COUNT);
    assert!(to_backup?.is_empty());

    let schema = WbbSchema::default();
    for packet in &to_primary {
        assert_eq!(packet.payload, frame.0);
        assert_eq!(
            metadata_port(packet.get_metadata(), schema.packet_in_ingress_port_id),
            Some(2)
        );
        assert!(gdp.matches(&PacketFields::parse(&packet.payload)?));
    }
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn packet_out_loops_back() -> Result<()> {
    let (h, mut primary, _backup) = setup().await?;
    let lldp = LldpPacketIo::default();
    install(&primary, &lldp).await?;

    let schema = WbbSchema::default();
    primary
        .send_packet_out(lldp.packet_out(&schema, Egress::Port(1))?)
        .await?;
    let packets = primary.capture_packets(1, CAPTURE).await?;
    assert_eq!(packets.len(), 1);
    assert_eq!(metadata_port(packets[0].get_metadata(), schema.packet_in_ingress_port_id), Some(1));
    assert!(lldp.matches(&PacketFields::parse(&packets[0].payload)?));
    assert_eq!(h.target().transmitted(DEVICE_ID), vec![(Egress::Port(1), lldp.frame()?)]);

    primary
        .send_packet_out(lldp.packet_out(&schema, Egress::SubmitToIngress)?)
        .await?;
    assert!(primary.capture_packets(1, QUIET).await?.is_empty());
    assert_eq!(h.target().transmitted(DEVICE_ID).len(), 2);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn packet_out_from_backup_is_denied() -> Result<()> {
    let (h, _primary, mut backup) = setup().await?;
    let gdp = GdpPacketIo::default();
    backup
        .send_packet_out(gdp.packet_out(&WbbSchema::default(), Egress::Port(1))?)
        .await?;
    let error = backup.next_stream_error(CAPTURE).await?;
    assert_eq!(error.canonical_code, i32::from(RpcStatusCode::PERMISSION_DENIED));
    assert_eq!(error.get_packet_out().get_packet_out().payload, gdp.frame()?.0);
    assert!(h.target().transmitted(DEVICE_ID).is_empty());
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn traceroute_is_trapped_by_ttl() -> Result<()> {
    let (h, mut primary, _backup) = setup().await?;
    let v4 = TraceroutePacketIo::new("192.0.2.1".parse::<IpAddr>()?, "198.51.100.1".parse()?);
    let v6 = TraceroutePacketIo::new("2001:db8::1".parse::<IpAddr>()?, "2001:db8::2".parse()?);
    install(&primary, &v4).await?;

    // Only the IPv4 entry is installed.
    assert!(h.target().inject(DEVICE_ID, 1, &v4.frame()?)?);
    assert!(!h.target().inject(DEVICE_ID, 1, &v6.frame()?)?);
    assert!(!h.target().inject(DEVICE_ID, 1, &GdpPacketIo::default().frame()?)?);

    let packets = primary.capture_packets(2, QUIET).await?;
    assert_eq!(packets.len(), 1);
    let fields = PacketFields::parse(&packets[0].payload)?;
    assert!(v4.matches(&fields));
    assert!(!v6.matches(&fields));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn down_port_drops_frames() -> Result<()> {
    let (h, primary, _backup) = setup().await?;
    let gdp = GdpPacketIo::default();
    install(&primary, &gdp).await?;

    h.target().apply(DEVICE_ID, &Trigger::PortState { port_id: 2, up: false })?;
    assert!(!h.target().inject(DEVICE_ID, 2, &gdp.frame()?)?);
    h.target().apply(DEVICE_ID, &Trigger::PortState { port_id: 2, up: true })?;
    assert!(h.target().inject(DEVICE_ID, 2, &gdp.frame()?)?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn full_packet_queue_drops() -> Result<()> {
    let h = Harness::loopback()?;
    let mut primary = h.client().with_packet_queue(2);
    assert!(primary.arbitrate(Some(p4rt::ElectionId(1))).await?.is_primary());
    push_wbb(&primary).await?;
    let gdp = GdpPacketIo::default();
    install(&primary, &gdp).await?;

    for _ in 0..5 {
        h.target().inject(DEVICE_ID, 1, &gdp.frame()?)?;
    }
    sleep(QUIET).await;
    assert_eq!(primary.capture_packets(5, QUIET).await?.len(), 2);
    Ok(())
}
