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

//! Packet I/O: the frames a controller punts and injects, and the fields the
//! WBB table classifies them by.

use ::packet::Packet as _;

use etherparse::err::packet::BuildWriteError;
use etherparse::{
    EtherType, Ethernet2Header, Icmpv4Slice, Icmpv6Slice, IpNumber, Ipv4Header, Ipv6Header,
    PacketBuilder, SingleVlanHeader, VlanId, VlanPcp,
};

use proto::p4runtime::{PacketMetadata, PacketOut};

use protobuf::RepeatedField;

use std::fmt;
use std::net::IpAddr;

use thiserror::Error;

use crate::wbb::{AclWbbIngressEntry, UpdateKind, WbbSchema, GDP_ETHER_TYPE, LLDP_ETHER_TYPE};

pub type MacAddr = [u8; 6];

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const ETHERTYPE_IPV6: u16 = 0x86dd;
pub const ETHERTYPE_VLAN: u16 = 0x8100;

/// Largest value an LLDP TLV's 9-bit length can describe.
const LLDP_TLV_MAX_LEN: usize = 0x01ff;

/// Source address of frames the controller injects.
pub const PACKET_OUT_SRC_MAC: MacAddr = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
pub const GDP_DST_MAC: MacAddr = [0x00, 0x0a, 0xdb, 0xf0, 0xf0, 0xf0];
pub const LLDP_DST_MAC: MacAddr = [0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e];
pub const ROUTER_MAC: MacAddr = [0x02, 0xf6, 0x65, 0x64, 0x00, 0x08];

#[derive(Debug, Error)]
pub enum PacketError {
    #[error("truncated frame: {0}")]
    Truncated(#[from] etherparse::err::LenError),

    #[error("malformed IPv4 header: {0}")]
    Ipv4(#[from] etherparse::err::ipv4::HeaderSliceError),

    #[error("malformed IPv6 header: {0}")]
    Ipv6(#[from] etherparse::err::ipv6::HeaderSliceError),

    #[error("VLAN ID {0} does not fit in 12 bits")]
    VlanId(u16),

    #[error("LLDP TLV value of {0} bytes is too long")]
    TlvTooLong(usize),

    #[error("source and destination are of different address families")]
    AddressFamily,

    #[error("could not build frame: {0}")]
    Build(#[from] BuildWriteError),
}

/// An Ethernet frame.
///
/// A newtype so that `Debug` can decode the headers.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Frame(pub Vec<u8>);

impl Frame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eth = match ::packet::ether::Packet::new(&self.0) {
            Ok(packet) => packet,
            Err(e) => return write!(f, "{}", e),
        };
        write!(f, "eth(dst={}, src={}), ", eth.destination(), eth.source())?;

        match eth.protocol() {
            ::packet::ether::Protocol::Ipv4 => {
                let ipv4 = match ::packet::ip::v4::Packet::new(eth.payload()) {
                    Ok(packet) => packet,
                    Err(e) => return write!(f, "bad_ipv4({})", e),
                };
                write!(f, "ipv4(dst={}, src={}), ", ipv4.destination(), ipv4.source())?;
                match ipv4.protocol() {
                    ::packet::ip::Protocol::Icmp => {
                        let icmp = match ::packet::icmp::Packet::new(ipv4.payload()) {
                            Ok(packet) => packet,
                            Err(e) => return write!(f, "bad_icmp({:?})", e),
                        };
                        write!(f, "icmp(type={:?}, code={})", icmp.kind(), icmp.code())
                    }
                    protocol => write!(f, "ipproto({:?})", protocol),
                }
            }
            ::packet::ether::Protocol::Ipv6 => write!(f, "ipv6()"),
            protocol => write!(f, "ethertype({:?}, {} bytes)", protocol, eth.payload().len()),
        }
    }
}

/// Header fields the WBB table matches on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PacketFields {
    pub dst: MacAddr,
    pub src: MacAddr,
    pub vlan_id: Option<u16>,
    /// Ether type after any VLAN tag.
    pub ether_type: u16,
    pub is_ipv4: bool,
    pub is_ipv6: bool,
    /// IPv4 TTL or IPv6 hop limit.
    pub ttl: Option<u8>,
    pub ip_protocol: Option<u8>,
    pub icmp_type: Option<u8>,
}

impl PacketFields {
    pub fn parse(frame: &[u8]) -> Result<Self, PacketError> {
        let (eth, mut rest) = Ethernet2Header::from_slice(frame)?;
        let mut fields = PacketFields {
            dst: eth.destination,
            src: eth.source,
            ether_type: eth.ether_type.0,
            ..PacketFields::default()
        };
        if eth.ether_type == EtherType::VLAN_TAGGED_FRAME {
            let (vlan, payload) = SingleVlanHeader::from_slice(rest)?;
            fields.vlan_id = Some(vlan.vlan_id.value());
            fields.ether_type = vlan.ether_type.0;
            rest = payload;
        }

        match fields.ether_type {
            ETHERTYPE_IPV4 => {
                let (ip, payload) = Ipv4Header::from_slice(rest)?;
                fields.is_ipv4 = true;
                fields.ttl = Some(ip.time_to_live);
                fields.ip_protocol = Some(ip.protocol.0);
                if ip.protocol == IpNumber::ICMP {
                    fields.icmp_type = Icmpv4Slice::from_slice(payload).ok().map(|icmp| icmp.type_u8());
                }
            }
            ETHERTYPE_IPV6 => {
                let (ip, payload) = Ipv6Header::from_slice(rest)?;
                fields.is_ipv6 = true;
                fields.ttl = Some(ip.hop_limit);
                fields.ip_protocol = Some(ip.next_header.0);
                if ip.next_header == IpNumber::IPV6_ICMP {
                    fields.icmp_type = Icmpv6Slice::from_slice(payload).ok().map(|icmp| icmp.type_u8());
                }
            }
            _ => (),
        }
        Ok(fields)
    }
}

/// Ethernet header, with an 802.1Q tag if `vlan_id` is set, followed by
/// `payload`.
pub fn ethernet(dst: MacAddr, src: MacAddr, vlan_id: Option<u16>, ether_type: u16, payload: &[u8]) -> Result<Frame, PacketError> {
    let mut buf = Vec::with_capacity(Ethernet2Header::LEN + SingleVlanHeader::LEN + payload.len());
    let mut eth = Ethernet2Header {
        source: src,
        destination: dst,
        ether_type: EtherType(ether_type),
    };
    match vlan_id {
        Some(vid) => {
            let vlan = SingleVlanHeader {
                pcp: VlanPcp::ZERO,
                drop_eligible_indicator: false,
                vlan_id: VlanId::try_new(vid).map_err(|_| PacketError::VlanId(vid))?,
                ether_type: eth.ether_type,
            };
            eth.ether_type = EtherType::VLAN_TAGGED_FRAME;
            buf.extend_from_slice(&eth.to_bytes());
            buf.extend_from_slice(&vlan.to_bytes());
        }
        None => buf.extend_from_slice(&eth.to_bytes()),
    }
    buf.extend_from_slice(payload);
    Ok(Frame(buf))
}

fn counting_payload(len: u8) -> Vec<u8> {
    (0..len).collect()
}

/// A kind of packet the controller traps and injects.
pub trait PacketIo {
    /// WBB entries that trap this kind of packet to the controller.
    fn table_entries(&self, update: UpdateKind) -> Vec<AclWbbIngressEntry>;

    /// The frame to send in a PacketOut.
    fn frame(&self) -> Result<Frame, PacketError>;

    /// True if a captured packet is of this kind.
    fn matches(&self, fields: &PacketFields) -> bool;

    fn packet_out(&self, schema: &WbbSchema, egress: Egress) -> Result<PacketOut, PacketError> {
        Ok(packet_out(schema, &self.frame()?, egress))
    }
}

/// Google Discovery Protocol.
#[derive(Clone, Debug)]
pub struct GdpPacketIo {
    pub src: MacAddr,
    pub dst: MacAddr,
}

impl Default for GdpPacketIo {
    fn default() -> Self {
        GdpPacketIo {
            src: PACKET_OUT_SRC_MAC,
            dst: GDP_DST_MAC,
        }
    }
}

impl PacketIo for GdpPacketIo {
    fn table_entries(&self, update: UpdateKind) -> Vec<AclWbbIngressEntry> {
        vec![AclWbbIngressEntry::ether_type(GDP_ETHER_TYPE, 1).with_update(update)]
    }

    fn frame(&self) -> Result<Frame, PacketError> {
        ethernet(self.dst, self.src, None, GDP_ETHER_TYPE, &counting_payload(64))
    }

    fn matches(&self, fields: &PacketFields) -> bool {
        fields.ether_type == GDP_ETHER_TYPE
    }
}

#[derive(Clone, Debug)]
pub struct LldpPacketIo {
    pub src: MacAddr,
    pub dst: MacAddr,
    pub chassis_id: MacAddr,
    pub port_id: String,
    pub ttl: u16,
}

impl Default for LldpPacketIo {
    fn default() -> Self {
        LldpPacketIo {
            src: PACKET_OUT_SRC_MAC,
            dst: LLDP_DST_MAC,
            chassis_id: [0x01; 6],
            port_id: "port1".into(),
            ttl: 100,
        }
    }
}

fn lldp_tlv(buf: &mut Vec<u8>, kind: u8, value: &[u8]) -> Result<(), PacketError> {
    if value.len() > LLDP_TLV_MAX_LEN {
        return Err(PacketError::TlvTooLong(value.len()));
    }
    // 7-bit type, 9-bit length.
    let header = u16::from(kind) << 9 | value.len() as u16;
    buf.extend_from_slice(&header.to_be_bytes());
    buf.extend_from_slice(value);
    Ok(())
}

impl PacketIo for LldpPacketIo {
    fn table_entries(&self, update: UpdateKind) -> Vec<AclWbbIngressEntry> {
        vec![AclWbbIngressEntry::ether_type(LLDP_ETHER_TYPE, 1).with_update(update)]
    }

    fn frame(&self) -> Result<Frame, PacketError> {
        let mut chassis_id = vec![4]; // MAC address subtype
        chassis_id.extend_from_slice(&self.chassis_id);
        let mut port_id = vec![5]; // interface name subtype
        port_id.extend_from_slice(self.port_id.as_bytes());
        let ttl = self.ttl.to_be_bytes();

        let mut tlvs = Vec::new();
        lldp_tlv(&mut tlvs, 1, &chassis_id)?;
        lldp_tlv(&mut tlvs, 2, &port_id)?;
        lldp_tlv(&mut tlvs, 3, &ttl)?;
        lldp_tlv(&mut tlvs, 0, &[])?;
        ethernet(self.dst, self.src, None, LLDP_ETHER_TYPE, &tlvs)
    }

    fn matches(&self, fields: &PacketFields) -> bool {
        fields.ether_type == LLDP_ETHER_TYPE
    }
}

/// An ICMP (or ICMPv6) echo request with a small TTL, as sent by traceroute.
#[derive(Clone, Debug)]
pub struct TraceroutePacketIo {
    pub src: MacAddr,
    pub dst: MacAddr,
    pub src_ip: IpAddr,
    pub dst_ip: IpAddr,
    pub ttl: u8,
    pub seq: u16,
}

impl TraceroutePacketIo {
    pub fn new(src_ip: IpAddr, dst_ip: IpAddr) -> Self {
        TraceroutePacketIo {
            src: PACKET_OUT_SRC_MAC,
            dst: ROUTER_MAC,
            src_ip,
            dst_ip,
            ttl: 1,
            seq: 0,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.dst_ip.is_ipv4()
    }
}

impl PacketIo for TraceroutePacketIo {
    fn table_entries(&self, update: UpdateKind) -> Vec<AclWbbIngressEntry> {
        vec![AclWbbIngressEntry::ttl(self.is_ipv4(), 1, 0xff, 1).with_update(update)]
    }

    fn frame(&self) -> Result<Frame, PacketError> {
        let payload = counting_payload(32);
        let builder = PacketBuilder::ethernet2(self.src, self.dst);
        let mut buf = Vec::new();
        match (self.src_ip, self.dst_ip) {
            (IpAddr::V4(src), IpAddr::V4(dst)) => {
                let builder = builder
                    .ipv4(src.octets(), dst.octets(), self.ttl)
                    .icmpv4_echo_request(0, self.seq);
                buf.reserve(builder.size(payload.len()));
                builder.write(&mut buf, &payload)?;
            }
            (IpAddr::V6(src), IpAddr::V6(dst)) => {
                let builder = builder
                    .ipv6(src.octets(), dst.octets(), self.ttl)
                    .icmpv6_echo_request(0, self.seq);
                buf.reserve(builder.size(payload.len()));
                builder.write(&mut buf, &payload)?;
            }
            _ => return Err(PacketError::AddressFamily),
        }
        Ok(Frame(buf))
    }

    fn matches(&self, fields: &PacketFields) -> bool {
        let family = if self.is_ipv4() {
            fields.is_ipv4
        } else {
            fields.is_ipv6
        };
        family && fields.ttl == Some(self.ttl)
    }
}

/// Where a PacketOut goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Egress {
    Port(u32),
    /// Through the ingress pipeline, as if received.
    SubmitToIngress,
}

fn metadata(id: u32, value: Vec<u8>) -> PacketMetadata {
    let mut m = PacketMetadata::new();
    m.set_metadata_id(id);
    m.set_value(value);
    m
}

/// Port metadata is the decimal port ID as a string.
pub fn packet_out(schema: &WbbSchema, frame: &Frame, egress: Egress) -> PacketOut {
    let (port, submit_to_ingress) = match egress {
        Egress::Port(port) => (port, 0),
        Egress::SubmitToIngress => (0, 1),
    };
    let mut out = PacketOut::new();
    out.set_payload(frame.0.clone());
    out.set_metadata(RepeatedField::from_vec(vec![
        metadata(schema.packet_out_egress_port_id, port.to_string().into_bytes()),
        metadata(schema.packet_out_submit_to_ingress_id, vec![submit_to_ingress]),
        metadata(schema.packet_out_unused_pad_id, vec![0]),
    ]));
    out
}

/// The port in a string-translated port metadata field.
pub fn metadata_port(metadata: &[PacketMetadata], id: u32) -> Option<u32> {
    metadata
        .iter()
        .find(|m| m.metadata_id == id)
        .and_then(|m| std::str::from_utf8(&m.value).ok())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use etherparse::{icmpv4, icmpv6, Icmpv4Header, Icmpv6Header};

    #[test]
    fn gdp_frame() {
        let frame = GdpPacketIo::default().frame().unwrap();
        assert_eq!(frame.0.len(), 14 + 64);
        assert_eq!(&frame.0[12..14], &[0x60, 0x07]);
        assert_eq!(frame.0[14 + 63], 63);
        let fields = PacketFields::parse(&frame.0).unwrap();
        assert!(GdpPacketIo::default().matches(&fields));
        assert!(!LldpPacketIo::default().matches(&fields));
    }

    #[test]
    fn lldp_tlvs() {
        let frame = LldpPacketIo::default().frame().unwrap();
        let tlvs = &frame.0[14..];
        // Chassis ID: type 1, length 7, MAC subtype.
        assert_eq!(&tlvs[..3], &[0x02, 0x07, 0x04]);
        // Port ID: type 2, length 6, interface name subtype, "port1".
        assert_eq!(&tlvs[9..12], &[0x04, 0x06, 0x05]);
        assert_eq!(&tlvs[12..17], b"port1");
        // TTL: type 3, length 2, 100.
        assert_eq!(&tlvs[17..21], &[0x06, 0x02, 0x00, 100]);
        // End of LLDPDU.
        assert_eq!(&tlvs[21..], &[0, 0]);
    }

    #[test]
    fn lldp_port_id_too_long() {
        let lldp = LldpPacketIo {
            port_id: "x".repeat(LLDP_TLV_MAX_LEN),
            ..LldpPacketIo::default()
        };
        // The subtype byte pushes the value one past the limit.
        assert!(matches!(lldp.frame(), Err(PacketError::TlvTooLong(512))));
    }

    #[test]
    fn ipv4_traceroute() {
        let tr = TraceroutePacketIo::new("192.0.2.1".parse().unwrap(), "192.0.2.2".parse().unwrap());
        let frame = tr.frame().unwrap();
        assert_eq!(frame.0.len(), 14 + 20 + 8 + 32);
        let (ip, rest) = Ipv4Header::from_slice(&frame.0[14..]).unwrap();
        assert_eq!(ip.header_checksum, ip.calc_header_checksum());
        let (icmp, payload) = Icmpv4Header::from_slice(rest).unwrap();
        assert_eq!(icmp.checksum, icmp.icmp_type.calc_checksum(payload));
        let fields = PacketFields::parse(&frame.0).unwrap();
        assert!(fields.is_ipv4);
        assert_eq!(fields.ttl, Some(1));
        assert_eq!(fields.icmp_type, Some(icmpv4::TYPE_ECHO_REQUEST));
        assert!(tr.matches(&fields));
        assert_eq!(tr.table_entries(UpdateKind::Insert)[0].is_ipv4, 1);
    }

    #[test]
    fn ipv6_traceroute() {
        let tr = TraceroutePacketIo::new("2001:db8::1".parse().unwrap(), "2001:db8::2".parse().unwrap());
        let frame = tr.frame().unwrap();
        assert_eq!(frame.0.len(), 14 + 40 + 8 + 32);
        let (ip, rest) = Ipv6Header::from_slice(&frame.0[14..]).unwrap();
        let (icmp, payload) = Icmpv6Header::from_slice(rest).unwrap();
        let csum = icmp.icmp_type.calc_checksum(ip.source, ip.destination, payload).unwrap();
        assert_eq!(icmp.checksum, csum);
        let fields = PacketFields::parse(&frame.0).unwrap();
        assert!(fields.is_ipv6);
        assert_eq!(fields.icmp_type, Some(icmpv6::TYPE_ECHO_REQUEST));
        assert!(tr.matches(&fields));
    }

    #[test]
    fn mixed_families() {
        let tr = TraceroutePacketIo::new("192.0.2.1".parse().unwrap(), "2001:db8::2".parse().unwrap());
        assert!(matches!(tr.frame(), Err(PacketError::AddressFamily)));
    }

    #[test]
    fn vlan_tag() {
        let frame = ethernet(GDP_DST_MAC, PACKET_OUT_SRC_MAC, Some(0x123), GDP_ETHER_TYPE, &[0; 46]).unwrap();
        let fields = PacketFields::parse(&frame.0).unwrap();
        assert_eq!(fields.vlan_id, Some(0x123));
        assert_eq!(fields.ether_type, GDP_ETHER_TYPE);
    }

    #[test]
    fn short_frame() {
        assert!(matches!(PacketFields::parse(&[0; 10]), Err(PacketError::Truncated(_))));
        // An IPv4 ether type with no room for the IP header.
        let frame = ethernet(ROUTER_MAC, PACKET_OUT_SRC_MAC, None, ETHERTYPE_IPV4, &[0x45; 8]).unwrap();
        assert!(matches!(PacketFields::parse(&frame.0), Err(PacketError::Ipv4(_))));
    }

    #[test]
    fn vlan_id_out_of_range() {
        let frame = ethernet(GDP_DST_MAC, PACKET_OUT_SRC_MAC, Some(0x1000), GDP_ETHER_TYPE, &[]);
        assert!(matches!(frame, Err(PacketError::VlanId(0x1000))));
    }

    #[test]
    fn packet_out_metadata() {
        let schema = WbbSchema::default();
        let out = GdpPacketIo::default().packet_out(&schema, Egress::Port(17)).unwrap();
        assert_eq!(metadata_port(out.get_metadata(), schema.packet_out_egress_port_id), Some(17));
        let out = packet_out(&schema, &Frame(vec![]), Egress::SubmitToIngress);
        let md = out.get_metadata();
        assert_eq!(md[0].value, b"0".to_vec());
        assert_eq!(md[1].value, vec![1]);
        assert_eq!(md[2].value, vec![0]);
    }
}
