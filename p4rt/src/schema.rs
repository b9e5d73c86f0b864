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

//! An owned model of the parts of a P4Info that a P4Runtime server needs to
//! validate table entries and packet metadata.

use anyhow::{Context, Result};

use byteorder::{BigEndian, ByteOrder};

use itertools::Itertools;

use proto::p4info;

use protobuf::Message;

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use crate::error::P4Error;

/// Unstructured `@name(value)` annotations, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotations(HashMap<String, Option<String>>);

impl Annotations {
    pub fn get(&self, name: &str) -> Option<&Option<String>> {
        self.0.get(name)
    }
}

fn parse_annotations<'a, T>(annotations: T) -> Annotations
where
    T: IntoIterator<Item = &'a String>,
{
    Annotations(
        annotations
            .into_iter()
            .map(|s| {
                let s = s.trim_start_matches('@');
                match s.split_once('(') {
                    Some((name, rest)) if rest.ends_with(')') => (
                        name.to_string(),
                        Some(rest.trim_end_matches(')').to_string()),
                    ),
                    _ => (s.to_string(), None),
                }
            })
            .collect(),
    )
}

impl Display for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sort annotations by name to ensure predictable output.
        for (i, (k, v)) in self.0.iter().sorted_by(|a, b| a.0.cmp(b.0)).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "@{}", k)?;
            if let Some(v) = v {
                write!(f, "({})", v.escape_debug())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preamble {
    pub id: u32,
    pub name: String,
    pub alias: String,
    pub annotations: Annotations,
}

impl From<&p4info::Preamble> for Preamble {
    fn from(p: &p4info::Preamble) -> Self {
        Preamble {
            id: p.id,
            name: p.name.clone(),
            alias: p.alias.clone(),
            annotations: parse_annotations(p.get_annotations()),
        }
    }
}

impl Preamble {
    /// True if `name` is this object's full name, its alias, or the last
    /// dotted component of its full name.  P4 compilers qualify names with
    /// the control block they live in, so `acl_wbb_ingress_table` should find
    /// `ingress.acl_wbb_ingress.acl_wbb_ingress_table`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
            || self.alias == name
            || self.name.rsplit('.').next() == Some(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchType {
    Unspecified,
    Exact,
    Lpm,
    Ternary,
    Range,
    Optional,
    Other(String),
}

impl Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MatchType::*;
        let s = match self {
            Unspecified => "unspecified",
            Exact => "exact",
            Lpm => "LPM",
            Ternary => "ternary",
            Range => "range",
            Optional => "optional",
            Other(s) => s,
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug)]
pub struct MatchField {
    // The protobuf representation of MatchField doesn't include a
    // Preamble but it includes everything in the preamble except
    // 'alias'.  It seems more uniform to just use Preamble here.
    pub preamble: Preamble,
    pub bit_width: i32,
    pub match_type: MatchType,
}

impl From<&p4info::MatchField> for MatchField {
    fn from(mf: &p4info::MatchField) -> Self {
        use p4info::MatchField_MatchType::*;
        MatchField {
            preamble: Preamble {
                id: mf.id,
                name: mf.name.clone(),
                alias: mf.name.clone(),
                annotations: parse_annotations(mf.get_annotations()),
            },
            bit_width: mf.bitwidth,
            match_type: match mf.get_match_type() {
                EXACT => MatchType::Exact,
                LPM => MatchType::Lpm,
                TERNARY => MatchType::Ternary,
                RANGE => MatchType::Range,
                OPTIONAL => MatchType::Optional,
                UNSPECIFIED => {
                    if mf.has_other_match_type() {
                        MatchType::Other(mf.get_other_match_type().into())
                    } else {
                        MatchType::Unspecified
                    }
                }
            },
        }
    }
}

impl Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field {}: bit<{}> {}-match",
            self.preamble.name, self.bit_width, self.match_type
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct Param {
    pub preamble: Preamble,
    pub bit_width: i32,
}

impl From<&p4info::Action_Param> for Param {
    fn from(ap: &p4info::Action_Param) -> Self {
        Param {
            preamble: Preamble {
                id: ap.id,
                name: ap.name.clone(),
                alias: ap.name.clone(),
                annotations: parse_annotations(ap.get_annotations()),
            },
            bit_width: ap.bitwidth,
        }
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: bit<{}>", self.preamble.name, self.bit_width)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Action {
    pub preamble: Preamble,
    pub params: Vec<Param>,
}

impl From<&p4info::Action> for Action {
    fn from(a: &p4info::Action) -> Self {
        Action {
            preamble: a.get_preamble().into(),
            params: a.get_params().iter().map(|x| x.into()).collect(),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action {}(", self.preamble.name)?;
        for (p_index, p) in self.params.iter().enumerate() {
            if p_index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ")")
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActionRef {
    pub action: Action,
    pub may_be_default: bool, // Allowed as the default action?
    pub may_be_entry: bool,   // Allowed as an entry's action?
}

impl ActionRef {
    fn new_from_proto(ar: &p4info::ActionRef, actions: &HashMap<u32, Action>) -> Result<Self, P4Error> {
        let action = actions.get(&ar.id).ok_or_else(|| {
            P4Error::invalid_argument(format!("action reference {} has no matching action", ar.id))
        })?;
        Ok(ActionRef {
            action: action.clone(),
            may_be_default: ar.scope != p4info::ActionRef_Scope::TABLE_ONLY,
            may_be_entry: ar.scope != p4info::ActionRef_Scope::DEFAULT_ONLY,
        })
    }
}

impl Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.may_be_entry {
            write!(f, "default-only ")?;
        } else if !self.may_be_default {
            write!(f, "not-default ")?;
        }
        write!(f, "{}", self.action)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Table {
    pub preamble: Preamble,
    pub match_fields: Vec<MatchField>,
    pub actions: Vec<ActionRef>,
    pub max_entries: Option<u64>,
    pub idle_notify: bool,
    pub is_const_table: bool,
}

impl Table {
    pub fn new_from_proto(t: &p4info::Table, actions: &HashMap<u32, Action>) -> Result<Self, P4Error> {
        Ok(Table {
            preamble: t.get_preamble().into(),
            match_fields: t.get_match_fields().iter().map(|x| x.into()).collect(),
            actions: t
                .get_action_refs()
                .iter()
                .map(|x| ActionRef::new_from_proto(x, actions))
                .collect::<Result<_, _>>()?,
            max_entries: if t.size > 0 {
                Some(t.size as u64)
            } else {
                None
            },
            idle_notify: t.idle_timeout_behavior
                == p4info::Table_IdleTimeoutBehavior::NOTIFY_CONTROL,
            is_const_table: t.is_const_table,
        })
    }

    pub fn match_field(&self, id: u32) -> Option<&MatchField> {
        self.match_fields.iter().find(|mf| mf.preamble.id == id)
    }

    pub fn match_field_by_name(&self, name: &str) -> Option<&MatchField> {
        self.match_fields.iter().find(|mf| mf.preamble.is_named(name))
    }

    pub fn action_ref(&self, action_id: u32) -> Option<&ActionRef> {
        self.actions.iter().find(|ar| ar.action.preamble.id == action_id)
    }

    /// Entries of a table with any ternary, range, or optional field must
    /// carry a priority; entries of any other table must not.
    pub fn requires_priority(&self) -> bool {
        self.match_fields.iter().any(|mf| {
            matches!(
                mf.match_type,
                MatchType::Ternary | MatchType::Range | MatchType::Optional
            )
        })
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table {}:", self.preamble.name)?;
        for mf in &self.match_fields {
            write!(f, "\t{}", mf)?;
        }
        for ar in &self.actions {
            write!(f, "\t{}", ar)?;
        }
        if let Some(max_entries) = self.max_entries {
            write!(f, "\tsize: {}", max_entries)?;
        }
        if self.is_const_table {
            write!(f, "\tconst table")?;
        }
        if self.idle_notify {
            write!(f, "\tidle notify")?;
        }
        if !self.preamble.annotations.0.is_empty() {
            write!(f, "\t{}", self.preamble.annotations)?;
        }
        Ok(())
    }
}

/// A controller packet header, `packet_in` or `packet_out`.
#[derive(Clone, Debug, Default)]
pub struct PacketMetadata {
    pub preamble: Preamble,
    /// (id, name, bit width) per metadata field.
    pub fields: Vec<(u32, String, i32)>,
}

impl From<&p4info::ControllerPacketMetadata> for PacketMetadata {
    fn from(cpm: &p4info::ControllerPacketMetadata) -> Self {
        PacketMetadata {
            preamble: cpm.get_preamble().into(),
            fields: cpm
                .get_metadata()
                .iter()
                .map(|m| (m.id, m.name.clone(), m.bitwidth))
                .collect(),
        }
    }
}

impl PacketMetadata {
    pub fn field_id(&self, name: &str) -> Option<u32> {
        self.fields
            .iter()
            .find(|(_, n, _)| n == name)
            .map(|(id, _, _)| *id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Switch {
    pub tables: Vec<Table>,
    pub actions: Vec<Action>,
    pub packet_metadata: Vec<PacketMetadata>,
}

impl TryFrom<&p4info::P4Info> for Switch {
    type Error = P4Error;

    fn try_from(p4i: &p4info::P4Info) -> Result<Self, P4Error> {
        let actions: HashMap<u32, Action> = p4i
            .get_actions()
            .iter()
            .map(|x| (x.get_preamble().id, x.into()))
            .collect();
        let tables = p4i
            .get_tables()
            .iter()
            .map(|x| Table::new_from_proto(x, &actions))
            .collect::<Result<Vec<Table>, P4Error>>()?;
        Ok(Switch {
            tables,
            actions: p4i.get_actions().iter().map(|x| x.into()).collect(),
            packet_metadata: p4i
                .get_controller_packet_metadata()
                .iter()
                .map(|x| x.into())
                .collect(),
        })
    }
}

impl Switch {
    pub fn table(&self, id: u32) -> Option<&Table> {
        self.tables.iter().find(|t| t.preamble.id == id)
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.preamble.is_named(name))
    }

    pub fn action_by_name(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.preamble.is_named(name))
    }

    pub fn packet_metadata(&self, name: &str) -> Option<&PacketMetadata> {
        self.packet_metadata.iter().find(|m| m.preamble.is_named(name))
    }
}

/// Reads a binary-encoded P4Info file, as written by `p4c --p4runtime-files`.
pub fn load_p4info<P: AsRef<Path>>(path: P) -> Result<p4info::P4Info> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("{}: could not read P4Info", path.display()))?;
    p4info::P4Info::parse_from_bytes(&bytes)
        .with_context(|| format!("{}: could not parse P4Info", path.display()))
}

/// Encodes `value` as the big-endian byte string P4Runtime expects for a
/// field of `bit_width` bits: exactly `(bit_width + 7) / 8` bytes.
pub fn encode_value(value: u64, bit_width: i32) -> Vec<u8> {
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, value);
    let num_bytes = ((bit_width.clamp(1, 64) + 7) / 8) as usize;
    buf[8 - num_bytes..].to_vec()
}

/// Decodes a big-endian byte string of any length.  Returns `None` if the
/// value needs more than 64 bits.
pub fn decode_value(bytes: &[u8]) -> Option<u64> {
    let significant = match bytes.iter().position(|b| *b != 0) {
        Some(start) => &bytes[start..],
        None => return Some(0),
    };
    if significant.len() > 8 {
        return None;
    }
    Some(BigEndian::read_uint(significant, significant.len()))
}

/// True if `bytes`, read as an unsigned big-endian integer, fits in
/// `bit_width` bits.  Leading zero bytes are allowed.
pub fn fits_bit_width(bytes: &[u8], bit_width: i32) -> bool {
    let significant = match bytes.iter().position(|b| *b != 0) {
        Some(start) => &bytes[start..],
        None => return true,
    };
    let bits = significant.len() * 8 - significant[0].leading_zeros() as usize;
    bits <= bit_width.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_widths() {
        assert_eq!(encode_value(0x6007, 16), vec![0x60, 0x07]);
        assert_eq!(encode_value(1, 1), vec![0x01]);
        assert_eq!(encode_value(0xfff, 12), vec![0x0f, 0xff]);
    }

    #[test]
    fn decode_and_fit() {
        assert_eq!(decode_value(&[0x00, 0x60, 0x07]), Some(0x6007));
        assert_eq!(decode_value(&[]), Some(0));
        assert_eq!(decode_value(&[1; 9]), None);
        assert!(fits_bit_width(&[0x0f, 0xff], 12));
        assert!(!fits_bit_width(&[0x1f, 0xff], 12));
        assert!(fits_bit_width(&[0x00, 0x01], 1));
        assert!(!fits_bit_width(&[0x02], 1));
    }

    #[test]
    fn annotations_parse_and_print() {
        let raw = vec!["@hidden".to_string(), "@name(\"x\")".to_string()];
        let a = parse_annotations(&raw);
        assert_eq!(a.get("hidden"), Some(&None));
        assert_eq!(a.to_string(), "@hidden @name(\\\"x\\\")");
    }

    #[test]
    fn preamble_short_names() {
        let p = Preamble {
            name: "ingress.acl.acl_table".into(),
            ..Default::default()
        };
        assert!(p.is_named("acl_table"));
        assert!(p.is_named("ingress.acl.acl_table"));
        assert!(!p.is_named("acl"));
    }
}
