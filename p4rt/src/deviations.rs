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

//! Vendor deviations from the P4Runtime specification.
//!
//! Targets disagree on a handful of status codes.  Every code the arbiter and
//! the emulated device hand out for one of these situations is looked up
//! here, so a test expecting a code and a target producing it cannot drift
//! apart.

use grpcio::RpcStatusCode;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    #[default]
    Generic,
    Arista,
    Cisco,
    Juniper,
    Nokia,
}

/// Behavior switches.  All false is the reference behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deviations {
    /// A backup that arbitrates while the group has no primary is told
    /// ALREADY_EXISTS rather than NOT_FOUND.
    pub backup_arbitration_already_exists: bool,
    /// An election ID of zero is an ordinary bid rather than "unset".
    pub zero_election_id_primary_allowed: bool,
    /// Updates of type UNSPECIFIED fail with UNIMPLEMENTED rather than
    /// INVALID_ARGUMENT.
    pub unspecified_update_unimplemented: bool,
}

impl Deviations {
    pub fn for_vendor(vendor: Vendor) -> Self {
        match vendor {
            Vendor::Generic | Vendor::Nokia => Deviations::default(),
            Vendor::Arista => Deviations {
                backup_arbitration_already_exists: true,
                ..Default::default()
            },
            Vendor::Cisco => Deviations {
                zero_election_id_primary_allowed: true,
                unspecified_update_unimplemented: true,
                ..Default::default()
            },
            Vendor::Juniper => Deviations {
                unspecified_update_unimplemented: true,
                ..Default::default()
            },
        }
    }

    pub fn expected_code(&self, scenario: Scenario) -> RpcStatusCode {
        use Scenario::*;
        match scenario {
            PrimaryArbitration => RpcStatusCode::OK,
            BackupWithPrimary => RpcStatusCode::ALREADY_EXISTS,
            BackupWithoutPrimary => {
                if self.backup_arbitration_already_exists {
                    RpcStatusCode::ALREADY_EXISTS
                } else {
                    RpcStatusCode::NOT_FOUND
                }
            }
            DuplicateElectionId => RpcStatusCode::INVALID_ARGUMENT,
            ZeroElectionIdFirst => {
                if self.zero_election_id_primary_allowed {
                    RpcStatusCode::OK
                } else {
                    self.expected_code(BackupWithoutPrimary)
                }
            }
            ZeroElectionIdSecond => {
                if self.zero_election_id_primary_allowed {
                    RpcStatusCode::INVALID_ARGUMENT
                } else {
                    self.expected_code(BackupWithoutPrimary)
                }
            }
            UnknownDevice => RpcStatusCode::NOT_FOUND,
            StreamLimit => RpcStatusCode::RESOURCE_EXHAUSTED,
            StreamRebind => RpcStatusCode::FAILED_PRECONDITION,
            RoleConfigMismatch => RpcStatusCode::INVALID_ARGUMENT,
            WriteFromNonPrimary => RpcStatusCode::PERMISSION_DENIED,
            NoPipeline => RpcStatusCode::FAILED_PRECONDITION,
            UnknownTable => RpcStatusCode::NOT_FOUND,
            InsertExisting => RpcStatusCode::ALREADY_EXISTS,
            ModifyMissing | DeleteMissing => RpcStatusCode::NOT_FOUND,
            MalformedEntry => RpcStatusCode::INVALID_ARGUMENT,
            UnspecifiedUpdate => {
                if self.unspecified_update_unimplemented {
                    RpcStatusCode::UNIMPLEMENTED
                } else {
                    RpcStatusCode::INVALID_ARGUMENT
                }
            }
            TableFull => RpcStatusCode::RESOURCE_EXHAUSTED,
            BatchAborted => RpcStatusCode::ABORTED,
        }
    }
}

/// Situations whose status code is fixed per target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Arbitration by the highest bidder.
    PrimaryArbitration,
    /// A lower bid while a primary is connected.
    BackupWithPrimary,
    /// Any non-winning bid while nobody is primary.
    BackupWithoutPrimary,
    /// A bid equal to one held by another stream of the same group.
    DuplicateElectionId,
    /// First stream of a group to bid zero.
    ZeroElectionIdFirst,
    /// Second stream of a group to bid zero.
    ZeroElectionIdSecond,
    UnknownDevice,
    StreamLimit,
    /// An arbitrated stream names a different device or role.
    StreamRebind,
    /// An arbitrated stream sends a different role config with a new
    /// election ID.
    RoleConfigMismatch,
    WriteFromNonPrimary,
    /// Write or read before SetForwardingPipelineConfig.
    NoPipeline,
    UnknownTable,
    InsertExisting,
    ModifyMissing,
    DeleteMissing,
    MalformedEntry,
    UnspecifiedUpdate,
    TableFull,
    /// A valid update in an all-or-nothing batch that failed elsewhere.
    BatchAborted,
}

/// The code `vendor` is expected to return in `scenario`, with that vendor's
/// default deviations.
pub fn expected_code(scenario: Scenario, vendor: Vendor) -> RpcStatusCode {
    Deviations::for_vendor(vendor).expected_code(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_codes() {
        let d = Deviations::default();
        assert_eq!(d.expected_code(Scenario::BackupWithoutPrimary), RpcStatusCode::NOT_FOUND);
        assert_eq!(d.expected_code(Scenario::BackupWithPrimary), RpcStatusCode::ALREADY_EXISTS);
        assert_eq!(d.expected_code(Scenario::DuplicateElectionId), RpcStatusCode::INVALID_ARGUMENT);
        assert_eq!(d.expected_code(Scenario::ZeroElectionIdFirst), RpcStatusCode::NOT_FOUND);
        assert_eq!(d.expected_code(Scenario::UnspecifiedUpdate), RpcStatusCode::INVALID_ARGUMENT);
    }

    #[test]
    fn vendor_deviations() {
        assert_eq!(
            expected_code(Scenario::BackupWithoutPrimary, Vendor::Arista),
            RpcStatusCode::ALREADY_EXISTS
        );
        assert_eq!(
            expected_code(Scenario::ZeroElectionIdFirst, Vendor::Cisco),
            RpcStatusCode::OK
        );
        assert_eq!(
            expected_code(Scenario::ZeroElectionIdSecond, Vendor::Cisco),
            RpcStatusCode::INVALID_ARGUMENT
        );
        assert_eq!(
            expected_code(Scenario::UnspecifiedUpdate, Vendor::Juniper),
            RpcStatusCode::UNIMPLEMENTED
        );
        assert_eq!(
            expected_code(Scenario::ZeroElectionIdSecond, Vendor::Generic),
            RpcStatusCode::NOT_FOUND
        );
    }

    #[test]
    fn deserialize_partial() {
        let d: Deviations =
            serde_json::from_str(r#"{"zero_election_id_primary_allowed": true}"#).unwrap();
        assert!(d.zero_election_id_primary_allowed);
        assert!(!d.backup_arbitration_already_exists);
    }
}
