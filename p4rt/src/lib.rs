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

//! P4Runtime controller and target building blocks for the WBB program.
//!
//! - [`wbb`] encodes `acl_wbb_ingress_table` entries against a [`wbb::WbbSchema`].
//! - [`arbitration`] decides which controller is primary for each
//!   (device, role) group.
//! - [`target`] and [`service`] emulate a P4Runtime device and serve it over
//!   gRPC; [`client`] is the controller side.
//! - [`nodes`] maps ports to P4RT nodes and assigns device IDs.

pub mod arbitration;
pub mod client;
pub mod config;
pub mod device;
pub mod deviations;
pub mod election;
pub mod error;
pub mod nodes;
pub mod packet;
pub mod schema;
pub mod service;
pub mod target;
pub mod trigger;
pub mod wbb;

pub use crate::arbitration::{Arbiter, ArbitrationRequest, PrimarySelection, Role};
pub use crate::client::{ArbitrationResponse, P4rtClient};
pub use crate::config::TargetConfig;
pub use crate::deviations::{Deviations, Vendor};
pub use crate::election::{ElectionId, ElectionIdGenerator};
pub use crate::error::{ClientError, P4Error, WriteError};
pub use crate::target::Target;
pub use crate::trigger::Trigger;
pub use crate::wbb::{AclWbbEncoder, AclWbbIngressEntry, WbbSchema};
