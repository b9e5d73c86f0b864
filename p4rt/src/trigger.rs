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

//! Disruptive events applied to an emulated device.

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Cold reboot: forwarding state and every stream are lost.
    Reboot,
    /// The P4RT server process restarts.  Forwarding state survives.
    ProcessRestart,
    /// The standby control processor takes over.  Forwarding state survives.
    ControlProcessorSwitchover,
    PortState { port_id: u32, up: bool },
}

impl Trigger {
    /// Whether open streams to the device are torn down and arbitration
    /// starts over.
    pub fn drops_streams(&self) -> bool {
        !matches!(self, Trigger::PortState { .. })
    }

    pub fn clears_forwarding_state(&self) -> bool {
        matches!(self, Trigger::Reboot)
    }
}

impl Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Reboot => write!(f, "reboot"),
            Trigger::ProcessRestart => write!(f, "process restart"),
            Trigger::ControlProcessorSwitchover => write!(f, "control processor switchover"),
            Trigger::PortState { port_id, up } => {
                write!(f, "port {} {}", port_id, if *up { "up" } else { "down" })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() {
        let t: Trigger = serde_json::from_str(r#"{"kind": "port_state", "port_id": 3, "up": false}"#).unwrap();
        assert_eq!(t, Trigger::PortState { port_id: 3, up: false });
        assert!(!t.drops_streams());
        let t: Trigger = serde_json::from_str(r#"{"kind": "control_processor_switchover"}"#).unwrap();
        assert!(t.drops_streams());
        assert!(!t.clears_forwarding_state());
        assert_eq!(Trigger::Reboot.to_string(), "reboot");
    }
}
