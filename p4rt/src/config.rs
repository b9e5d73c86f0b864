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

//! Configuration of an emulated target, read from JSON.

use anyhow::{Context, Result};

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::arbitration::PrimarySelection;
use crate::deviations::{Deviations, Vendor};
use crate::device::Device;
use crate::nodes::{assign_device_ids, p4rt_nodes_for_all_ports, StaticTelemetry};
use crate::target::Target;

fn default_device_id() -> u64 {
    1
}

fn default_ports() -> Vec<u32> {
    vec![1, 2]
}

fn default_max_streams() -> usize {
    16
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device_id")]
    pub id: u64,
    #[serde(default = "default_ports")]
    pub ports: Vec<u32>,
    /// Frames sent out a port come back in on it.
    #[serde(default)]
    pub loopback: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            id: default_device_id(),
            ports: default_ports(),
            loopback: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub vendor: Vendor,
    /// Overrides the vendor's deviations.
    pub deviations: Option<Deviations>,
    pub primary_selection: PrimarySelection,
    pub max_streams_per_device: usize,
    pub devices: Vec<DeviceConfig>,
    /// Used to derive the devices when none are listed.
    pub telemetry: Option<StaticTelemetry>,
    pub device_id_seed: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            vendor: Vendor::default(),
            deviations: None,
            primary_selection: PrimarySelection::default(),
            max_streams_per_device: default_max_streams(),
            devices: Vec::new(),
            telemetry: None,
            device_id_seed: 0,
        }
    }
}

impl TargetConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("{}: could not read target config", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("{}: could not parse target config", path.display()))
    }

    pub fn deviations(&self) -> Deviations {
        self.deviations
            .unwrap_or_else(|| Deviations::for_vendor(self.vendor))
    }

    /// The listed devices, or else one device per P4RT node found in the
    /// telemetry, or else a single default device.
    pub fn device_configs(&self) -> Vec<DeviceConfig> {
        if !self.devices.is_empty() {
            return self.devices.clone();
        }
        let telemetry = match &self.telemetry {
            Some(t) => t,
            None => return vec![DeviceConfig::default()],
        };

        let nodes = p4rt_nodes_for_all_ports(telemetry);
        let ids = assign_device_ids(nodes.values(), self.device_id_seed);
        let mut ports: BTreeMap<&String, Vec<u32>> = BTreeMap::new();
        for (port, node) in &nodes {
            match telemetry.interfaces.get(port).and_then(|i| i.id) {
                Some(id) => ports.entry(node).or_default().push(id),
                None => warn!("{}: no P4RT port ID, not added to {}", port, node),
            }
        }
        ids.iter()
            .map(|(node, &id)| {
                let ports = ports.remove(node).unwrap_or_default();
                debug!("node {} is device {} with ports {:?}", node, id, ports);
                DeviceConfig {
                    id,
                    ports,
                    loopback: false,
                }
            })
            .collect()
    }

    pub fn build(&self) -> Target {
        let deviations = self.deviations();
        let devices: Vec<Device> = self
            .device_configs()
            .into_iter()
            .map(|d| Device::new(d.id, d.ports, d.loopback, deviations))
            .collect();
        info!(
            "target with {} device(s), vendor {:?}, {:?}",
            devices.len(),
            self.vendor,
            deviations
        );
        Target::new(devices, deviations, self.primary_selection, self.max_streams_per_device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: TargetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TargetConfig::default());
        assert_eq!(config.device_configs(), vec![DeviceConfig::default()]);
        let target = config.build();
        assert_eq!(target.device_ids().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn vendor_and_override() {
        let config: TargetConfig = serde_json::from_str(r#"{"vendor": "cisco"}"#).unwrap();
        assert!(config.deviations().zero_election_id_primary_allowed);

        let config: TargetConfig = serde_json::from_str(
            r#"{"vendor": "cisco", "deviations": {"backup_arbitration_already_exists": true}}"#,
        )
        .unwrap();
        let d = config.deviations();
        assert!(d.backup_arbitration_already_exists);
        assert!(!d.zero_election_id_primary_allowed);
    }

    #[test]
    fn devices_from_telemetry() {
        let config: TargetConfig = serde_json::from_str(
            r#"{
                "device_id_seed": 7,
                "telemetry": {
                    "interfaces": {
                        "Ethernet1": {"hardware_port": "HP1", "id": 11},
                        "Ethernet2": {"hardware_port": "HP2", "id": 12},
                        "Ethernet3": {"hardware_port": "HP2"}
                    },
                    "components": {
                        "HP1": {"parent": "IC0"},
                        "HP2": {"parent": "IC1"},
                        "IC0": {"type": "INTEGRATED_CIRCUIT"},
                        "IC1": {"type": "INTEGRATED_CIRCUIT"}
                    }
                }
            }"#,
        )
        .unwrap();
        let devices = config.device_configs();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices, config.device_configs());
        let mut ports: Vec<Vec<u32>> = devices.iter().map(|d| d.ports.clone()).collect();
        ports.sort();
        assert_eq!(ports, vec![vec![11], vec![12]]);
        assert!(devices.iter().all(|d| d.id != 0));
        assert_ne!(devices[0].id, devices[1].id);
    }
}
