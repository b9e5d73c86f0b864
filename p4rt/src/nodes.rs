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

//! Resolves which P4RT node (an integrated circuit) serves each port, and
//! assigns P4Runtime device IDs to those nodes.

use rand::{rngs::StdRng, RngCore, SeedableRng};

use serde::{Deserialize, Serialize};

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

/// OpenConfig hardware component types that matter here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    IntegratedCircuit,
    Port,
    Linecard,
    Chassis,
    Fabric,
    Cpu,
    #[serde(other)]
    Other,
}

/// Read access to the state leaves the resolver needs.  Implementations are
/// queried on every call; nothing is cached.
pub trait Telemetry {
    /// Names of the physical Ethernet interfaces.
    fn ethernet_ports(&self) -> Vec<String>;

    /// `/interfaces/interface[name]/state/hardware-port`
    fn hardware_port(&self, port: &str) -> Option<String>;

    /// `/components/component[name]/state/parent`
    fn parent(&self, component: &str) -> Option<String>;

    /// `/components/component[name]/state/type`
    fn component_type(&self, component: &str) -> Option<ComponentType>;
}

/// Maps each of `ports` to the P4RT node that serves it.  A port is left
/// out if its hardware port, that port's parent, or the parent's type is
/// missing, or if the parent is not an integrated circuit.
pub fn p4rt_nodes_by_port<T, S>(telemetry: &T, ports: &[S]) -> BTreeMap<String, String>
where
    T: Telemetry + ?Sized,
    S: AsRef<str>,
{
    let mut by_hardware_port: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for port in ports {
        let port = port.as_ref();
        match telemetry.hardware_port(port) {
            Some(hp) => by_hardware_port.entry(hp).or_default().push(port),
            None => debug!("{}: no hardware-port", port),
        }
    }

    let mut parents: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for (hp, ports) in by_hardware_port {
        match telemetry.parent(&hp) {
            Some(node) => parents.entry(node).or_default().extend(ports),
            None => debug!("{}: no parent component", hp),
        }
    }

    let mut result = BTreeMap::new();
    for (node, ports) in parents {
        match telemetry.component_type(&node) {
            Some(ComponentType::IntegratedCircuit) => {
                for port in ports {
                    result.insert(port.to_string(), node.clone());
                }
            }
            t => debug!("{}: type {:?}, not a P4RT node", node, t),
        }
    }
    result
}

/// [`p4rt_nodes_by_port`] over every Ethernet port the device reports.
pub fn p4rt_nodes_for_all_ports<T: Telemetry + ?Sized>(telemetry: &T) -> BTreeMap<String, String> {
    p4rt_nodes_by_port(telemetry, &telemetry.ethernet_ports())
}

/// Gives every distinct node a random non-zero device ID, unique across the
/// result.  The same seed and node set always produce the same IDs.
pub fn assign_device_ids<'a, I>(nodes: I, seed: u64) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a String>,
{
    let nodes: BTreeSet<&String> = nodes.into_iter().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut used = HashSet::new();
    nodes
        .into_iter()
        .map(|node| {
            let id = loop {
                let id = rng.next_u64();
                if id != 0 && used.insert(id) {
                    break id;
                }
            };
            (node.clone(), id)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    #[default]
    Ethernet,
    Aggregate,
    Loopback,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceState {
    #[serde(rename = "type")]
    pub kind: InterfaceKind,
    pub hardware_port: Option<String>,
    /// P4RT port ID, if configured.
    pub id: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentState {
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(rename = "type", default)]
    pub component_type: Option<ComponentType>,
}

/// Telemetry from a fixed snapshot, usually loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTelemetry {
    pub interfaces: BTreeMap<String, InterfaceState>,
    pub components: BTreeMap<String, ComponentState>,
}

impl Telemetry for StaticTelemetry {
    fn ethernet_ports(&self) -> Vec<String> {
        self.interfaces
            .iter()
            .filter(|(_, i)| i.kind == InterfaceKind::Ethernet)
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn hardware_port(&self, port: &str) -> Option<String> {
        self.interfaces.get(port)?.hardware_port.clone()
    }

    fn parent(&self, component: &str) -> Option<String> {
        self.components.get(component)?.parent.clone()
    }

    fn component_type(&self, component: &str) -> Option<ComponentType> {
        self.components.get(component)?.component_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telemetry() -> StaticTelemetry {
        serde_json::from_str(
            r#"{
                "interfaces": {
                    "Ethernet1": {"hardware_port": "HP1", "id": 1},
                    "Ethernet2": {"hardware_port": "HP1", "id": 2},
                    "Ethernet3": {"hardware_port": "HP3"},
                    "Ethernet4": {"hardware_port": "HP4"},
                    "Ethernet5": {},
                    "Loopback0": {"type": "loopback"}
                },
                "components": {
                    "HP1": {"parent": "NPU0"},
                    "HP3": {"parent": "LC0"},
                    "HP4": {},
                    "NPU0": {"type": "INTEGRATED_CIRCUIT"},
                    "LC0": {"type": "LINECARD"}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_integrated_circuits_only() {
        let nodes = p4rt_nodes_for_all_ports(&telemetry());
        let expected: BTreeMap<String, String> = [("Ethernet1", "NPU0"), ("Ethernet2", "NPU0")]
            .iter()
            .map(|(p, n)| (p.to_string(), n.to_string()))
            .collect();
        assert_eq!(nodes, expected);
    }

    #[test]
    fn unknown_ports_are_dropped() {
        let nodes = p4rt_nodes_by_port(&telemetry(), &["Ethernet9", "Ethernet2"]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes["Ethernet2"], "NPU0");
    }

    /// Counts component type lookups.
    struct Counting {
        inner: StaticTelemetry,
        type_lookups: std::cell::Cell<usize>,
    }

    impl Telemetry for Counting {
        fn ethernet_ports(&self) -> Vec<String> {
            self.inner.ethernet_ports()
        }

        fn hardware_port(&self, port: &str) -> Option<String> {
            self.inner.hardware_port(port)
        }

        fn parent(&self, component: &str) -> Option<String> {
            self.inner.parent(component)
        }

        fn component_type(&self, component: &str) -> Option<ComponentType> {
            self.type_lookups.set(self.type_lookups.get() + 1);
            self.inner.component_type(component)
        }
    }

    #[test]
    fn node_type_read_once_per_node() {
        let mut inner = telemetry();
        inner.components.get_mut("HP3").unwrap().parent = Some("NPU0".into());
        let telemetry = Counting {
            inner,
            type_lookups: Default::default(),
        };
        let nodes = p4rt_nodes_for_all_ports(&telemetry);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes["Ethernet3"], "NPU0");
        assert_eq!(telemetry.type_lookups.get(), 1);
    }

    #[test]
    fn device_ids_unique_and_seeded() {
        let nodes: Vec<String> = vec!["NPU0".into(), "NPU1".into(), "NPU0".into()];
        let a = assign_device_ids(&nodes, 7);
        let b = assign_device_ids(&nodes, 7);
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
        assert!(a.values().all(|id| *id != 0));
        assert_ne!(a["NPU0"], a["NPU1"]);
    }
}
