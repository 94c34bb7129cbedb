//! Build a [`NUMAFabric`] from user-supplied manual configuration.

use serde::Deserialize;

use super::interface::FabricInterface;
use super::map::NUMAFabricMap;
use super::numa::NUMAFabric;

/// One manually-declared interface, as found in the agent's configuration
/// file. Deserializable so the (out-of-scope) config loader can build
/// these directly from TOML/JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct FabricInterfaceConfig {
    pub interface: String,
    #[serde(default)]
    pub domain: String,
}

/// All manually-declared interfaces for one NUMA node.
#[derive(Debug, Clone, Deserialize)]
pub struct NUMAFabricConfig {
    pub numa_node: i32,
    #[serde(default)]
    pub interfaces: Vec<FabricInterfaceConfig>,
}

/// Build a [`NUMAFabric`] from manual configuration entries. Each
/// interface becomes a `Manual`-class [`FabricInterface`], opaque to
/// provider and class matching. Entries with no interfaces contribute no
/// NUMA node to the resulting map.
pub fn numa_fabric_from_config(entries: &[NUMAFabricConfig]) -> NUMAFabric {
    let mut map = NUMAFabricMap::new();

    for entry in entries {
        if entry.interfaces.is_empty() {
            log::warn!("numa_fabric config entry for node {} has no interfaces, skipping", entry.numa_node);
            continue;
        }
        let list = map.entry(entry.numa_node).or_default();
        for iface in &entry.interfaces {
            let domain = if iface.domain.is_empty() {
                iface.interface.clone()
            } else {
                iface.domain.clone()
            };
            list.push(FabricInterface::manual(iface.interface.clone(), domain));
        }
    }

    NUMAFabric::from_map(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(node: &NUMAFabric, numa_node: i32) -> Vec<(String, String)> {
        let map = node.rlocked_map().unwrap();
        map.get(&numa_node)
            .map(|v| v.iter().map(|fi| (fi.name.clone(), fi.domain.clone())).collect())
            .unwrap_or_default()
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let nf = numa_fabric_from_config(&[]);
        assert_eq!(nf.num_numa_nodes(), 0);
    }

    #[test]
    fn no_devices_on_numa_node_is_omitted() {
        let cfg = vec![NUMAFabricConfig {
            numa_node: 1,
            interfaces: vec![],
        }];
        let nf = numa_fabric_from_config(&cfg);
        assert_eq!(nf.num_numa_nodes(), 0);
    }

    #[test]
    fn single_numa_node_defaults_domain_to_interface() {
        let cfg = vec![NUMAFabricConfig {
            numa_node: 1,
            interfaces: vec![FabricInterfaceConfig {
                interface: "test0".to_owned(),
                domain: "test0_domain".to_owned(),
            }],
        }];
        let nf = numa_fabric_from_config(&cfg);
        assert_eq!(
            names(&nf, 1),
            vec![("test0".to_owned(), "test0_domain".to_owned())]
        );
    }

    #[test]
    fn multiple_devices_across_nodes() {
        let cfg = vec![
            NUMAFabricConfig {
                numa_node: 0,
                interfaces: vec![
                    FabricInterfaceConfig {
                        interface: "test1".to_owned(),
                        domain: String::new(),
                    },
                    FabricInterfaceConfig {
                        interface: "test2".to_owned(),
                        domain: "test2_domain".to_owned(),
                    },
                ],
            },
            NUMAFabricConfig {
                numa_node: 1,
                interfaces: vec![FabricInterfaceConfig {
                    interface: "test0".to_owned(),
                    domain: "test0_domain".to_owned(),
                }],
            },
        ];
        let nf = numa_fabric_from_config(&cfg);
        assert_eq!(
            names(&nf, 0),
            vec![
                ("test1".to_owned(), "test1".to_owned()),
                ("test2".to_owned(), "test2_domain".to_owned()),
            ]
        );
        assert_eq!(
            names(&nf, 1),
            vec![("test0".to_owned(), "test0_domain".to_owned())]
        );
    }
}
