//! Build a [`NUMAFabric`] from a hardware scan result.

use std::sync::Arc;

use crate::hardware;

use super::interface::FabricInterface;
use super::map::NUMAFabricMap;
use super::numa::NUMAFabric;

/// Expand one hardware record into the cross-product of its OS net
/// interfaces and providers: a device with N providers yields N distinct
/// [`FabricInterface`] values sharing `name` but carrying distinct
/// provider-specific domains. A single-provider device keeps the plain
/// hardware name as its domain, matching the common case where no
/// disambiguation is needed.
fn fabric_interfaces_from_hardware(hw: &Arc<hardware::FabricInterface>) -> Vec<FabricInterface> {
    let mut net_interfaces: Vec<&String> = hw.net_interfaces.iter().collect();
    net_interfaces.sort();

    let mut providers: Vec<&String> = hw.providers.names().collect();
    providers.sort();

    let domain_for = |provider: Option<&str>| match provider {
        Some(p) if providers.len() > 1 => format!("{}#{p}", hw.name),
        _ => hw.name.clone(),
    };

    let mut out = Vec::with_capacity(net_interfaces.len() * providers.len().max(1));
    for net_iface in &net_interfaces {
        if providers.is_empty() {
            out.push(FabricInterface::from_hardware(
                (*net_iface).clone(),
                domain_for(None),
                hw.device_class,
                Arc::clone(hw),
            ));
            continue;
        }
        for provider in &providers {
            out.push(FabricInterface::from_hardware(
                (*net_iface).clone(),
                domain_for(Some(provider)),
                hw.device_class,
                Arc::clone(hw),
            ));
        }
    }
    out
}

/// Build a [`NUMAFabric`] from a hardware scan, one entry per
/// (net interface, provider) pair, grouped by the hardware record's NUMA
/// node and ordered by `(domain, name)` within each node so round-robin
/// order is deterministic.
pub fn numa_fabric_from_scan(scan: &hardware::FabricInterfaceSet) -> NUMAFabric {
    let mut map = NUMAFabricMap::new();

    for hw in scan.iter() {
        let hw = Arc::new(hw.clone());
        for fi in fabric_interfaces_from_hardware(&hw) {
            map.entry(hw.numa_node).or_default().push(fi);
        }
    }

    for list in map.values_mut() {
        list.sort_by(|a, b| (&a.domain, &a.name).cmp(&(&b.domain, &b.name)));
    }

    NUMAFabric::from_map(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{FabricProvider, FabricProviderSet, NetDevClass};

    fn providers(names: &[&str]) -> FabricProviderSet {
        FabricProviderSet::new(names.iter().map(|n| FabricProvider::new(*n)))
    }

    fn names(node: &NUMAFabric, numa_node: i32) -> Vec<(String, String)> {
        let map = node.rlocked_map().unwrap();
        map.get(&numa_node)
            .map(|v| v.iter().map(|fi| (fi.name.clone(), fi.domain.clone())).collect())
            .unwrap_or_default()
    }

    #[test]
    fn no_devices_in_scan_yields_empty_map() {
        let scan = hardware::FabricInterfaceSet::default();
        let nf = numa_fabric_from_scan(&scan);
        assert_eq!(nf.num_numa_nodes(), 0);
        assert_eq!(nf.max_numa_node(), -1);
    }

    #[test]
    fn include_lo() {
        let scan = hardware::FabricInterfaceSet::new([
            hardware::FabricInterface::new(
                "test0",
                ["os_test0".to_owned()],
                NetDevClass::Ether,
                providers(&["ofi+sockets"]),
                1,
            ),
            hardware::FabricInterface::new(
                "lo",
                ["lo".to_owned()],
                NetDevClass::Loopback,
                providers(&["ofi+sockets"]),
                1,
            ),
        ]);

        let nf = numa_fabric_from_scan(&scan);
        assert_eq!(
            names(&nf, 1),
            vec![
                ("lo".to_owned(), "lo".to_owned()),
                ("os_test0".to_owned(), "test0".to_owned()),
            ]
        );
    }

    #[test]
    fn multiple_devices_grouped_by_numa_node() {
        let scan = hardware::FabricInterfaceSet::new([
            hardware::FabricInterface::new(
                "test0",
                ["os_test0".to_owned()],
                NetDevClass::Ether,
                providers(&["ofi+sockets"]),
                1,
            ),
            hardware::FabricInterface::new(
                "test1",
                ["os_test1".to_owned()],
                NetDevClass::Infiniband,
                providers(&["ofi+verbs"]),
                0,
            ),
            hardware::FabricInterface::new(
                "test2",
                ["os_test2".to_owned()],
                NetDevClass::Ether,
                providers(&["ofi+sockets"]),
                0,
            ),
        ]);

        let nf = numa_fabric_from_scan(&scan);
        assert_eq!(
            names(&nf, 0),
            vec![
                ("os_test1".to_owned(), "test1".to_owned()),
                ("os_test2".to_owned(), "test2".to_owned()),
            ]
        );
        assert_eq!(names(&nf, 1), vec![("os_test0".to_owned(), "test0".to_owned())]);
    }

    #[test]
    fn multiple_providers_per_device_expand_to_distinct_domains() {
        let scan = hardware::FabricInterfaceSet::new([
            hardware::FabricInterface::new(
                "test0",
                ["os_test0".to_owned()],
                NetDevClass::Ether,
                providers(&["ofi+sockets", "ofi+tcp"]),
                1,
            ),
            hardware::FabricInterface::new(
                "verbs_test1",
                ["os_test1".to_owned()],
                NetDevClass::Infiniband,
                providers(&["ofi+verbs"]),
                0,
            ),
            hardware::FabricInterface::new(
                "test1",
                ["os_test1".to_owned()],
                NetDevClass::Infiniband,
                providers(&["ofi+sockets", "ofi+tcp"]),
                0,
            ),
        ]);

        let nf = numa_fabric_from_scan(&scan);
        assert_eq!(
            names(&nf, 0),
            vec![
                ("os_test1".to_owned(), "test1#ofi+sockets".to_owned()),
                ("os_test1".to_owned(), "test1#ofi+tcp".to_owned()),
                ("os_test1".to_owned(), "verbs_test1".to_owned()),
            ]
        );
        assert_eq!(
            names(&nf, 1),
            vec![
                ("os_test0".to_owned(), "test0#ofi+sockets".to_owned()),
                ("os_test0".to_owned(), "test0#ofi+tcp".to_owned()),
            ]
        );
    }
}
