//! The NUMA-aware fabric interface selector.
//!
//! A consumer builds a [`NUMAFabric`] once, from a hardware scan
//! ([`numa_fabric_from_scan`]) or from static configuration
//! ([`numa_fabric_from_config`]), optionally attaches a [`DeviceFilter`],
//! then repeatedly calls [`NUMAFabric::get_device`] or
//! [`NUMAFabric::find_device`]. The selector is the only stateful,
//! concurrent object here; filters and constructors are pure.

mod config;
mod error;
mod filter;
mod interface;
mod map;
mod numa;
mod params;
mod scan;
mod validate;

pub use config::{numa_fabric_from_config, FabricInterfaceConfig, NUMAFabricConfig};
pub use error::{AddrValidationError, FabricError};
pub use filter::{DeviceFilter, FilterMode};
pub use interface::FabricInterface;
pub use map::NUMAFabricMap;
pub use numa::{NUMAFabric, NUMAFabricMapReadGuard, NUMAFabricMapWriteGuard, SharedNUMAFabric};
pub use params::FabricIfaceParams;
pub use scan::numa_fabric_from_scan;
pub use validate::AddrSource;
