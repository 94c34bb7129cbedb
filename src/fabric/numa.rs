use std::collections::HashMap;
use std::io;
use std::ops::Deref;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::hardware::NetDevClass;
use crate::utils::select::Select;

use super::error::FabricError;
use super::filter::DeviceFilter;
use super::interface::FabricInterface;
use super::map::NUMAFabricMap;
use super::params::FabricIfaceParams;
use super::validate::{default_get_addr_interface, validate_addrs, AddrSource};

/// Function signature for the injectable address lookup: given an
/// interface name, return something that can enumerate its addresses.
pub(crate) type GetAddrInterface =
    dyn Fn(&str) -> io::Result<Box<dyn AddrSource>> + Send + Sync;

struct NUMAFabricInner {
    numa_map: NUMAFabricMap,
    current_numa_dev_idx: HashMap<i32, usize>,
    /// Last NUMA node id a device was successfully chosen from, used to
    /// resume cross-node fallback round-robin on the next call.
    current_numa_node: i32,
}

/// Concurrency-safe fabric interface selector.
///
/// A single reader-writer lock guards `numa_map`, `current_numa_dev_idx`
/// and `current_numa_node` as one unit: `get_device` takes the lock
/// exclusively (cursors mutate, and the address validator is invoked
/// while held so that selection and cursor advancement stay atomic with
/// respect to other callers); `find`, `find_device` and the inspection
/// methods take it shared.
pub struct NUMAFabric {
    inner: RwLock<NUMAFabricInner>,
    get_addr_interface: Box<GetAddrInterface>,
    filter: DeviceFilter,
}

impl NUMAFabric {
    pub(crate) fn from_map(numa_map: NUMAFabricMap) -> Self {
        Self {
            inner: RwLock::new(NUMAFabricInner {
                numa_map,
                current_numa_dev_idx: HashMap::new(),
                current_numa_node: 0,
            }),
            get_addr_interface: Box::new(default_get_addr_interface),
            filter: DeviceFilter::default(),
        }
    }

    /// An empty selector with no devices on any NUMA node.
    pub fn new() -> Self {
        Self::from_map(NUMAFabricMap::new())
    }

    /// Attach a device filter, consuming and returning `self` for
    /// chaining, matching the builder methods on
    /// [`crate::hardware`]-adjacent finders elsewhere in this crate.
    pub fn with_device_filter(mut self, filter: DeviceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Override the address lookup used by liveness validation. Intended
    /// for tests; production callers get the OS-backed default.
    pub fn with_addr_interface_fn(
        mut self,
        f: impl Fn(&str) -> io::Result<Box<dyn AddrSource>> + Send + Sync + 'static,
    ) -> Self {
        self.get_addr_interface = Box::new(f);
        self
    }

    /// Append `fi` to the sequence at `node`, creating the slot if
    /// absent. Preserves insertion order; does not deduplicate.
    pub fn add(&self, node: i32, fi: FabricInterface) {
        let mut inner = self.inner.write().expect("fabric lock poisoned");
        inner.numa_map.entry(node).or_default().push(fi);
    }

    /// Highest NUMA node id present, or `-1` if empty.
    pub fn max_numa_node(&self) -> i32 {
        let inner = self.inner.read().expect("fabric lock poisoned");
        inner.numa_map.max_numa_node()
    }

    /// Count of NUMA node keys present (populated or not).
    pub fn num_numa_nodes(&self) -> usize {
        let inner = self.inner.read().expect("fabric lock poisoned");
        inner.numa_map.len()
    }

    /// Length of the device sequence at `node`, `0` if absent.
    pub fn num_devices(&self, node: i32) -> usize {
        let inner = self.inner.read().expect("fabric lock poisoned");
        inner.numa_map.get(&node).map_or(0, Vec::len)
    }

    /// Obtain a read lease over the underlying map. The map must not be
    /// mutated through it.
    pub fn rlocked_map(&self) -> Result<NUMAFabricMapReadGuard<'_>, FabricError> {
        let guard = self.inner.read().map_err(|_| FabricError::Poisoned)?;
        Ok(NUMAFabricMapReadGuard(guard))
    }

    /// Obtain a write lease over the underlying map.
    pub fn locked_map(&self) -> Result<NUMAFabricMapWriteGuard<'_>, FabricError> {
        let guard = self.inner.write().map_err(|_| FabricError::Poisoned)?;
        Ok(NUMAFabricMapWriteGuard(guard))
    }

    /// Return every interface whose name equals `name`, across all NUMA
    /// nodes. Does not validate liveness and does not advance cursors.
    pub fn find(&self, name: &str) -> Result<Vec<FabricInterface>, FabricError> {
        let inner = self.inner.read().map_err(|_| FabricError::Poisoned)?;
        let mut result = Vec::new();
        let mut nodes: Vec<&i32> = inner.numa_map.keys().collect();
        nodes.sort();
        for node in nodes {
            for fi in &inner.numa_map[node] {
                if fi.name == name {
                    result.push(fi.clone());
                }
            }
        }
        if result.is_empty() {
            return Err(FabricError::InterfaceNotFound(name.to_owned()));
        }
        Ok(result)
    }

    /// Locate interface(s) by `params.interface`, narrowed by
    /// `params.domain` / `params.provider` if set. Does not validate
    /// liveness and does not advance cursors.
    pub fn find_device(
        &self,
        params: &FabricIfaceParams,
    ) -> Result<Vec<FabricInterface>, FabricError> {
        let name = params.interface.as_deref().unwrap_or_default();
        let mut result = self.find(name)?;

        if let Some(domain) = &params.domain {
            result.retain(|fi| fi.effective_domain() == domain);
            if result.is_empty() {
                return Err(FabricError::DomainMismatch);
            }
        }

        if let Some(provider) = &params.provider {
            result.retain(|fi| fi.net_dev_class == NetDevClass::Manual || fi.supports_provider(provider));
            if result.is_empty() {
                return Err(FabricError::ProviderMismatch);
            }
        }

        Ok(result)
    }

    /// The selection algorithm: prefer `params.numa_node`, round-robin
    /// among equivalent interfaces there, then fall back across other
    /// NUMA nodes in round-robin order if nothing matches locally.
    pub fn get_device(&self, params: &FabricIfaceParams) -> Result<FabricInterface, FabricError> {
        if params.dev_class != NetDevClass::Manual
            && params.provider.as_deref().unwrap_or("").is_empty()
        {
            return Err(FabricError::ProviderRequired);
        }

        let mut inner = self.inner.write().map_err(|_| FabricError::Poisoned)?;

        if let Some(fi) = self.try_node(&mut inner, params.numa_node, params) {
            inner.current_numa_node = params.numa_node;
            return Ok(fi);
        }

        let mut other_nodes: Vec<i32> = inner
            .numa_map
            .keys()
            .copied()
            .filter(|&node| node != params.numa_node)
            .collect();
        other_nodes.sort();

        if !other_nodes.is_empty() {
            let cursor = inner.current_numa_node;
            let start = other_nodes.partition_point(|&id| id <= cursor);
            for i in 0..other_nodes.len() {
                let node = other_nodes[(start + i) % other_nodes.len()];
                if let Some(fi) = self.try_node(&mut inner, node, params) {
                    inner.current_numa_node = node;
                    return Ok(fi);
                }
            }
        }

        Err(FabricError::NotFound(params.dev_class))
    }

    /// Scan the interfaces at `node` starting from its round-robin
    /// cursor, wrapping once, looking for the first candidate that
    /// matches `params`. Advances the per-node cursor on success.
    fn try_node(
        &self,
        inner: &mut NUMAFabricInner,
        node: i32,
        params: &FabricIfaceParams,
    ) -> Option<FabricInterface> {
        let len = inner.numa_map.get(&node).map_or(0, Vec::len);
        if len == 0 {
            return None;
        }

        let start = inner.current_numa_dev_idx.get(&node).copied().unwrap_or(0) % len;
        for step in 0..len {
            let idx = (start + step) % len;
            let fi = inner.numa_map[&node][idx].clone();
            if self.candidate_matches(&fi, params) {
                inner.current_numa_dev_idx.insert(node, (idx + 1) % len);
                return Some(fi);
            }
        }
        None
    }

    /// Step 2's matching predicate: `Manual` entries match unconditionally;
    /// otherwise the candidate must match class and provider, pass the
    /// device filter, and validate as live. Cheap checks run first so the
    /// blocking address lookup only runs against otherwise-eligible
    /// candidates.
    fn candidate_matches(&self, fi: &FabricInterface, params: &FabricIfaceParams) -> bool {
        let is_manual = fi.net_dev_class == NetDevClass::Manual;
        is_manual.select(
            || true,
            || {
                fi.net_dev_class == params.dev_class
                    && fi.supports_provider(params.provider.as_deref().unwrap_or(""))
                    && self.filter.accepts(&fi.name)
                    && self.validate_device(fi).is_ok()
            },
        )
    }

    /// Liveness validation: resolve `fi.name` to its addresses and check
    /// at least one is a usable, non-zero IP. `Manual` interfaces skip
    /// validation. A failure here only disqualifies the candidate; it
    /// never escapes `get_device` directly.
    fn validate_device(&self, fi: &FabricInterface) -> io::Result<()> {
        if fi.net_dev_class == NetDevClass::Manual {
            return Ok(());
        }
        let source = (self.get_addr_interface)(&fi.name)?;
        let addrs = source.addrs()?;
        match validate_addrs(&addrs) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::debug!("fabric interface {} disqualified: {e}", fi.name);
                Err(io::Error::new(io::ErrorKind::Other, e.to_string()))
            }
        }
    }
}

impl Default for NUMAFabric {
    fn default() -> Self {
        Self::new()
    }
}

/// Read lease over a [`NUMAFabricMap`]. Dropping it releases the lock —
/// the RAII analogue of the original's explicit release callback.
pub struct NUMAFabricMapReadGuard<'a>(RwLockReadGuard<'a, NUMAFabricInner>);

impl Deref for NUMAFabricMapReadGuard<'_> {
    type Target = NUMAFabricMap;

    fn deref(&self) -> &Self::Target {
        &self.0.numa_map
    }
}

/// Write lease over a [`NUMAFabricMap`].
pub struct NUMAFabricMapWriteGuard<'a>(RwLockWriteGuard<'a, NUMAFabricInner>);

impl Deref for NUMAFabricMapWriteGuard<'_> {
    type Target = NUMAFabricMap;

    fn deref(&self) -> &Self::Target {
        &self.0.numa_map
    }
}

impl std::ops::DerefMut for NUMAFabricMapWriteGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0.numa_map
    }
}

/// Thread-safe handle type most callers want: construct once from a scan
/// or config, share via `Arc`.
pub type SharedNUMAFabric = Arc<NUMAFabric>;
