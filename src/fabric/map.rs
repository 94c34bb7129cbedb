use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use super::FabricInterface;

/// Mapping from NUMA node id to the ordered sequence of interfaces
/// attached to it. Ordering within a node is insertion order from
/// construction; round-robin selection relies on it.
///
/// Wraps a [`HashMap`] the way [`crate::utils::select`] wraps primitives:
/// a thin newtype that derefs to the underlying container but carries its
/// own inherent methods (here, [`NUMAFabricMap::max_numa_node`]).
#[derive(Debug, Clone, Default)]
pub struct NUMAFabricMap(HashMap<i32, Vec<FabricInterface>>);

impl NUMAFabricMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Highest node id present, or `-1` if the map is empty.
    pub fn max_numa_node(&self) -> i32 {
        self.0.keys().copied().max().unwrap_or(-1)
    }
}

impl Deref for NUMAFabricMap {
    type Target = HashMap<i32, Vec<FabricInterface>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NUMAFabricMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
