use crate::hardware::NetDevClass;

/// Request shape for [`super::NUMAFabric::get_device`] and
/// [`super::NUMAFabric::find_device`].
#[derive(Debug, Clone, Default)]
pub struct FabricIfaceParams {
    /// Exact match on `FabricInterface::name`. Used by `find_device` only.
    pub interface: Option<String>,
    /// Exact match on `domain`, with the "domain == name" fallback.
    pub domain: Option<String>,
    /// Must appear in the candidate's provider set. Required for
    /// `get_device` unless `dev_class` is `Manual`.
    pub provider: Option<String>,
    pub dev_class: NetDevClass,
    /// Preferred NUMA locality; fallback across nodes is permitted.
    pub numa_node: i32,
}

impl FabricIfaceParams {
    pub fn new(dev_class: NetDevClass, numa_node: i32) -> Self {
        Self {
            interface: None,
            domain: None,
            provider: None,
            dev_class,
            numa_node,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
