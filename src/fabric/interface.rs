use std::sync::Arc;

use crate::hardware;
use crate::hardware::NetDevClass;

/// A single selectable (net-interface, provider) endpoint.
///
/// `hw` is a shared, read-only back-reference to the hardware record this
/// interface was expanded from; it is `None` for manually configured
/// entries. Equality and hashing in this crate only ever look at `name`,
/// `domain` and `net_dev_class` — the back-reference is an implementation
/// detail, not part of a device's identity.
#[derive(Debug, Clone)]
pub struct FabricInterface {
    pub name: String,
    pub domain: String,
    pub net_dev_class: NetDevClass,
    pub(crate) hw: Option<Arc<hardware::FabricInterface>>,
}

impl FabricInterface {
    /// Build a manually-configured entry. Bypasses class/provider matching.
    pub fn manual(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            net_dev_class: NetDevClass::Manual,
            hw: None,
        }
    }

    pub(crate) fn from_hardware(
        name: impl Into<String>,
        domain: impl Into<String>,
        net_dev_class: NetDevClass,
        hw: Arc<hardware::FabricInterface>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            net_dev_class,
            hw: Some(hw),
        }
    }

    /// Domain used for matching purposes: an entry with no distinct domain
    /// (the zero-value / not-yet-normalized case) matches on its own name.
    pub(crate) fn effective_domain(&self) -> &str {
        if self.domain.is_empty() {
            &self.name
        } else {
            &self.domain
        }
    }

    pub(crate) fn supports_provider(&self, provider: &str) -> bool {
        match &self.hw {
            Some(hw) => hw.providers.contains(provider),
            None => false,
        }
    }
}

impl PartialEq for FabricInterface {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.domain == other.domain
            && self.net_dev_class == other.net_dev_class
    }
}

impl Eq for FabricInterface {}
