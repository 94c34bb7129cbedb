use thiserror::Error;

use crate::hardware::NetDevClass;

/// Errors surfaced by [`super::NUMAFabric`] operations.
///
/// The original design also distinguishes a "nil receiver" / "nil params"
/// class of error, guarding against null-pointer calls in a language that
/// allows them. Rust's ownership model makes those states unrepresentable
/// (`get_device` takes `&self` and `&FabricIfaceParams`, never an
/// `Option`), so that error class has no counterpart here; see DESIGN.md.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FabricError {
    /// `get_device` was called with an empty provider on a non-`Manual`
    /// device class.
    #[error("provider is required")]
    ProviderRequired,

    /// `get_device` exhausted every NUMA node without a match.
    #[error("no suitable fabric interface found for device class {0}")]
    NotFound(NetDevClass),

    /// `find`/`find_device` found no interface with the requested name.
    #[error("fabric interface {0:?} not found")]
    InterfaceNotFound(String),

    /// `find_device` found interfaces by name, but none on the requested
    /// domain.
    #[error("interface doesn't have requested domain")]
    DomainMismatch,

    /// `find_device` found interfaces by name and domain, but none
    /// supporting the requested provider.
    #[error("interface doesn't support provider")]
    ProviderMismatch,

    /// The guarding `RwLock` was poisoned by a panicking holder. Rust's
    /// analogue of the original's "uninitialized map" guard, which cannot
    /// occur here since `NUMAFabricMap` is always initialized at
    /// construction.
    #[error("fabric lock poisoned by a panicked holder")]
    Poisoned,
}

/// Internal error from the address validator. Demoted to "skip this
/// candidate" inside `get_device`; never escapes it directly.
#[derive(Debug, Error)]
pub enum AddrValidationError {
    #[error("no usable IP addresses for interface")]
    NoAddresses,
    #[error("address lookup failed: {0}")]
    Lookup(#[from] std::io::Error),
}
