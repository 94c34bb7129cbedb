//! Data types produced by the hardware scanner.
//!
//! The scanner itself (topology discovery, sysfs/netlink probing) lives
//! outside this crate; this module only defines the shapes it hands us so
//! the fabric selector has something concrete to consume in tests and at
//! runtime.

mod devclass;
mod interface;
mod provider;

pub use devclass::NetDevClass;
pub use interface::{FabricInterface, FabricInterfaceSet};
pub use provider::{FabricProvider, FabricProviderSet};
