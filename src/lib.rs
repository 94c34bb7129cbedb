//! A NUMA-aware fabric interface selector for a storage agent.
//!
//! The selector keeps a map from NUMA node id to the fabric interfaces
//! attached there ([`fabric::NUMAFabricMap`]), and hands out a matching
//! device on request ([`fabric::NUMAFabric::get_device`]), preferring the
//! caller's NUMA locality and falling back to other nodes in round-robin
//! order when nothing local matches.
//!
//! [`hardware`] defines the shape handed to us by the (out-of-scope)
//! hardware scanner; [`fabric`] builds a selector from that shape, or from
//! static configuration, and implements the selection algorithm itself.
//!
//! # Example
//!
//! ```rust
//! use agent_fabric::fabric::{FabricIfaceParams, NUMAFabric};
//! use agent_fabric::hardware::NetDevClass;
//!
//! let nf = NUMAFabric::new();
//! let params = FabricIfaceParams::new(NetDevClass::Ether, 0).with_provider("ofi+sockets");
//! assert!(nf.get_device(&params).is_err());
//! ```

#[cfg(not(target_os = "linux"))]
compile_error!("`agent-fabric` currently only supports Linux");

/// Shared utility functions.
mod utils;

/// Data types produced by the hardware scanner.
pub mod hardware;

/// The NUMA-aware fabric interface selector.
pub mod fabric;
