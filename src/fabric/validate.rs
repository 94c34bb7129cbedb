//! Liveness validation: does an interface name resolve to at least one
//! usable, non-zero IP address?

use std::io;
use std::net::IpAddr;

use super::error::AddrValidationError;

/// A source of addresses for one network interface. Modeled as a
/// single-method trait so tests can inject deterministic behavior, the
/// way [`crate::fabric::NUMAFabric`]'s `get_addr_interface` field is
/// itself an injectable function.
pub trait AddrSource: Send + Sync {
    fn addrs(&self) -> io::Result<Vec<IpAddr>>;
}

pub(crate) struct OsAddrSource {
    name: String,
}

impl AddrSource for OsAddrSource {
    fn addrs(&self) -> io::Result<Vec<IpAddr>> {
        let all = local_ip_address::list_afinet_netifas()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(all
            .into_iter()
            .filter(|(name, _)| name == &self.name)
            .map(|(_, addr)| addr)
            .collect())
    }
}

/// Default, OS-backed address lookup: enumerate the host's network
/// interfaces and keep whichever addresses belong to `name`.
pub(crate) fn default_get_addr_interface(name: &str) -> io::Result<Box<dyn AddrSource>> {
    Ok(Box::new(OsAddrSource {
        name: name.to_owned(),
    }))
}

/// Accept iff at least one address is an IP address that is neither empty
/// nor the unspecified address (`0.0.0.0` or `::`).
pub(crate) fn validate_addrs(addrs: &[IpAddr]) -> Result<(), AddrValidationError> {
    if addrs.iter().any(|addr| !addr.is_unspecified()) {
        Ok(())
    } else {
        Err(AddrValidationError::NoAddresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAddrSource {
        addrs: Vec<IpAddr>,
        err: Option<io::ErrorKind>,
    }

    impl AddrSource for MockAddrSource {
        fn addrs(&self) -> io::Result<Vec<IpAddr>> {
            match self.err {
                Some(kind) => Err(io::Error::new(kind, "mock Addrs()")),
                None => Ok(self.addrs.clone()),
            }
        }
    }

    #[test]
    fn interface_addrs_fails() {
        let src = MockAddrSource {
            addrs: vec![],
            err: Some(io::ErrorKind::Other),
        };
        assert!(src.addrs().is_err());
    }

    #[test]
    fn empty_addrs_has_no_ip() {
        assert!(matches!(
            validate_addrs(&[]),
            Err(AddrValidationError::NoAddresses)
        ));
    }

    #[test]
    fn unspecified_addr_has_no_usable_ip() {
        let addrs = vec![IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)];
        assert!(matches!(
            validate_addrs(&addrs),
            Err(AddrValidationError::NoAddresses)
        ));
    }

    #[test]
    fn real_addr_is_usable() {
        let addrs = vec![IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))];
        assert!(validate_addrs(&addrs).is_ok());
    }
}
