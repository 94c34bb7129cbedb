use std::fmt;

/// Network device class reported by the hardware scanner, plus the
/// `Manual` sentinel used by operator-declared fabric entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetDevClass {
    Ether,
    Infiniband,
    Loopback,
    #[default]
    Unknown,
    /// Bypass class and provider matching: the operator declared this
    /// interface usable and the selector should not second-guess it.
    Manual,
}

impl fmt::Display for NetDevClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ether => "ether",
            Self::Infiniband => "infiniband",
            Self::Loopback => "loopback",
            Self::Unknown => "unknown",
            Self::Manual => "manual",
        };
        f.write_str(s)
    }
}
