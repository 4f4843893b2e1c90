//! # Scan Target Model
//!
//! Address-side types for a scan.
//!
//! A target given on the command line is either a literal address or a name
//! that still has to be resolved. Once resolved, addresses are split by
//! family so that every IPv4 address is scanned before any IPv6 address.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

/// Address family of a resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    pub fn matches(self, addr: &IpAddr) -> bool {
        Family::of(addr) == self
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Parses a literal IPv4 or IPv6 address.
///
/// Bracketed IPv6 literals such as `[::1]` are accepted as well, since that
/// is how they are usually written next to a port.
pub fn parse_literal(s: &str) -> Option<IpAddr> {
    if let Ok(addr) = s.parse::<IpAddr>() {
        return Some(addr);
    }

    s.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|inner| inner.parse::<Ipv6Addr>().ok())
        .map(IpAddr::V6)
}

/// Resolved addresses split by family, each group in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressGroups {
    pub ipv4: Vec<IpAddr>,
    pub ipv6: Vec<IpAddr>,
}

impl AddressGroups {
    /// Splits `addrs` into IPv4 and IPv6 groups.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) land in the IPv4 group
    /// in their dotted form.
    pub fn partition<I>(addrs: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        let mut groups = Self::default();
        for addr in addrs {
            let addr: IpAddr = addr.to_canonical();
            match Family::of(&addr) {
                Family::V4 => groups.ipv4.push(addr),
                Family::V6 => groups.ipv6.push(addr),
            }
        }
        groups
    }

    pub fn group(&self, family: Family) -> &[IpAddr] {
        match family {
            Family::V4 => &self.ipv4,
            Family::V6 => &self.ipv6,
        }
    }

    /// Non-empty groups in scan order: IPv4 first, then IPv6.
    pub fn in_scan_order(&self) -> impl Iterator<Item = (Family, &[IpAddr])> {
        [Family::V4, Family::V6]
            .into_iter()
            .map(|family| (family, self.group(family)))
            .filter(|(_, addrs)| !addrs.is_empty())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
