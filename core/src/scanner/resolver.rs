use std::io;
use std::net::IpAddr;

use async_trait::async_trait;
use portcheck_common::error::ResolutionError;
use portcheck_common::network::target::{self, Family};
use tokio::net::lookup_host;
use tracing::debug;

/// Forward lookup of a host name restricted to one address family.
#[async_trait]
pub trait HostLookup: Send + Sync {
    async fn lookup(&self, host: &str, family: Family) -> io::Result<Vec<IpAddr>>;
}

/// Lookup through the operating system resolver.
///
/// The system resolver cannot be restricted to one family, so each call
/// runs the same unrestricted query and keeps the addresses of the asked
/// family. A name is therefore resolved twice, and both calls fail or
/// succeed together; partial success only comes from other lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

#[async_trait]
impl HostLookup for SystemLookup {
    async fn lookup(&self, host: &str, family: Family) -> io::Result<Vec<IpAddr>> {
        let mut found: Vec<IpAddr> = Vec::new();
        for socket_addr in lookup_host((host, 0)).await? {
            let ip: IpAddr = socket_addr.ip();
            if family.matches(&ip) && !found.contains(&ip) {
                found.push(ip);
            }
        }
        Ok(found)
    }
}

/// Resolves `target` into the addresses to scan, IPv4 first.
///
/// A literal address is returned as is without touching the resolver.
/// Otherwise IPv4 and IPv6 are looked up independently; one family failing
/// is fine as long as the other one produced addresses.
pub async fn resolve_target<L>(target: &str, lookup: &L) -> Result<Vec<IpAddr>, ResolutionError>
where
    L: HostLookup + ?Sized,
{
    if let Some(addr) = target::parse_literal(target) {
        return Ok(vec![addr]);
    }

    let (ipv4, ipv6) = tokio::join!(
        lookup.lookup(target, Family::V4),
        lookup.lookup(target, Family::V6)
    );

    let addrs: Vec<IpAddr> = match (ipv4, ipv6) {
        (Err(source), Err(_)) => {
            return Err(ResolutionError::Lookup {
                target: target.to_string(),
                source,
            });
        }
        (Ok(v4), Ok(v6)) => v4.into_iter().chain(v6).collect(),
        (Ok(found), Err(e)) | (Err(e), Ok(found)) => {
            debug!("partial resolution of {target}: {e}");
            found
        }
    };

    if addrs.is_empty() {
        return Err(ResolutionError::NoAddresses {
            target: target.to_string(),
        });
    }

    debug!("{target} resolved to {} address(es)", addrs.len());
    Ok(addrs)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
