use std::io::Write;
use std::net::IpAddr;
use std::sync::Arc;

use portcheck_common::error::Error;
use portcheck_common::network::ports::{self, PortToken};
use portcheck_common::network::target::AddressGroups;
use portcheck_core::network::Prober;
use portcheck_core::scanner::{self, resolver, resolver::HostLookup};
use tracing::debug;

use crate::commands::ScanRequest;
use crate::terminal::print::Report;

/// Resolves the requested target and scans every address it maps to.
///
/// IPv4 addresses go first, then IPv6, one address at a time. Open ports
/// are written to `out` while the scan of their address is still running.
pub async fn scan<L, P, W>(
    request: &ScanRequest,
    lookup: &L,
    prober: Arc<P>,
    out: W,
) -> anyhow::Result<()>
where
    L: HostLookup + ?Sized,
    P: Prober + ?Sized + 'static,
    W: Write,
{
    let mut report: Report<W> = Report::new(out);
    report.request(&request.target, &request.ports)?;

    let addrs: Vec<IpAddr> = resolver::resolve_target(&request.target, lookup)
        .await
        .map_err(Error::from)?;
    let groups: AddressGroups = AddressGroups::partition(addrs);
    let ports: Vec<PortToken> = ports::parse_ports(&request.ports)?;

    for (family, addrs) in groups.in_scan_order() {
        report.section(family)?;
        for addr in addrs {
            report.scanning(addr)?;
            let summary = scanner::scan_address(*addr, &ports, Arc::clone(&prober), |result| {
                Ok(report.open(&result)?)
            })
            .await?;
            report.address_done()?;
            debug!("{addr}: {} of {} probes found open", summary.open, summary.launched);
        }
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use portcheck_common::error::ResolutionError;
    use portcheck_common::network::probe::{PortState, Probe, ProbeResult, Protocol};
    use portcheck_common::network::target::Family;
    use std::io;
    use std::sync::Mutex;

    /// Answers every family with a fixed list, or fails every lookup.
    struct FixedLookup(Option<Vec<&'static str>>);

    #[async_trait]
    impl HostLookup for FixedLookup {
        async fn lookup(&self, _host: &str, family: Family) -> io::Result<Vec<IpAddr>> {
            match &self.0 {
                Some(addrs) => Ok(addrs
                    .iter()
                    .map(|a| a.parse::<IpAddr>().unwrap())
                    .filter(|a| family.matches(a))
                    .collect()),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "no such host")),
            }
        }
    }

    /// TCP on port 80 is open everywhere; remembers which addresses it saw.
    #[derive(Default)]
    struct WebOnlyProber {
        addrs: Mutex<Vec<IpAddr>>,
    }

    #[async_trait]
    impl Prober for WebOnlyProber {
        async fn probe(&self, probe: Probe) -> Option<ProbeResult> {
            self.addrs.lock().unwrap().push(probe.addr);
            let open = probe.protocol == Protocol::Tcp && probe.port.as_str() == "80";
            open.then(|| probe.into_result(PortState::Open))
        }
    }

    fn request(target: &str, ports: &str) -> ScanRequest {
        ScanRequest {
            target: target.to_string(),
            ports: ports.to_string(),
            verbose: 0,
        }
    }

    async fn run(
        req: &ScanRequest,
        lookup: &FixedLookup,
        prober: Arc<WebOnlyProber>,
    ) -> (anyhow::Result<()>, String) {
        colored::control::set_override(false);
        let mut out: Vec<u8> = Vec::new();
        let result = scan(req, lookup, prober, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn ipv4_only_domain_prints_no_ipv6_section() {
        let lookup = FixedLookup(Some(vec!["192.0.2.10", "192.0.2.11"]));
        let prober = Arc::new(WebOnlyProber::default());

        let (result, text) = run(&request("v4.test", "80,443"), &lookup, prober.clone()).await;

        result.unwrap();
        assert!(text.contains("STARTING SCANS FOR IPV4"));
        assert!(!text.contains("IPV6"));
        assert!(text.contains("Scanning target: 192.0.2.10\n80    TCP        Open\n\n"));
        assert!(text.contains("Scanning target: 192.0.2.11\n80    TCP        Open\n\n"));
        assert_eq!(prober.addrs.lock().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn ipv4_addresses_are_scanned_before_ipv6() {
        let lookup = FixedLookup(Some(vec!["2001:db8::1", "192.0.2.10"]));
        let prober = Arc::new(WebOnlyProber::default());

        let (result, text) = run(&request("dual.test", "80"), &lookup, prober.clone()).await;

        result.unwrap();
        let v4_section = text.find("IPV4").unwrap();
        let v6_section = text.find("IPV6").unwrap();
        assert!(v4_section < v6_section);
        assert!(text.find("192.0.2.10").unwrap() < v6_section);
        assert!(text.find("2001:db8::1").unwrap() > v6_section);

        // Sequential per address: every probe of the IPv4 address first.
        let seen = prober.addrs.lock().unwrap();
        assert!(seen[..2].iter().all(|a| a.is_ipv4()));
        assert!(seen[2..].iter().all(|a| a.is_ipv6()));
    }

    #[tokio::test]
    async fn literal_target_skips_lookup() {
        let lookup = FixedLookup(None);
        let prober = Arc::new(WebOnlyProber::default());

        let (result, text) = run(&request("127.0.0.1", "80"), &lookup, prober).await;

        result.unwrap();
        assert!(text.starts_with("Target: 127.0.0.1\nPorts: 80\n"));
        assert!(text.contains("80    TCP        Open"));
    }

    #[tokio::test]
    async fn unresolvable_target_is_a_resolution_error() {
        let lookup = FixedLookup(None);
        let prober = Arc::new(WebOnlyProber::default());

        let (result, text) = run(&request("nowhere.test", "80"), &lookup, prober.clone()).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Resolution(ResolutionError::Lookup { .. }))
        ));
        assert!(!text.contains("STARTING SCANS"));
        assert!(prober.addrs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_port_list_is_a_parse_error() {
        let lookup = FixedLookup(None);
        let prober = Arc::new(WebOnlyProber::default());

        let (result, _) = run(&request("127.0.0.1", ",,"), &lookup, prober).await;

        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Parse(_))));
    }
}
