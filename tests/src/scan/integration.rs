#![cfg(test)]
use std::sync::Arc;
use std::time::{Duration, Instant};

use portcheck_common::config::Config;
use portcheck_common::network::ports::{self, PortToken};
use portcheck_common::network::probe::{PortState, Probe, ProbeResult, Protocol};
use portcheck_core::network::{Prober, SocketProber};
use portcheck_core::scanner::{self, resolver, resolver::SystemLookup};

use crate::utils::{LOCALHOST, closed_tcp_port, tcp_listener, udp_echo};

fn test_config() -> Config {
    Config {
        probe_timeout: Duration::from_millis(500),
        verbose: 0,
    }
}

async fn collect(ports: &[PortToken], cfg: &Config) -> (scanner::ScanSummary, Vec<ProbeResult>) {
    let prober = Arc::new(SocketProber::from_config(cfg));
    let mut results: Vec<ProbeResult> = Vec::new();
    let summary = scanner::scan_address(LOCALHOST, ports, prober, |result| {
        results.push(result);
        Ok(())
    })
    .await
    .unwrap();
    (summary, results)
}

/// A listener on TCP port X shows up as exactly one (X, TCP) result.
#[tokio::test]
async fn tcp_listener_is_reported_open() {
    let (_listener, port) = tcp_listener().await;
    let ports = ports::parse_ports(&port.to_string()).unwrap();

    let (summary, results) = collect(&ports, &test_config()).await;

    assert_eq!(summary.launched, 2);
    assert_eq!(summary.completed, 2);
    assert_eq!(results.len(), 1, "{results:?}");
    assert_eq!(results[0].protocol, Protocol::Tcp);
    assert_eq!(results[0].state, PortState::Open);
    assert_eq!(results[0].port.number(), Some(port));
}

#[tokio::test]
async fn closed_tcp_port_yields_nothing_within_timeout() {
    let port: u16 = closed_tcp_port().await;
    let cfg = test_config();
    let prober = SocketProber::from_config(&cfg);

    let started = Instant::now();
    let probe = Probe::new(LOCALHOST, PortToken::new(port.to_string()), Protocol::Tcp);
    let result = prober.probe(probe).await;

    assert!(result.is_none());
    assert!(started.elapsed() <= cfg.probe_timeout + Duration::from_millis(250));
}

#[tokio::test]
async fn answering_udp_service_is_reported_open() {
    let addr = udp_echo().await;
    let ports = vec![PortToken::new(addr.port().to_string())];

    let (_, results) = collect(&ports, &test_config()).await;

    assert_eq!(results.len(), 1, "{results:?}");
    assert_eq!(results[0].protocol, Protocol::Udp);
}

#[tokio::test]
async fn mixed_ports_report_only_open_ones() {
    let (_web, open_port) = tcp_listener().await;
    let closed_port: u16 = closed_tcp_port().await;
    let list = format!("{open_port},{closed_port},not-a-port,{open_port}");
    let ports = ports::parse_ports(&list).unwrap();

    let (summary, results) = collect(&ports, &test_config()).await;

    assert_eq!(summary.launched, 8);
    assert_eq!(summary.completed, 8);
    assert_eq!(summary.open, 2);
    assert!(results.iter().all(|r| r.port.number() == Some(open_port)));
    assert!(results.iter().all(|r| r.protocol == Protocol::Tcp));
}

#[tokio::test]
async fn localhost_name_resolves_and_scans() {
    let (_listener, port) = tcp_listener().await;
    let addrs = resolver::resolve_target("localhost", &SystemLookup).await.unwrap();
    assert!(addrs.contains(&LOCALHOST));

    let ports = vec![PortToken::new(port.to_string())];
    let (_, results) = collect(&ports, &test_config()).await;
    assert_eq!(results.len(), 1);
}
