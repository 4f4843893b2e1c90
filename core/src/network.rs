//! Probe workers.
//!
//! A probe is a single connection attempt. It either proves the port open or
//! yields nothing; refused, unreachable and silent ports are not told apart.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use portcheck_common::config::Config;
use portcheck_common::network::probe::{PortState, Probe, ProbeResult, Protocol};
use tracing::debug;

pub mod tcp;
pub mod udp;

/// Performs one probe and reports an open port, or nothing.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, probe: Probe) -> Option<ProbeResult>;
}

/// Probes real sockets, one connection attempt per call.
#[derive(Debug, Clone, Copy)]
pub struct SocketProber {
    probe_timeout: Duration,
}

impl SocketProber {
    pub fn new(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.probe_timeout)
    }
}

#[async_trait]
impl Prober for SocketProber {
    async fn probe(&self, probe: Probe) -> Option<ProbeResult> {
        let Some(port) = probe.port.number() else {
            debug!("{} {}: not a usable port", probe.port, probe.protocol);
            return None;
        };
        let socket_addr: SocketAddr = SocketAddr::new(probe.addr, port);

        let outcome = match probe.protocol {
            Protocol::Tcp => tcp::handshake_probe(socket_addr, self.probe_timeout).await,
            Protocol::Udp => udp::reply_probe(socket_addr, self.probe_timeout).await,
        };

        match outcome {
            Ok(()) => {
                debug!("{socket_addr} {} answered", probe.protocol);
                Some(probe.into_result(PortState::Open))
            }
            Err(e) => {
                debug!("{socket_addr} {}: {e}", probe.protocol);
                None
            }
        }
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
