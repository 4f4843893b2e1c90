use std::fmt;
use std::net::IpAddr;

use super::ports::PortToken;

/// Transport used by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// Every protocol a port is probed over, in launch order.
    pub const ALL: [Protocol; 2] = [Protocol::Tcp, Protocol::Udp];
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => f.pad("TCP"),
            Protocol::Udp => f.pad("UDP"),
        }
    }
}

/// Observed state of a probed port.
///
/// Only successes are ever observed; refused, unreachable and silent ports
/// all look the same from here and produce no result at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    Open,
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortState::Open => f.pad("Open"),
        }
    }
}

/// A single (address, port, protocol) combination to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub addr: IpAddr,
    pub port: PortToken,
    pub protocol: Protocol,
}

impl Probe {
    pub fn new(addr: IpAddr, port: PortToken, protocol: Protocol) -> Self {
        Self {
            addr,
            port,
            protocol,
        }
    }

    /// Turns this probe into its result with the given state.
    pub fn into_result(self, state: PortState) -> ProbeResult {
        ProbeResult {
            port: self.port,
            protocol: self.protocol,
            state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub port: PortToken,
    pub protocol: Protocol,
    pub state: PortState,
}

impl fmt::Display for ProbeResult {
    /// Fixed-width line, e.g. `443   TCP        Open`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {:<10} {}", self.port, self.protocol, self.state)
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
