use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;

const RECV_BUFFER_SIZE: usize = 1500;

/// Sends one empty datagram to `socket_addr` and waits for any reply.
///
/// A connected datagram socket succeeds for every port, so only an answer
/// from the peer counts. An ICMP port-unreachable shows up as
/// `ConnectionRefused`; silence ends in `TimedOut`. Neither proves the port
/// closed. A service that ignores empty datagrams never shows as open.
pub async fn reply_probe(socket_addr: SocketAddr, probe_timeout: Duration) -> io::Result<()> {
    timeout(probe_timeout, exchange(socket_addr)).await?
}

async fn exchange(socket_addr: SocketAddr) -> io::Result<()> {
    let socket: UdpSocket = UdpSocket::bind(unspecified_for(&socket_addr)).await?;
    socket.connect(socket_addr).await?;
    socket.send(&[]).await?;

    let mut buf = [0u8; RECV_BUFFER_SIZE];
    socket.recv(&mut buf).await?;
    Ok(())
}

fn unspecified_for(socket_addr: &SocketAddr) -> SocketAddr {
    match socket_addr {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
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
