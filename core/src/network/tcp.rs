use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Completes a TCP handshake with `socket_addr` and closes it right away.
///
/// Nothing is written or read. A refused, unreachable or timed out
/// handshake is returned as the error.
pub async fn handshake_probe(socket_addr: SocketAddr, probe_timeout: Duration) -> io::Result<()> {
    let stream: TcpStream = timeout(probe_timeout, TcpStream::connect(socket_addr)).await??;
    drop(stream);
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
