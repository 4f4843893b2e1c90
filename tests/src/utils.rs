use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::{TcpListener, UdpSocket};

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// A TCP listener on an ephemeral loopback port. Connections complete in
/// the backlog without ever being accepted.
pub async fn tcp_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback TCP port that was just released and has nothing listening.
pub async fn closed_tcp_port() -> u16 {
    let (listener, port) = tcp_listener().await;
    drop(listener);
    port
}

/// A UDP socket that echoes every datagram back to its sender.
pub async fn udp_echo() -> SocketAddr {
    let socket = UdpSocket::bind((LOCALHOST, 0)).await.unwrap();
    let addr: SocketAddr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 1500];
        while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
            let _ = socket.send_to(&buf[..len], peer).await;
        }
    });

    addr
}
