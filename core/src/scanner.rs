//! Per-address scan coordination.
//!
//! [`scan_address`] launches one task per (port, protocol) pair and hands
//! every open result to the caller as it arrives. Each task owns a sender of
//! the result channel, so the channel only closes once the last probe has
//! finished. That closing is the completion barrier: the function returns
//! only after every launched probe is done.
//!
//! Addresses are scanned one at a time by the caller; only the probes of a
//! single address run concurrently.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use portcheck_common::network::ports::PortToken;
use portcheck_common::network::probe::{Probe, ProbeResult, Protocol};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::network::Prober;

pub mod resolver;

/// Counters for one finished address scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Probe tasks started, always `ports * protocols`.
    pub launched: usize,
    /// Probe tasks that ran to the end.
    pub completed: usize,
    /// Open results handed to the caller.
    pub open: usize,
}

/// Probes every port of `ports` over TCP and UDP on `addr`.
///
/// `on_open` is called once per open result, in completion order. If it
/// fails, consumption stops and the error is returned; probes already
/// launched are left to finish on their own.
pub async fn scan_address<P, F>(
    addr: IpAddr,
    ports: &[PortToken],
    prober: Arc<P>,
    mut on_open: F,
) -> anyhow::Result<ScanSummary>
where
    P: Prober + ?Sized + 'static,
    F: FnMut(ProbeResult) -> anyhow::Result<()>,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<ProbeResult>();
    let completed: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut launched: usize = 0;

    for port in ports {
        for protocol in Protocol::ALL {
            let probe: Probe = Probe::new(addr, port.clone(), protocol);
            let tx = tx.clone();
            let prober = Arc::clone(&prober);
            let completed = Arc::clone(&completed);

            trace!("launching {protocol} probe for {addr} port {port}");
            tokio::spawn(async move {
                if let Some(result) = prober.probe(probe).await {
                    // The receiver is gone only if the caller bailed out.
                    let _ = tx.send(result);
                }
                completed.fetch_add(1, Ordering::AcqRel);
                drop(tx);
            });
            launched += 1;
        }
    }

    // Only the workers hold senders from here on.
    drop(tx);

    let mut open: usize = 0;
    while let Some(result) = rx.recv().await {
        open += 1;
        on_open(result)?;
    }

    let summary = ScanSummary {
        launched,
        completed: completed.load(Ordering::Acquire),
        open,
    };
    debug!(
        "{addr}: {} probes launched, {} completed, {} open",
        summary.launched, summary.completed, summary.open
    );
    Ok(summary)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
