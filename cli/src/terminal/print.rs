use std::io::{self, Write};
use std::net::IpAddr;
use std::time::Duration;

use colored::*;
use portcheck_common::error::Error;
use portcheck_common::network::probe::ProbeResult;
use portcheck_common::network::target::Family;
use unicode_width::UnicodeWidthStr;

use crate::commands;
use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Writes the scan report: echo of the request, one section per address
/// family, one block per address.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn request(&mut self, target: &str, ports: &str) -> io::Result<()> {
        writeln!(self.out, "Target: {target}")?;
        writeln!(self.out, "Ports: {ports}")?;
        self.out.flush()
    }

    pub fn section(&mut self, family: Family) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", header(&format!("starting scans for {family}")))?;
        self.out.flush()
    }

    pub fn scanning(&mut self, addr: &IpAddr) -> io::Result<()> {
        let color: Color = match Family::of(addr) {
            Family::V4 => colors::IPV4_ADDR,
            Family::V6 => colors::IPV6_ADDR,
        };
        writeln!(self.out, "Scanning target: {}", addr.to_string().color(color))?;
        self.out.flush()
    }

    /// One line per open port, written as soon as it is known.
    pub fn open(&mut self, result: &ProbeResult) -> io::Result<()> {
        writeln!(self.out, "{result}")?;
        self.out.flush()
    }

    pub fn address_done(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// A centered `──⟦ MESSAGE ⟧──` line spanning [`TOTAL_WIDTH`] columns.
pub fn header(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.color(colors::ACCENT),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn usage<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", commands::usage_text())?;
    out.flush()
}

/// Reports why the run stopped.
pub fn failure<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    let label: ColoredString = "Error".color(colors::ERROR).bold();
    match err.downcast_ref::<Error>() {
        Some(Error::Usage(msg)) => {
            writeln!(out, "{label}: {msg}")?;
            usage(out)?;
        }
        Some(Error::Resolution(e)) => writeln!(out, "{label} resolving target: {e}")?,
        Some(Error::Parse(msg)) => writeln!(out, "{label} parsing ports: {msg}")?,
        None => writeln!(out, "{label}: {err:#}")?,
    }
    out.flush()
}

pub fn elapsed<W: Write>(out: &mut W, total_time: Duration) -> io::Result<()> {
    writeln!(out, "Elapsed time: {:.3} seconds.", total_time.as_secs_f64())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
