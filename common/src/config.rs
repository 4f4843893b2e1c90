use std::time::Duration;

/// Upper bound for a single connection attempt.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// How long a probe may wait for a connection to be established.
    ///
    /// A probe that has not succeeded by then produces no result.
    pub probe_timeout: Duration,
    /// Diagnostic verbosity, counted from repeated `-v` flags.
    pub verbose: u8,
}

impl Config {
    /// Configuration for a command line run; the probe timeout is fixed.
    pub fn from_verbosity(verbose: u8) -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            verbose,
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
