//! Scanning engine for `portcheck`.
//!
//! * [`network`]: single TCP and UDP probes behind the [`network::Prober`] trait.
//! * [`scanner`]: fans probes out over every port and protocol of one address
//!   and collects what comes back open.
//! * [`scanner::resolver`]: turns a target string into addresses.

pub mod network;
pub mod scanner;
