//! Scans against real sockets bound on the loopback interface.

#[cfg(test)]
mod scan;
#[cfg(test)]
mod utils;
