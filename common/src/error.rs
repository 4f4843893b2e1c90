use std::io;

use thiserror::Error;

/// Ways a run can fail before or while scanning.
///
/// Failed probes are not represented here; a port that does not answer
/// simply produces no result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("{0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("could not resolve domain {target}: {source}")]
    Lookup {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("no IP addresses found for domain {target}")]
    NoAddresses { target: String },
}
