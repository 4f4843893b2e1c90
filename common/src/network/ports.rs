use std::fmt;

use crate::error::Error;

/// A port as the user wrote it.
///
/// Tokens are not validated when parsed. One that does not name a usable
/// port simply never connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortToken(String);

impl PortToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric port, if the token names one.
    pub fn number(&self) -> Option<u16> {
        self.0.parse::<u16>().ok()
    }
}

impl fmt::Display for PortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PortToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Splits a comma-separated port list (e.g. `"80,443,3306"`).
///
/// Order and duplicates are kept and ranges are not expanded. Blank entries
/// are skipped; a list without any entry left is an error.
pub fn parse_ports(input: &str) -> Result<Vec<PortToken>, Error> {
    let ports: Vec<PortToken> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(PortToken::from)
        .collect();

    if ports.is_empty() {
        return Err(Error::Parse("no ports specified".to_string()));
    }

    Ok(ports)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
