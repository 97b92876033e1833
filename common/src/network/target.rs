//! # Probe Target Model
//!
//! A probe target names the application protocol to expect, the host to
//! dial and the port token to dial it on.

use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;
use crate::network::service;

/// Host used whenever a caller leaves the address empty.
pub const LOOPBACK: &str = "127.0.0.1";

/// Protocols understood by the service probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain connectivity, no data exchanged.
    Tcp,
    /// Connectivity only; the HTTP conversation is never started.
    Http,
    Ssh,
    Smtp,
    Ftp,
    Pop,
    Nntp,
    Imap,
}

impl Protocol {
    pub const ALL: [Protocol; 8] = [
        Protocol::Tcp,
        Protocol::Http,
        Protocol::Ssh,
        Protocol::Smtp,
        Protocol::Ftp,
        Protocol::Pop,
        Protocol::Nntp,
        Protocol::Imap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Http => "http",
            Protocol::Ssh => "ssh",
            Protocol::Smtp => "smtp",
            Protocol::Ftp => "ftp",
            Protocol::Pop => "pop",
            Protocol::Nntp => "nntp",
            Protocol::Imap => "imap",
        }
    }

    /// Whether a successful connect alone answers the probe.
    pub fn is_connect_only(&self) -> bool {
        matches!(self, Protocol::Tcp | Protocol::Http)
    }
}

impl FromStr for Protocol {
    type Err = ParamError;

    /// Parses the lowercase protocol tag used in metric parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::ALL
            .into_iter()
            .find(|protocol| protocol.as_str() == s)
            .ok_or(ParamError::InvalidFirstParam)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One probe's worth of resolved parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub protocol: Protocol,
    /// IPv4/IPv6 literal or hostname. Never empty.
    pub host: String,
    /// Numeric port or service name, resolved when the probe dials.
    pub port: String,
}

impl ProbeTarget {
    pub fn new(protocol: Protocol, host: &str, port: impl Into<String>) -> Self {
        let host = if host.is_empty() { LOOPBACK } else { host };
        Self {
            protocol,
            host: host.to_string(),
            port: port.into(),
        }
    }

    /// The port number the probe dials, if the token resolves.
    pub fn resolve_port(&self) -> Option<u16> {
        service::resolve_port(&self.port)
    }
}

impl fmt::Display for ProbeTarget {
    /// Formats as `host:port`, bracketing IPv6 literals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
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
