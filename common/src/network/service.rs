//! Well-known service names and the TCP ports they stand for.
//!
//! Probes accept a port either as a number or as a service name. Names are
//! resolved against this fixed table instead of the host's services
//! database, so a probe behaves the same on every machine.

pub const SERVICE_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("ssh", 22),
    ("smtp", 25),
    ("http", 80),
    ("pop", 110),
    ("nntp", 119),
    ("imap", 143),
];

/// Looks up the conventional port of a service name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<u16> {
    SERVICE_PORTS
        .iter()
        .find(|(service, _)| service.eq_ignore_ascii_case(name))
        .map(|(_, port)| *port)
}

/// Turns a port token into a port number.
///
/// Numeric tokens must fit in 16 bits, anything else is treated as a
/// service name.
pub fn resolve_port(token: &str) -> Option<u16> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse::<u16>().ok();
    }
    lookup(token)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
