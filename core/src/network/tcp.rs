use std::io;

use svcprobe_common::error::ParamError;
use svcprobe_common::network::target::{LOOPBACK, ProbeTarget};
use tokio::net::TcpStream;
use tracing::debug;

/// Dials the probe target with the operating system's connect timeout.
pub async fn connect(target: &ProbeTarget) -> io::Result<TcpStream> {
    let port: u16 = target.resolve_port().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unknown port {:?}", target.port),
        )
    })?;

    TcpStream::connect((target.host.as_str(), port)).await
}

/// Checks whether `address:port` accepts TCP connections.
///
/// `port` must be a plain decimal number that fits in 16 bits. A refused or
/// unreachable port is `Ok(false)`, only a malformed port is an error.
pub async fn port_open(address: &str, port: &str) -> Result<bool, ParamError> {
    let port: u16 = parse_port(port).ok_or(ParamError::InvalidSecondParam)?;
    let host: &str = if address.is_empty() { LOOPBACK } else { address };

    match TcpStream::connect((host, port)).await {
        Ok(_stream) => Ok(true),
        Err(e) => {
            debug!("TCP port check: cannot connect to [{host}]:{port}: {e}");
            Ok(false)
        }
    }
}

fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
