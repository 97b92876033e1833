//! Turns `net.tcp.service` parameters (`service, address?, port?`) into a
//! probe target and runs the probe.

use svcprobe_common::config::Config;
use svcprobe_common::error::ParamError;
use svcprobe_common::network::target::{Protocol, ProbeTarget};

use crate::probe;

pub const MAX_PARAMS: usize = 3;

/// Port POP3 is probed on when none is given.
pub const POP_DEFAULT_PORT: u16 = 110;

/// Validates service parameters and fills in the defaults.
///
/// * An empty address means loopback.
/// * An empty or missing port means the service's own name, resolved
///   through the well-known service table, except POP which is pinned to
///   port 110.
/// * `tcp` has no well-known port and must name one.
pub fn resolve_target(params: &[String]) -> Result<ProbeTarget, ParamError> {
    if params.len() > MAX_PARAMS {
        return Err(ParamError::TooManyParams);
    }

    let service: &str = params
        .first()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ParamError::InvalidFirstParam)?;
    let protocol: Protocol = service.parse()?;

    let address: &str = params.get(1).map(String::as_str).unwrap_or_default();
    let port: Option<&str> = params.get(2).map(String::as_str).filter(|s| !s.is_empty());

    let port: String = match (port, protocol) {
        (Some(port), _) => port.to_string(),
        (None, Protocol::Tcp) => return Err(ParamError::InvalidThirdParam),
        (None, Protocol::Pop) => POP_DEFAULT_PORT.to_string(),
        (None, protocol) => protocol.as_str().to_string(),
    };

    Ok(ProbeTarget::new(protocol, address, port))
}

/// Checks that a service is up and, where the protocol greets, that it
/// greets correctly.
pub async fn check_service(params: &[String], cfg: &Config) -> Result<bool, ParamError> {
    let target: ProbeTarget = resolve_target(params)?;
    Ok(probe::probe(&target, cfg).await)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
