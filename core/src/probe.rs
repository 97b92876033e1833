//! # Service Probe
//!
//! Connects to a service and, for protocols that greet first, reads until
//! the greeting validator reaches a verdict.
//!
//! All reads of one probe share a single deadline, fixed when reading
//! starts. A multi-line banner therefore has to arrive in full within the
//! configured timeout; slow continuation lines do not buy extra time.

use svcprobe_common::config::Config;
use svcprobe_common::network::target::{Protocol, ProbeTarget};
use svcprobe_protocols::{self as protocols, GREETING_BUFFER_SIZE, Validation};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, timeout_at};
use tracing::{debug, trace};

use crate::network::tcp;

/// Probes `target` and reports whether the service is up.
///
/// Connection failures, read errors, timeouts and unexpected greetings all
/// come back as `false`. The connection is closed before returning.
pub async fn probe(target: &ProbeTarget, cfg: &Config) -> bool {
    let mut stream = match tcp::connect(target).await {
        Ok(stream) => stream,
        Err(e) => {
            debug!("TCP expect network error: cannot connect to [{target}]: {e}");
            return false;
        }
    };

    if target.protocol.is_connect_only() {
        return true;
    }

    let deadline: Instant = Instant::now() + cfg.timeout;
    let up = expect_greeting(&mut stream, target.protocol, deadline, &cfg.agent_name).await;
    if !up {
        debug!("TCP expect: no valid {} greeting from [{target}]", target.protocol);
    }
    up
}

/// Runs the read/validate cycle on an open connection.
///
/// Every read is bounded by `deadline`. An end of stream before the
/// greeting is accepted counts as a read error.
pub async fn expect_greeting<S>(
    stream: &mut S,
    protocol: Protocol,
    deadline: Instant,
    agent_name: &str,
) -> bool
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut buf = [0u8; GREETING_BUFFER_SIZE];

    loop {
        buf.fill(0);

        let received: usize = match timeout_at(deadline, stream.read(&mut buf)).await {
            Ok(Ok(0)) => {
                debug!("TCP expect network error: connection closed by peer");
                return false;
            }
            Ok(Ok(n)) => n,
            Ok(Err(e)) => {
                debug!("TCP expect network error: cannot read: {e}");
                return false;
            }
            Err(_elapsed) => {
                debug!("TCP expect network error: read deadline exceeded");
                return false;
            }
        };
        trace!(%protocol, received, "greeting: {:?}", String::from_utf8_lossy(&buf[..received]));

        let Some(outcome) = protocols::validate(protocol, &buf, stream, agent_name).await else {
            // connect-only protocols carry no greeting
            return true;
        };

        match outcome {
            Validation::Ok => {
                if let Some(goodbye) = protocols::goodbye(protocol) {
                    if let Err(e) = stream.write_all(goodbye).await {
                        debug!("TCP expect: cannot send goodbye: {e}");
                    }
                }
                return true;
            }
            Validation::Ignore => continue,
            Validation::Fail => {
                debug!(
                    "TCP expect content error, received [{}]",
                    String::from_utf8_lossy(&buf[..received])
                );
                return false;
            }
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
