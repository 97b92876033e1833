//! Greeting validators for text protocols that announce themselves on
//! connect.
//!
//! Every validator inspects the leading bytes of the probe's read buffer and
//! classifies them as a [`Validation`]. SSH is the exception that also talks
//! back: a real SSH server expects the client's version line right after its
//! own, so the SSH validator answers as part of the classification.

pub mod ftp;
pub mod imap;
pub mod nntp;
pub mod pop;
pub mod smtp;
pub mod ssh;

use svcprobe_common::network::target::Protocol;
use tokio::io::AsyncWrite;

/// Size of the buffer each greeting read lands in.
pub const GREETING_BUFFER_SIZE: usize = 2048;

/// Verdict on one received chunk of greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Greeting accepted, the probe succeeds.
    Ok,
    /// A continuation line of a multi-line greeting, keep reading.
    Ignore,
    /// Not the greeting the protocol mandates, the probe fails.
    Fail,
}

/// Message that ends the session once a greeting was accepted.
pub fn goodbye(protocol: Protocol) -> Option<&'static [u8]> {
    match protocol {
        Protocol::Smtp | Protocol::Ftp | Protocol::Pop | Protocol::Nntp => Some(b"QUIT\r\n"),
        Protocol::Imap => Some(b"a1 LOGOUT\r\n"),
        Protocol::Ssh | Protocol::Tcp | Protocol::Http => None,
    }
}

/// Routes a greeting to the validator of `protocol`.
///
/// Returns `None` for connect-only protocols, which have no greeting.
pub async fn validate<W>(
    protocol: Protocol,
    buf: &[u8],
    conn: &mut W,
    agent_name: &str,
) -> Option<Validation>
where
    W: AsyncWrite + Unpin,
{
    let outcome = match protocol {
        Protocol::Ssh => ssh::validate(buf, conn, agent_name).await,
        Protocol::Smtp => smtp::validate(buf),
        Protocol::Ftp => ftp::validate(buf),
        Protocol::Pop => pop::validate(buf),
        Protocol::Nntp => nntp::validate(buf),
        Protocol::Imap => imap::validate(buf),
        Protocol::Tcp | Protocol::Http => return None,
    };
    Some(outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
