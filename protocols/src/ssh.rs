//! SSH identification exchange (RFC 4253, section 4.2).
//!
//! Both sides send `SSH-protoversion-softwareversion` on connect. The probe
//! accepts any `SSH-<major>.<minor>` line and answers with its own
//! identification in the same protocol version, so the server sees a
//! well-formed client before the connection drops.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::Validation;

const PREFIX: &[u8] = b"SSH-";
const REJECT_LINE: &[u8] = b"0\n";

/// Reads `SSH-<major>.<minor>` from the start of the buffer.
pub fn parse_version(buf: &[u8]) -> Option<(u32, u32)> {
    let rest = buf.strip_prefix(PREFIX)?;
    let (major, rest) = parse_number(rest)?;
    let rest = rest.strip_prefix(b".")?;
    let (minor, _) = parse_number(rest)?;
    Some((major, minor))
}

fn parse_number(buf: &[u8]) -> Option<(u32, &[u8])> {
    let digits: usize = buf.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let number = std::str::from_utf8(&buf[..digits]).ok()?.parse::<u32>().ok()?;
    Some((number, &buf[digits..]))
}

/// Classifies an SSH banner and answers it on `conn`.
///
/// The reply is written exactly once per call, whatever the verdict. A
/// failed write is logged and does not change the verdict.
pub async fn validate<W>(buf: &[u8], conn: &mut W, agent_name: &str) -> Validation
where
    W: AsyncWrite + Unpin,
{
    let (reply, outcome): (Vec<u8>, Validation) = match parse_version(buf) {
        Some((major, minor)) => (
            format!("SSH-{major}.{minor}-{agent_name}\r\n").into_bytes(),
            Validation::Ok,
        ),
        None => (REJECT_LINE.to_vec(), Validation::Fail),
    };

    if let Err(e) = conn.write_all(&reply).await {
        debug!("SSH check error: cannot send identification: {e}");
    }

    outcome
}
