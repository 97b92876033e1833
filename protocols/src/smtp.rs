use crate::Validation;

const READY: &[u8] = b"220";

/// RFC 5321 service ready reply. `220-` opens a multi-line greeting, the
/// last line is `220 ` (or a bare `220`).
pub fn validate(buf: &[u8]) -> Validation {
    if !buf.starts_with(READY) {
        return Validation::Fail;
    }

    match buf.get(READY.len()).copied() {
        Some(b'-') => Validation::Ignore,
        None | Some(0) | Some(b' ') => Validation::Ok,
        Some(_) => Validation::Fail,
    }
}
