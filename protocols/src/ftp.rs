use crate::Validation;

/// RFC 959 ready reply. Anything other than a final `220 ` line is taken
/// as part of a longer banner.
pub fn validate(buf: &[u8]) -> Validation {
    if buf.starts_with(b"220 ") {
        Validation::Ok
    } else {
        Validation::Ignore
    }
}
