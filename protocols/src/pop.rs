use crate::Validation;

/// RFC 1939 positive greeting.
pub fn validate(buf: &[u8]) -> Validation {
    if buf.starts_with(b"+OK") {
        Validation::Ok
    } else {
        Validation::Fail
    }
}
