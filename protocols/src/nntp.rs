use crate::Validation;

/// RFC 3977 greeting: 200 posting allowed, 201 posting prohibited.
pub fn validate(buf: &[u8]) -> Validation {
    if buf.starts_with(b"200") || buf.starts_with(b"201") {
        Validation::Ok
    } else {
        Validation::Fail
    }
}
