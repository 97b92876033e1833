use crate::Validation;

/// RFC 3501 untagged OK greeting. PREAUTH and BYE greetings fail.
pub fn validate(buf: &[u8]) -> Validation {
    if buf.starts_with(b"* OK") {
        Validation::Ok
    } else {
        Validation::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::greeting;

    #[test]
    fn untagged_ok_is_accepted() {
        assert_eq!(
            validate(&greeting("* OK [CAPABILITY IMAP4rev1] Dovecot ready.\r\n")),
            Validation::Ok
        );
    }

    #[test]
    fn other_greetings_fail() {
        assert_eq!(validate(&greeting("* PREAUTH welcome\r\n")), Validation::Fail);
        assert_eq!(validate(&greeting("* BYE overloaded\r\n")), Validation::Fail);
        assert_eq!(validate(&greeting("")), Validation::Fail);
    }
}
