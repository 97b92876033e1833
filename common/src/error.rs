use thiserror::Error;

/// Malformed, missing or excess metric parameters.
///
/// These are surfaced to the caller before any network activity happens.
/// A service that is down is never one of these; it is a `0` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Invalid first parameter.")]
    InvalidFirstParam,
    #[error("Invalid second parameter.")]
    InvalidSecondParam,
    #[error("Invalid third parameter.")]
    InvalidThirdParam,
    #[error("Too many parameters.")]
    TooManyParams,
    #[error("Unsupported metric.")]
    UnsupportedMetric,
}

/// Item key syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("empty item key")]
    Empty,
    #[error("invalid character {ch:?} in key name at position {pos}")]
    InvalidName { ch: char, pos: usize },
    #[error("unterminated quoted parameter")]
    UnterminatedQuote,
    #[error("unexpected character {ch:?} after quoted parameter at position {pos}")]
    AfterQuote { ch: char, pos: usize },
    #[error("missing closing bracket")]
    MissingBracket,
    #[error("unexpected trailing data after closing bracket")]
    TrailingData,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("timeout must be between {min} and {max} seconds, got {got}")]
    TimeoutOutOfRange { got: u64, min: u64, max: u64 },
    #[error("agent name must be a non-empty printable token without spaces or '-'")]
    InvalidAgentName,
}
