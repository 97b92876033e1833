//! # Item Keys
//!
//! Metrics are requested as item keys such as `net.tcp.service[ssh,,2222]`:
//! a key name, optionally followed by a bracketed, comma-separated list of
//! parameters.
//!
//! * Parameters may be wrapped in double quotes; inside quotes `\"` is a
//!   literal quote and `,`/`]` lose their meaning.
//! * Spaces around parameters are dropped, empty parameters are kept.
//! * `name[]` carries a single empty parameter, bare `name` carries none.

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKey {
    pub name: String,
    pub params: Vec<String>,
}

impl ItemKey {
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let (name, rest) = split_name(s)?;

        let Some(rest) = rest else {
            return Ok(Self { name: name.to_string(), params: Vec::new() });
        };

        let (params, trailing) = parse_params(rest, name.len() + 1)?;
        if !trailing.is_empty() {
            return Err(KeyError::TrailingData);
        }

        Ok(Self { name: name.to_string(), params })
    }
}

impl FromStr for ItemKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.params.is_empty() {
            return Ok(());
        }

        f.write_str("[")?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            if needs_quoting(param) {
                write!(f, "\"{}\"", param.replace('"', "\\\""))?;
            } else {
                f.write_str(param)?;
            }
        }
        f.write_str("]")
    }
}

/// Splits off the key name. The remainder starts right after `[`.
fn split_name(s: &str) -> Result<(&str, Option<&str>), KeyError> {
    let (name, rest) = match s.split_once('[') {
        Some((name, rest)) => (name, Some(rest)),
        None => (s, None),
    };

    if name.is_empty() {
        return Err(KeyError::Empty);
    }

    if let Some((pos, ch)) = name
        .char_indices()
        .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-')))
    {
        return Err(KeyError::InvalidName { ch, pos });
    }

    Ok((name, rest))
}

/// Parses parameters up to and including the closing `]`, returning
/// whatever follows it. `base` is the offset of `s` within the whole key.
fn parse_params(s: &str, base: usize) -> Result<(Vec<String>, &str), KeyError> {
    let mut params: Vec<String> = Vec::new();
    let mut chars = s.char_indices().peekable();

    loop {
        while chars.next_if(|(_, ch)| *ch == ' ').is_some() {}

        let mut param = String::new();
        let terminator: (usize, char);

        if chars.next_if(|(_, ch)| *ch == '"').is_some() {
            loop {
                match chars.next() {
                    Some((_, '\\')) if matches!(chars.peek(), Some((_, '"'))) => {
                        chars.next();
                        param.push('"');
                    }
                    Some((_, '"')) => break,
                    Some((_, ch)) => param.push(ch),
                    None => return Err(KeyError::UnterminatedQuote),
                }
            }
            while chars.next_if(|(_, ch)| *ch == ' ').is_some() {}
            terminator = match chars.next() {
                Some(t @ (_, ',' | ']')) => t,
                Some((pos, ch)) => return Err(KeyError::AfterQuote { ch, pos: base + pos }),
                None => return Err(KeyError::MissingBracket),
            };
        } else {
            terminator = loop {
                match chars.next() {
                    Some(t @ (_, ',' | ']')) => break t,
                    Some((_, ch)) => param.push(ch),
                    None => return Err(KeyError::MissingBracket),
                }
            };
            param.truncate(param.trim_end_matches(' ').len());
        }

        params.push(param);

        if terminator.1 == ']' {
            return Ok((params, &s[terminator.0 + 1..]));
        }
    }
}

fn needs_quoting(param: &str) -> bool {
    param.starts_with(' ')
        || param.ends_with(' ')
        || param.contains([',', ']', '"'])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
