use std::time::Duration;

use crate::error::ConfigError;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_AGENT_NAME: &str = "svcprobe_agent";

/// Process-wide settings consumed by the probes.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bounds every greeting read of one probe, counted once from the moment
    /// the probe starts reading.
    pub timeout: Duration,
    /// Software identifier sent back to SSH servers, as in
    /// `SSH-2.0-<agent_name>`.
    pub agent_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            agent_name: DEFAULT_AGENT_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn new(timeout_secs: u64, agent_name: impl Into<String>) -> Result<Self, ConfigError> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&timeout_secs) {
            return Err(ConfigError::TimeoutOutOfRange {
                got: timeout_secs,
                min: MIN_TIMEOUT_SECS,
                max: MAX_TIMEOUT_SECS,
            });
        }

        // RFC 4253: softwareversion is printable US-ASCII, no spaces or '-'
        let agent_name: String = agent_name.into();
        let valid = !agent_name.is_empty()
            && agent_name
                .bytes()
                .all(|b| b.is_ascii_graphic() && b != b'-');
        if !valid {
            return Err(ConfigError::InvalidAgentName);
        }

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            agent_name,
        })
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
