pub mod check;
pub mod metrics;

use clap::{ArgAction, Parser, Subcommand};
use svcprobe_common::config::{DEFAULT_AGENT_NAME, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "svcprobe")]
#[command(about = "Checks that TCP services are up and greet like they should.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Seconds a service gets to send its whole greeting (1-30)
    #[arg(short, long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Identifier sent back to SSH servers
    #[arg(long, global = true, default_value = DEFAULT_AGENT_NAME)]
    pub agent_name: String,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a TCP port accepts connections
    #[command(alias = "p")]
    Port {
        port: String,
        /// Host to connect to, loopback when omitted
        #[arg(short, long)]
        address: Option<String>,
    },
    /// Check whether a service is up and sends the expected greeting
    #[command(alias = "s")]
    Service {
        /// One of tcp, http, ssh, smtp, ftp, pop, nntp, imap
        service: String,
        #[arg(short, long)]
        address: Option<String>,
        /// Port number or service name, the service's own port when omitted
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Time a service check, 0 when the service is down
    Perf {
        service: String,
        #[arg(short, long)]
        address: Option<String>,
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Evaluate item keys such as 'net.tcp.service[ssh,,2222]'
    #[command(alias = "g")]
    Get {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// List supported item keys
    #[command(alias = "m")]
    Metrics,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
