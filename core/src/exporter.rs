//! # Metric Export
//!
//! The hosting agent asks for metrics by key and a list of string
//! parameters. An [`Exporter`] owns a family of keys and answers them.

use std::fmt;

use async_trait::async_trait;
use svcprobe_common::config::Config;
use svcprobe_common::error::ParamError;

use crate::network::tcp;
use crate::{perf, service};

pub const NET_TCP_PORT: &str = "net.tcp.port";
pub const NET_TCP_SERVICE: &str = "net.tcp.service";
pub const NET_TCP_SERVICE_PERF: &str = "net.tcp.service.perf";

/// Value of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(u64),
    Float(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(value) => write!(f, "{value}"),
            MetricValue::Float(value) => write!(f, "{value:.6}"),
        }
    }
}

/// A key an exporter answers, with a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub key: &'static str,
    pub description: &'static str,
}

#[async_trait]
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn metrics(&self) -> &'static [Metric];

    fn supports(&self, key: &str) -> bool {
        self.metrics().iter().any(|metric| metric.key == key)
    }

    async fn export(&self, key: &str, params: &[String]) -> Result<MetricValue, ParamError>;
}

const TCP_METRICS: &[Metric] = &[
    Metric {
        key: NET_TCP_PORT,
        description: "Checks if it is possible to make TCP connection to specified port.",
    },
    Metric {
        key: NET_TCP_SERVICE,
        description: "Checks if service is running and accepting TCP connections.",
    },
    Metric {
        key: NET_TCP_SERVICE_PERF,
        description: "Checks performance of TCP service.",
    },
];

/// TCP port and service checks.
pub struct TcpExporter {
    cfg: Config,
}

impl TcpExporter {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    async fn export_port(&self, params: &[String]) -> Result<MetricValue, ParamError> {
        if params.len() > 2 {
            return Err(ParamError::TooManyParams);
        }
        let (Some(address), Some(port)) = (params.first(), params.get(1)) else {
            return Err(ParamError::InvalidSecondParam);
        };
        if port.is_empty() {
            return Err(ParamError::InvalidSecondParam);
        }

        let open: bool = tcp::port_open(address, port).await?;
        Ok(MetricValue::Int(u64::from(open)))
    }
}

#[async_trait]
impl Exporter for TcpExporter {
    fn name(&self) -> &'static str {
        "TCP"
    }

    fn metrics(&self) -> &'static [Metric] {
        TCP_METRICS
    }

    async fn export(&self, key: &str, params: &[String]) -> Result<MetricValue, ParamError> {
        match key {
            NET_TCP_PORT => self.export_port(params).await,
            NET_TCP_SERVICE => {
                let up: bool = service::check_service(params, &self.cfg).await?;
                Ok(MetricValue::Int(u64::from(up)))
            }
            NET_TCP_SERVICE_PERF => {
                let secs: f64 = perf::check_service_perf(params, &self.cfg).await?;
                Ok(MetricValue::Float(secs))
            }
            _ => Err(ParamError::UnsupportedMetric),
        }
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
