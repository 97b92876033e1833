//! TCP service availability probes.
//!
//! * [`network::tcp`] answers "does this port accept connections".
//! * [`probe`] connects and, for text protocols, waits for the greeting the
//!   protocol mandates.
//! * [`service`] turns metric parameters into a probe target.
//! * [`perf`] times a successful service probe.
//! * [`exporter`] maps metric keys onto all of the above.

pub mod exporter;
pub mod network;
pub mod perf;
pub mod probe;
pub mod service;

pub use exporter::{Exporter, Metric, MetricValue, TcpExporter};
