use svcprobe_common::config::Config;
use svcprobe_common::error::ParamError;
use svcprobe_core::exporter::NET_TCP_PORT;
use svcprobe_core::{Exporter, MetricValue, TcpExporter};

use crate::mock::{MockServer, Then, params, refused_port};

#[tokio::test]
async fn listening_port_reports_one() -> anyhow::Result<()> {
    let server = MockServer::spawn(Vec::new(), Then::Close).await?;
    let exporter = TcpExporter::new(Config::default());

    let value = exporter
        .export(NET_TCP_PORT, &params(&["127.0.0.1", server.port_param().as_str()]))
        .await;
    assert_eq!(value, Ok(MetricValue::Int(1)));
    server.received().await?;
    Ok(())
}

#[tokio::test]
async fn refused_port_reports_zero() -> anyhow::Result<()> {
    let port = refused_port().await?.to_string();
    let exporter = TcpExporter::new(Config::default());

    let value = exporter.export(NET_TCP_PORT, &params(&["", port.as_str()])).await;
    assert_eq!(value, Ok(MetricValue::Int(0)));
    Ok(())
}

#[tokio::test]
async fn non_numeric_port_is_a_parameter_error() {
    let exporter = TcpExporter::new(Config::default());
    for port in ["ssh", "65536", "-22"] {
        let value = exporter.export(NET_TCP_PORT, &params(&["", port])).await;
        assert_eq!(value, Err(ParamError::InvalidSecondParam), "port {port:?}");
    }
}
