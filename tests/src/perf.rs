use svcprobe_common::config::Config;
use svcprobe_core::perf::{MIN_REPORTED_SECS, check_service_perf};

use crate::mock::{MockServer, Then, params, refused_port};

#[tokio::test]
async fn refused_connection_is_exactly_zero() -> anyhow::Result<()> {
    let port = refused_port().await?.to_string();
    let secs = check_service_perf(&params(&["tcp", "127.0.0.1", port.as_str()]), &Config::default()).await?;
    assert_eq!(secs, 0.0);
    Ok(())
}

#[tokio::test]
async fn fast_local_success_is_floored_and_rounded() -> anyhow::Result<()> {
    let server = MockServer::spawn(Vec::new(), Then::Close).await?;

    let secs = check_service_perf(
        &params(&["tcp", "127.0.0.1", server.port_param().as_str()]),
        &Config::default(),
    )
    .await?;

    assert!(secs >= MIN_REPORTED_SECS, "got {secs}");
    assert_eq!((secs * 1e6).round() / 1e6, secs);
    server.received().await?;
    Ok(())
}

#[tokio::test]
async fn greeting_failure_is_zero() -> anyhow::Result<()> {
    let server = MockServer::greeting("-ERR no\r\n").await?;

    let secs = check_service_perf(
        &params(&["pop", "", server.port_param().as_str()]),
        &Config::default(),
    )
    .await?;

    assert_eq!(secs, 0.0);
    server.received().await?;
    Ok(())
}
