use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

/// How long the mock waits for the client to hang up.
const COLLECT_LIMIT: Duration = Duration::from_secs(10);

/// What the mock does after its last greeting line.
#[derive(Clone, Copy)]
pub enum Then {
    /// Keep the connection and record what the client sends until it closes.
    Collect,
    /// Hang up immediately.
    Close,
}

/// Single-connection server that plays a greeting script.
pub struct MockServer {
    pub port: u16,
    handle: JoinHandle<anyhow::Result<Vec<u8>>>,
}

impl MockServer {
    /// Each line is written after its delay.
    pub async fn spawn(script: Vec<(Duration, &'static str)>, then: Then) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port: u16 = listener.local_addr()?.port();

        let handle = tokio::spawn(async move {
            let (mut conn, _) = listener.accept().await?;
            for (delay, line) in script {
                sleep(delay).await;
                if conn.write_all(line.as_bytes()).await.is_err() {
                    return Ok(Vec::new());
                }
            }

            let mut received: Vec<u8> = Vec::new();
            if let Then::Collect = then {
                let _ = timeout(COLLECT_LIMIT, conn.read_to_end(&mut received)).await;
            }
            Ok(received)
        });

        Ok(Self { port, handle })
    }

    /// Greeting sent in one piece right after accept.
    pub async fn greeting(line: &'static str) -> anyhow::Result<Self> {
        Self::spawn(vec![(Duration::ZERO, line)], Then::Collect).await
    }

    /// Everything the client sent.
    pub async fn received(self) -> anyhow::Result<Vec<u8>> {
        self.handle.await?
    }

    pub fn port_param(&self) -> String {
        self.port.to_string()
    }
}

/// A loopback port nobody listens on.
pub async fn refused_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    Ok(listener.local_addr()?.port())
}

pub fn params(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
