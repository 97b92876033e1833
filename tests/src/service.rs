use std::time::{Duration, Instant};

use svcprobe_common::config::Config;
use svcprobe_common::error::ParamError;
use svcprobe_core::service::check_service;

use crate::mock::{MockServer, Then, params, refused_port};

async fn check(protocol: &str, server: &MockServer, cfg: &Config) -> bool {
    let port = server.port_param();
    check_service(&params(&[protocol, "127.0.0.1", port.as_str()]), cfg)
        .await
        .expect("parameters are valid")
}

#[tokio::test]
async fn smtp_multi_line_greeting_succeeds_after_second_line() -> anyhow::Result<()> {
    let server = MockServer::spawn(
        vec![
            (Duration::ZERO, "220-continue\r\n"),
            (Duration::from_millis(200), "220 done\r\n"),
        ],
        Then::Collect,
    )
    .await?;

    assert!(check("smtp", &server, &Config::default()).await);
    assert_eq!(server.received().await?, b"QUIT\r\n");
    Ok(())
}

#[tokio::test]
async fn smtp_unfinished_greeting_fails_when_peer_closes() -> anyhow::Result<()> {
    let server = MockServer::spawn(vec![(Duration::ZERO, "220-only\r\n")], Then::Close).await?;
    let cfg = Config::new(3, "svcprobe_agent")?;

    let started = Instant::now();
    assert!(!check("smtp", &server, &cfg).await);
    assert!(started.elapsed() < cfg.timeout);
    server.received().await?;
    Ok(())
}

#[tokio::test]
async fn smtp_unfinished_greeting_fails_at_deadline() -> anyhow::Result<()> {
    let server = MockServer::greeting("220-only\r\n").await?;
    let cfg = Config::new(1, "svcprobe_agent")?;

    let started = Instant::now();
    assert!(!check("smtp", &server, &cfg).await);
    let elapsed = started.elapsed();
    assert!(elapsed >= cfg.timeout, "returned after {elapsed:?}");
    assert!(elapsed < cfg.timeout * 3, "returned after {elapsed:?}");

    assert!(server.received().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn ssh_server_gets_identification_back() -> anyhow::Result<()> {
    let server = MockServer::greeting("SSH-2.0-OpenSSH_8.1\r\n").await?;

    assert!(check("ssh", &server, &Config::default()).await);

    let reply = String::from_utf8(server.received().await?)?;
    assert!(reply.starts_with("SSH-2.0-"));
    assert!(reply.ends_with("\r\n"));
    assert_eq!(reply, "SSH-2.0-svcprobe_agent\r\n");
    Ok(())
}

#[tokio::test]
async fn non_ssh_banner_on_ssh_port_is_rejected() -> anyhow::Result<()> {
    let server = MockServer::greeting("220 mail ESMTP\r\n").await?;

    assert!(!check("ssh", &server, &Config::default()).await);
    assert_eq!(server.received().await?, b"0\n");
    Ok(())
}

#[tokio::test]
async fn pop_greeting_with_explicit_port() -> anyhow::Result<()> {
    let server = MockServer::greeting("+OK POP3 ready\r\n").await?;

    assert!(check("pop", &server, &Config::default()).await);
    assert_eq!(server.received().await?, b"QUIT\r\n");
    Ok(())
}

#[tokio::test]
async fn nntp_read_only_greeting_is_up() -> anyhow::Result<()> {
    let server = MockServer::greeting("201 news ready, no posting\r\n").await?;

    assert!(check("nntp", &server, &Config::default()).await);
    assert_eq!(server.received().await?, b"QUIT\r\n");
    Ok(())
}

#[tokio::test]
async fn imap_greeting_is_followed_by_logout() -> anyhow::Result<()> {
    let server = MockServer::greeting("* OK IMAP4rev1 ready\r\n").await?;

    assert!(check("imap", &server, &Config::default()).await);
    assert_eq!(server.received().await?, b"a1 LOGOUT\r\n");
    Ok(())
}

#[tokio::test]
async fn ftp_multi_line_banner_is_read_to_the_end() -> anyhow::Result<()> {
    let server = MockServer::spawn(
        vec![
            (Duration::ZERO, "220-Welcome to the archive\r\n"),
            (Duration::from_millis(200), "220 ready\r\n"),
        ],
        Then::Collect,
    )
    .await?;

    assert!(check("ftp", &server, &Config::default()).await);
    assert_eq!(server.received().await?, b"QUIT\r\n");
    Ok(())
}

#[tokio::test]
async fn wrong_greeting_is_down_without_goodbye() -> anyhow::Result<()> {
    let server = MockServer::greeting("* BYE too busy\r\n").await?;

    assert!(!check("imap", &server, &Config::default()).await);
    assert!(server.received().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn tcp_with_port_is_pure_connectivity() -> anyhow::Result<()> {
    let server = MockServer::spawn(Vec::new(), Then::Collect).await?;

    assert!(check("tcp", &server, &Config::default()).await);
    assert!(server.received().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn tcp_without_port_is_invalid_third_param() {
    let result = check_service(&params(&["tcp"]), &Config::default()).await;
    assert_eq!(result, Err(ParamError::InvalidThirdParam));
}

#[tokio::test]
async fn refused_service_is_down() -> anyhow::Result<()> {
    let port = refused_port().await?.to_string();
    let up = check_service(&params(&["smtp", "", port.as_str()]), &Config::default()).await;
    assert_eq!(up, Ok(false));
    Ok(())
}
