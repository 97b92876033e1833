mod commands;
mod terminal;

use std::sync::Arc;

use commands::{CommandLine, Commands, check, metrics};
use svcprobe_common::config::Config;
use svcprobe_core::exporter::{NET_TCP_PORT, NET_TCP_SERVICE, NET_TCP_SERVICE_PERF};
use svcprobe_core::{Exporter, TcpExporter};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg = Config::new(commands.timeout, commands.agent_name)?;
    let exporter: Arc<dyn Exporter> = Arc::new(TcpExporter::new(cfg));

    match commands.command {
        Commands::Port { port, address } => {
            let params = vec![address.unwrap_or_default(), port];
            check::single(exporter.as_ref(), NET_TCP_PORT, &params).await
        }
        Commands::Service { service, address, port } => {
            let params = check::service_params(service, address, port);
            check::single(exporter.as_ref(), NET_TCP_SERVICE, &params).await
        }
        Commands::Perf { service, address, port } => {
            let params = check::service_params(service, address, port);
            check::single(exporter.as_ref(), NET_TCP_SERVICE_PERF, &params).await
        }
        Commands::Get { keys } => check::get(exporter, keys).await,
        Commands::Metrics => {
            metrics::list(exporter.as_ref());
            Ok(())
        }
    }
}
