use std::sync::Arc;

use anyhow::Context;
use svcprobe_common::error::ParamError;
use svcprobe_common::key::ItemKey;
use svcprobe_core::{Exporter, MetricValue};
use tokio::task::JoinSet;
use tracing::debug;

use crate::terminal::print;

/// Lays out `net.tcp.service` parameters, empty strings standing for
/// defaults.
pub fn service_params(service: String, address: Option<String>, port: Option<String>) -> Vec<String> {
    vec![service, address.unwrap_or_default(), port.unwrap_or_default()]
}

/// Evaluates one metric and prints its bare value.
pub async fn single(exporter: &dyn Exporter, key: &str, params: &[String]) -> anyhow::Result<()> {
    let value: MetricValue = exporter
        .export(key, params)
        .await
        .with_context(|| format!("cannot evaluate {key}"))?;
    print::value(value);
    Ok(())
}

/// Evaluates item keys concurrently and prints one line per key, in the
/// order given.
pub async fn get(exporter: Arc<dyn Exporter>, keys: Vec<String>) -> anyhow::Result<()> {
    let mut tasks: JoinSet<(usize, String, Result<MetricValue, String>)> = JoinSet::new();

    for (idx, raw) in keys.into_iter().enumerate() {
        let exporter = exporter.clone();
        tasks.spawn(async move {
            let result = evaluate(exporter.as_ref(), &raw).await;
            (idx, raw, result)
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.context("check task panicked")?);
    }
    results.sort_by_key(|(idx, _, _)| *idx);

    for (_, raw, result) in results {
        match result {
            Ok(value) => print::keyed_value(&raw, value),
            Err(message) => print::keyed_unsupported(&raw, &message),
        }
    }
    Ok(())
}

async fn evaluate(exporter: &dyn Exporter, raw: &str) -> Result<MetricValue, String> {
    let key: ItemKey = ItemKey::parse(raw).map_err(|e| format!("Invalid item key format: {e}"))?;
    if !exporter.supports(&key.name) {
        return Err(ParamError::UnsupportedMetric.to_string());
    }

    debug!("evaluating {key} on {} exporter", exporter.name());
    exporter
        .export(&key.name, &key.params)
        .await
        .map_err(|e| e.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
