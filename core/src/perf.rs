use std::time::{Duration, Instant};

use svcprobe_common::config::Config;
use svcprobe_common::error::ParamError;

use crate::service;

/// Smallest duration reported for a successful probe.
pub const MIN_REPORTED_SECS: f64 = 0.0001;

const PRECISION_DIGITS: i32 = 6;

/// Times a service check end to end.
///
/// Returns seconds for a service that is up and `0.0` for one that is down.
pub async fn check_service_perf(params: &[String], cfg: &Config) -> Result<f64, ParamError> {
    let start: Instant = Instant::now();

    if !service::check_service(params, cfg).await? {
        return Ok(0.0);
    }

    Ok(elapsed_secs(start.elapsed()))
}

/// Seconds rounded half away from zero to six decimals, never below
/// [`MIN_REPORTED_SECS`].
pub fn elapsed_secs(elapsed: Duration) -> f64 {
    let scale: f64 = 10f64.powi(PRECISION_DIGITS);
    let rounded: f64 = (elapsed.as_secs_f64() * scale).round() / scale;
    rounded.max(MIN_REPORTED_SECS)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
