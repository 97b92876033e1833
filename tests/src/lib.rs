//! End-to-end checks of the probe engine against in-process mock servers.

#[cfg(test)]
mod mock;
#[cfg(test)]
mod perf;
#[cfg(test)]
mod port;
#[cfg(test)]
mod service;
