//! Shared model for the service probe workspace: probe targets, the
//! service-name table, agent configuration, item keys and parameter errors.

pub mod config;
pub mod error;
pub mod key;
pub mod network;
