pub mod service;
pub mod target;
