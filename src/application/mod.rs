//! Application wiring: turn a validated `Config` into a running server.

pub mod bootstrap;

pub use bootstrap::{build_service, run, shutdown_signal};
