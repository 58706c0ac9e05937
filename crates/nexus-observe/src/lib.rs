//! Observability for Nexus: structured logging and optional trace export.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, shutdown_tracing};
