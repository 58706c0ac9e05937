//! Per-user conversation history.
//!
//! `SessionStore` is the capability the orchestrator depends on;
//! `InMemorySessionStore` is the process-lifetime implementation.

pub mod memory;
pub mod store;

pub use memory::InMemorySessionStore;
pub use store::SessionStore;
