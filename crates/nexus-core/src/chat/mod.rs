//! Chat request orchestration.
//!
//! `window` builds the bounded prompt sent to the model; `orchestrator`
//! runs one exchange end to end against a `SessionStore` and a provider.

pub mod orchestrator;
pub mod window;

pub use orchestrator::{ChatOrchestrator, ChatSettings};
