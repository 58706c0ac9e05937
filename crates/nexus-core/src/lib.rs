//! Business logic and port trait definitions for Nexus.
//!
//! This crate defines the "ports" (the session store and LLM provider traits)
//! that the infrastructure layer implements, plus the chat orchestrator that
//! ties them together. It depends only on `nexus-types` -- never on
//! `nexus-infra` or any network crate.

pub mod chat;
pub mod llm;
pub mod session;
