//! Shared domain types for Nexus.
//!
//! This crate contains the core domain types used across the Nexus chat
//! service: conversation turns, LLM request/response shapes, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
