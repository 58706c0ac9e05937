//! Infrastructure layer for Nexus.
//!
//! Contains implementations of the ports defined in `nexus-core`: the
//! OpenAI-compatible inference provider (Cloudflare Workers AI, OpenAI, or
//! any compatible endpoint) and the `nexus.toml` configuration loader.

pub mod config;
pub mod llm;
