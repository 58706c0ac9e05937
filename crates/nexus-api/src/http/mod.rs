//! HTTP layer for Nexus.
//!
//! `POST /api/chat` runs one chat exchange; every other route serves the
//! chat page. All responses are CORS-open.

pub mod error;
pub mod handlers;
pub mod router;
