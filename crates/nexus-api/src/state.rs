//! Application state wiring the chat orchestrator to its concrete store and provider.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use nexus_core::chat::{ChatOrchestrator, ChatSettings};
use nexus_core::llm::box_provider::BoxLlmProvider;
use nexus_core::session::InMemorySessionStore;
use nexus_infra::llm::{create_provider, resolve_api_key};
use nexus_types::config::NexusConfig;

/// Body limit used when none is configured.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// The orchestrator pinned to the in-process session store.
pub type ConcreteChatOrchestrator = ChatOrchestrator<InMemorySessionStore>;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ConcreteChatOrchestrator>,
    /// Directory to serve the chat page from instead of the embedded copy.
    pub web_dir: Option<PathBuf>,
    /// Largest accepted body on `POST /api/chat`.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build the provider from config and wire it to a fresh session store.
    pub fn init(config: &NexusConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(&config.provider);
        if api_key.is_none() {
            tracing::debug!(
                env = %config.provider.api_key_env,
                "No API key in environment"
            );
        }

        let provider = create_provider(&config.provider, api_key).with_context(|| {
            format!(
                "failed to configure {} provider (API key is read from ${})",
                config.provider.kind, config.provider.api_key_env
            )
        })?;

        let state = Self::from_parts(
            InMemorySessionStore::new(config.chat.max_history),
            provider,
            ChatSettings::from(&config.chat),
            config.server.web_dir.as_ref().map(PathBuf::from),
        )
        .with_body_limit(config.server.max_body_bytes);
        tracing::debug!(
            max_history = state.chat.store().max_history(),
            max_window = state.chat.settings().max_window,
            "Chat state initialized"
        );
        Ok(state)
    }

    pub fn from_parts(
        store: InMemorySessionStore,
        provider: BoxLlmProvider,
        settings: ChatSettings,
        web_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            chat: Arc::new(ChatOrchestrator::new(store, provider, settings)),
            web_dir,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_body_limit(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
