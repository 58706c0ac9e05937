//! Chat orchestrator: one user message in, one assistant reply out.
//!
//! Per request: resolve the user id, read history, build the prompt window,
//! call the provider under a timeout, and on success record the exchange.
//! A failed or timed-out inference leaves the store untouched.
//!
//! Concurrent requests for the same user are not serialized. Each request
//! reads a snapshot before inference, so a request may miss a sibling's
//! exchange that commits while it is waiting on the model. Appends are
//! atomic pairs in commit order; they are never merged.

use std::time::{Duration, Instant};

use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use nexus_types::chat::{ChatReply, DEFAULT_USER_ID, Turn};
use nexus_types::config::ChatConfig;
use nexus_types::error::ChatError;
use nexus_types::llm::{CompletionRequest, LlmError};

use crate::chat::window::build_window;
use crate::llm::box_provider::BoxLlmProvider;
use crate::session::SessionStore;

/// Smallest usable window: the system turn plus the new user turn.
const MIN_WINDOW: usize = 2;

/// Configured timeouts below this many seconds are raised to it.
const MIN_INFERENCE_TIMEOUT_SECS: u64 = 1;

/// Prompt and inference settings for the orchestrator.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub system_prompt: String,
    pub max_window: usize,
    pub max_output_tokens: u32,
    pub pin_system_prompt: bool,
    pub inference_timeout: Duration,
    pub temperature: Option<f64>,
}

impl From<&ChatConfig> for ChatSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            system_prompt: config.system_prompt.clone(),
            max_window: config.max_window,
            max_output_tokens: config.max_output_tokens,
            pin_system_prompt: config.pin_system_prompt,
            inference_timeout: Duration::from_secs(
                config.inference_timeout_secs.max(MIN_INFERENCE_TIMEOUT_SECS),
            ),
            temperature: config.temperature,
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

/// Runs chat exchanges against a session store and an LLM provider.
///
/// Generic over `SessionStore` so the backing store can be swapped without
/// touching request handling.
pub struct ChatOrchestrator<S: SessionStore> {
    store: S,
    provider: BoxLlmProvider,
    settings: ChatSettings,
    system_turn: Turn,
}

impl<S: SessionStore> ChatOrchestrator<S> {
    pub fn new(store: S, provider: BoxLlmProvider, mut settings: ChatSettings) -> Self {
        settings.max_window = settings.max_window.max(MIN_WINDOW);
        let system_turn = Turn::system(settings.system_prompt.clone());
        Self {
            store,
            provider,
            settings,
            system_turn,
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Handle one user message.
    ///
    /// A missing or empty `user_id` resolves to [`DEFAULT_USER_ID`]. Exactly one
    /// exchange is appended to the store on success and none on failure.
    pub async fn handle_message(
        &self,
        user_id: Option<&str>,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        let user_id = resolve_user_id(user_id);
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let span = info_span!(
            "chat.handle_message",
            request_id = %Uuid::now_v7(),
            user_id = %user_id,
            provider = self.provider.name(),
        );

        async move {
            let history = self.store.get(&user_id);
            let user_turn = Turn::user(message);
            let window = build_window(
                &self.system_turn,
                &history,
                &user_turn,
                self.settings.max_window,
                self.settings.pin_system_prompt,
            );
            debug!(
                history_len = history.len(),
                window_len = window.len(),
                "Prompt window built"
            );

            let request = CompletionRequest {
                model: String::new(),
                messages: window,
                max_tokens: self.max_output_tokens(),
                temperature: self.settings.temperature,
            };

            let reply = self.infer(&request).await?;
            self.store
                .append_exchange(&user_id, user_turn, Turn::assistant(reply.clone()));

            Ok::<_, ChatError>(ChatReply { reply, user_id })
        }
        .instrument(span)
        .await
    }

    /// Generation cap, clamped to what the provider's model can produce.
    fn max_output_tokens(&self) -> u32 {
        self.settings
            .max_output_tokens
            .min(self.provider.capabilities().max_output_tokens)
    }

    async fn infer(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            gen_ai.request.messages = request.messages.len(),
        );

        let start = Instant::now();
        let timeout = self.settings.inference_timeout;
        let outcome = tokio::time::timeout(timeout, self.provider.complete(request))
            .instrument(span)
            .await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok(response)) => {
                info!(
                    elapsed_ms,
                    model = %response.model,
                    stop_reason = %response.stop_reason,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Inference completed"
                );
                Ok(response.content)
            }
            Ok(Err(err)) => {
                warn!(elapsed_ms, error = %err, "Inference failed; history unchanged");
                Err(err)
            }
            Err(_) => {
                let err = LlmError::Timeout {
                    after_ms: timeout.as_millis() as u64,
                };
                warn!(elapsed_ms, "Inference timed out; history unchanged");
                Err(err)
            }
        }
    }
}

/// Resolve the effective user id for a request.
pub fn resolve_user_id(user_id: Option<&str>) -> String {
    match user_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => DEFAULT_USER_ID.to_string(),
    }
}
