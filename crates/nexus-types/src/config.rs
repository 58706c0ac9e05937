//! Configuration types for Nexus.
//!
//! `NexusConfig` represents the top-level `nexus.toml` that controls the HTTP
//! listener, conversation bounds, and the inference provider. Every field has
//! a default, so an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::llm::ProviderKind;

/// Persona instruction sent as the first turn of every prompt window.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Nexus AI, an intelligent assistant with excellent memory. \
You remember everything from our conversation.";

/// Default model served by Cloudflare Workers AI.
pub const DEFAULT_WORKERS_AI_MODEL: &str = "@cf/meta/llama-3-8b-instruct";

/// Top-level configuration for the Nexus service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub provider: ProviderConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body on the chat endpoint.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Directory holding a built chat page. When absent, the embedded page is served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            web_dir: None,
        }
    }
}

/// Conversation bounds and prompt settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Maximum number of turns retained per user.
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Maximum number of turns sent to the model per request.
    #[serde(default = "default_max_window")]
    pub max_window: usize,

    /// Generation cap passed to the provider.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Keep the system turn in the window even when history fills it.
    #[serde(default = "default_pin_system_prompt")]
    pub pin_system_prompt: bool,

    /// Seconds to wait for the provider; values below 1 are raised to 1.
    #[serde(default = "default_inference_timeout_secs")]
    pub inference_timeout_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_max_history() -> usize {
    20
}

fn default_max_window() -> usize {
    10
}

fn default_max_output_tokens() -> u32 {
    500
}

fn default_pin_system_prompt() -> bool {
    true
}

fn default_inference_timeout_secs() -> u64 {
    60
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            max_history: default_max_history(),
            max_window: default_max_window(),
            max_output_tokens: default_max_output_tokens(),
            pin_system_prompt: default_pin_system_prompt(),
            inference_timeout_secs: default_inference_timeout_secs(),
            temperature: None,
        }
    }
}

/// Inference provider selection.
///
/// The API key itself never lives in the file; `api_key_env` names the
/// environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_kind")]
    pub kind: ProviderKind,

    #[serde(default = "default_model")]
    pub model: String,

    /// Cloudflare account id (Workers AI only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Explicit API base URL; required for `custom`, overrides the default otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_provider_kind() -> ProviderKind {
    ProviderKind::WorkersAi
}

fn default_model() -> String {
    DEFAULT_WORKERS_AI_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "NEXUS_API_KEY".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            model: default_model(),
            account_id: None,
            base_url: None,
            api_key_env: default_api_key_env(),
        }
    }
}
