//! Configuration types and per-provider defaults for OpenAI-compatible providers.
//!
//! Each backend that speaks the OpenAI chat completions protocol gets a factory
//! function returning an [`OpenAiCompatConfig`] with the correct base URL and
//! capabilities.

use secrecy::SecretString;

use nexus_types::llm::ProviderCapabilities;

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "workers_ai", "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model identifier (e.g., "@cf/meta/llama-3-8b-instruct").
    pub model: String,
    pub capabilities: ProviderCapabilities,
}

/// OpenAI-compatible base URL for a Cloudflare account's Workers AI.
pub fn workers_ai_base_url(account_id: &str) -> String {
    format!("https://api.cloudflare.com/client/v4/accounts/{account_id}/ai/v1")
}

/// Cloudflare Workers AI default configuration.
///
/// Base URL: `https://api.cloudflare.com/client/v4/accounts/{account_id}/ai/v1`
/// Capabilities: 8K context, 2K output (Llama 3 8B Instruct).
pub fn workers_ai_defaults(account_id: &str, api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "workers_ai".into(),
        base_url: workers_ai_base_url(account_id),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 8_192,
            max_output_tokens: 2_048,
        },
    }
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
/// Capabilities: 128K context, 16K output.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 128_000,
            max_output_tokens: 16_384,
        },
    }
}

/// Configuration for an arbitrary OpenAI-compatible endpoint.
///
/// Capabilities are conservative since the model behind the URL is unknown.
pub fn custom_defaults(base_url: &str, api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "custom".into(),
        base_url: base_url.trim_end_matches('/').into(),
        api_key,
        model: model.into(),
        capabilities: ProviderCapabilities {
            max_context_tokens: 8_192,
            max_output_tokens: 4_096,
        },
    }
}
