//! LLM provider implementations.
//!
//! Provides a provider factory ([`create_provider`]) that constructs the
//! right [`BoxLlmProvider`] from a [`ProviderConfig`], and
//! [`resolve_api_key`] for reading the credential from the environment.

pub mod openai_compat;

use secrecy::SecretString;

use nexus_core::llm::box_provider::BoxLlmProvider;
use nexus_types::config::ProviderConfig;
use nexus_types::llm::{LlmError, ProviderKind};

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{openai_defaults, workers_ai_defaults};

/// Read the API key from the environment variable named in the config.
///
/// Empty values are treated as absent.
pub fn resolve_api_key(config: &ProviderConfig) -> Option<SecretString> {
    std::env::var(&config.api_key_env)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

/// Create a [`BoxLlmProvider`] from a [`ProviderConfig`].
///
/// # Errors
///
/// - `AuthenticationFailed` when a hosted provider has no API key.
/// - `InvalidRequest` when Workers AI lacks an `account_id` or a custom
///   provider lacks a `base_url`.
pub fn create_provider(
    config: &ProviderConfig,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    let provider = match config.kind {
        ProviderKind::WorkersAi => {
            let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
            if config.account_id.is_none() && config.base_url.is_none() {
                return Err(LlmError::InvalidRequest(
                    "workers_ai provider requires provider.account_id".to_string(),
                ));
            }
            let account_id = config.account_id.as_deref().unwrap_or_default();
            let mut oai_config = workers_ai_defaults(account_id, key, &config.model);
            if let Some(base_url) = config.base_url.as_deref() {
                oai_config.base_url = base_url.to_string();
            }
            OpenAiCompatibleProvider::new(oai_config)
        }
        ProviderKind::OpenAi => {
            let key = api_key.ok_or(LlmError::AuthenticationFailed)?;
            let mut oai_config = openai_defaults(key, &config.model);
            if let Some(base_url) = config.base_url.as_deref() {
                oai_config.base_url = base_url.to_string();
            }
            OpenAiCompatibleProvider::new(oai_config)
        }
        ProviderKind::Custom => {
            let base_url = config.base_url.as_deref().ok_or_else(|| {
                LlmError::InvalidRequest("custom provider requires provider.base_url".to_string())
            })?;
            // Local endpoints commonly accept any key.
            let key = api_key.unwrap_or_else(|| SecretString::from(String::new()));
            OpenAiCompatibleProvider::custom(base_url, key, &config.model)
        }
    };

    tracing::info!(
        provider = %config.kind,
        model = %config.model,
        "Inference provider configured"
    );
    Ok(BoxLlmProvider::new(provider))
}
