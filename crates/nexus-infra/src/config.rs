//! Configuration loader for Nexus.
//!
//! Reads `nexus.toml` and deserializes it into [`NexusConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::Path;

use nexus_types::config::NexusConfig;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "nexus.toml";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`NexusConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> NexusConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return NexusConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return NexusConfig::default();
        }
    };

    match toml::from_str::<NexusConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            NexusConfig::default()
        }
    }
}

/// Render a configuration as TOML for display.
///
/// The API key never appears: the config only names its environment variable.
pub fn render_config(config: &NexusConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_types::llm::ProviderKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config.chat.max_history, 20);
        assert_eq!(config.server.port, 8787);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 3000

[chat]
max_history = 40
inference_timeout_secs = 15

[provider]
kind = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chat.max_history, 40);
        assert_eq!(config.chat.max_window, 10);
        assert_eq!(config.chat.inference_timeout_secs, 15);
        assert_eq!(config.provider.kind, ProviderKind::OpenAi);
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.chat.max_history, 20);
        assert_eq!(config.provider.kind, ProviderKind::WorkersAi);
    }

    #[test]
    fn render_config_roundtrips() {
        let rendered = render_config(&NexusConfig::default()).unwrap();
        let parsed: NexusConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.chat.max_window, 10);
        assert_eq!(parsed.provider.kind, ProviderKind::WorkersAi);
    }
}
