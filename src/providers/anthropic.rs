use reqwest::Client;

use super::anthropic_types::*;
use crate::error::Error;
use crate::provider::CompletionProvider;
use crate::registry::ProviderId;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MODEL: &str = "claude-sonnet-4-20250514";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Anthropic Messages API adapter. Authenticates with the `x-api-key`
/// header plus a pinned `anthropic-version` header.
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create an adapter pointed at a custom base URL (for testing).
    pub fn new_with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for AnthropicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    async fn complete(&self, prompt: &str, credential: &str) -> Result<String, Error> {
        let request = AnthropicRequest {
            model: MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", credential)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(super::transport_error(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let parsed: AnthropicResponse = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(ProviderId::Anthropic, e.to_string()))?;

        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| Error::malformed(ProviderId::Anthropic, "empty content array"))
    }
}
