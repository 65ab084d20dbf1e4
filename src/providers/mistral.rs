use reqwest::Client;

use super::mistral_types::*;
use crate::error::Error;
use crate::provider::CompletionProvider;
use crate::registry::ProviderId;

const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";
const MODEL: &str = "mistral-small-latest";
const MAX_TOKENS: u32 = 1024;

/// Mistral chat-completions adapter. Bearer-token auth, `choices` envelope.
pub struct MistralProvider {
    client: Client,
    base_url: String,
}

impl MistralProvider {
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

impl Default for MistralProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for MistralProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Mistral
    }

    async fn complete(&self, prompt: &str, credential: &str) -> Result<String, Error> {
        let request = MistralRequest {
            model: MODEL.to_string(),
            messages: vec![MistralMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {credential}"))
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
        let parsed: MistralResponse = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(ProviderId::Mistral, e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::malformed(ProviderId::Mistral, "empty choices array"))
    }
}
