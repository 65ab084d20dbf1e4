use reqwest::Client;

use super::gemini_types::*;
use crate::error::Error;
use crate::provider::CompletionProvider;
use crate::registry::ProviderId;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.0-flash";
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Gemini generateContent adapter. The credential travels as the `key`
/// query parameter; there is no auth header. Because the key is part of the
/// request URL, transport errors are stripped of their URL before they
/// escape this adapter.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
}

/// reqwest errors carry the full request URL, key included.
fn scrub(err: reqwest::Error) -> Error {
    Error::Http(err.without_url())
}

impl GeminiProvider {
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

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    async fn complete(&self, prompt: &str, credential: &str) -> Result<String, Error> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, MODEL
            ))
            .query(&[("key", credential)])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(scrub)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(super::transport_error(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(scrub)?;
        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(ProviderId::Gemini, e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| Error::malformed(ProviderId::Gemini, "no candidate content parts"))
    }
}
