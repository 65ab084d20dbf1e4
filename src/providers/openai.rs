use reqwest::Client;

use super::openai_types::*;
use crate::error::Error;
use crate::provider::CompletionProvider;
use crate::registry::ProviderId;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const MODEL: &str = "gpt-4o-mini";
const MAX_OUTPUT_TOKENS: u32 = 1024;
const INSTRUCTIONS: &str = "You are a helpful assistant. Answer the user's message directly.";

/// OpenAI Responses API adapter. Bearer-token auth; every request carries
/// the same fixed system instruction alongside the user message.
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
}

impl OpenAIProvider {
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

impl Default for OpenAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAIProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAI
    }

    async fn complete(&self, prompt: &str, credential: &str) -> Result<String, Error> {
        let request = OpenAIRequest {
            model: MODEL.to_string(),
            instructions: INSTRUCTIONS.to_string(),
            input: vec![OpenAIInputMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/v1/responses", self.base_url))
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
        let parsed: OpenAIResponse = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(ProviderId::OpenAI, e.to_string()))?;

        parsed
            .output
            .into_iter()
            .next()
            .and_then(|item| item.content.into_iter().next())
            .map(|content| content.text)
            .ok_or_else(|| Error::malformed(ProviderId::OpenAI, "no output content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_fixed_instructions() {
        let request = OpenAIRequest {
            model: MODEL.to_string(),
            instructions: INSTRUCTIONS.to_string(),
            input: vec![OpenAIInputMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], MODEL);
        assert_eq!(json["instructions"], INSTRUCTIONS);
        assert_eq!(json["input"][0]["content"], "hello");
        assert_eq!(json["max_output_tokens"], 1024);
    }

    #[test]
    fn response_text_comes_from_first_output_item() {
        let body = r#"{"output":[{"type":"message","content":[{"type":"output_text","text":"hey"}]}]}"#;
        let parsed: OpenAIResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.output[0].content[0].text, "hey");
    }

    #[test]
    fn output_item_without_content_is_rejected_later() {
        // A reasoning-only output item deserializes to an empty content vec;
        // the adapter maps that to a malformed-response error.
        let body = r#"{"output":[{"type":"reasoning"}]}"#;
        let parsed: OpenAIResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.output[0].content.is_empty());
    }
}
