use serde::{Deserialize, Serialize};

/// Mistral chat-completions request (OpenAI-compatible dialect).
#[derive(Debug, Clone, Serialize)]
pub struct MistralRequest {
    pub model: String,
    pub messages: Vec<MistralMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralMessage {
    pub role: String,
    pub content: String,
}

/// Mistral response envelope; the completion lives in the first choice's
/// message content.
#[derive(Debug, Clone, Deserialize)]
pub struct MistralResponse {
    pub choices: Vec<MistralChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MistralChoice {
    pub message: MistralMessage,
}
