use serde::{Deserialize, Serialize};

/// Anthropic Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessage {
    pub role: String, // "user" or "assistant"
    pub content: String,
}

/// Anthropic Messages API response. The completion text lives in the first
/// content block.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicResponse {
    pub content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicContentBlock {
    pub text: String,
}
