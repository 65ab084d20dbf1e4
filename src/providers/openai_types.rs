use serde::{Deserialize, Serialize};

/// OpenAI Responses API request.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub instructions: String,
    pub input: Vec<OpenAIInputMessage>,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenAIInputMessage {
    pub role: String,
    pub content: String,
}

/// OpenAI Responses API envelope; the completion lives in the first output
/// item's first content element.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponse {
    pub output: Vec<OpenAIOutputItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIOutputItem {
    #[serde(default)]
    pub content: Vec<OpenAIOutputContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIOutputContent {
    pub text: String,
}
