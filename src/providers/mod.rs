//! Provider adapters for the supported completion services.
//!
//! Every adapter speaks a materially different wire dialect (auth scheme,
//! body schema, response envelope) but presents the same
//! [`CompletionProvider`](crate::CompletionProvider) contract.

pub mod anthropic;
pub mod anthropic_types;
pub mod gemini;
pub mod gemini_types;
pub mod mistral;
pub mod mistral_types;
pub mod openai;
pub mod openai_types;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use mistral::MistralProvider;
pub use openai::OpenAIProvider;

use crate::error::{Error, GENERIC_ERROR_MESSAGE};
use serde::Deserialize;

/// All four services report failures as `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorObject>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: Option<String>,
}

/// Build a transport error for a non-2xx reply, extracting the provider's
/// own message when the error body yields one and falling back to the
/// generic message otherwise.
pub(crate) fn transport_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
    Error::transport(status, message)
}
