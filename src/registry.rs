use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of supported providers.
///
/// Identity for every per-provider slot in the system: credentials,
/// transcripts, flight state, and adapter selection are all keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Anthropic,
    Mistral,
    Gemini,
    OpenAI,
}

impl ProviderId {
    /// All providers in registry order. Dispatch is initiated in this order
    /// (resolution order is unconstrained).
    pub const ALL: [ProviderId; 4] = [
        ProviderId::Anthropic,
        ProviderId::Mistral,
        ProviderId::Gemini,
        ProviderId::OpenAI,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Anthropic => "anthropic",
            ProviderId::Mistral => "mistral",
            ProviderId::Gemini => "gemini",
            ProviderId::OpenAI => "openai",
        }
    }

    /// Display metadata for this provider.
    pub fn info(&self) -> &'static ProviderInfo {
        match self {
            ProviderId::Anthropic => &ANTHROPIC_INFO,
            ProviderId::Mistral => &MISTRAL_INFO,
            ProviderId::Gemini => &GEMINI_INFO,
            ProviderId::OpenAI => &OPENAI_INFO,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static display metadata for one provider. Pure data, defined at build
/// time, never mutated; the presentation layer reads it, nothing else does.
#[derive(Debug, Clone, Copy)]
pub struct ProviderInfo {
    pub display_name: &'static str,
    /// Token the presentation layer maps to a visual theme.
    pub theme: &'static str,
    pub credential_label: &'static str,
    pub credential_placeholder: &'static str,
    pub credential_help_url: &'static str,
}

static ANTHROPIC_INFO: ProviderInfo = ProviderInfo {
    display_name: "Claude",
    theme: "clay",
    credential_label: "Anthropic API key",
    credential_placeholder: "sk-ant-...",
    credential_help_url: "https://console.anthropic.com/settings/keys",
};

static MISTRAL_INFO: ProviderInfo = ProviderInfo {
    display_name: "Mistral",
    theme: "amber",
    credential_label: "Mistral API key",
    credential_placeholder: "your Mistral key",
    credential_help_url: "https://console.mistral.ai/api-keys",
};

static GEMINI_INFO: ProviderInfo = ProviderInfo {
    display_name: "Gemini",
    theme: "sky",
    credential_label: "Gemini API key",
    credential_placeholder: "AIza...",
    credential_help_url: "https://aistudio.google.com/apikey",
};

static OPENAI_INFO: ProviderInfo = ProviderInfo {
    display_name: "ChatGPT",
    theme: "mint",
    credential_label: "OpenAI API key",
    credential_placeholder: "sk-...",
    credential_help_url: "https://platform.openai.com/api-keys",
};
