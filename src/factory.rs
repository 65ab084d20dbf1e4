use std::sync::Arc;

use crate::dispatch::DispatchCoordinator;
use crate::provider::CompletionProvider;
use crate::providers::{AnthropicProvider, GeminiProvider, MistralProvider, OpenAIProvider};
use crate::registry::ProviderId;

/// Factory for constructing provider adapters.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the live adapter for one provider.
    pub fn create(id: ProviderId) -> Arc<dyn CompletionProvider> {
        match id {
            ProviderId::Anthropic => Arc::new(AnthropicProvider::new()),
            ProviderId::Mistral => Arc::new(MistralProvider::new()),
            ProviderId::Gemini => Arc::new(GeminiProvider::new()),
            ProviderId::OpenAI => Arc::new(OpenAIProvider::new()),
        }
    }

    /// Create the live adapter for one provider against a custom base URL
    /// (for testing).
    pub fn create_with_base_url(id: ProviderId, base_url: String) -> Arc<dyn CompletionProvider> {
        match id {
            ProviderId::Anthropic => Arc::new(AnthropicProvider::new_with_base_url(base_url)),
            ProviderId::Mistral => Arc::new(MistralProvider::new_with_base_url(base_url)),
            ProviderId::Gemini => Arc::new(GeminiProvider::new_with_base_url(base_url)),
            ProviderId::OpenAI => Arc::new(OpenAIProvider::new_with_base_url(base_url)),
        }
    }
}

/// All four live adapters, in registry order.
pub fn default_providers() -> Vec<Arc<dyn CompletionProvider>> {
    ProviderId::ALL.into_iter().map(ProviderFactory::create).collect()
}

impl DispatchCoordinator {
    /// A coordinator over the four live adapters.
    pub fn with_default_providers() -> Self {
        DispatchCoordinator::new(default_providers())
    }
}
