//! Concurrent fan-out of a single prompt to multiple LLM providers.
//!
//! One user submission is dispatched to every provider with a configured
//! credential (Anthropic, Mistral, Gemini, and OpenAI) as independent
//! asynchronous calls. Each provider keeps its own transcript, in-flight
//! flag, and last error; failure or slowness of one never blocks or
//! corrupts the others. Presentation layers consume the store read-only.

pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod store;

// Re-export core types for easy usage
pub use credentials::{CredentialSet, CredentialStore};
pub use dispatch::DispatchCoordinator;
pub use error::Error;
pub use factory::{default_providers, ProviderFactory};
pub use provider::CompletionProvider;
pub use providers::{AnthropicProvider, GeminiProvider, MistralProvider, OpenAIProvider};
pub use registry::{ProviderId, ProviderInfo};
pub use store::{ConversationStore, DispatchState, Speaker, Transcript, Turn};
