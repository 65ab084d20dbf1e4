use crate::error::Error;
use crate::registry::ProviderId;

/// A provider adapter: turns a (prompt, credential) pair into one wire
/// request and normalizes the reply into plain completion text.
///
/// Each call is stateless and stand-alone: one network round trip, no
/// retries, no history. The credential is a single-use parameter; adapters
/// must never log or store it. Credential presence is the caller's
/// precondition; adapters may assume it is non-empty.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    fn id(&self) -> ProviderId;

    /// Generate a completion for `prompt`.
    async fn complete(&self, prompt: &str, credential: &str) -> Result<String, Error>;
}
