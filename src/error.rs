use crate::registry::ProviderId;
use thiserror::Error;

/// Fallback message when a provider's error body is missing or unparsable.
pub const GENERIC_ERROR_MESSAGE: &str = "unknown error";

/// Errors that can occur when dispatching to a provider.
///
/// Every variant is recovered at the per-provider boundary inside the
/// dispatch coordinator; nothing here is fatal to the process or to
/// sibling providers.
#[derive(Error, Debug)]
pub enum Error {
    /// The provider has no committed credential. This is a caller
    /// precondition, not a runtime failure: the coordinator excludes
    /// such providers from dispatch before any network call.
    #[error("no credential configured for {0}")]
    MissingCredential(ProviderId),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status. `message` is the provider-supplied error text when
    /// the error body was parseable, otherwise [`GENERIC_ERROR_MESSAGE`].
    #[error("HTTP {status}: {message}")]
    Transport { status: u16, message: String },

    /// 2xx response whose body does not match the provider's envelope.
    #[error("malformed response from {provider}: {detail}")]
    MalformedResponse {
        provider: ProviderId,
        detail: String,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Error::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(provider: ProviderId, detail: impl Into<String>) -> Self {
        Error::MalformedResponse {
            provider,
            detail: detail.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Error::Other(message.into())
    }
}
