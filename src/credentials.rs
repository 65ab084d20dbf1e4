use crate::error::Error;
use crate::registry::ProviderId;
use std::collections::HashMap;
use std::env;

/// A snapshot of per-provider secrets.
///
/// A blank or whitespace-only value means "not configured"; such a provider
/// is excluded from dispatch and from the visible provider list. Values are
/// handed to adapters by value at dispatch time and are never logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    keys: HashMap<ProviderId, String>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear, with a blank value) the credential for one provider.
    pub fn set(&mut self, id: ProviderId, value: impl Into<String>) {
        self.keys.insert(id, value.into());
    }

    /// The credential for `id`, if one is configured.
    pub fn get(&self, id: ProviderId) -> Option<&str> {
        self.keys
            .get(&id)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn is_configured(&self, id: ProviderId) -> bool {
        self.get(id).is_some()
    }

    /// The credential for `id`, or `Error::MissingCredential`.
    pub fn require(&self, id: ProviderId) -> Result<&str, Error> {
        self.get(id).ok_or(Error::MissingCredential(id))
    }

    /// Configured providers, in registry order.
    pub fn configured(&self) -> Vec<ProviderId> {
        ProviderId::ALL
            .into_iter()
            .filter(|id| self.is_configured(*id))
            .collect()
    }

    /// Load credentials from environment variables. Unset variables simply
    /// leave that provider unconfigured.
    pub fn from_env() -> Self {
        let mut set = Self::new();
        for id in ProviderId::ALL {
            let var = match id {
                ProviderId::Anthropic => "ANTHROPIC_API_KEY",
                ProviderId::Mistral => "MISTRAL_API_KEY",
                ProviderId::Gemini => "GEMINI_API_KEY",
                ProviderId::OpenAI => "OPENAI_API_KEY",
            };
            if let Ok(value) = env::var(var) {
                set.set(id, value);
            }
        }
        set
    }
}

/// Two-phase credential configuration: a committed snapshot used for
/// dispatch, and a draft the settings surface edits freely.
///
/// `commit` swaps the committed snapshot wholesale; it never mutates the
/// committed set in place. Calls already dispatched captured their credential
/// by value, so a mid-flight commit only affects the next submission.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    committed: CredentialSet,
    draft: CredentialSet,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-committed set (e.g. from `CredentialSet::from_env`).
    pub fn with_committed(committed: CredentialSet) -> Self {
        Self {
            draft: committed.clone(),
            committed,
        }
    }

    /// The snapshot dispatch reads from.
    pub fn committed(&self) -> &CredentialSet {
        &self.committed
    }

    pub fn draft(&self) -> &CredentialSet {
        &self.draft
    }

    /// Edit the draft; the committed set is untouched until `commit`.
    pub fn edit(&mut self, id: ProviderId, value: impl Into<String>) {
        self.draft.set(id, value);
    }

    /// Replace the committed set with the draft, atomically from the
    /// perspective of subsequent dispatches.
    pub fn commit(&mut self) {
        self.committed = self.draft.clone();
    }

    /// Throw away draft edits, resetting the draft to the committed set.
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credential_is_not_configured() {
        let mut set = CredentialSet::new();
        set.set(ProviderId::Anthropic, "sk-ant-123");
        set.set(ProviderId::Mistral, "");
        set.set(ProviderId::Gemini, "   ");

        assert!(set.is_configured(ProviderId::Anthropic));
        assert!(!set.is_configured(ProviderId::Mistral));
        assert!(!set.is_configured(ProviderId::Gemini));
        assert!(!set.is_configured(ProviderId::OpenAI));
        assert_eq!(set.configured(), vec![ProviderId::Anthropic]);
    }

    #[test]
    fn require_reports_missing_credential() {
        let set = CredentialSet::new();
        let err = set.require(ProviderId::OpenAI).unwrap_err();
        assert!(matches!(err, Error::MissingCredential(ProviderId::OpenAI)));
    }

    #[test]
    fn configured_follows_registry_order() {
        let mut set = CredentialSet::new();
        set.set(ProviderId::OpenAI, "sk-1");
        set.set(ProviderId::Anthropic, "sk-2");
        assert_eq!(
            set.configured(),
            vec![ProviderId::Anthropic, ProviderId::OpenAI]
        );
    }

    #[test]
    fn edits_are_invisible_until_commit() {
        let mut store = CredentialStore::new();
        store.edit(ProviderId::Anthropic, "draft-key");
        assert!(!store.committed().is_configured(ProviderId::Anthropic));

        store.commit();
        assert_eq!(store.committed().get(ProviderId::Anthropic), Some("draft-key"));
    }

    #[test]
    fn discard_resets_draft_to_committed() {
        let mut store = CredentialStore::new();
        store.edit(ProviderId::Gemini, "kept");
        store.commit();
        store.edit(ProviderId::Gemini, "scratch");
        store.discard();
        assert_eq!(store.draft().get(ProviderId::Gemini), Some("kept"));
    }

    #[test]
    fn commit_replaces_the_whole_set() {
        let mut store = CredentialStore::new();
        store.edit(ProviderId::Anthropic, "a1");
        store.edit(ProviderId::Mistral, "m1");
        store.commit();

        store.edit(ProviderId::Mistral, "");
        store.commit();
        assert!(store.committed().is_configured(ProviderId::Anthropic));
        assert!(!store.committed().is_configured(ProviderId::Mistral));
    }
}
