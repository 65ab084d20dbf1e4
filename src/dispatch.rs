use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::credentials::CredentialSet;
use crate::provider::CompletionProvider;
use crate::registry::ProviderId;
use crate::store::{ConversationStore, Turn};

/// Fans one submission out to every configured provider and reconciles each
/// outcome back into that provider's slice of the store.
///
/// Per provider the lifecycle is `Idle -> InFlight -> Idle`; failure is
/// recorded as data (`last_error`), not as a distinct state. Dispatched
/// tasks are never cancelled: once spawned, a call runs to completion even
/// if every sibling has already resolved.
pub struct DispatchCoordinator {
    providers: HashMap<ProviderId, Arc<dyn CompletionProvider>>,
    store: Arc<ConversationStore>,
    pending: Vec<JoinHandle<()>>,
}

impl DispatchCoordinator {
    pub fn new(providers: Vec<Arc<dyn CompletionProvider>>) -> Self {
        Self {
            providers: providers.into_iter().map(|p| (p.id(), p)).collect(),
            store: Arc::new(ConversationStore::new()),
            pending: Vec::new(),
        }
    }

    /// The state the coordinator mutates and presentation reads.
    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    /// Submit one prompt to every provider with a committed credential.
    ///
    /// Returns `false` without touching any state when the trimmed prompt is
    /// empty, when no provider is configured, or while a previous round is
    /// still in flight. These are expected caller conditions, not faults.
    ///
    /// On acceptance: every provider's `last_error` from the previous round
    /// is cleared, each configured provider's transcript synchronously gains
    /// the user turn, and one independent task per configured provider is
    /// spawned. Each task captures its credential by value at this point, so
    /// a credential commit made mid-flight only affects the next submission.
    pub fn submit(&mut self, prompt: &str, credentials: &CredentialSet) -> bool {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return false;
        }

        self.pending.retain(|handle| !handle.is_finished());
        if self.store.any_in_flight() {
            debug!("submission rejected: previous round still in flight");
            return false;
        }

        let configured: Vec<ProviderId> = credentials
            .configured()
            .into_iter()
            .filter(|id| self.providers.contains_key(id))
            .collect();
        if configured.is_empty() {
            debug!("submission rejected: no provider configured");
            return false;
        }

        // A new round dismisses every provider's previous error.
        for id in ProviderId::ALL {
            self.store.clear_error(id);
        }

        for id in configured {
            let Some(provider) = self.providers.get(&id).cloned() else {
                continue;
            };
            let Ok(credential) = credentials.require(id).map(str::to_string) else {
                continue;
            };

            self.store.append_turn(id, Turn::user(prompt));
            self.store.begin_dispatch(id);
            debug!(provider = %id, "dispatching");

            let store = Arc::clone(&self.store);
            let prompt = prompt.to_string();
            let handle = tokio::spawn(async move {
                match provider.complete(&prompt, &credential).await {
                    Ok(text) => {
                        debug!(provider = %id, "dispatch resolved");
                        store.record_success(id, text);
                    }
                    Err(err) => {
                        let message = err.to_string();
                        warn!(provider = %id, error = %message, "dispatch failed");
                        store.record_failure(id, message);
                    }
                }
            });
            self.pending.push(handle);
        }

        true
    }

    /// Wait for every outstanding dispatch of the current round to resolve.
    /// Driver/test convenience; the core itself never needs to join.
    pub async fn await_round(&mut self) {
        for handle in self.pending.drain(..) {
            if handle.await.is_err() {
                warn!("dispatch task panicked");
            }
        }
    }
}
