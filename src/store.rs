use crate::registry::ProviderId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One immutable entry in a provider's transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Turn {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Turn {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered, append-only sequence of turns for one provider.
pub type Transcript = Vec<Turn>;

/// Per-provider flight state, read by presentation between submissions.
///
/// There is no terminal error state: a failed dispatch resolves back to
/// idle with the failure recorded as data in `last_error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchState {
    pub in_flight: bool,
    pub last_error: Option<String>,
}

/// Everything the store holds for one provider. Each dispatch task touches
/// exactly one slot; slots never reference each other.
#[derive(Debug, Clone, Default)]
struct ProviderSlot {
    transcript: Transcript,
    state: DispatchState,
}

/// Session-lifetime conversation state for all providers, keyed by
/// [`ProviderId`].
///
/// Shared as `Arc<ConversationStore>` between the coordinator and its
/// spawned dispatch tasks. The interior mutex is held only for short
/// synchronous updates; no task ever awaits while holding it, and every
/// mutation is scoped to a single provider's slot, so resolution order
/// across providers is observably irrelevant.
#[derive(Debug, Default)]
pub struct ConversationStore {
    slots: Mutex<HashMap<ProviderId, ProviderSlot>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ProviderId, ProviderSlot>> {
        // A panicked dispatch task cannot leave a slot half-written (every
        // update is a single statement), so a poisoned lock is still usable.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a turn to one provider's transcript.
    pub fn append_turn(&self, id: ProviderId, turn: Turn) {
        self.lock().entry(id).or_default().transcript.push(turn);
    }

    /// Mark a provider in flight for a newly dispatched call.
    pub fn begin_dispatch(&self, id: ProviderId) {
        self.lock().entry(id).or_default().state.in_flight = true;
    }

    /// Drop any error left over from a previous round.
    pub fn clear_error(&self, id: ProviderId) {
        self.lock().entry(id).or_default().state.last_error = None;
    }

    /// Resolve a dispatch with the provider's completion text.
    pub fn record_success(&self, id: ProviderId, text: impl Into<String>) {
        let mut slots = self.lock();
        let slot = slots.entry(id).or_default();
        slot.transcript.push(Turn::assistant(text));
        slot.state.in_flight = false;
    }

    /// Resolve a dispatch with a failure message; no turn is appended.
    pub fn record_failure(&self, id: ProviderId, message: impl Into<String>) {
        let mut slots = self.lock();
        let slot = slots.entry(id).or_default();
        slot.state.last_error = Some(message.into());
        slot.state.in_flight = false;
    }

    /// A clone of one provider's transcript.
    pub fn transcript(&self, id: ProviderId) -> Transcript {
        self.lock()
            .get(&id)
            .map(|slot| slot.transcript.clone())
            .unwrap_or_default()
    }

    pub fn dispatch_state(&self, id: ProviderId) -> DispatchState {
        self.lock()
            .get(&id)
            .map(|slot| slot.state.clone())
            .unwrap_or_default()
    }

    pub fn is_in_flight(&self, id: ProviderId) -> bool {
        self.dispatch_state(id).in_flight
    }

    pub fn last_error(&self, id: ProviderId) -> Option<String> {
        self.dispatch_state(id).last_error
    }

    /// Whether any provider still has an unresolved dispatch. Gates new
    /// submissions: one round at a time.
    pub fn any_in_flight(&self) -> bool {
        self.lock().values().any(|slot| slot.state.in_flight)
    }
}
