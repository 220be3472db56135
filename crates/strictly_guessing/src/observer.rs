//! State-change subscriptions.
//!
//! Render surfaces subscribe to the state machine instead of owning game
//! state. Observers run synchronously, after the state is updated, in the
//! order they subscribed.

use crate::{GameState, Transition};

/// Receives a notification for every applied intent.
pub trait StateObserver {
    /// Called with the new state and what the intent did.
    fn on_transition(&mut self, state: &GameState, transition: &Transition);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameState, &Transition),
{
    fn on_transition(&mut self, state: &GameState, transition: &Transition) {
        self(state, transition)
    }
}

/// Handle returned by [`GuessingGame::subscribe`](crate::GuessingGame::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(pub(crate) u64);

/// Ordered list of observers.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn StateObserver>)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn StateObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, state: &GameState, transition: &Transition) {
        for (_, observer) in &mut self.entries {
            observer.on_transition(state, transition);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
