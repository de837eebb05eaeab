use std::collections::HashSet;

use event_emitter_rs::EventEmitter;

use super::FavoritesChange;

const CHANGE_EVENT: &str = "favorites:change";

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Listener registry for favorites changes.
///
/// Listeners run on the emitter's worker threads; `broadcast` waits for all of them,
/// so a notification has been fully delivered when it returns.
pub(crate) struct ChangeEmitter {
    event_emitter: EventEmitter,
    subscriptions: HashSet<SubscriptionId>,
}

impl ChangeEmitter {
    pub(crate) fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
            subscriptions: HashSet::new(),
        }
    }

    pub(crate) fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(FavoritesChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(
            self.event_emitter
                .on(CHANGE_EVENT, move |change: FavoritesChange| listener(change)),
        );
        self.subscriptions.insert(id.clone());
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: &SubscriptionId) -> bool {
        if !self.subscriptions.remove(id) {
            return false;
        }
        self.event_emitter.remove_listener(id.as_str());
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub(crate) fn broadcast(&mut self, change: FavoritesChange) {
        if self.subscriptions.is_empty() {
            return;
        }

        let action = change.action;
        for handle in self.event_emitter.emit(CHANGE_EVENT, change) {
            if handle.join().is_err() {
                log::error!("favorites listener panicked while handling {:?}", action);
            }
        }
    }
}
