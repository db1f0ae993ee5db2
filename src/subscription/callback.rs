// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for state-change subscriptions.
//!
//! Adapters (fan, light, sensor shapes) re-render on each change; the
//! registry stores their callbacks and dispatches every new snapshot.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::DeviceState;

/// Unique identifier for a subscription.
///
/// Returned when registering a callback; pass it to
/// [`CallbackRegistry::unsubscribe`] to remove the callback. IDs are unique
/// within a device's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for state change callbacks.
type StateChangedCallback = Arc<dyn Fn(&DeviceState) + Send + Sync>;

/// Registry for state-change callbacks.
///
/// Thread-safe via `parking_lot::RwLock`; callbacks are wrapped in `Arc` so
/// dispatch can run without holding the write lock. Callbacks are called
/// synchronously in an arbitrary order.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            state_changed_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback invoked with every new state snapshot.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state_changed_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.state_changed_callbacks.write().clear();
    }

    /// Dispatches a new snapshot to all registered callbacks.
    pub fn dispatch(&self, state: &DeviceState) {
        let callbacks: Vec<StateChangedCallback> = self
            .state_changed_callbacks
            .read()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(state);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.state_changed_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        let id = SubscriptionId::new(42);
        assert_eq!(id.to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn registry_dispatch_and_unsubscribe() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_state_changed(move |_state| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&DeviceState::default());
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.dispatch(&DeviceState::default());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_multiple_callbacks() {
        let registry = CallbackRegistry::new();
        let counter1 = Arc::new(AtomicU32::new(0));
        let counter2 = Arc::new(AtomicU32::new(0));
        let c1 = counter1.clone();
        let c2 = counter2.clone();

        registry.on_state_changed(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        registry.on_state_changed(move |_| {
            c2.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&DeviceState::default());
        assert_eq!(counter1.load(Ordering::SeqCst), 1);
        assert_eq!(counter2.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_unique_ids() {
        let registry = CallbackRegistry::new();
        let id1 = registry.on_state_changed(|_| {});
        let id2 = registry.on_state_changed(|_| {});
        assert_ne!(id1, id2);
    }

    #[test]
    fn registry_clear() {
        let registry = CallbackRegistry::new();
        registry.on_state_changed(|_| {});
        registry.on_state_changed(|_| {});
        assert_eq!(registry.callback_count(), 2);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_callback_receives_snapshot() {
        use crate::state::StateUpdate;
        use crate::types::FanSpeed;

        let registry = CallbackRegistry::new();
        let seen = Arc::new(RwLock::new(None::<DeviceState>));
        let seen_clone = seen.clone();

        registry.on_state_changed(move |state| {
            *seen_clone.write() = Some(*state);
        });

        let state = DeviceState::default().apply(&StateUpdate {
            fan_speed: Some(FanSpeed::new(4).unwrap()),
            ..StateUpdate::default()
        });
        registry.dispatch(&state);

        assert_eq!(seen.read().unwrap().fan_speed.value(), 4);
    }
}
