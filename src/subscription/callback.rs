// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for state subscriptions.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::StateChange;
use crate::types::Active;

/// Unique identifier for a subscription.
///
/// IDs are unique within a heater's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
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

type ActiveCallback = Arc<dyn Fn(Active) + Send + Sync>;

type TemperatureCallback = Arc<dyn Fn(f32) + Send + Sync>;

type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// Registry for heater subscription callbacks.
///
/// Callbacks are stored behind `parking_lot::RwLock` and may be registered
/// or removed from any task while the poller dispatches.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    active_callbacks: RwLock<HashMap<SubscriptionId, ActiveCallback>>,
    temperature_callbacks: RwLock<HashMap<SubscriptionId, TemperatureCallback>>,
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            active_callbacks: RwLock::new(HashMap::new()),
            temperature_callbacks: RwLock::new(HashMap::new()),
            state_changed_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback for on/off changes.
    pub fn on_active_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Active) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.active_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for temperature changes.
    pub fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.temperature_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all state changes.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
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
        self.active_callbacks.write().remove(&id).is_some()
            || self.temperature_callbacks.write().remove(&id).is_some()
            || self.state_changed_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.active_callbacks.write().clear();
        self.temperature_callbacks.write().clear();
        self.state_changed_callbacks.write().clear();
    }

    /// Dispatches a state change to relevant callbacks.
    ///
    /// Callbacks run synchronously, in arbitrary order, on the task that
    /// applied the change. Callbacks are cloned out of the registry first so
    /// a callback may subscribe or unsubscribe without deadlocking.
    pub fn dispatch(&self, change: &StateChange) {
        let generic: Vec<_> = self.state_changed_callbacks.read().values().cloned().collect();
        for callback in generic {
            callback(change);
        }

        match change {
            StateChange::Active(is_on) => {
                let callbacks: Vec<_> = self.active_callbacks.read().values().cloned().collect();
                for callback in callbacks {
                    callback(Active::from(*is_on));
                }
            }
            StateChange::Temperature(celsius) => {
                let callbacks: Vec<_> =
                    self.temperature_callbacks.read().values().cloned().collect();
                for callback in callbacks {
                    callback(*celsius);
                }
            }
            StateChange::Batch(changes) => {
                for nested_change in changes {
                    self.dispatch(nested_change);
                }
            }
        }
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.active_callbacks.read().len()
            + self.temperature_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
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
