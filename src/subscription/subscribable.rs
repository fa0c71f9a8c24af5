// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for heaters that report state changes.

use crate::state::StateChange;
use crate::subscription::SubscriptionId;
use crate::types::Active;

/// Trait for types that support state change subscriptions.
pub trait Subscribable {
    /// Subscribes to on/off changes.
    ///
    /// The callback receives the new `Active` value.
    fn on_active_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Active) + Send + Sync + 'static;

    /// Subscribes to temperature changes.
    ///
    /// The callback receives the new temperature in degrees Celsius. The
    /// same value backs both the current temperature and the heating
    /// threshold.
    fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f32) + Send + Sync + 'static;

    /// Subscribes to all state changes.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
