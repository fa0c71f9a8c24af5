// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater state mirror.

use crate::response::StatusResponse;

use super::StateChange;

/// Temperature assumed before the heater has reported anything.
const INITIAL_TEMPERATURE: f32 = 20.0;

/// Last known state of the heater.
///
/// The heater reports a single temperature, its setpoint, which serves both
/// as the current temperature and as the heating threshold. No range is
/// enforced on it: whatever the heater reports is mirrored.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::state::DeviceState;
///
/// let state = DeviceState::new();
/// assert!(!state.is_on());
/// assert!((state.temperature() - 20.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    is_on: bool,
    temperature: f32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            is_on: false,
            temperature: INITIAL_TEMPERATURE,
        }
    }
}

impl DeviceState {
    /// Creates the initial state: off, at 20°C.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with explicit values.
    #[must_use]
    pub const fn with_values(is_on: bool, temperature: f32) -> Self {
        Self { is_on, temperature }
    }

    /// Returns `true` if the heater last reported a heating mode.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the last reported temperature in degrees Celsius.
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Applies a state change and returns whether the state actually changed.
    #[allow(clippy::float_cmp)]
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Active(is_on) => {
                let changed = self.is_on != *is_on;
                self.is_on = *is_on;
                changed
            }
            StateChange::Temperature(celsius) => {
                let changed = self.temperature != *celsius;
                self.temperature = *celsius;
                changed
            }
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    any_changed |= self.apply(c);
                }
                any_changed
            }
        }
    }

    /// Overwrites both fields from a status response.
    ///
    /// Returns the changes that actually altered the state, in the order
    /// they were applied.
    pub fn update_from(&mut self, status: &StatusResponse) -> Vec<StateChange> {
        StateChange::from_status(status)
            .flatten()
            .into_iter()
            .filter(|change| self.apply(change))
            .collect()
    }
}
