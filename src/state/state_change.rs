// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are produced when a heater response is applied to the
//! mirror and are handed to subscribers so a host can push updated
//! characteristic values.
//!
//! # Examples
//!
//! ```
//! use ecocontrol_lib::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::Temperature(18.5)));
//! assert!(!state.apply(&StateChange::Temperature(18.5)));
//! ```

use crate::response::StatusResponse;

/// Represents a change in mirrored heater state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// The heater switched on (`true`) or off (`false`).
    Active(bool),

    /// The reported temperature changed, in degrees Celsius.
    Temperature(f32),

    /// Multiple changes at once.
    ///
    /// Used when a status response carries both fields.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates the batch of changes carried by a status response.
    #[must_use]
    pub fn from_status(status: &StatusResponse) -> Self {
        Self::Batch(vec![
            Self::Temperature(status.temperature().celsius()),
            Self::Active(status.is_on()),
        ])
    }

    /// Returns `true` if this is a batch change.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Flattens batches into a list of single changes.
    #[must_use]
    pub fn flatten(self) -> Vec<StateChange> {
        match self {
            Self::Batch(changes) => changes.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
