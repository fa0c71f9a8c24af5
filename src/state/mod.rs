// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mirrored heater state.
//!
//! [`DeviceState`] holds the last values reported by the heater, while
//! [`StateChange`] describes individual updates that can be applied to it.
//!
//! # Examples
//!
//! ```
//! use ecocontrol_lib::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//! assert!(!state.is_on());
//!
//! state.apply(&StateChange::Active(true));
//! assert!(state.is_on());
//! ```

mod device_state;
mod state_change;

pub use device_state::DeviceState;
pub use state_change::StateChange;
