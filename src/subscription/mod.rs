// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for mirrored state changes.
//!
//! Capability getters always answer from the mirror, so a host that only
//! reads will see new values on its next read. Hosts that push values to
//! their controller instead can register callbacks here; they run after
//! every poll or setpoint response that actually changes the mirror.
//!
//! # Usage
//!
//! ```no_run
//! use ecocontrol_lib::Heater;
//! use ecocontrol_lib::subscription::Subscribable;
//!
//! # async fn example() -> ecocontrol_lib::Result<()> {
//! let heater = Heater::http("192.168.1.60").build()?;
//!
//! let sub_id = heater.on_temperature_changed(|celsius| {
//!     println!("Setpoint is now {celsius}");
//! });
//!
//! // Later, unsubscribe
//! heater.unsubscribe(sub_id);
//! # Ok(())
//! # }
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
