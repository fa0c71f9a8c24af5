// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for heater control.
//!
//! # Types
//!
//! - [`Temperature`] - Degrees Celsius with deci-degree encoding
//! - [`ModeCode`] - Raw operating mode reported by the heater
//! - [`Active`], [`CurrentHeaterCoolerState`], [`TargetHeaterCoolerState`] -
//!   Heater-cooler characteristic values

mod characteristic;
mod mode;
mod temperature;

pub use characteristic::{Active, CurrentHeaterCoolerState, TargetHeaterCoolerState};
pub use mode::ModeCode;
pub use temperature::Temperature;
