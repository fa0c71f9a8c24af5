// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declared characteristic properties and accessory identity.
//!
//! A host registering the heater with its accessory framework needs the
//! properties the heater-cooler service is declared with: the valid target
//! states and the heating threshold range. These are metadata for the
//! controller's UI. The heater itself never checks values against them.

use crate::types::TargetHeaterCoolerState;

/// Platform name users register in the host configuration.
pub const PLATFORM_NAME: &str = "Smart EcoControl";

/// Plugin identifier as published to the host's plugin registry.
pub const PLUGIN_NAME: &str = "homebridge-smart-ecocontrol";

/// Declared properties of the heater-cooler service.
///
/// The threshold range is always ordered, `min_threshold <= max_threshold`.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::Capabilities;
///
/// let caps = Capabilities::smart_ecocontrol();
/// assert!(caps.contains(19.5));
/// assert!(!caps.contains(25.0));
/// assert!((caps.clamp(25.0) - 21.9).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    min_threshold: f32,
    max_threshold: f32,
    threshold_step: f32,
    target_states: Vec<TargetHeaterCoolerState>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::smart_ecocontrol()
    }
}

impl Capabilities {
    /// Properties of the Smart EcoControl heater: heat only, 17.0 to 21.9°C
    /// in 0.1°C steps.
    #[must_use]
    pub fn smart_ecocontrol() -> Self {
        Self {
            min_threshold: 17.0,
            max_threshold: 21.9,
            threshold_step: 0.1,
            target_states: vec![TargetHeaterCoolerState::Heat],
        }
    }

    /// Lowest heating threshold a controller should offer, in °C.
    #[must_use]
    pub fn min_threshold(&self) -> f32 {
        self.min_threshold
    }

    /// Highest heating threshold a controller should offer, in °C.
    #[must_use]
    pub fn max_threshold(&self) -> f32 {
        self.max_threshold
    }

    /// Threshold step, in °C.
    #[must_use]
    pub fn threshold_step(&self) -> f32 {
        self.threshold_step
    }

    /// Target states a controller may select.
    #[must_use]
    pub fn target_states(&self) -> &[TargetHeaterCoolerState] {
        &self.target_states
    }

    /// Returns `true` if the value lies within the declared threshold range.
    #[must_use]
    pub fn contains(&self, celsius: f32) -> bool {
        (self.min_threshold..=self.max_threshold).contains(&celsius)
    }

    /// Clamps a value into the declared threshold range.
    ///
    /// A NaN input is returned unchanged.
    #[must_use]
    pub fn clamp(&self, celsius: f32) -> f32 {
        celsius.clamp(self.min_threshold, self.max_threshold)
    }

    /// Returns `true` if the target state is selectable.
    #[must_use]
    pub fn supports_target(&self, state: TargetHeaterCoolerState) -> bool {
        self.target_states.contains(&state)
    }
}

/// Identity reported in the accessory information service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInfo {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Model name.
    pub model: String,
    /// Serial number.
    pub serial_number: String,
}

impl Default for AccessoryInfo {
    fn default() -> Self {
        Self {
            manufacturer: "petaBits".to_string(),
            model: "Smart EcoControl".to_string(),
            serial_number: "1.0.0".to_string(),
        }
    }
}
