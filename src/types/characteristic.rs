// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater-cooler characteristic values.
//!
//! These enums carry the numeric codes of the heater-cooler service
//! characteristics so a host can hand them straight to its accessory
//! framework.

use std::fmt;

use crate::error::ValueError;

/// Value of the `Active` characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Active {
    /// The heater is off or idle.
    #[default]
    Inactive,
    /// The heater is running.
    Active,
}

impl Active {
    /// Returns the characteristic code.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }
}

impl From<bool> for Active {
    fn from(value: bool) -> Self {
        if value { Self::Active } else { Self::Inactive }
    }
}

impl TryFrom<u8> for Active {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Active),
            _ => Err(ValueError::InvalidCharacteristic {
                characteristic: "Active",
                value,
            }),
        }
    }
}

/// Value of the `CurrentHeaterCoolerState` characteristic.
///
/// The heater only distinguishes running from not running, so there is no
/// idle or cooling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrentHeaterCoolerState {
    /// Not heating.
    #[default]
    Inactive,
    /// Heating.
    Heating,
}

impl CurrentHeaterCoolerState {
    /// Returns the characteristic code.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Heating => 2,
        }
    }
}

impl From<bool> for CurrentHeaterCoolerState {
    fn from(is_on: bool) -> Self {
        if is_on { Self::Heating } else { Self::Inactive }
    }
}

/// Value of the `TargetHeaterCoolerState` characteristic.
///
/// A controller may send any of these, but this heater only ever reports
/// [`Heat`](Self::Heat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetHeaterCoolerState {
    /// Heat or cool as needed.
    Auto,
    /// Heat only.
    Heat,
    /// Cool only.
    Cool,
}

impl TargetHeaterCoolerState {
    /// Returns the characteristic code.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }
}

impl TryFrom<u8> for TargetHeaterCoolerState {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            _ => Err(ValueError::InvalidCharacteristic {
                characteristic: "TargetHeaterCoolerState",
                value,
            }),
        }
    }
}

impl fmt::Display for TargetHeaterCoolerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "AUTO",
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
        };
        f.write_str(name)
    }
}
