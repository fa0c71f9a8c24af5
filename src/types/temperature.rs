// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type for heater setpoints and readings.
//!
//! The heater reports temperatures as decimal degrees Celsius in its status
//! body, and accepts new setpoints on its control endpoint as an integer
//! number of deci-degrees (degrees multiplied by ten).

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A temperature in degrees Celsius.
///
/// Only finite values are representable. No range is enforced here: the
/// heater's declared threshold range lives in
/// [`Capabilities`](crate::Capabilities) and is advisory.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::types::Temperature;
///
/// let t = Temperature::new(19.5).unwrap();
/// assert_eq!(t.deci_degrees(), 195);
///
/// let parsed: Temperature = " 18.5 ".parse().unwrap();
/// assert!((parsed.celsius() - 18.5).abs() < f32::EPSILON);
///
/// assert!(Temperature::new(f32::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f32);

impl Temperature {
    /// Creates a new temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` for NaN or infinite input.
    pub fn new(celsius: f32) -> Result<Self, ValueError> {
        if !celsius.is_finite() {
            return Err(ValueError::NonFiniteTemperature(celsius));
        }
        Ok(Self(celsius))
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f32 {
        self.0
    }

    /// Returns the temperature in the control endpoint's deci-degree
    /// encoding, rounded to the nearest integer.
    ///
    /// Values beyond the `i32` range saturate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn deci_degrees(&self) -> i32 {
        (f64::from(self.0) * 10.0).round() as i32
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl FromStr for Temperature {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let celsius = s
            .trim()
            .parse::<f32>()
            .map_err(|_| ValueError::InvalidTemperature(s.to_string()))?;
        Self::new(celsius)
    }
}

impl TryFrom<f32> for Temperature {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f32 {
    fn from(value: Temperature) -> Self {
        value.0
    }
}
