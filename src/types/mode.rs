// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode code reported by the heater.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Raw operating mode reported in the `mode_piece` element.
///
/// The only documented code is `4`, meaning the heater is off or idle. Every
/// other code is treated as heating. The raw value is kept so callers can
/// inspect it, but no further meaning is assigned.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::types::ModeCode;
///
/// assert!(ModeCode::OFF.is_off());
/// assert!(ModeCode::new(2).is_heating());
///
/// let parsed: ModeCode = "4".parse().unwrap();
/// assert_eq!(parsed, ModeCode::OFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeCode(i32);

impl ModeCode {
    /// The off/idle code.
    pub const OFF: Self = Self(4);

    /// Wraps a raw mode code.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns `true` for the off/idle code.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.0 == Self::OFF.0
    }

    /// Returns `true` for any code other than off.
    #[must_use]
    pub const fn is_heating(&self) -> bool {
        !self.is_off()
    }
}

impl fmt::Display for ModeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ModeCode {
    type Err = ParseError;

    /// Parses the element text numerically, so `" 4 "` and `"4.0"` both
    /// read as the off code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(code) = text.parse::<i32>() {
            return Ok(Self(code));
        }

        let invalid = || ParseError::InvalidValue {
            field: "mode_piece".to_string(),
            message: format!("not a mode code: {text:?}"),
        };

        let number = text.parse::<f64>().map_err(|_| invalid())?;
        if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
            return Err(invalid());
        }
        // Safe: integral and range-checked above
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(number as i32))
    }
}
