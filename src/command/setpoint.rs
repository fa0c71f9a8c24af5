// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint write.

use super::Command;
use crate::types::Temperature;

/// Asks the heater to adopt a new setpoint.
///
/// The control endpoint takes the setpoint in deci-degrees, so 19.5°C is
/// sent as `newConsignePiece=195`. The heater answers with its status
/// fragment, which may not reflect the requested value yet.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::command::{Command, SetpointCommand};
/// use ecocontrol_lib::types::Temperature;
///
/// let cmd = SetpointCommand::new(Temperature::new(21.9).unwrap());
/// assert_eq!(cmd.query(), Some("newConsignePiece=219".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetpointCommand {
    target: Temperature,
}

impl SetpointCommand {
    /// Endpoint accepting setpoint writes.
    pub const PATH: &'static str = "/cgi/consigne_piece.cgi";

    /// Query parameter carrying the deci-degree value.
    pub const PARAM: &'static str = "newConsignePiece";

    /// Creates a setpoint write for the given target.
    #[must_use]
    pub const fn new(target: Temperature) -> Self {
        Self { target }
    }

    /// Returns the requested target.
    #[must_use]
    pub const fn target(&self) -> Temperature {
        self.target
    }
}

impl Command for SetpointCommand {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn query(&self) -> Option<String> {
        Some(format!("{}={}", Self::PARAM, self.target.deci_degrees()))
    }
}
