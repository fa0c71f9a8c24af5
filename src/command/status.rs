// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query.

use super::Command;

/// Reads the heater's current setpoint and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCommand;

impl StatusCommand {
    /// Endpoint serving the status fragment.
    pub const PATH: &'static str = "/xml/status-piece.xml";
}

impl Command for StatusCommand {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn query(&self) -> Option<String> {
        None
    }
}
