// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater request definitions.
//!
//! The heater's embedded web server exposes two endpoints, both driven by
//! plain `GET` requests:
//!
//! | Command Type | Endpoint | Purpose |
//! |-------------|----------|---------|
//! | [`StatusCommand`] | `/xml/status-piece.xml` | Read setpoint and mode |
//! | [`SetpointCommand`] | `/cgi/consigne_piece.cgi` | Write a new setpoint |
//!
//! Both endpoints answer with the same status fragment.
//!
//! # Examples
//!
//! ```
//! use ecocontrol_lib::command::{Command, SetpointCommand, StatusCommand};
//! use ecocontrol_lib::types::Temperature;
//!
//! assert_eq!(StatusCommand.to_http_path(), "/xml/status-piece.xml");
//!
//! let cmd = SetpointCommand::new(Temperature::new(19.5).unwrap());
//! assert_eq!(
//!     cmd.to_http_path(),
//!     "/cgi/consigne_piece.cgi?newConsignePiece=195"
//! );
//! ```

mod setpoint;
mod status;

pub use setpoint::SetpointCommand;
pub use status::StatusCommand;

/// A request that can be sent to the heater.
pub trait Command {
    /// Returns the endpoint path, starting with `/`.
    fn path(&self) -> &'static str;

    /// Returns the query string without the leading `?`, if any.
    fn query(&self) -> Option<String>;

    /// Returns the path and query to append to the device base URL.
    fn to_http_path(&self) -> String {
        match self.query() {
            Some(q) => format!("{}?{}", self.path(), q),
            None => self.path().to_string(),
        }
    }
}
