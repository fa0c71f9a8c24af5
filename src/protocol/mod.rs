// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for talking to the heater.
//!
//! The heater only speaks plain HTTP. [`HttpClient`] sends the requests;
//! the [`Protocol`] trait exists so the heater logic can be driven by
//! another transport in tests.

mod http;

use std::future::Future;

pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::{ParseError, ProtocolError};
use crate::response::StatusResponse;

/// Response body from a heater endpoint.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    /// The raw response body.
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a status fragment.
    ///
    /// # Errors
    ///
    /// Returns error if either status element is missing or unreadable.
    pub fn parse_status(&self) -> Result<StatusResponse, ParseError> {
        StatusResponse::parse(&self.body)
    }
}

/// Trait for transports that can deliver requests to the heater.
///
/// Only a `200 OK` counts as a response; any other outcome is an error.
pub trait Protocol: Send + Sync + 'static {
    /// Sends a GET for the given path and query.
    ///
    /// # Arguments
    ///
    /// * `path` - Path and optional query, starting with `/`
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 200.
    fn send_raw(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Sends a command to the heater and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or receive.
    fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send {
        let path = command.to_http_path();
        async move { self.send_raw(&path).await }
    }
}
