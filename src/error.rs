// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `EcoControl` library.
//!
//! Failures fall into three families: talking to the heater (transport or a
//! non-200 status), reading its status body, and building values or
//! configuration. The fire-and-forget heater operations only log these; the
//! fallible variants return them.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the heater.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a heater response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The supplied configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A temperature is NaN or infinite.
    #[error("temperature {0} is not a finite number")]
    NonFiniteTemperature(f32),

    /// Text could not be read as a temperature.
    #[error("invalid temperature: {0:?}")]
    InvalidTemperature(String),

    /// A characteristic value is not one of the accepted codes.
    #[error("invalid {characteristic} value: {value}")]
    InvalidCharacteristic {
        /// The characteristic being decoded.
        characteristic: &'static str,
        /// The rejected raw value.
        value: u8,
    },
}

/// Errors related to HTTP communication with the heater.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The heater answered with something other than 200 OK.
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing heater status bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected element is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
