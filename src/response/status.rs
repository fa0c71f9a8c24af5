// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status fragment parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::{ModeCode, Temperature};

/// Element holding the setpoint in decimal degrees.
const TEMPERATURE_TAG: &str = "consigne_piece";

/// Element holding the operating mode code.
const MODE_TAG: &str = "mode_piece";

static TEMPERATURE_RE: LazyLock<Regex> = LazyLock::new(|| element_regex(TEMPERATURE_TAG));
static MODE_RE: LazyLock<Regex> = LazyLock::new(|| element_regex(MODE_TAG));
static NESTED_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

fn element_regex(tag: &str) -> Regex {
    // Tag names are fixed identifiers, no escaping needed
    Regex::new(&format!(r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>")).expect("static pattern")
}

/// Parsed heater status.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::response::StatusResponse;
///
/// let body = "<response><consigne_piece>18.5</consigne_piece>\
///             <mode_piece>2</mode_piece></response>";
/// let status = StatusResponse::parse(body).unwrap();
/// assert!((status.temperature().celsius() - 18.5).abs() < f32::EPSILON);
/// assert!(status.is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusResponse {
    temperature: Temperature,
    mode: ModeCode,
}

impl StatusResponse {
    /// Creates a status from already decoded values.
    #[must_use]
    pub const fn new(temperature: Temperature, mode: ModeCode) -> Self {
        Self { temperature, mode }
    }

    /// Parses a status fragment.
    ///
    /// The text content of the first `consigne_piece` and `mode_piece`
    /// elements is read; everything else in the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if either element is absent, or
    /// `ParseError::InvalidValue` if its text is not a number.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let temperature_text = element_text(&TEMPERATURE_RE, TEMPERATURE_TAG, body)?;
        let mode_text = element_text(&MODE_RE, MODE_TAG, body)?;

        let temperature =
            temperature_text
                .parse::<Temperature>()
                .map_err(|e| ParseError::InvalidValue {
                    field: TEMPERATURE_TAG.to_string(),
                    message: e.to_string(),
                })?;
        let mode = mode_text.parse::<ModeCode>()?;

        Ok(Self { temperature, mode })
    }

    /// Returns the reported setpoint.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Returns the raw mode code.
    #[must_use]
    pub const fn mode(&self) -> ModeCode {
        self.mode
    }

    /// Returns `true` unless the mode code is the off code.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.mode.is_heating()
    }
}

fn element_text(re: &Regex, tag: &str, body: &str) -> Result<String, ParseError> {
    let captures = re
        .captures(body)
        .ok_or_else(|| ParseError::MissingField(tag.to_string()))?;
    let inner = captures.get(1).map_or("", |m| m.as_str());
    Ok(NESTED_TAG_RE.replace_all(inner, "").into_owned())
}
