// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host platform configuration.
//!
//! The host hands each platform a JSON block from its own configuration
//! file. For this heater the block names the heater's address and the poll
//! interval in milliseconds:
//!
//! ```json
//! { "platform": "Smart EcoControl", "name": "Living room", "ip": "192.168.1.60", "polling": 10000 }
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::capabilities::PLATFORM_NAME;
use crate::error::Error;
use crate::protocol::HttpConfig;

/// Poll interval used when the configuration omits `polling`.
const DEFAULT_POLLING_MS: u64 = 10_000;

fn default_polling() -> u64 {
    DEFAULT_POLLING_MS
}

/// Heater platform configuration.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::config::HeaterConfig;
/// use std::time::Duration;
///
/// let config = HeaterConfig::from_json(r#"{ "ip": "192.168.1.60", "polling": 5000 }"#).unwrap();
/// assert_eq!(config.ip, "192.168.1.60");
/// assert_eq!(config.poll_interval(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaterConfig {
    /// Platform identifier; the host fills this in.
    #[serde(default)]
    pub platform: Option<String>,

    /// Display name for the accessory.
    #[serde(default)]
    pub name: Option<String>,

    /// Heater address, an IP or hostname with optional `:port`.
    pub ip: String,

    /// Interval between status polls, in milliseconds.
    #[serde(default = "default_polling")]
    pub polling: u64,
}

impl HeaterConfig {
    /// Creates a configuration for the given address with the default
    /// poll interval.
    #[must_use]
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            platform: Some(PLATFORM_NAME.to_string()),
            name: None,
            ip: ip.into(),
            polling: DEFAULT_POLLING_MS,
        }
    }

    /// Parses a configuration block.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed or fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the address is set and the poll interval is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        if self.ip.trim().is_empty() {
            return Err(Error::Config("`ip` must not be empty".to_string()));
        }
        if self.polling == 0 {
            return Err(Error::Config("`polling` must be greater than 0".to_string()));
        }
        if let Some(platform) = &self.platform
            && platform != PLATFORM_NAME
        {
            tracing::warn!(
                platform = %platform,
                expected = PLATFORM_NAME,
                "Configuration block names a different platform"
            );
        }
        Ok(())
    }

    /// Returns the poll interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.polling)
    }

    /// Returns the accessory display name, falling back to the platform name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLATFORM_NAME)
    }

    /// Returns the HTTP configuration for the heater's address.
    ///
    /// An address of the form `host:port` is split so the port is kept.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let address = self.ip.trim();
        let address = address.strip_prefix("http://").unwrap_or(address);
        match address.rsplit_once(':') {
            Some((host, port)) if !host.contains(':') => match port.parse::<u16>() {
                Ok(port) => HttpConfig::new(host).with_port(port),
                Err(_) => HttpConfig::new(address),
            },
            _ => HttpConfig::new(address),
        }
    }
}
