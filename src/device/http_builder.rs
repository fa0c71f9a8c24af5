// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP heater builder.

use std::time::Duration;

use crate::device::Heater;
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};

/// Builder for HTTP heaters.
///
/// Building never touches the network; the mirror fills in once the first
/// poll or setpoint response arrives.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::Heater;
/// use std::time::Duration;
///
/// # fn example() -> ecocontrol_lib::Result<()> {
/// let heater = Heater::http("192.168.1.60")
///     .with_poll_interval(Duration::from_secs(30))
///     .build()?;
/// assert_eq!(heater.poll_interval(), Duration::from_secs(30));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpHeaterBuilder {
    config: HttpConfig,
    poll_interval: Duration,
}

impl HttpHeaterBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            poll_interval: Heater::<HttpClient>::DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the interval between status polls.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Builds the heater.
    ///
    /// # Errors
    ///
    /// Returns error if the poll interval is zero, the host is empty, or the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<Heater<HttpClient>, Error> {
        if self.poll_interval.is_zero() {
            return Err(Error::Config("poll interval must be non-zero".to_string()));
        }
        let client = self.config.into_client().map_err(Error::Protocol)?;

        tracing::debug!(
            base_url = client.base_url(),
            poll_interval = ?self.poll_interval,
            "Heater configured"
        );

        Ok(Heater::new(client, self.poll_interval))
    }
}
