// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for the heater.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig - Connection parameters for the heater
// ============================================================================

/// Configuration for reaching the heater over HTTP.
///
/// The heater's web server has no authentication and no TLS. Requests carry
/// no timeout unless one is set here, so a hung heater leaves a request
/// pending for as long as the transport allows.
///
/// # Examples
///
/// ```
/// use ecocontrol_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.60");
/// assert_eq!(config.base_url(), "http://192.168.1.60");
///
/// let config = HttpConfig::new("192.168.1.60")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.60:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the heater
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the request timeout, if one is set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self
            .host
            .strip_prefix("http://")
            .unwrap_or(&self.host)
            .trim_end_matches('/');
        if self.port == Self::DEFAULT_PORT {
            format!("http://{host}")
        } else {
            format!("http://{host}:{}", self.port)
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or an `https://` URL, or if the
    /// HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        if host
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
        {
            return Err(ProtocolError::InvalidAddress(format!(
                "{host}: the heater only serves plain HTTP"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url(),
            client,
        })
    }
}

// ============================================================================
// HttpClient - Sends requests to the heater
// ============================================================================

/// HTTP client for the heater's embedded web server.
///
/// # Examples
///
/// ```no_run
/// use ecocontrol_lib::command::StatusCommand;
/// use ecocontrol_lib::protocol::{HttpClient, Protocol};
///
/// # async fn example() -> ecocontrol_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.60")?;
/// let response = client.send_command(&StatusCommand).await?;
/// let status = response.parse_status()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// The host may be given with or without an `http://` prefix, and may
    /// carry a port (`"192.168.1.60:8080"`).
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or an `https://` URL, or if the
    /// HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the heater.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a path and query.
    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Protocol for HttpClient {
    fn send_raw(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send {
        let url = self.build_url(path);

        async move {
            tracing::debug!(url = %url, "Sending HTTP request");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(ProtocolError::Http)?;

            let status = response.status();
            if status != StatusCode::OK {
                // Body is dropped unread
                return Err(ProtocolError::BadStatus(status.as_u16()));
            }

            let body = response.text().await.map_err(ProtocolError::Http)?;

            tracing::trace!(body = %body, "Received HTTP response");

            Ok(CommandResponse::new(body))
        }
    }
}
