// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level heater abstraction.
//!
//! A [`Heater`] mirrors the heater's state and projects it onto the
//! heater-cooler characteristics. Reads never touch the network; they answer
//! from the last response received. Network work happens in two places:
//!
//! - the poller started by [`Heater::start_polling`], which fetches the
//!   status fragment once per poll interval;
//! - setpoint writes through [`Heater::set_heating_threshold_temperature`].
//!
//! Both paths overwrite the mirror with whatever the heater answered. If a
//! poll and a setpoint write are in flight together, the response handled
//! last wins, regardless of which request was sent first.
//!
//! ```no_run
//! use ecocontrol_lib::Heater;
//! use ecocontrol_lib::types::Active;
//!
//! # async fn example() -> ecocontrol_lib::Result<()> {
//! let heater = Heater::http("192.168.1.60").build()?;
//! let _poller = heater.start_polling();
//!
//! heater.set_heating_threshold_temperature(19.5).await;
//!
//! if heater.active() == Active::Active {
//!     println!("heating to {}", heater.heating_threshold_temperature());
//! }
//! # Ok(())
//! # }
//! ```

mod http_builder;
mod poller;

pub use http_builder::HttpHeaterBuilder;
pub use poller::PollerHandle;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::capabilities::{AccessoryInfo, Capabilities};
use crate::command::{Command, SetpointCommand, StatusCommand};
use crate::config::HeaterConfig;
use crate::error::Error;
use crate::protocol::{CommandResponse, HttpClient, HttpConfig, Protocol};
use crate::state::{DeviceState, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::{Active, CurrentHeaterCoolerState, TargetHeaterCoolerState, Temperature};

/// A Smart EcoControl heater.
///
/// Cloning a `Heater` is cheap and yields a handle to the same mirror,
/// transport and subscriptions.
///
/// # Type Parameter
///
/// `P` is the transport; [`HttpClient`] for a real heater.
#[derive(Debug)]
pub struct Heater<P: Protocol> {
    protocol: Arc<P>,
    state: Arc<RwLock<DeviceState>>,
    callbacks: Arc<CallbackRegistry>,
    capabilities: Capabilities,
    info: AccessoryInfo,
    poll_interval: Duration,
}

impl<P: Protocol> Clone for Heater<P> {
    fn clone(&self) -> Self {
        Self {
            protocol: Arc::clone(&self.protocol),
            state: Arc::clone(&self.state),
            callbacks: Arc::clone(&self.callbacks),
            capabilities: self.capabilities.clone(),
            info: self.info.clone(),
            poll_interval: self.poll_interval,
        }
    }
}

impl Heater<HttpClient> {
    /// Starts building an HTTP heater for the given host.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpHeaterBuilder {
        HttpHeaterBuilder::new(HttpConfig::new(host))
    }

    /// Starts building an HTTP heater from a full HTTP configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpHeaterBuilder {
        HttpHeaterBuilder::new(config)
    }

    /// Creates an HTTP heater from host platform configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(config: &HeaterConfig) -> Result<Self, Error> {
        config.validate()?;
        Self::http_config(config.http_config())
            .with_poll_interval(config.poll_interval())
            .build()
    }
}

impl<P: Protocol> Heater<P> {
    /// Default interval between status polls.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

    /// Creates a heater on top of any transport.
    ///
    /// The mirror starts as off at 20°C until the first response arrives.
    #[must_use]
    pub fn new(protocol: P, poll_interval: Duration) -> Self {
        Self {
            protocol: Arc::new(protocol),
            state: Arc::new(RwLock::new(DeviceState::new())),
            callbacks: Arc::new(CallbackRegistry::new()),
            capabilities: Capabilities::smart_ecocontrol(),
            info: AccessoryInfo::default(),
            poll_interval,
        }
    }

    /// Returns the declared characteristic properties.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the accessory identity.
    #[must_use]
    pub fn accessory_info(&self) -> &AccessoryInfo {
        &self.info
    }

    /// Returns the interval between status polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns a snapshot of the mirrored state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        *self.state.read()
    }

    // ========== Device Client ==========

    /// Fetches the status fragment and updates the mirror.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the heater does not answer
    /// `200 OK`, or the body lacks a readable setpoint or mode. The mirror
    /// is left untouched in every error case.
    pub async fn refresh_status(&self) -> Result<DeviceState, Error> {
        let response = self.send(&StatusCommand).await?;
        self.apply_response(&response)
    }

    /// Fetches the status fragment, logging and discarding any failure.
    pub async fn fetch_status(&self) {
        match self.refresh_status().await {
            Ok(state) => {
                tracing::debug!(
                    is_on = state.is_on(),
                    temperature = state.temperature(),
                    "Heater status refreshed"
                );
            }
            Err(e) => {
                tracing::debug!(error = %e, "Heater status poll failed");
            }
        }
    }

    /// Sends a new setpoint and updates the mirror from the heater's answer.
    ///
    /// The mirror takes the values the heater reports back, which may still
    /// show the previous setpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the target is not a finite number, or for the same
    /// reasons as [`refresh_status`](Self::refresh_status).
    pub async fn request_temperature(&self, target: f32) -> Result<DeviceState, Error> {
        let target = Temperature::new(target)?;
        let response = self.send(&SetpointCommand::new(target)).await?;
        self.apply_response(&response)
    }

    /// Sends a new setpoint, logging and discarding any failure.
    pub async fn set_temperature(&self, target: f32) {
        match self.request_temperature(target).await {
            Ok(state) => {
                tracing::debug!(
                    requested = target,
                    is_on = state.is_on(),
                    temperature = state.temperature(),
                    "Heater setpoint sent"
                );
            }
            Err(e) => {
                tracing::debug!(requested = target, error = %e, "Heater setpoint write failed");
            }
        }
    }

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<CommandResponse, Error> {
        self.protocol
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }

    /// Parses a response and overwrites the mirror from it.
    ///
    /// The body is fully parsed before the lock is taken, so a bad body
    /// never leaves the mirror half updated. Subscribers run after the lock
    /// is released.
    fn apply_response(&self, response: &CommandResponse) -> Result<DeviceState, Error> {
        let status = response.parse_status()?;

        let (snapshot, changes) = {
            let mut state = self.state.write();
            let changes = state.update_from(&status);
            (*state, changes)
        };

        if !changes.is_empty() {
            self.callbacks.dispatch(&StateChange::Batch(changes));
        }

        Ok(snapshot)
    }

    // ========== Capability Adapter ==========

    /// Returns the `Active` characteristic.
    #[must_use]
    pub fn active(&self) -> Active {
        tracing::debug!("Triggered GET Active");
        Active::from(self.state.read().is_on())
    }

    /// Handles a write to `Active`.
    ///
    /// The heater decides on its own when to run, so the value is only
    /// logged.
    pub fn set_active(&self, value: Active) {
        tracing::debug!(value = value.as_u8(), "Triggered SET Active");
    }

    /// Returns the `CurrentHeaterCoolerState` characteristic.
    #[must_use]
    pub fn current_heater_cooler_state(&self) -> CurrentHeaterCoolerState {
        tracing::debug!("Triggered GET CurrentHeaterCoolerState");
        CurrentHeaterCoolerState::from(self.state.read().is_on())
    }

    /// Returns the `TargetHeaterCoolerState` characteristic, always `Heat`.
    #[must_use]
    pub fn target_heater_cooler_state(&self) -> TargetHeaterCoolerState {
        tracing::debug!("Triggered GET TargetHeaterCoolerState");
        TargetHeaterCoolerState::Heat
    }

    /// Handles a write to `TargetHeaterCoolerState`.
    ///
    /// The heater only heats, so the value is only logged.
    pub fn set_target_heater_cooler_state(&self, value: TargetHeaterCoolerState) {
        tracing::debug!(value = %value, "Triggered SET TargetHeaterCoolerState");
    }

    /// Returns the `CurrentTemperature` characteristic.
    #[must_use]
    pub fn current_temperature(&self) -> f32 {
        tracing::debug!("Triggered GET CurrentTemperature");
        self.state.read().temperature()
    }

    /// Returns the `HeatingThresholdTemperature` characteristic.
    ///
    /// Backed by the same value as [`current_temperature`](Self::current_temperature):
    /// the heater reports only its setpoint.
    #[must_use]
    pub fn heating_threshold_temperature(&self) -> f32 {
        tracing::debug!("Triggered GET HeatingThresholdTemperature");
        self.state.read().temperature()
    }

    /// Handles a write to `HeatingThresholdTemperature`.
    ///
    /// The value is sent as is; the declared range in
    /// [`Capabilities`] is not enforced.
    pub async fn set_heating_threshold_temperature(&self, value: f32) {
        tracing::debug!(value, "Triggered SET HeatingThresholdTemperature");
        self.set_temperature(value).await;
    }
}

impl<P: Protocol> Subscribable for Heater<P> {
    fn on_active_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Active) + Send + Sync + 'static,
    {
        self.callbacks.on_active_changed(callback)
    }

    fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.callbacks.on_temperature_changed(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::future::Future;

    use parking_lot::Mutex;

    use super::*;
    use crate::error::{ParseError, ProtocolError};

    /// Canned reply for the scripted transport.
    pub(crate) enum Reply {
        Body(String),
        Status(u16),
        Unreachable,
    }

    /// Transport that answers from a script and records request paths.
    pub(crate) struct ScriptedProtocol {
        replies: Mutex<VecDeque<Reply>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedProtocol {
        pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn requests(&self) -> Vec<String> {
            self.requests.lock().clone()
        }
    }

    impl Protocol for ScriptedProtocol {
        fn send_raw(
            &self,
            path: &str,
        ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send {
            self.requests.lock().push(path.to_string());
            let reply = self.replies.lock().pop_front();
            async move {
                match reply {
                    Some(Reply::Body(body)) => Ok(CommandResponse::new(body)),
                    Some(Reply::Status(code)) => Err(ProtocolError::BadStatus(code)),
                    Some(Reply::Unreachable) | None => Err(ProtocolError::InvalidAddress(
                        "connection refused".to_string(),
                    )),
                }
            }
        }
    }

    pub(crate) fn body(temperature: &str, mode: &str) -> Reply {
        Reply::Body(format!(
            "<response><consigne_piece>{temperature}</consigne_piece>\
             <mode_piece>{mode}</mode_piece></response>"
        ))
    }

    fn heater(replies: impl IntoIterator<Item = Reply>) -> Heater<ScriptedProtocol> {
        Heater::new(ScriptedProtocol::new(replies), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn poll_mirrors_heating_status() {
        let heater = heater([body("18.5", "2")]);
        heater.fetch_status().await;

        assert!((heater.current_temperature() - 18.5).abs() < f32::EPSILON);
        assert_eq!(
            heater.current_heater_cooler_state(),
            CurrentHeaterCoolerState::Heating
        );
        assert_eq!(heater.active(), Active::Active);
    }

    #[tokio::test]
    async fn mode_four_reads_inactive() {
        let heater = heater([body("19.0", "4")]);
        heater.fetch_status().await;

        assert_eq!(heater.active(), Active::Inactive);
        assert_eq!(
            heater.current_heater_cooler_state(),
            CurrentHeaterCoolerState::Inactive
        );
    }

    #[tokio::test]
    async fn every_other_mode_reads_active() {
        for mode in ["0", "1", "2", "3", "5", "12"] {
            let heater = heater([body("19.0", mode)]);
            heater.fetch_status().await;
            assert_eq!(heater.active(), Active::Active, "mode {mode}");
        }
    }

    #[tokio::test]
    async fn bad_status_leaves_state_untouched() {
        let heater = heater([body("18.5", "2"), Reply::Status(500)]);
        heater.fetch_status().await;
        let before = heater.state();

        let result = heater.refresh_status().await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::BadStatus(500)))
        ));
        assert_eq!(heater.state(), before);
    }

    #[tokio::test]
    async fn transport_failure_leaves_state_untouched() {
        let heater = heater([Reply::Unreachable]);
        let before = heater.state();
        heater.fetch_status().await;
        assert_eq!(heater.state(), before);
    }

    #[tokio::test]
    async fn missing_mode_leaves_state_untouched() {
        let heater = heater([Reply::Body(
            "<consigne_piece>21.0</consigne_piece>".to_string(),
        )]);
        let before = heater.state();

        let result = heater.refresh_status().await;
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::MissingField(ref f))) if f == "mode_piece"
        ));
        assert_eq!(heater.state(), before);
    }

    #[tokio::test]
    async fn setpoint_uses_deci_degrees() {
        let heater = heater([body("19.5", "2")]);
        heater.set_heating_threshold_temperature(19.5).await;

        assert_eq!(
            heater.protocol.requests(),
            vec!["/cgi/consigne_piece.cgi?newConsignePiece=195".to_string()]
        );
        assert!((heater.heating_threshold_temperature() - 19.5).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn setpoint_mirrors_reply_not_request() {
        // Heater still reports the old setpoint
        let heater = heater([body("18.0", "2")]);
        heater.set_temperature(21.0).await;

        assert!((heater.current_temperature() - 18.0).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn setpoint_outside_declared_range_is_sent() {
        let heater = heater([body("25.0", "2")]);
        heater.set_heating_threshold_temperature(25.0).await;
        assert_eq!(
            heater.protocol.requests(),
            vec!["/cgi/consigne_piece.cgi?newConsignePiece=250".to_string()]
        );
    }

    #[tokio::test]
    async fn non_finite_setpoint_is_not_sent() {
        let heater = heater([]);
        let result = heater.request_temperature(f32::NAN).await;
        assert!(matches!(result, Err(Error::Value(_))));
        assert!(heater.protocol.requests().is_empty());
    }

    #[tokio::test]
    async fn target_state_is_always_heat() {
        let heater = heater([]);
        heater.set_target_heater_cooler_state(TargetHeaterCoolerState::Cool);
        assert_eq!(
            heater.target_heater_cooler_state(),
            TargetHeaterCoolerState::Heat
        );
    }

    #[tokio::test]
    async fn set_active_has_no_effect() {
        let heater = heater([]);
        heater.set_active(Active::Active);
        assert_eq!(heater.active(), Active::Inactive);
        assert!(heater.protocol.requests().is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_only_real_changes() {
        let heater = heater([body("18.5", "2"), body("18.5", "4")]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        heater.on_state_changed(move |change| {
            if !change.is_batch() {
                seen_clone.lock().push(change.clone());
            }
        });

        heater.fetch_status().await;
        heater.fetch_status().await;

        assert_eq!(
            *seen.lock(),
            vec![
                StateChange::Temperature(18.5),
                StateChange::Active(true),
                StateChange::Active(false),
            ]
        );
    }

    #[tokio::test]
    async fn clones_share_the_mirror() {
        let heater = heater([body("17.5", "1")]);
        let other = heater.clone();
        other.fetch_status().await;
        assert!((heater.current_temperature() - 17.5).abs() < f32::EPSILON);
    }
}
