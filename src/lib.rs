// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EcoControl` Lib - A Rust library to mirror a Smart EcoControl heater.
//!
//! The heater exposes a tiny embedded web server: one endpoint reports the
//! room setpoint and operating mode as an XML fragment, another accepts a
//! new setpoint. This library polls the first on a fixed interval, keeps the
//! last answer in memory, and projects it onto the heater-cooler
//! characteristics an accessory host expects:
//!
//! | Characteristic | Value |
//! |----------------|-------|
//! | `Active` | `Active` unless the heater reports mode `4` |
//! | `CurrentHeaterCoolerState` | `Heating` or `Inactive`, same rule |
//! | `TargetHeaterCoolerState` | Always `Heat` |
//! | `CurrentTemperature` | Reported setpoint |
//! | `HeatingThresholdTemperature` | Reported setpoint; writes go to the heater |
//!
//! Failures are logged at debug level through `tracing` and otherwise
//! ignored: reads always succeed against the last mirrored values.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use ecocontrol_lib::Heater;
//!
//! #[tokio::main]
//! async fn main() -> ecocontrol_lib::Result<()> {
//!     let heater = Heater::http("192.168.1.60")
//!         .with_poll_interval(Duration::from_secs(10))
//!         .build()?;
//!
//!     // Poll in the background
//!     let _poller = heater.start_polling();
//!
//!     // Ask for 19.5°C; the mirror follows the heater's answer
//!     heater.set_heating_threshold_temperature(19.5).await;
//!
//!     println!("{:?} at {}", heater.active(), heater.current_temperature());
//!     Ok(())
//! }
//! ```
//!
//! ## From host configuration
//!
//! ```no_run
//! use ecocontrol_lib::{Heater, HeaterConfig};
//!
//! # fn example() -> ecocontrol_lib::Result<()> {
//! let config = HeaterConfig::from_json(r#"{ "ip": "192.168.1.60", "polling": 5000 }"#)?;
//! let heater = Heater::from_config(&config)?;
//! # Ok(())
//! # }
//! ```

mod capabilities;
pub mod command;
pub mod config;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod subscription;
pub mod types;

pub use capabilities::{AccessoryInfo, Capabilities, PLATFORM_NAME, PLUGIN_NAME};
pub use command::{Command, SetpointCommand, StatusCommand};
pub use config::HeaterConfig;
pub use device::{Heater, HttpHeaterBuilder, PollerHandle};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig};
pub use response::StatusResponse;
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{Active, CurrentHeaterCoolerState, ModeCode, TargetHeaterCoolerState, Temperature};
