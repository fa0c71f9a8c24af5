// SPDX-License-Identifier: MPL-2.0

//! Polling demo.
//!
//! Polls a heater, prints every change, and optionally sends one setpoint.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example poll -- <heater_ip> [polling_ms] [setpoint]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Watch the heater every 5 seconds
//! cargo run --example poll -- 192.168.1.60 5000
//!
//! # Watch and ask for 19.5°C
//! RUST_LOG=ecocontrol_lib=debug cargo run --example poll -- 192.168.1.60 5000 19.5
//! ```

use std::env;
use std::time::Duration;

use ecocontrol_lib::{Heater, HeaterConfig, Subscribable};

fn init_logging() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let Some(ip) = args.get(1) else {
        eprintln!("Usage: {} <heater_ip> [polling_ms] [setpoint]", args[0]);
        std::process::exit(1);
    };

    let mut config = HeaterConfig::new(ip.as_str());
    if let Some(polling) = args.get(2) {
        config.polling = polling.parse()?;
    }
    let setpoint = args.get(3).map(|s| s.parse::<f32>()).transpose()?;

    let heater = Heater::from_config(&config)?;
    let info = heater.accessory_info();
    println!(
        "{} {} ({}) at {} every {:?}",
        info.manufacturer,
        info.model,
        info.serial_number,
        config.ip,
        heater.poll_interval()
    );

    heater.on_active_changed(|active| println!("Active: {active:?}"));
    heater.on_temperature_changed(|celsius| println!("Temperature: {celsius:.1}°C"));

    let poller = heater.start_polling();

    if let Some(target) = setpoint {
        heater.set_heating_threshold_temperature(target).await;
    }

    tokio::signal::ctrl_c().await?;
    poller.stop();

    println!(
        "Last state: {:?}, {:?}, {:.1}°C",
        heater.active(),
        heater.current_heater_cooler_state(),
        heater.current_temperature()
    );
    Ok(())
}
