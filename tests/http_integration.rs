// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the heater over HTTP using wiremock.

use std::time::Duration;

use ecocontrol_lib::command::{SetpointCommand, StatusCommand};
use ecocontrol_lib::protocol::{HttpClient, HttpConfig, Protocol};
use ecocontrol_lib::types::{Active, CurrentHeaterCoolerState, Temperature};
use ecocontrol_lib::{Error, Heater, HeaterConfig, ProtocolError, Subscribable};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn status_body(temperature: &str, mode: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
  <nom_piece>Salon</nom_piece>
  <consigne_piece>{temperature}</consigne_piece>
  <mode_piece>{mode}</mode_piece>
</response>"#
    )
}

fn heater_for(server: &MockServer) -> Heater<HttpClient> {
    let address = server.address();
    Heater::http(address.ip().to_string())
        .with_port(address.port())
        .with_poll_interval(Duration::from_millis(100))
        .build()
        .unwrap()
}

async fn mount_status(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/xml/status-piece.xml"))
        .respond_with(template)
        .mount(server)
        .await;
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn send_status_command() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(status_body("19.0", "2")),
        )
        .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let response = client.send_command(&StatusCommand).await.unwrap();

        assert!(response.body().contains("<consigne_piece>19.0</consigne_piece>"));
        let status = response.parse_status().unwrap();
        assert!(status.is_on());
    }

    #[tokio::test]
    async fn send_setpoint_command() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cgi/consigne_piece.cgi"))
            .and(query_param("newConsignePiece", "182"))
            .respond_with(ResponseTemplate::new(200).set_body_string(status_body("18.2", "2")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .into_client()
            .unwrap();
        let cmd = SetpointCommand::new(Temperature::new(18.2).unwrap());

        let response = client.send_command(&cmd).await.unwrap();
        assert!(response.body().contains("18.2"));
    }

    #[tokio::test]
    async fn non_ok_status_is_an_error() {
        let mock_server = MockServer::start().await;
        mount_status(&mock_server, ResponseTemplate::new(404)).await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let result = client.send_command(&StatusCommand).await;

        assert!(matches!(result, Err(ProtocolError::BadStatus(404))));
    }

    #[tokio::test]
    async fn other_success_codes_are_errors_too() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(204).set_body_string(status_body("19.0", "2")),
        )
        .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let result = client.send_command(&StatusCommand).await;

        assert!(matches!(result, Err(ProtocolError::BadStatus(204))));
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        let mock_server = MockServer::start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        let client = HttpClient::new(uri).unwrap();
        let result = client.send_command(&StatusCommand).await;

        assert!(matches!(result, Err(ProtocolError::Http(_))));
    }

    #[tokio::test]
    async fn configured_timeout_applies() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200)
                .set_body_string(status_body("19.0", "2"))
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .with_timeout(Duration::from_millis(100))
            .into_client()
            .unwrap();
        let result = client.send_command(&StatusCommand).await;

        assert!(matches!(result, Err(ProtocolError::Http(e)) if e.is_timeout()));
    }
}

// ============================================================================
// Heater Tests
// ============================================================================

mod heater {
    use super::*;

    #[tokio::test]
    async fn poll_mirrors_heating_status() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(status_body("18.5", "2")),
        )
        .await;

        let heater = heater_for(&mock_server);
        heater.fetch_status().await;

        assert!((heater.current_temperature() - 18.5).abs() < f32::EPSILON);
        assert!((heater.heating_threshold_temperature() - 18.5).abs() < f32::EPSILON);
        assert_eq!(
            heater.current_heater_cooler_state(),
            CurrentHeaterCoolerState::Heating
        );
        assert_eq!(heater.active(), Active::Active);
    }

    #[tokio::test]
    async fn poll_with_mode_four_reads_inactive() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(status_body("20.0", "4")),
        )
        .await;

        let heater = heater_for(&mock_server);
        heater.fetch_status().await;

        assert_eq!(heater.active(), Active::Inactive);
        assert_eq!(
            heater.current_heater_cooler_state(),
            CurrentHeaterCoolerState::Inactive
        );
    }

    #[tokio::test]
    async fn server_error_keeps_previous_state() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/xml/status-piece.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(status_body("18.5", "2")))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        mount_status(&mock_server, ResponseTemplate::new(500)).await;

        let heater = heater_for(&mock_server);
        heater.fetch_status().await;
        let before = heater.state();

        heater.fetch_status().await;
        assert_eq!(heater.state(), before);
    }

    #[tokio::test]
    async fn malformed_body_keeps_previous_state() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200)
                .set_body_string("<response><consigne_piece>22.0</consigne_piece></response>"),
        )
        .await;

        let heater = heater_for(&mock_server);
        let before = heater.state();

        let result = heater.refresh_status().await;
        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(heater.state(), before);

        // The fire-and-forget variant swallows the same failure
        heater.fetch_status().await;
        assert_eq!(heater.state(), before);
    }

    #[tokio::test]
    async fn unreachable_heater_keeps_previous_state() {
        let mock_server = MockServer::start().await;
        let heater = heater_for(&mock_server);
        drop(mock_server);

        let before = heater.state();
        heater.fetch_status().await;
        heater.set_temperature(19.0).await;
        assert_eq!(heater.state(), before);
    }

    #[tokio::test]
    async fn threshold_write_sends_deci_degrees() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/consigne_piece.cgi"))
            .and(query_param("newConsignePiece", "195"))
            .respond_with(ResponseTemplate::new(200).set_body_string(status_body("19.5", "2")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let heater = heater_for(&mock_server);
        heater.set_heating_threshold_temperature(19.5).await;

        assert!((heater.heating_threshold_temperature() - 19.5).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn threshold_write_mirrors_heater_answer() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/consigne_piece.cgi"))
            .respond_with(ResponseTemplate::new(200).set_body_string(status_body("18.0", "4")))
            .mount(&mock_server)
            .await;

        let heater = heater_for(&mock_server);
        heater.set_heating_threshold_temperature(21.0).await;

        assert!((heater.current_temperature() - 18.0).abs() < f32::EPSILON);
        assert_eq!(heater.active(), Active::Inactive);
    }

    #[tokio::test]
    async fn later_response_wins() {
        let mock_server = MockServer::start().await;
        // The poll is issued first but answers last
        mount_status(
            &mock_server,
            ResponseTemplate::new(200)
                .set_body_string(status_body("18.0", "4"))
                .set_delay(Duration::from_millis(300)),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/cgi/consigne_piece.cgi"))
            .respond_with(ResponseTemplate::new(200).set_body_string(status_body("21.0", "2")))
            .mount(&mock_server)
            .await;

        let heater = heater_for(&mock_server);
        tokio::join!(heater.fetch_status(), heater.set_temperature(21.0));

        assert!((heater.current_temperature() - 18.0).abs() < f32::EPSILON);
        assert_eq!(heater.active(), Active::Inactive);
    }

    #[tokio::test]
    async fn later_response_wins_other_order() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(status_body("18.0", "4")),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/cgi/consigne_piece.cgi"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(status_body("21.0", "2"))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&mock_server)
            .await;

        let heater = heater_for(&mock_server);
        tokio::join!(heater.fetch_status(), heater.set_temperature(21.0));

        assert!((heater.current_temperature() - 21.0).abs() < f32::EPSILON);
        assert_eq!(heater.active(), Active::Active);
    }

    #[tokio::test]
    async fn poller_updates_state_and_notifies() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(status_body("20.5", "1")),
        )
        .await;

        let heater = heater_for(&mock_server);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        heater.on_temperature_changed(move |celsius| {
            let _ = tx.send(celsius);
        });

        let poller = heater.start_polling();
        let celsius = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        poller.stop();

        assert!((celsius - 20.5).abs() < f32::EPSILON);
        assert_eq!(heater.active(), Active::Active);
    }

    #[tokio::test]
    async fn from_config_reaches_heater() {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            ResponseTemplate::new(200).set_body_string(status_body("17.5", "3")),
        )
        .await;

        let address = mock_server.address();
        let json = format!(r#"{{ "ip": "{}:{}", "polling": 1000 }}"#, address.ip(), address.port());
        let config = HeaterConfig::from_json(&json).unwrap();
        let heater = Heater::from_config(&config).unwrap();

        assert_eq!(heater.poll_interval(), Duration::from_secs(1));
        let state = heater.refresh_status().await.unwrap();
        assert!(state.is_on());
        assert!((state.temperature() - 17.5).abs() < f32::EPSILON);
    }
}
