//! HTTP alert dispatch adapter.
//!
//! Implements [`AlertPort`] with a single synchronous POST to the remote
//! listener's fixed `/alert` endpoint:
//!
//! ```text
//!   POST http://<listener>/alert
//!   Content-Type: application/json
//!   {"message":"Alarm Triggered"}
//! ```
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real request over
//!   `esp_idf_svc::http::client::EspHttpConnection` with the configured
//!   timeout.
//! - **all other targets**: records the exact serialized bodies so host
//!   tests can assert on the wire payload, with optional failure
//!   injection.

use std::time::Duration;

use serde::Serialize;

use crate::adapters::wifi::LinkStatus;
use crate::app::ports::AlertPort;
use crate::config::SystemConfig;
use crate::error::NetworkError;

/// JSON body of the alert POST.
#[derive(Serialize)]
struct AlertPayload<'a> {
    message: &'a str,
}

fn payload(message: &str) -> String {
    serde_json::to_string(&AlertPayload { message })
        .expect("alert payload serialization cannot fail")
}

pub struct HttpAlertAdapter {
    url: String,
    timeout: Duration,
    link: LinkStatus,
    #[cfg(not(target_os = "espidf"))]
    sent: Vec<String>,
    #[cfg(not(target_os = "espidf"))]
    fail_with: Option<NetworkError>,
}

impl HttpAlertAdapter {
    pub fn new(config: &SystemConfig, link: LinkStatus) -> Self {
        Self {
            url: config.alert_url(),
            timeout: Duration::from_millis(u64::from(config.alert_timeout_ms)),
            link,
            #[cfg(not(target_os = "espidf"))]
            sent: Vec::new(),
            #[cfg(not(target_os = "espidf"))]
            fail_with: None,
        }
    }

    /// Target URL (diagnostics).
    pub fn url(&self) -> &str {
        &self.url
    }

    // ── Platform-specific send ────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_send(&mut self, body: &str) -> Result<u16, NetworkError> {
        use embedded_svc::http::Status;
        use embedded_svc::http::client::Client as HttpClient;
        use embedded_svc::io::Write;
        use esp_idf_svc::http::client::{Configuration, EspHttpConnection};

        fn map_err(e: esp_idf_svc::io::EspIOError) -> NetworkError {
            if e.0.code() == esp_idf_svc::sys::ESP_ERR_TIMEOUT as i32 {
                NetworkError::Timeout
            } else {
                NetworkError::ConnectionRefused
            }
        }

        let connection = EspHttpConnection::new(&Configuration {
            timeout: Some(self.timeout),
            ..Default::default()
        })
        .map_err(|_| NetworkError::ConnectionRefused)?;
        let mut client = HttpClient::wrap(connection);

        let headers = [("Content-Type", "application/json")];
        let mut request = client.post(&self.url, &headers).map_err(map_err)?;
        request.write_all(body.as_bytes()).map_err(map_err)?;
        request.flush().map_err(map_err)?;

        let response = request.submit().map_err(map_err)?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(NetworkError::Status(status));
        }
        Ok(status)
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_send(&mut self, body: &str) -> Result<u16, NetworkError> {
        self.sent.push(body.to_string());
        match self.fail_with {
            Some(e) => Err(e),
            None => Ok(200),
        }
    }

    // ── Host-side test hooks ──────────────────────────────────

    /// Serialized bodies of every send attempt.
    #[cfg(not(target_os = "espidf"))]
    pub fn sent_bodies(&self) -> &[String] {
        &self.sent
    }

    /// Make every subsequent simulated send fail with `e`.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_fail_with(&mut self, e: Option<NetworkError>) {
        self.fail_with = e;
    }
}

impl AlertPort for HttpAlertAdapter {
    fn is_connected(&self) -> bool {
        self.link.is_up()
    }

    fn send_alert(&mut self, message: &str) -> Result<u16, NetworkError> {
        let body = payload(message);
        self.platform_send(&body)
    }
}
