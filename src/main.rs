//! FireSentry Firmware — Main Entry Point
//!
//! Hexagonal architecture with four periodic task loops sharing one
//! alarm trigger:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  FlameSensor      LedIndicator    ResetButton    LogEventSink  │
//! │  (FlameSensorPort)(IndicatorPort) (ResetInputPort)(EventSink)  │
//! │  WifiAdapter      HttpAlertAdapter                             │
//! │  (Connectivity)   (AlertPort)                                  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │  Sampler ─▶ TriggerHandle ◀─ Notifier · Indicator      │    │
//! │  │            (one mutex)    ◀─ Reset Watcher             │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};

use firesentry::adapters::hardware::{LedIndicator, ResetButton};
use firesentry::adapters::http_alert::HttpAlertAdapter;
use firesentry::adapters::log_sink::LogEventSink;
use firesentry::adapters::wifi::{ConnectivityPort, WifiAdapter};
use firesentry::alarm::policy::DetectionPolicy;
use firesentry::alarm::trigger::TriggerHandle;
use firesentry::app::events::AppEvent;
use firesentry::app::ports::EventSink;
use firesentry::config::SystemConfig;
use firesentry::drivers::hw_init;
use firesentry::pins;
use firesentry::sensors::flame::FlameSensor;
use firesentry::tasks::{
    self, CancellationToken, IndicatorTask, NotifierTask, ResetTask, SamplerTask,
};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("FireSentry v{} starting", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();

    // ── 2. Peripherals ────────────────────────────────────────
    // Peripheral init failure is fatal — abort instead of limping on in a
    // half-configured state.
    hw_init::init_peripherals().map_err(|e| anyhow!("peripheral init failed: {e}"))?;

    let peripherals =
        esp_idf_svc::hal::prelude::Peripherals::take().context("peripherals already taken")?;
    let sysloop = esp_idf_svc::eventloop::EspSystemEventLoop::take()?;
    let nvs = esp_idf_svc::nvs::EspDefaultNvsPartition::take()?;

    // ── 3. Network ────────────────────────────────────────────
    // A dead link must not stop the alarm: the notifier logs and drops
    // alerts until the link comes back.
    let mut wifi = WifiAdapter::new(peripherals.modem, sysloop, nvs)
        .map_err(|e| anyhow!("WiFi driver init failed: {e}"))?;
    let link = wifi.link_status();

    match wifi.set_credentials(&config.wifi_ssid, &config.wifi_password) {
        Ok(()) => {
            if let Err(e) = wifi.connect() {
                warn!("WiFi connect failed ({e}), continuing without network");
            }
        }
        Err(e) => warn!("WiFi credentials rejected ({e}), continuing without network"),
    }

    // ── 4. Shared trigger + tasks ─────────────────────────────
    let trigger = TriggerHandle::new();
    let cancel = CancellationToken::new();

    let sampler = SamplerTask::new(
        FlameSensor::new(pins::FLAME_ADC_CHANNEL),
        DetectionPolicy::from_config(&config),
        trigger.clone(),
        LogEventSink::new(),
        Duration::from_millis(config.sample_interval_ms.into()),
    );
    let notifier = NotifierTask::new(
        trigger.clone(),
        HttpAlertAdapter::new(&config, link),
        LogEventSink::new(),
        config.alert_message.clone(),
        Duration::from_millis(config.notify_interval_ms.into()),
    );
    let indicator = IndicatorTask::new(
        trigger.clone(),
        LedIndicator::new(),
        Duration::from_millis(config.blink_interval_ms.into()),
    );
    let reset = ResetTask::new(
        trigger.clone(),
        ResetButton::new(),
        LedIndicator::new(),
        LogEventSink::new(),
        Duration::from_millis(config.reset_poll_interval_ms.into()),
    );

    let _handles = [
        tasks::spawn("sampler\0", sampler, cancel.clone()),
        tasks::spawn("notifier\0", notifier, cancel.clone()),
        tasks::spawn("indicator\0", indicator, cancel.clone()),
        tasks::spawn("reset\0", reset, cancel.clone()),
    ];
    LogEventSink::new().emit(&AppEvent::Started);

    // ── 5. Orchestrator parks ─────────────────────────────────
    // The remaining job of this thread is the WiFi reconnect poll.
    loop {
        wifi.poll();
        std::thread::sleep(Duration::from_secs(1));
    }
}
