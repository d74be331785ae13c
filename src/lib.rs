// Public modules
pub mod bus;
pub mod config;
pub mod errors;
pub mod messages;
pub mod scheduler;
pub mod sensors;

// Re-export commonly used types
pub use bus::RegisterBus;
pub use config::{load_hub_config, HubConfig};
pub use errors::{HubError, HubResult, SensorError, SensorResult};
pub use scheduler::{run_sampler, SamplerSettings, SamplerStats};
pub use sensors::{AccelRange, Fxos8700, Sample};

use bus::i2c::I2CBus;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Device identifier stamped into every message header
pub const HUB_DEVICE_ID: &str = "fxos8700_hub";

/// Initialize tracing with default configuration.
///
/// Logs go to stderr; stdout carries the sample stream.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Run the hub from `hub.toml` in `config_path` until Ctrl-C or until
/// `max_samples` readings have been emitted
pub async fn run_sensor_hub(config_path: &str, max_samples: Option<u64>) -> HubResult<SamplerStats> {
    info!("[FxosSensorHub] starting up...");

    let cfg = load_hub_config(config_path)?;
    info!(
        "[config] sensor '{}' on bus '{}' ({})",
        cfg.sensor.id, cfg.bus.id, cfg.bus.path
    );

    // Reject a bad range before the bus is opened
    let range = AccelRange::from_g(cfg.sensor.range_g.unwrap_or(2))?;

    let bus = I2CBus::open(&cfg.bus.path, cfg.sensor.address)?;
    let mut driver = Fxos8700::with_range(bus, cfg.sensor.address, range)?;

    match driver.temperature() {
        Ok(t) => info!("[{}] temperature: {} C", cfg.sensor.id, t),
        Err(e) => warn!("[{}] temperature unavailable: {}", cfg.sensor.id, e),
    }

    let settings = SamplerSettings {
        device_id: HUB_DEVICE_ID.to_string(),
        sensor_id: cfg.sensor.id.clone(),
        frequency: cfg.sensor.frequency(),
        max_samples,
    };
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("[main] Ctrl-C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let mut stdout = std::io::stdout();
    let result = run_sampler(&mut driver, &settings, &mut stdout, shutdown).await;

    let bus = driver.release();
    info!("[i2c] closing {} ({:#04x})", bus.path(), bus.address());
    drop(bus);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, body: &str) -> String {
        let dir = std::env::temp_dir().join(format!("fxos8700_hub_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(config::CONFIG_FILE), body).unwrap();
        dir.to_string_lossy().into_owned()
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn test_hub_future_is_send() {
        let fut = run_sensor_hub("config", Some(1));
        assert_send(&fut);
    }

    #[tokio::test]
    async fn test_bad_range_rejected_before_bus_open() {
        let dir = write_config(
            "bad_range",
            r#"
            [bus]
            id = "i2c9"
            type = "i2c"
            path = "/dev/i2c-does-not-exist"

            [sensor]
            id = "accelmag0"
            range_g = 3
            "#,
        );

        let result = run_sensor_hub(&dir, Some(1)).await;
        assert!(matches!(
            result,
            Err(HubError::Sensor(SensorError::InvalidConfiguration { .. }))
        ));
    }

    #[tokio::test]
    async fn test_missing_bus_reported() {
        let dir = write_config(
            "missing_bus",
            r#"
            [bus]
            id = "i2c9"
            type = "i2c"
            path = "/dev/i2c-does-not-exist"

            [sensor]
            id = "accelmag0"
            "#,
        );

        let result = run_sensor_hub(&dir, Some(1)).await;
        assert!(matches!(result, Err(HubError::Bus(_))));
    }
}
