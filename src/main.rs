use fxos8700_sensorhub::config::config_dir;
use fxos8700_sensorhub::{init_tracing, run_sensor_hub};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    init_tracing();

    // Get config path (default or CONFIG_PATH override)
    let config_path = config_dir();
    let max_samples = std::env::var("SAMPLE_COUNT")
        .ok()
        .map(|s| s.parse::<u64>())
        .transpose()?;

    tracing::info!("[main] Configuration path: {}", config_path);

    // Run the sensor hub
    let stats = run_sensor_hub(&config_path, max_samples).await?;
    tracing::info!("[main] done: {} sample(s)", stats.samples);
    Ok(())
}
