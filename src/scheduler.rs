use crate::bus::RegisterBus;
use crate::errors::HubResult;
use crate::messages::{Header, SampleMessage};
use crate::sensors::Fxos8700;
use std::future::Future;
use std::io::Write;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Loop parameters taken from the `[sensor]` config
#[derive(Debug, Clone)]
pub struct SamplerSettings {
    pub device_id: String,
    pub sensor_id: String,
    pub frequency: u32,
    /// Stop after this many successful samples; run until shutdown if `None`
    pub max_samples: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SamplerStats {
    pub samples: u64,
    pub read_errors: u64,
}

/// Samples `driver` at the configured rate and writes one JSON line per
/// reading to `out`.
///
/// Read errors are logged and counted; the next tick tries again. Returns
/// when `max_samples` is reached, when `shutdown` resolves, or when writing
/// to `out` fails.
pub async fn run_sampler<B, W, S>(
    driver: &mut Fxos8700<B>,
    settings: &SamplerSettings,
    out: &mut W,
    shutdown: S,
) -> HubResult<SamplerStats>
where
    B: RegisterBus,
    W: Write,
    S: Future<Output = ()>,
{
    let mut ticker = interval(tick_period(settings.frequency));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut stats = SamplerStats::default();
    info!(
        "[{}] Starting sensor task at {}Hz",
        settings.sensor_id, settings.frequency
    );

    loop {
        if settings.max_samples.is_some_and(|max| stats.samples >= max) {
            debug!("[{}] sample limit reached", settings.sensor_id);
            break;
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("[{}] shutdown requested", settings.sensor_id);
                break;
            }
            _ = ticker.tick() => {}
        }

        // Register transfers are a few hundred microseconds; run them inline
        match driver.sample() {
            Ok(sample) => {
                stats.samples += 1;
                let header = Header::new(
                    settings.device_id.clone(),
                    settings.sensor_id.clone(),
                    stats.samples,
                );
                let line = SampleMessage::new(header, &sample)
                    .to_json()
                    .map_err(std::io::Error::other)?;
                writeln!(out, "{}", line)?;
            }
            Err(e) => {
                stats.read_errors += 1;
                warn!("[{}] Sensor read error: {}", settings.sensor_id, e);
            }
        }
    }

    out.flush()?;
    info!(
        "[{}] sampler stopped after {} sample(s), {} read error(s)",
        settings.sensor_id, stats.samples, stats.read_errors
    );
    Ok(stats)
}

/// Tick period for `frequency` Hz; never zero, which `interval` rejects
pub fn tick_period(frequency: u32) -> Duration {
    let nanos = 1_000_000_000 / u64::from(frequency.max(1));
    Duration::from_nanos(nanos).max(Duration::from_nanos(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::mock::MockBus;
    use crate::messages::SampleMessage;
    use crate::sensors::fxos8700::{Register, DEFAULT_ADDRESS, DEVICE_ID};

    fn settings(max_samples: Option<u64>) -> SamplerSettings {
        SamplerSettings {
            device_id: "test_hub".to_string(),
            sensor_id: "accelmag0".to_string(),
            frequency: 100,
            max_samples,
        }
    }

    fn chip() -> MockBus {
        MockBus::new().with_register(Register::WhoAmI.addr(), DEVICE_ID)
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_one_line_per_sample() {
        let bus = chip().with_block(Register::OutXMsb.addr(), &[0x01, 0x90, 0, 0, 0, 0, 0x03, 0xE8, 0, 0, 0, 0]);
        let mut driver = Fxos8700::new(bus, DEFAULT_ADDRESS, None).unwrap();
        let mut out: Vec<u8> = Vec::new();

        let stats = run_sampler(&mut driver, &settings(Some(3)), &mut out, std::future::pending())
            .await
            .unwrap();

        assert_eq!(stats, SamplerStats { samples: 3, read_errors: 0 });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let last: SampleMessage = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last.h.seq, 3);
        assert_eq!(last.h.sensor_id, "accelmag0");
        assert!((last.mx - 100.0).abs() < 1e-4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_errors_do_not_stop_loop() {
        let bus = chip().truncate_bursts(6);
        let mut driver = Fxos8700::new(bus, DEFAULT_ADDRESS, None).unwrap();
        let mut out: Vec<u8> = Vec::new();

        let shutdown = tokio::time::sleep(Duration::from_millis(45));
        let stats = run_sampler(&mut driver, &settings(None), &mut out, shutdown)
            .await
            .unwrap();

        assert_eq!(stats.samples, 0);
        assert!(stats.read_errors >= 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_tick_period_never_zero() {
        assert_eq!(tick_period(100), Duration::from_millis(10));
        assert_eq!(tick_period(0), Duration::from_secs(1));
        assert!(tick_period(u32::MAX) > Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unvalidated_high_frequency_does_not_panic() {
        let mut driver = Fxos8700::new(chip(), DEFAULT_ADDRESS, None).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let mut fast = settings(Some(1));
        fast.frequency = u32::MAX;

        let stats = run_sampler(&mut driver, &fast, &mut out, std::future::pending())
            .await
            .unwrap();

        assert_eq!(stats.samples, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_before_first_tick() {
        let mut driver = Fxos8700::new(chip(), DEFAULT_ADDRESS, None).unwrap();
        let mut out: Vec<u8> = Vec::new();

        let stats = run_sampler(&mut driver, &settings(None), &mut out, std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(stats.samples, 0);
        assert_eq!(stats.read_errors, 0);
    }
}
