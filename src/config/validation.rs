//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DriverConfig, MotionConfig, SpeedConfig};

/// Validate a motion configuration.
///
/// Checks:
/// - Delays are ordered (`start_delay > stop_delay > 0`)
/// - The per-step delay increment is non-zero
/// - The STEP pulse fits inside the fastest step interval
pub fn validate_config(config: &MotionConfig) -> Result<()> {
    validate_speed(&config.speed)?;
    validate_driver(&config.driver, &config.speed)?;
    Ok(())
}

fn validate_speed(speed: &SpeedConfig) -> Result<()> {
    speed.validate().map_err(|e| {
        warn!(
            "rejected speed config: start_delay={} stop_delay={} step_delay={}",
            speed.start_delay,
            speed.stop_delay,
            speed.step_delay
        );
        Error::Config(e)
    })
}

fn validate_driver(driver: &DriverConfig, speed: &SpeedConfig) -> Result<()> {
    let min_interval_ns = driver.interval_ns(speed.stop_delay);

    if driver.pulse_width_ns == 0 || driver.pulse_width_ns >= min_interval_ns {
        warn!(
            "rejected pulse width {} ns for a {} ns step interval",
            driver.pulse_width_ns,
            min_interval_ns
        );
        return Err(Error::Config(ConfigError::InvalidPulseWidth {
            pulse_width_ns: driver.pulse_width_ns,
            min_interval_ns,
        }));
    }

    Ok(())
}
