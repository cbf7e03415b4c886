//! Builder pattern for StepperAxis.

use crate::config::{MotionConfig, SpeedConfig};
use crate::error::{ConfigError, Error, Result};

use super::axis::StepperAxis;
use super::driver::StepDriver;

/// Builder for creating StepperAxis instances.
#[derive(Debug)]
pub struct StepperAxisBuilder<D: StepDriver> {
    driver: Option<D>,
    speed: Option<SpeedConfig>,
    config: Option<MotionConfig>,
    position: i64,
}

impl<D: StepDriver> Default for StepperAxisBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: StepDriver> StepperAxisBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            driver: None,
            speed: None,
            config: None,
            position: 0,
        }
    }

    /// Set the step driver.
    pub fn driver(mut self, driver: D) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the ramp delays.
    pub fn speed(mut self, speed: SpeedConfig) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the ramp delays from individual values.
    pub fn delays(self, start_delay: u32, stop_delay: u32, step_delay: u32) -> Self {
        self.speed(SpeedConfig {
            start_delay,
            stop_delay,
            step_delay,
        })
    }

    /// Set the initial position in steps.
    pub fn position(mut self, steps: i64) -> Self {
        self.position = steps;
        self
    }

    /// Configure from a MotionConfig.
    ///
    /// The whole configuration is validated by [`build`](Self::build).
    pub fn from_config(mut self, config: &MotionConfig) -> Self {
        self.speed = Some(config.speed);
        self.config = Some(*config);
        self
    }

    /// Build the StepperAxis.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the configuration is invalid.
    pub fn build(self) -> Result<StepperAxis<D>> {
        let driver = self.driver.ok_or_else(|| missing("driver is required"))?;
        let speed = self.speed.ok_or_else(|| missing("speed is required"))?;

        if let Some(config) = self.config.as_ref() {
            crate::config::validate_config(config)?;
        }

        let mut axis = StepperAxis::new(speed, driver)?;
        axis.set_position(self.position);
        Ok(axis)
    }
}

fn missing(msg: &str) -> Error {
    let mut text = heapless::String::new();
    let _ = text.push_str(msg);
    Error::Config(ConfigError::ParseError(text))
}
