//! Single-axis facade.
//!
//! Owns the speed configuration, the position and a step driver, and runs
//! plan-then-execute for each move.

use crate::config::{MotionConfig, SpeedConfig};
use crate::error::{MotionError, Result};
use crate::motion::{execute, MotionTask, ProfilePlanner};

use super::driver::StepDriver;
use super::position::Position;

/// A stepper axis driven through trapezoidal ramps.
///
/// Moves run to completion on the calling thread; there is no mid-move
/// replanning.
#[derive(Debug)]
pub struct StepperAxis<D: StepDriver> {
    planner: ProfilePlanner,
    position: Position,
    driver: D,
}

impl<D: StepDriver> StepperAxis<D> {
    /// Create an axis at position 0, at rest.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the speed settings are invalid.
    pub fn new(config: SpeedConfig, driver: D) -> Result<Self> {
        let planner = ProfilePlanner::new(config)?;
        Ok(Self {
            position: Position::at_rest(0, planner.config()),
            planner,
            driver,
        })
    }

    /// Create an axis from a full motion configuration.
    ///
    /// Only the speed settings are used here; driver settings are consumed
    /// when the driver itself is built.
    pub fn from_config(config: &MotionConfig, driver: D) -> Result<Self> {
        crate::config::validate_config(config)?;
        Self::new(config.speed, driver)
    }

    /// Get the speed configuration.
    #[inline]
    pub fn config(&self) -> &SpeedConfig {
        self.planner.config()
    }

    /// Get the current position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Redefine the current position, e.g. after external re-zeroing.
    ///
    /// Resets the delay to `start_delay`.
    pub fn set_position(&mut self, steps: i64) {
        self.position = Position::at_rest(steps, self.planner.config());
    }

    /// Plan a move to `target` without executing it.
    pub fn plan_to(&self, target: i64) -> Result<MotionTask> {
        self.planner.plan(&self.position, target)
    }

    /// Move to an absolute step position and run to completion (blocking).
    ///
    /// Returns the executed task. If the driver fails mid-move the axis keeps
    /// the steps already taken and is back at rest for the next move.
    pub fn move_to(&mut self, target: i64) -> Result<MotionTask> {
        let task = self.plan_to(target)?;
        if let Err(e) = execute(task, &mut self.position, &mut self.driver) {
            warn!("move to {} aborted at {}", target, self.position.current());
            self.position = Position::at_rest(self.position.current(), self.planner.config());
            return Err(e);
        }
        Ok(task)
    }

    /// Move by a relative number of steps.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::RelativeOverflow` if the target is not a valid `i64`.
    pub fn move_by(&mut self, delta: i64) -> Result<MotionTask> {
        let current = self.position.current();
        let target = current
            .checked_add(delta)
            .ok_or(MotionError::RelativeOverflow { current, delta })?;
        self.move_to(target)
    }

    /// Get the step driver.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the step driver mutably.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give back the step driver.
    pub fn release(self) -> D {
        self.driver
    }
}
