//! Trapezoidal ramp planning.
//!
//! Splits a move into a symmetric ramp whose length never exceeds the
//! configured `max_ramp_steps`. Short moves cap the ramp at half the
//! distance so acceleration and deceleration never overlap.

use crate::config::SpeedConfig;
use crate::error::{MotionError, Result};
use crate::motor::Position;

use super::task::{Direction, MotionTask};

/// Plans moves for one speed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilePlanner {
    config: SpeedConfig,
    max_ramp_steps: u64,
}

impl ProfilePlanner {
    /// Create a planner, rejecting invalid speed configurations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSpeedRange`, `InvalidStopDelay` or
    /// `InvalidStepDelay` if the delays are inconsistent.
    pub fn new(config: SpeedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            max_ramp_steps: config.max_ramp_steps(),
        })
    }

    /// Get the speed configuration.
    #[inline]
    pub fn config(&self) -> &SpeedConfig {
        &self.config
    }

    /// Longest ramp this planner will produce.
    #[inline]
    pub fn max_ramp_steps(&self) -> u64 {
        self.max_ramp_steps
    }

    /// Plan a move from `position` to the absolute step `target`.
    ///
    /// A move to the current position is a zero-length task, not an error.
    /// For odd distances the ramp truncates and the leftover step is cruised.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Overflow` if `target - position` does not fit in an `i64`.
    pub fn plan(&self, position: &Position, target: i64) -> Result<MotionTask> {
        let current = position.current();
        let delta = target
            .checked_sub(current)
            .ok_or(MotionError::Overflow { current, target })?;

        let magnitude = delta.unsigned_abs();
        let ramp = (magnitude / 2).min(self.max_ramp_steps);

        let task = MotionTask {
            target,
            delta,
            direction: Direction::from_steps(delta),
            acc_steps: ramp,
            fullspeed_steps: magnitude - 2 * ramp,
            decc_steps: ramp,
            step_delay: self.config.step_delay,
            rest_delay: self.config.start_delay,
        };

        debug!(
            "planned {} -> {}: acc={} cruise={} decc={}",
            current,
            target,
            task.acc_steps,
            task.fullspeed_steps,
            task.decc_steps
        );

        Ok(task)
    }
}

/// Plan a single move with an ad-hoc configuration.
///
/// Equivalent to `ProfilePlanner::new(*config)?.plan(position, target)`.
pub fn plan(position: &Position, target: i64, config: &SpeedConfig) -> Result<MotionTask> {
    ProfilePlanner::new(*config)?.plan(position, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    fn make_planner() -> ProfilePlanner {
        ProfilePlanner::new(SpeedConfig::new(100, 10, 2).unwrap()).unwrap()
    }

    #[test]
    fn test_triangular_move() {
        let task = make_planner().plan(&Position::at(0, 100), 50).unwrap();
        assert_eq!(task.acc_steps, 25);
        assert_eq!(task.decc_steps, 25);
        assert_eq!(task.fullspeed_steps, 0);
        assert_eq!(task.direction, Direction::Positive);
    }

    #[test]
    fn test_full_ramp_with_cruise() {
        let task = make_planner().plan(&Position::at(0, 100), 150).unwrap();
        assert_eq!(task.acc_steps, 45);
        assert_eq!(task.decc_steps, 45);
        assert_eq!(task.fullspeed_steps, 60);
    }

    #[test]
    fn test_reverse_move() {
        let task = make_planner().plan(&Position::at(150, 100), 50).unwrap();
        assert_eq!(task.delta, -100);
        assert_eq!(task.acc_steps, 45);
        assert_eq!(task.fullspeed_steps, 10);
        assert_eq!(task.direction, Direction::Negative);
    }

    #[test]
    fn test_zero_move() {
        let task = make_planner().plan(&Position::at(7, 100), 7).unwrap();
        assert!(task.is_zero());
        assert_eq!(task.target, 7);
    }

    #[test]
    fn test_odd_distance_cruises_one_step() {
        let task = make_planner().plan(&Position::at(0, 100), 51).unwrap();
        assert_eq!(task.acc_steps, 25);
        assert_eq!(task.fullspeed_steps, 1);
    }

    #[test]
    fn test_exact_double_ramp_has_no_cruise() {
        let task = make_planner().plan(&Position::at(0, 100), 90).unwrap();
        assert_eq!(task.acc_steps, 45);
        assert!(task.is_triangular());
    }

    #[test]
    fn test_overflow() {
        let result = make_planner().plan(&Position::at(i64::MIN, 100), i64::MAX);
        assert!(matches!(result, Err(Error::Motion(MotionError::Overflow { .. }))));
    }

    #[test]
    fn test_plan_rejects_invalid_config() {
        let config = SpeedConfig {
            start_delay: 10,
            stop_delay: 10,
            step_delay: 1,
        };
        assert!(matches!(
            plan(&Position::at(0, 10), 100, &config),
            Err(Error::Config(ConfigError::InvalidSpeedRange { .. }))
        ));
    }
}
