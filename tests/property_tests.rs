//! Property tests for ramp planning and execution.

use proptest::prelude::*;
use stepper_ramp::error::{DriverError, Result};
use stepper_ramp::{
    execute, plan, Direction, Position, SpeedConfig, StepDriver, StepRecorder, StepperAxis,
};

/// Valid speed configurations: `start > stop > 0`, `step > 0`.
fn speed_config() -> impl Strategy<Value = SpeedConfig> {
    (1u32..500, 1u32..500, 1u32..50).prop_map(|(stop, range, step)| SpeedConfig {
        start_delay: stop + range,
        stop_delay: stop,
        step_delay: step,
    })
}

/// Driver that fails once on a chosen pulse and tracks the delay range it saw.
struct FlakyDriver {
    pulses: u64,
    fail_at: Option<u64>,
    min_delay: u32,
    max_delay: u32,
}

impl FlakyDriver {
    fn new(fail_at: u64) -> Self {
        Self {
            pulses: 0,
            fail_at: Some(fail_at),
            min_delay: u32::MAX,
            max_delay: 0,
        }
    }
}

impl StepDriver for FlakyDriver {
    fn set_direction(&mut self, _direction: Direction) -> Result<()> {
        Ok(())
    }

    fn pulse(&mut self, _direction: Direction, position: &Position) -> Result<()> {
        self.pulses += 1;
        if self.fail_at == Some(self.pulses) {
            self.fail_at = None;
            return Err(DriverError::PinError.into());
        }
        self.min_delay = self.min_delay.min(position.delay());
        self.max_delay = self.max_delay.max(position.delay());
        Ok(())
    }
}

proptest! {
    #[test]
    fn phases_partition_the_move(
        config in speed_config(),
        current in -100_000i64..100_000,
        target in -100_000i64..100_000,
    ) {
        let task = plan(&Position::at_rest(current, &config), target, &config).unwrap();

        prop_assert_eq!(task.acc_steps, task.decc_steps);
        prop_assert_eq!(
            task.acc_steps + task.fullspeed_steps + task.decc_steps,
            (target - current).unsigned_abs()
        );
        prop_assert!(task.acc_steps <= config.max_ramp_steps());
        prop_assert_eq!(task.step_delay, config.step_delay);
    }

    #[test]
    fn zero_move_has_no_phases(config in speed_config(), current in any::<i64>()) {
        let task = plan(&Position::at_rest(current, &config), current, &config).unwrap();

        prop_assert_eq!(task.acc_steps, 0);
        prop_assert_eq!(task.fullspeed_steps, 0);
        prop_assert_eq!(task.decc_steps, 0);
    }

    #[test]
    fn execution_reaches_target(
        config in speed_config(),
        current in -2_000i64..2_000,
        target in -2_000i64..2_000,
    ) {
        let mut position = Position::at_rest(current, &config);
        let mut recorder = StepRecorder::<1>::new();

        let task = plan(&position, target, &config).unwrap();
        execute(task, &mut position, &mut recorder).unwrap();

        prop_assert_eq!(position.current(), target);
        prop_assert_eq!(recorder.net_steps(), target - current);
        prop_assert_eq!(position.delay(), config.start_delay);
    }

    #[test]
    fn delay_stays_in_idle_range(
        config in speed_config(),
        distance in 0i64..2_000,
    ) {
        let start = Position::at_rest(0, &config);
        let task = plan(&start, distance, &config).unwrap();

        for point in task.steps(&start) {
            prop_assert!(point.delay >= config.stop_delay);
            prop_assert!(point.delay <= config.start_delay);
        }
    }

    #[test]
    fn full_ramp_moves_are_symmetric(
        config in speed_config(),
        extra in 0u64..500,
    ) {
        let length = 2 * (config.max_ramp_steps() + extra);
        let mut position = Position::at_rest(0, &config);
        let before = position.delay();

        let task = plan(&position, length as i64, &config).unwrap();
        prop_assert_eq!(task.acc_steps, config.max_ramp_steps());
        execute(task, &mut position, &mut StepRecorder::<1>::new()).unwrap();

        prop_assert_eq!(position.delay(), before);
    }

    #[test]
    fn any_idle_start_delay_stays_in_range(
        config in speed_config(),
        offset in any::<u32>(),
        target in -2_000i64..2_000,
    ) {
        let span = config.start_delay - config.stop_delay + 1;
        let mut position = Position::at(0, config.stop_delay + offset % span);
        let mut delays = (u32::MAX, 0u32);
        let mut driver = |_: Direction, p: &Position| -> Result<()> {
            delays = (delays.0.min(p.delay()), delays.1.max(p.delay()));
            Ok(())
        };

        let task = plan(&position, target, &config).unwrap();
        execute(task, &mut position, &mut driver).unwrap();

        if target != 0 {
            prop_assert!(delays.0 >= config.stop_delay);
            prop_assert!(delays.1 <= config.start_delay);
            prop_assert_eq!(position.delay(), config.start_delay);
        }
        prop_assert_eq!(position.current(), target);
    }

    #[test]
    fn axis_recovers_from_driver_failure(
        config in speed_config(),
        first in -1_000i64..1_000,
        second in -1_000i64..1_000,
        fail_at in 1u64..1_000,
    ) {
        let mut axis = StepperAxis::new(config, FlakyDriver::new(fail_at)).unwrap();

        if axis.move_to(first).is_err() {
            prop_assert_eq!(axis.position().delay(), config.start_delay);
        }
        // The failure may not have been reached by the first move
        let second_move = axis.move_to(second).or_else(|_| axis.move_to(second));
        prop_assert!(second_move.is_ok());
        prop_assert_eq!(axis.position().current(), second);
        prop_assert_eq!(axis.position().delay(), config.start_delay);

        let driver = axis.release();
        if driver.max_delay > 0 {
            prop_assert!(driver.min_delay >= config.stop_delay);
            prop_assert!(driver.max_delay <= config.start_delay);
        }
    }
}
