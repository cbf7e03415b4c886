//! Motion execution - drives a step driver through a planned move.

use crate::error::Result;
use crate::motor::{Position, StepDriver};

use super::task::{MotionPhase, MotionTask};

/// Runtime state during motion execution.
#[derive(Debug, Clone)]
pub struct ProfileExecutor {
    /// The planned move being executed.
    task: MotionTask,

    /// Current step number (0 to total_steps).
    current_step: u64,

    /// Current phase of motion.
    phase: MotionPhase,

    /// Set once the direction has been latched.
    started: bool,
}

impl ProfileExecutor {
    /// Create a new executor for a planned move.
    pub fn new(task: MotionTask) -> Self {
        Self {
            phase: task.phase_at(0),
            task,
            current_step: 0,
            started: false,
        }
    }

    /// Check if motion is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == MotionPhase::Complete
    }

    /// Get the current step number.
    #[inline]
    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// Get steps remaining.
    #[inline]
    pub fn steps_remaining(&self) -> u64 {
        self.task.total_steps().saturating_sub(self.current_step)
    }

    /// Get the current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Get the planned move.
    #[inline]
    pub fn task(&self) -> &MotionTask {
        &self.task
    }

    /// Get progress as a fraction (0.0 to 1.0).
    ///
    /// Lossy: step counts above 2^24 lose precision in the `f32` conversion.
    #[inline]
    pub fn progress(&self) -> f32 {
        let total = self.task.total_steps();
        if total == 0 {
            1.0
        } else {
            self.current_step as f32 / total as f32
        }
    }

    /// Execute one step.
    ///
    /// The first call latches the direction on the driver and puts the delay
    /// back to the task's `rest_delay` if it is anywhere else, so the ramp
    /// never leaves `[stop_delay, start_delay]`. Each call pulses once at the
    /// current `position.delay()`, then advances the position and applies
    /// the ramp increment of the current phase.
    ///
    /// Returns `true` once the move is complete. A driver error aborts the
    /// step before the position is advanced.
    pub fn step<D: StepDriver>(&mut self, position: &mut Position, driver: &mut D) -> Result<bool> {
        if self.is_complete() {
            return Ok(true);
        }

        if !self.started {
            if position.delay() != self.task.rest_delay {
                warn!(
                    "move starts at delay {} instead of {}, resetting",
                    position.delay(),
                    self.task.rest_delay
                );
                position.set_delay(self.task.rest_delay);
            }
            debug!(
                "move {} -> {} ({} steps) from delay {}",
                position.current(),
                self.task.target,
                self.task.total_steps(),
                position.delay()
            );
            driver.set_direction(self.task.direction)?;
            self.started = true;
        }

        driver.pulse(self.task.direction, position)?;
        self.task.advance(self.phase, position);
        self.current_step += 1;

        let next = self.task.phase_at(self.current_step);
        if next != self.phase {
            trace!(
                "step {}: phase change at position {} delay {}",
                self.current_step,
                position.current(),
                position.delay()
            );
            self.phase = next;
        }

        if self.is_complete() {
            self.check_finished(position);
        }

        Ok(self.is_complete())
    }

    /// Run the move to completion (blocking).
    pub fn run<D: StepDriver>(&mut self, position: &mut Position, driver: &mut D) -> Result<()> {
        while !self.step(position, driver)? {}
        Ok(())
    }

    fn check_finished(&self, position: &Position) {
        if position.current() != self.task.target {
            warn!(
                "move ended at {} instead of {}",
                position.current(),
                self.task.target
            );
        }

        if self.started && position.delay() != self.task.rest_delay {
            warn!(
                "move ended at delay {} instead of {}",
                position.delay(),
                self.task.rest_delay
            );
        }

        debug!("move complete at {}", position.current());
    }
}

/// Execute a planned move to completion, updating `position` in place.
///
/// The driver's direction is latched once before the first pulse; a
/// zero-length task touches neither the driver nor the position.
pub fn execute<D: StepDriver>(task: MotionTask, position: &mut Position, driver: &mut D) -> Result<()> {
    ProfileExecutor::new(task).run(position, driver)
}
