//! Planned moves.
//!
//! A [`MotionTask`] splits one move into a symmetric trapezoidal ramp:
//! acceleration, cruise and deceleration phases measured in whole steps.

use crate::config::SpeedConfig;
use crate::motor::Position;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards larger step counts.
    Positive,
    /// Towards smaller step counts.
    Negative,
}

impl Direction {
    /// Get direction from signed step count.
    ///
    /// Zero maps to [`Direction::Positive`].
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// Phase of a move at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Delay shrinks by `step_delay` after every step.
    Accelerating,
    /// Delay is constant.
    Cruising,
    /// Delay grows by `step_delay` after every step.
    Decelerating,
    /// Motion complete.
    Complete,
}

/// One planned move, produced by the planner and consumed by one executor run.
///
/// `acc_steps + fullspeed_steps + decc_steps == |delta|` and
/// `acc_steps == decc_steps` for every task the planner returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionTask {
    /// Absolute position the move ends at.
    pub target: i64,

    /// Signed distance `target - current`.
    pub delta: i64,

    /// Sign of `delta`.
    pub direction: Direction,

    /// Steps in acceleration phase.
    pub acc_steps: u64,

    /// Steps in cruise phase (constant delay).
    pub fullspeed_steps: u64,

    /// Steps in deceleration phase.
    pub decc_steps: u64,

    /// Delay change applied per ramp step.
    pub step_delay: u32,

    /// Delay the move starts from and returns to (`start_delay` of the config).
    pub rest_delay: u32,
}

impl MotionTask {
    /// Create a zero-length task (no motion) ending at `target`.
    pub fn zero(target: i64, config: &SpeedConfig) -> Self {
        Self {
            target,
            delta: 0,
            direction: Direction::Positive,
            acc_steps: 0,
            fullspeed_steps: 0,
            decc_steps: 0,
            step_delay: config.step_delay,
            rest_delay: config.start_delay,
        }
    }

    /// Total number of steps in the move.
    #[inline]
    pub fn total_steps(&self) -> u64 {
        self.acc_steps + self.fullspeed_steps + self.decc_steps
    }

    /// Check if this is a zero-length task.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps() == 0
    }

    /// Check if the move never reaches a cruise phase (triangular ramp).
    #[inline]
    pub fn is_triangular(&self) -> bool {
        self.fullspeed_steps == 0
    }

    /// Get the phase at a given step number.
    pub fn phase_at(&self, step: u64) -> MotionPhase {
        if step >= self.total_steps() {
            MotionPhase::Complete
        } else if step < self.acc_steps {
            MotionPhase::Accelerating
        } else if step < self.acc_steps + self.fullspeed_steps {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }

    /// Delay in force while step number `step` is pulsed, for a move that
    /// starts at `start_delay`.
    ///
    /// Returns `start_delay` once the move is complete.
    pub fn delay_at(&self, step: u64, start_delay: u32) -> u32 {
        let peak = self.peak_delay(start_delay);

        match self.phase_at(step) {
            MotionPhase::Complete => start_delay,
            MotionPhase::Accelerating => start_delay.saturating_sub(self.ramp_offset(step)),
            MotionPhase::Cruising => peak,
            MotionPhase::Decelerating => {
                let decc_step = step - self.acc_steps - self.fullspeed_steps;
                peak.saturating_add(self.ramp_offset(decc_step))
            }
        }
    }

    /// Delay held during the cruise phase.
    #[inline]
    pub fn peak_delay(&self, start_delay: u32) -> u32 {
        start_delay.saturating_sub(self.ramp_offset(self.acc_steps))
    }

    /// Sum of every per-step delay in the move, i.e. its duration in delay units.
    pub fn total_delay(&self, start_delay: u32) -> u64 {
        let peak = u64::from(self.peak_delay(start_delay));
        let start = u64::from(start_delay);

        // The acceleration and deceleration triangles mirror each other, so
        // together they contribute `acc_steps * (start + peak)`.
        self.acc_steps
            .saturating_mul(start)
            .saturating_add(self.decc_steps.saturating_mul(peak))
            .saturating_add(self.fullspeed_steps.saturating_mul(peak))
    }

    /// Iterate over every step of the move without driving any hardware.
    ///
    /// The walk starts from `start` exactly as given. The executor instead
    /// resets a non-rest delay to `rest_delay` first.
    pub fn steps(&self, start: &Position) -> TaskSteps {
        TaskSteps {
            task: *self,
            position: *start,
            index: 0,
        }
    }

    /// Apply the bookkeeping of one completed step in `phase` to `position`.
    pub(crate) fn advance(&self, phase: MotionPhase, position: &mut Position) {
        position.advance(self.direction);
        match phase {
            MotionPhase::Accelerating => {
                position.set_delay(position.delay().saturating_sub(self.step_delay));
            }
            MotionPhase::Decelerating => {
                position.set_delay(position.delay().saturating_add(self.step_delay));
            }
            MotionPhase::Cruising | MotionPhase::Complete => {}
        }
    }

    fn ramp_offset(&self, steps: u64) -> u32 {
        let offset = steps.saturating_mul(u64::from(self.step_delay));
        u32::try_from(offset).unwrap_or(u32::MAX)
    }
}

/// A single step of a planned move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepPoint {
    /// Step number within the move, starting at 0.
    pub index: u64,
    /// Phase the step belongs to.
    pub phase: MotionPhase,
    /// Position once the step has been taken.
    pub position: i64,
    /// Delay the step is pulsed with.
    pub delay: u32,
}

/// Iterator over the steps of a [`MotionTask`].
#[derive(Debug, Clone)]
pub struct TaskSteps {
    task: MotionTask,
    position: Position,
    index: u64,
}

impl TaskSteps {
    /// Position after the steps yielded so far.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }
}

impl Iterator for TaskSteps {
    type Item = StepPoint;

    fn next(&mut self) -> Option<StepPoint> {
        let phase = self.task.phase_at(self.index);
        if phase == MotionPhase::Complete {
            return None;
        }

        let delay = self.position.delay();
        self.task.advance(phase, &mut self.position);

        let point = StepPoint {
            index: self.index,
            phase,
            position: self.position.current(),
            delay,
        };
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.task.total_steps().saturating_sub(self.index);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
