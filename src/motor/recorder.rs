//! In-memory step driver.
//!
//! Stands in for the GPIO driver in tests and host builds: every pulse is
//! accumulated instead of toggling a pin, and nothing blocks.

use heapless::Vec;

use crate::error::Result;
use crate::motion::Direction;

use super::driver::StepDriver;
use super::position::Position;

/// One recorded pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepRecord {
    /// Direction of the pulse.
    pub direction: Direction,
    /// Position the pulse was emitted from.
    pub position: i64,
    /// Delay in force for the pulse.
    pub delay: u32,
}

/// Step driver that accumulates pulses in memory.
///
/// Keeps the first `N` pulses verbatim; counters keep running after that.
#[derive(Debug, Clone, Default)]
pub struct StepRecorder<const N: usize> {
    records: Vec<StepRecord, N>,
    net_steps: i64,
    pulses: u64,
    direction_changes: u32,
    direction: Option<Direction>,
    truncated: bool,
}

impl<const N: usize> StepRecorder<N> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            net_steps: 0,
            pulses: 0,
            direction_changes: 0,
            direction: None,
            truncated: false,
        }
    }

    /// Recorded pulses, oldest first.
    #[inline]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Sum of all pulses, signed by direction.
    #[inline]
    pub fn net_steps(&self) -> i64 {
        self.net_steps
    }

    /// Total pulses seen, including unrecorded ones.
    #[inline]
    pub fn pulses(&self) -> u64 {
        self.pulses
    }

    /// Number of times the latched direction changed.
    #[inline]
    pub fn direction_changes(&self) -> u32 {
        self.direction_changes
    }

    /// Last latched direction.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Check if pulses were dropped because the buffer was full.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize> StepDriver for StepRecorder<N> {
    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction != Some(direction) {
            self.direction_changes += 1;
            self.direction = Some(direction);
        }
        Ok(())
    }

    fn pulse(&mut self, direction: Direction, position: &Position) -> Result<()> {
        self.net_steps += direction.sign();
        self.pulses += 1;

        let record = StepRecord {
            direction,
            position: position.current(),
            delay: position.delay(),
        };
        if self.records.push(record).is_err() && !self.truncated {
            debug!("step recorder full after {} pulses", N);
            self.truncated = true;
        }

        Ok(())
    }
}
