//! Unit types for delay values.
//!
//! Delays are plain integers throughout the planner; the unit only matters
//! once a driver turns a delay into wall-clock time.

use serde::Deserialize;

/// Time unit of the integer delay values in [`SpeedConfig`](super::SpeedConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayUnit {
    /// One delay unit is one nanosecond.
    Nanoseconds,
    /// One delay unit is one microsecond.
    #[default]
    Microseconds,
    /// One delay unit is one millisecond.
    Milliseconds,
}

impl DelayUnit {
    /// Nanoseconds per delay unit.
    #[inline]
    pub const fn nanos_per_unit(self) -> u32 {
        match self {
            DelayUnit::Nanoseconds => 1,
            DelayUnit::Microseconds => 1_000,
            DelayUnit::Milliseconds => 1_000_000,
        }
    }

    /// Convert a delay value to nanoseconds, saturating at `u32::MAX`.
    ///
    /// Long enough for validation; use [`DelayUnit::to_nanos_wide`] to wait
    /// out a delay.
    #[inline]
    pub fn to_nanos(self, delay: u32) -> u32 {
        delay.saturating_mul(self.nanos_per_unit())
    }

    /// Convert a delay value to nanoseconds without saturating.
    #[inline]
    pub fn to_nanos_wide(self, delay: u32) -> u64 {
        u64::from(delay) * u64::from(self.nanos_per_unit())
    }
}
