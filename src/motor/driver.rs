//! Step drivers.
//!
//! The executor never touches hardware directly. It latches a direction and
//! asks a [`StepDriver`] for one pulse per step; the driver is responsible
//! for waiting out the delay before returning.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{DelayUnit, DriverConfig};
use crate::error::{DriverError, Result};
use crate::motion::Direction;

use super::position::Position;

/// Hardware collaborator of the executor.
pub trait StepDriver {
    /// Latch the motor direction. Called once per move, before any pulse.
    fn set_direction(&mut self, direction: Direction) -> Result<()>;

    /// Emit one step in `direction` and block for `position.delay()`.
    fn pulse(&mut self, direction: Direction, position: &Position) -> Result<()>;
}

/// Closures act as pulse-only drivers; direction latching is a no-op.
impl<F> StepDriver for F
where
    F: FnMut(Direction, &Position) -> Result<()>,
{
    fn set_direction(&mut self, _direction: Direction) -> Result<()> {
        Ok(())
    }

    fn pulse(&mut self, direction: Direction, position: &Position) -> Result<()> {
        (*self)(direction, position)
    }
}

/// STEP/DIR driver over embedded-hal 1.0 pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct GpioStepDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = positive, low = negative, or inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// STEP high time in nanoseconds.
    pulse_width_ns: u32,

    /// Unit of the position delay.
    delay_unit: DelayUnit,
}

impl<STEP, DIR, DELAY> GpioStepDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver from pins and driver settings.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY, config: &DriverConfig) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            current_direction: None,
            invert_direction: config.invert_direction,
            pulse_width_ns: config.pulse_width_ns,
            delay_unit: config.delay_unit,
        }
    }

    /// Get the last latched direction.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.current_direction
    }

    /// Give back the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    /// Block for `ns`, in whole milliseconds first once it exceeds `u32` nanoseconds.
    fn wait(&mut self, ns: u64) {
        const NANOS_PER_MILLI: u64 = 1_000_000;

        if let Ok(short) = u32::try_from(ns) {
            if short > 0 {
                self.delay.delay_ns(short);
            }
            return;
        }

        // A u32 delay in milliseconds is at most u32::MAX ms
        let millis = u32::try_from(ns / NANOS_PER_MILLI).unwrap_or(u32::MAX);
        self.delay.delay_ms(millis);

        let rest = (ns % NANOS_PER_MILLI) as u32;
        if rest > 0 {
            self.delay.delay_ns(rest);
        }
    }
}

impl<STEP, DIR, DELAY> StepDriver for GpioStepDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Positive => !self.invert_direction,
            Direction::Negative => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| DriverError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| DriverError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }

    fn pulse(&mut self, _direction: Direction, position: &Position) -> Result<()> {
        self.step_pin.set_high().map_err(|_| DriverError::PinError)?;
        self.delay.delay_ns(self.pulse_width_ns);
        self.step_pin.set_low().map_err(|_| DriverError::PinError)?;

        // Remainder of the step interval after the pulse
        let interval_ns = self.delay_unit.to_nanos_wide(position.delay());
        let wait_ns = interval_ns.saturating_sub(u64::from(self.pulse_width_ns));
        self.wait(wait_ns);

        Ok(())
    }
}
