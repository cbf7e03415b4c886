//! Error types for stepper-ramp.
//!
//! Provides unified error handling across configuration, ramp planning, and step drivers.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-ramp operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Ramp planning error
    Motion(MotionError),
    /// Step driver (hardware collaborator) error
    Driver(DriverError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Start delay must be strictly greater than stop delay
    InvalidSpeedRange {
        /// Delay at rest (slowest speed)
        start_delay: u32,
        /// Delay at peak speed
        stop_delay: u32,
    },
    /// Stop delay must be > 0
    InvalidStopDelay(u32),
    /// Step delay increment must be > 0
    InvalidStepDelay(u32),
    /// Step pulse does not fit inside the fastest step interval
    InvalidPulseWidth {
        /// Configured pulse width in nanoseconds
        pulse_width_ns: u32,
        /// Shortest step interval (stop delay) in nanoseconds
        min_interval_ns: u32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Ramp planning errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Move distance is not representable in a signed step count
    Overflow {
        /// Position the move starts from
        current: i64,
        /// Requested target position
        target: i64,
    },
    /// Relative move lands outside the signed step range
    RelativeOverflow {
        /// Position the move starts from
        current: i64,
        /// Requested relative distance
        delta: i64,
    },
}

/// Step driver errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSpeedRange {
                start_delay,
                stop_delay,
            } => write!(
                f,
                "Invalid speed range: start_delay ({}) must be > stop_delay ({})",
                start_delay, stop_delay
            ),
            ConfigError::InvalidStopDelay(v) => write!(f, "Invalid stop delay: {}. Must be > 0", v),
            ConfigError::InvalidStepDelay(v) => write!(f, "Invalid step delay: {}. Must be > 0", v),
            ConfigError::InvalidPulseWidth {
                pulse_width_ns,
                min_interval_ns,
            } => write!(
                f,
                "Pulse width {} ns does not fit in the fastest step interval of {} ns",
                pulse_width_ns, min_interval_ns
            ),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::Overflow { current, target } => {
                write!(f, "Move from {} to {} overflows the step counter", current, target)
            }
            MotionError::RelativeOverflow { current, delta } => {
                write!(f, "Move by {} from {} overflows the step counter", delta, current)
            }
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::InvalidStepDelay(0).into();
        assert_eq!(err, Error::Config(ConfigError::InvalidStepDelay(0)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_names_values() {
        let err = Error::from(ConfigError::InvalidSpeedRange {
            start_delay: 10,
            stop_delay: 10,
        });
        let text = err.to_string();
        assert!(text.contains("start_delay (10)"));
        assert!(text.starts_with("Configuration error"));
    }
}
