//! # stepper-ramp
//!
//! Integer trapezoidal ramps for stepper motors, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Pure planning**: [`ProfilePlanner`] splits a move into acceleration,
//!   cruise and deceleration phases with no side effects
//! - **Integer delays**: speed is expressed as a per-step delay that changes
//!   by a fixed increment during ramps
//! - **Injected hardware**: the [`ProfileExecutor`] drives any [`StepDriver`],
//!   from embedded-hal pins to an in-memory recorder
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_ramp::{SpeedConfig, StepperAxis, GpioStepDriver, DriverConfig};
//!
//! let speed = SpeedConfig::new(100, 10, 2)?;
//! let driver = GpioStepDriver::new(step_pin, dir_pin, delay, &DriverConfig::default());
//! let mut axis = StepperAxis::new(speed, driver)?;
//!
//! axis.move_to(150)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables `log` facade logging for host targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible in every module
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, DelayUnit, DriverConfig, MotionConfig, SpeedConfig};
pub use error::{Error, Result};
pub use motion::{
    execute, plan, Direction, MotionPhase, MotionTask, ProfileExecutor, ProfilePlanner, StepPoint,
};
pub use motor::{GpioStepDriver, Position, StepDriver, StepRecorder, StepperAxis, StepperAxisBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
