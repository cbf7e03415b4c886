//! Configuration module for stepper-ramp.
//!
//! Provides the ramp delay settings and driver settings, loadable from TOML
//! files (with `std` feature) or built in code.

mod driver;
#[cfg(feature = "std")]
mod loader;
mod speed;
mod system;
pub mod units;
mod validation;

pub use driver::DriverConfig;
pub use speed::SpeedConfig;
pub use system::MotionConfig;
pub use units::DelayUnit;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
