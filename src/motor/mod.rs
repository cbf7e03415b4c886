//! Motor module for stepper-ramp.
//!
//! Provides position tracking, the step driver seam and its GPIO and
//! in-memory implementations, and the single-axis facade.

mod axis;
mod builder;
mod driver;
mod position;
mod recorder;

pub use axis::StepperAxis;
pub use builder::StepperAxisBuilder;
pub use driver::{GpioStepDriver, StepDriver};
pub use position::Position;
pub use recorder::{StepRecord, StepRecorder};
