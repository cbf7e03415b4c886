//! Motion module for stepper-ramp.
//!
//! Provides ramp planning and step execution.

mod executor;
mod planner;
mod task;

pub use executor::{execute, ProfileExecutor};
pub use planner::{plan, ProfilePlanner};
pub use task::{Direction, MotionPhase, MotionTask, StepPoint, TaskSteps};
