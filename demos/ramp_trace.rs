//! Ramp trace example.
//!
//! Plans a move and prints every step with its phase and delay, without
//! touching any hardware.

use stepper_ramp::{plan, MotionPhase, Position, SpeedConfig};

fn main() -> stepper_ramp::Result<()> {
    let config = SpeedConfig::new(100, 10, 2)?;
    let start = Position::at_rest(50, &config);
    let target = -50;

    let task = plan(&start, target, &config)?;

    println!("=== Ramp Trace ===");
    println!("max_ramp_steps={}", config.max_ramp_steps());
    println!("acceleration_steps={}", task.acc_steps);
    println!("fullspeed_steps={}", task.fullspeed_steps);
    println!("decceleration_steps={}", task.decc_steps);
    println!();

    for point in task.steps(&start) {
        let tag = match point.phase {
            MotionPhase::Accelerating => "ACC",
            MotionPhase::Cruising => "---",
            MotionPhase::Decelerating => "DEC",
            MotionPhase::Complete => "END",
        };
        println!(
            "{} CP={}; delay={}",
            tag,
            point.position - task.direction.sign(),
            point.delay
        );
    }

    println!();
    println!(
        "Total delay: {} units over {} steps",
        task.total_delay(config.start_delay),
        task.total_steps()
    );

    Ok(())
}
