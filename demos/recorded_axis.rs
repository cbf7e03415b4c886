//! Recorded axis example.
//!
//! Loads `demos/axis.toml`, runs a few moves on an axis backed by the
//! in-memory step recorder, and summarises what the driver saw.

use stepper_ramp::{load_config, StepRecorder, StepperAxis};

const CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/axis.toml");

fn main() -> stepper_ramp::Result<()> {
    println!("=== Recorded Axis Example ===\n");

    let config = load_config(CONFIG_PATH)?;
    println!(
        "Delays: start={} stop={} step={} ({:?})",
        config.speed.start_delay,
        config.speed.stop_delay,
        config.speed.step_delay,
        config.driver.delay_unit
    );

    let mut axis = StepperAxis::from_config(&config, StepRecorder::<4096>::new())?;

    for target in [50, 150, -50, -50, 0] {
        let task = axis.move_to(target)?;
        println!(
            "move to {:>5}: acc={:>3} cruise={:>3} decc={:>3} duration={} {:?}",
            target,
            task.acc_steps,
            task.fullspeed_steps,
            task.decc_steps,
            task.total_delay(config.speed.start_delay),
            config.driver.delay_unit
        );
    }

    let recorder = axis.release();
    println!("\n=== Driver Summary ===");
    println!("Pulses: {}", recorder.pulses());
    println!("Net steps: {}", recorder.net_steps());
    println!("Direction changes: {}", recorder.direction_changes());
    if let Some(fastest) = recorder.records().iter().map(|r| r.delay).min() {
        println!("Fastest delay: {}", fastest);
    }

    Ok(())
}
