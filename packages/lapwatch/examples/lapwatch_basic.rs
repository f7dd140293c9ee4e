//! Basic example of obtaining a stopwatch from the global registry and recording laps.
//!
//! Run with: `cargo run --example lapwatch_basic`.
#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that does not need production-level safety"
)]

use std::thread;
use std::time::Duration;

use lapwatch::{Error, StopwatchRegistry};

fn main() -> Result<(), Error> {
    let registry = StopwatchRegistry::global();

    let watch = registry.get_stopwatch("basic")?;

    watch.start()?;
    for lap in 1..=3_u64 {
        thread::sleep(Duration::from_millis(lap * 20));
        let recorded = watch.lap()?;
        println!("lap {lap}: {recorded:?}");
    }
    watch.stop()?;

    println!("laps:  {:?}", watch.lap_times());
    println!("total: {watch}");

    // The identifier stays claimed for the life of the process.
    match registry.get_stopwatch("basic") {
        Err(e) => println!("second request failed as expected: {e}"),
        Ok(_) => unreachable!("identifiers are unique within a registry"),
    }

    Ok(())
}
