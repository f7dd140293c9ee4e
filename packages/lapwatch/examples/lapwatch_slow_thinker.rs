//! Several threads each think slowly, timing every thought with their own stopwatch.
//!
//! Each thread obtains a stopwatch named after itself from the global registry, records a number
//! of laps with a sleep before each one, stops the stopwatch and logs its lap times. When all
//! threads are done, every registered stopwatch is printed with its total time.
//!
//! Run with: `RUST_LOG=debug cargo run --example lapwatch_slow_thinker -- --threads 8`.

use std::thread;
use std::time::Duration;

use argh::FromArgs;
use lapwatch::{Error, StopwatchRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Time the laps of several slow-thinking threads.
#[derive(FromArgs)]
struct Args {
    /// number of thinking threads
    #[argh(option, default = "4")]
    threads: usize,

    /// number of laps each thread records before stopping
    #[argh(option, default = "10")]
    laps: usize,

    /// how long each thought takes, in milliseconds
    #[argh(option, default = "50")]
    lap_ms: u64,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Args = argh::from_env();
    let think_time = Duration::from_millis(args.lap_ms);

    thread::scope(|s| {
        let handles: Vec<_> = (0..args.threads)
            .map(|index| s.spawn(move || think(index, args.laps, think_time)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("thinker thread panicked"))
            .collect::<Result<Vec<()>, Error>>()
    })?;

    for watch in StopwatchRegistry::global().stopwatches() {
        println!("{}: {watch}", watch.id());
    }

    Ok(())
}

fn think(index: usize, laps: usize, think_time: Duration) -> Result<(), Error> {
    let watch = StopwatchRegistry::global().get_stopwatch(format!("thinker {index}"))?;

    watch.start()?;
    for _ in 0..laps {
        thread::sleep(think_time);
        watch.lap()?;
    }
    watch.stop()?;

    info!(id = watch.id(), laps = ?watch.lap_times(), "done thinking");
    Ok(())
}
