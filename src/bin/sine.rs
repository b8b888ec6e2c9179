//! Demo producer: prints a sine wave forever, one sample per line.
//!
//! ```text
//! sine | ploot
//! ```

use clap::Parser;
use std::io::{Write, stdout};
use std::thread::sleep;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "sine", about = "Print sin(t) + offset at a fixed interval")]
struct Args {
    /// Milliseconds between samples
    #[arg(short, long, default_value_t = 100)]
    interval: u64,

    /// Constant added to every sample
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    offset: f64,
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();
    let mut out = stdout().lock();

    loop {
        let t = start.elapsed().as_secs_f64();
        // Stop quietly once the reader goes away
        if writeln!(out, "{:.3}", t.sin() + args.offset).is_err() || out.flush().is_err() {
            break;
        }
        sleep(Duration::from_millis(args.interval));
    }
}
