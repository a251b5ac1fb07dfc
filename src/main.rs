use std::io::Write;
use std::process;

use clap::Parser;

use reccount::time_block;
use reccount::timing::{self, TimingGuard};

const OUTER: i64 = 3;
const INNER: i64 = 3;

/// Prints the step count of the countdown starting at (3, 3).
#[derive(Parser, Debug)]
#[command(name = "reccount", version, about, long_about = None)]
struct Args {}

fn main() {
    let Args {} = Args::parse();
    timing::init();
    let _total = TimingGuard::new("total");

    let steps = match time_block!("count", reccount::count(OUTER, INNER)) {
        Ok(steps) => steps,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = write!(stdout, "{steps}").and_then(|()| stdout.flush()) {
        eprintln!("error: failed to write output: {err}");
        process::exit(1);
    }
}
