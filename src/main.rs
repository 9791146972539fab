/*!
 * Sync Hazards - Main Entry Point
 *
 * Prints the mode menu, reads one mode from stdin, runs it and prints the
 * final counter and elapsed time. Modes 2 and 4 hang until killed.
 */

use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

use sync_hazards::harness::console;
use sync_hazards::{init_tracing, HarnessResult, RunHarness};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "run aborted");
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> HarnessResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    console::write_menu(&mut out)?;
    let mode = console::read_mode(&mut io::stdin().lock())?;

    let report = RunHarness::new().run(mode)?;

    console::write_report(&mut out, &report)?;
    out.flush()?;
    Ok(())
}
