/*!
 * Run Harness
 * Task spawning, joining, timing and console I/O
 */

pub mod console;
mod runner;

pub use runner::{RunHandle, RunHarness, RunReport};
