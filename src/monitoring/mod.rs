/*!
 * Monitoring
 * Structured logging for harness runs
 */

mod tracer;

pub use tracer::{init_tracing, RunSpan};
