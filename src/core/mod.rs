/*!
 * Core Module
 * Configuration, limits, errors and synchronization primitives
 */

pub mod config;
pub mod errors;
pub mod limits;
pub mod sync;

pub use config::HarnessConfig;
pub use errors::{HarnessError, HarnessResult};
