/*!
 * Sync Hazards
 * Shared-memory concurrency hazards, reproduced on real OS threads:
 * a correct single-lock increment, a lock-order-inversion deadlock, a
 * lock-free logical deadlock and the scoped multi-lock fix
 */

pub mod core;
pub mod dispatch;
pub mod harness;
pub mod monitoring;
pub mod state;
pub mod strategies;

// Re-exports
pub use crate::core::{HarnessConfig, HarnessError, HarnessResult};
pub use dispatch::{resolve, Mode};
pub use harness::{RunHandle, RunHarness, RunReport};
pub use monitoring::init_tracing;
pub use state::{Counter, SharedState};
pub use strategies::{TaskBody, TaskPair};
