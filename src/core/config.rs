/*!
 * Harness Configuration
 *
 * Run-time knobs handed to every task body
 */

use super::limits::{DEADLOCK_WINDOW, INCREMENTS_PER_TASK, TASKS_PER_RUN};
use std::time::Duration;

/// Workload parameters for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Loop count for the safe and scoped strategies
    pub increments_per_task: u64,
    /// Sleep between first and second lock in the two-lock deadlock
    pub deadlock_window: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            increments_per_task: INCREMENTS_PER_TASK,
            deadlock_window: DEADLOCK_WINDOW,
        }
    }
}

impl HarnessConfig {
    /// Smaller workload for tests and benchmarks
    pub const fn with_increments(increments_per_task: u64) -> Self {
        Self {
            increments_per_task,
            deadlock_window: DEADLOCK_WINDOW,
        }
    }

    /// Counter value a non-deadlocking run ends with
    pub const fn expected_final_count(&self) -> u64 {
        self.increments_per_task * TASKS_PER_RUN
    }
}
