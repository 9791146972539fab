/*!
 * Run Limits and Constants
 *
 * Fixed workload sizes and timings for every strategy. None of these are
 * exposed to the operator; a run always uses the values below.
 */

use std::time::Duration;

// =============================================================================
// WORKLOAD
// =============================================================================

/// Increments performed by each task in the safe and scoped strategies
pub const INCREMENTS_PER_TASK: u64 = 1_000_000;

/// Tasks spawned per run
pub const TASKS_PER_RUN: u64 = 2;

/// Final counter for a correctly synchronized run
pub const EXPECTED_FINAL_COUNT: u64 = INCREMENTS_PER_TASK * TASKS_PER_RUN;

// =============================================================================
// TIMING
// =============================================================================

/// Sleep between first and second acquisition in the two-lock deadlock.
/// Long enough that both tasks hold their first lock before either asks for
/// its second.
pub const DEADLOCK_WINDOW: Duration = Duration::from_millis(100);

// =============================================================================
// THREADS
// =============================================================================

/// Stack size for task threads (256KB)
pub const TASK_STACK_SIZE: usize = 256 * 1024;

/// Thread names, visible in tracing output
pub const TASK_A_NAME: &str = "task-a";
pub const TASK_B_NAME: &str = "task-b";
