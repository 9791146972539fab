/*!
 * Safe Single-Lock Increment
 *
 * Both tasks take lock A around every single increment. Baseline
 * correctness case: the counter always ends at twice the loop count.
 */

use super::types::TaskPair;
use crate::core::errors::HarnessResult;
use crate::state::SharedState;
use tracing::debug;

pub const PAIR: TaskPair = TaskPair {
    name: "safe_mutex",
    first: increment_under_lock_a,
    second: increment_under_lock_a,
};

/// Loop: lock A, increment, unlock A
pub fn increment_under_lock_a(state: &SharedState) -> HarnessResult<()> {
    let increments = state.config().increments_per_task;
    debug!(increments, "safe: incrementing under lock A");

    for _ in 0..increments {
        let _guard = state.lock_a.lock();
        state.counter.increment();
    }

    debug!("safe: done");
    Ok(())
}
