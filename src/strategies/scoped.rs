/*!
 * Fixed via Scoped Multi-Lock Acquisition
 *
 * Both tasks take {A, B} as one unit through `ScopedLock`, run the whole loop
 * of unprotected increments while holding both, then release on scope exit.
 * Neither task can ever hold just one of the two locks, so the circular wait
 * from the two-lock deadlock cannot form.
 */

use super::types::TaskPair;
use crate::core::errors::HarnessResult;
use crate::core::sync::ScopedLock;
use crate::state::SharedState;
use tracing::debug;

pub const PAIR: TaskPair = TaskPair {
    name: "scoped_lock",
    first: increment_under_both_locks,
    second: increment_under_both_locks,
};

pub fn increment_under_both_locks(state: &SharedState) -> HarnessResult<()> {
    let increments = state.config().increments_per_task;
    let _held = ScopedLock::acquire(&[&state.lock_a, &state.lock_b])?;
    debug!(increments, "scoped: holding A and B");

    for _ in 0..increments {
        state.counter.increment();
    }

    debug!("scoped: releasing A and B");
    Ok(())
}
