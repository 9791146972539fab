/*!
 * Two-Lock Deadlock
 *
 * Lock-order inversion: task A takes A then B, task B takes B then A. The
 * sleep between the two acquisitions makes sure both first locks are held
 * before either task asks for its second, so the circular wait is certain.
 *
 * There is no timeout. Once both tasks block, the run never ends.
 */

use super::types::TaskPair;
use crate::core::errors::HarnessResult;
use crate::state::SharedState;
use std::thread;
use tracing::debug;

pub const PAIR: TaskPair = TaskPair {
    name: "mutex_deadlock",
    first: lock_a_then_b,
    second: lock_b_then_a,
};

pub fn lock_a_then_b(state: &SharedState) -> HarnessResult<()> {
    let a = state.lock_a.lock();
    debug!("holding lock A");
    thread::sleep(state.config().deadlock_window);

    debug!("waiting for lock B");
    let b = state.lock_b.lock();
    state.counter.increment();

    drop(b);
    drop(a);
    Ok(())
}

pub fn lock_b_then_a(state: &SharedState) -> HarnessResult<()> {
    let b = state.lock_b.lock();
    debug!("holding lock B");
    thread::sleep(state.config().deadlock_window);

    debug!("waiting for lock A");
    let a = state.lock_a.lock();
    state.counter.increment();

    drop(a);
    drop(b);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each half is fine on its own; the hazard needs both running at once.
    #[test]
    fn test_each_order_completes_alone() {
        let state = SharedState::new();
        lock_a_then_b(&state).unwrap();
        lock_b_then_a(&state).unwrap();
        assert_eq!(state.counter.get(), 2);
        assert!(state.lock_a.try_lock().is_some());
        assert!(state.lock_b.try_lock().is_some());
    }
}
