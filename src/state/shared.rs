/*!
 * Shared State
 *
 * Everything the two tasks of a run touch, bundled into one aggregate that is
 * built per run and handed to both tasks behind an `Arc`.
 */

use super::counter::Counter;
use crate::core::config::HarnessConfig;
use crate::core::sync::SpinFlag;
use parking_lot::Mutex;
use std::sync::Arc;

/// State shared by both tasks of one run
///
/// `lock_a` and `lock_b` guard nothing by themselves: they are plain `()`
/// mutexes and the strategies decide which one serializes the counter.
/// No ordering exists between them beyond what a strategy imposes.
#[derive(Debug, Default)]
pub struct SharedState {
    pub counter: Counter,
    pub lock_a: Mutex<()>,
    pub lock_b: Mutex<()>,
    pub flag1: SpinFlag,
    pub flag2: SpinFlag,
    config: HarnessConfig,
}

impl SharedState {
    /// Fresh state with the standard workload
    pub fn new() -> Self {
        Self::with_config(HarnessConfig::default())
    }

    /// Fresh state with a custom workload
    pub fn with_config(config: HarnessConfig) -> Self {
        Self {
            counter: Counter::new(),
            lock_a: Mutex::new(()),
            lock_b: Mutex::new(()),
            flag1: SpinFlag::new(),
            flag2: SpinFlag::new(),
            config,
        }
    }

    /// Wrap in an `Arc` for handing to task threads
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = SharedState::new();
        assert_eq!(state.counter.get(), 0);
        assert!(!state.flag1.is_raised());
        assert!(!state.flag2.is_raised());
        assert!(state.lock_a.try_lock().is_some());
        assert!(state.lock_b.try_lock().is_some());
        assert_eq!(*state.config(), HarnessConfig::default());
    }

    #[test]
    fn test_locks_are_independent() {
        let state = SharedState::new();
        let _a = state.lock_a.lock();
        assert!(state.lock_b.try_lock().is_some());
    }
}
