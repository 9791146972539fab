/*!
 * Scoped Multi-Lock Strategy Tests
 */

use pretty_assertions::assert_eq;
use serial_test::serial;
use std::time::Duration;
use sync_hazards::core::limits::EXPECTED_FINAL_COUNT;
use sync_hazards::{HarnessConfig, Mode, RunHarness};

#[test]
#[serial]
fn test_scoped_lock_reaches_two_million_within_bound() {
    let handle = RunHarness::new().spawn(Mode::ScopedLock).unwrap();

    let report = handle
        .wait_timeout(Duration::from_secs(60))
        .expect("scoped run must not hang")
        .unwrap();

    assert_eq!(report.counter, EXPECTED_FINAL_COUNT);
    assert_eq!(report.overlaps, 0);
}

#[test]
fn test_scoped_lock_never_hangs_across_runs() {
    let harness = RunHarness::with_config(HarnessConfig::with_increments(1_000));

    for _ in 0..50 {
        let report = harness
            .spawn(Mode::ScopedLock)
            .unwrap()
            .wait_timeout(Duration::from_secs(10))
            .expect("scoped run must not hang")
            .unwrap();
        assert_eq!(report.counter, 2_000);
    }
}

#[test]
fn test_scoped_lock_releases_both_locks() {
    let handle = RunHarness::with_config(HarnessConfig::with_increments(1_000))
        .spawn(Mode::ScopedLock)
        .unwrap();
    let state = handle.state().clone();

    handle.join().unwrap();

    assert!(state.lock_a.try_lock().is_some());
    assert!(state.lock_b.try_lock().is_some());
}
