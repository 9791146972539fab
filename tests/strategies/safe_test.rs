/*!
 * Safe Single-Lock Strategy Tests
 */

use pretty_assertions::assert_eq;
use serial_test::serial;
use std::time::Duration;
use sync_hazards::core::limits::EXPECTED_FINAL_COUNT;
use sync_hazards::{HarnessConfig, Mode, RunHarness};

#[test]
#[serial]
fn test_safe_mutex_reaches_two_million() {
    let report = RunHarness::new().run(Mode::SafeMutex).unwrap();

    assert_eq!(report.mode, Mode::SafeMutex);
    assert_eq!(report.counter, EXPECTED_FINAL_COUNT);
    assert_eq!(report.counter, 2_000_000);
}

#[test]
#[serial]
fn test_safe_mutex_increments_never_overlap() {
    let report = RunHarness::new().run(Mode::SafeMutex).unwrap();
    assert_eq!(report.overlaps, 0, "lock A let two increments interleave");
}

#[test]
fn test_safe_mutex_repeatable_on_fresh_state() {
    let harness = RunHarness::with_config(HarnessConfig::with_increments(50_000));

    for _ in 0..5 {
        let report = harness.run(Mode::SafeMutex).unwrap();
        assert_eq!(report.counter, 100_000);
        assert_eq!(report.overlaps, 0);
    }
}

#[test]
fn test_safe_mutex_terminates() {
    let handle = RunHarness::with_config(HarnessConfig::with_increments(10_000))
        .spawn(Mode::SafeMutex)
        .unwrap();

    let report = handle
        .wait_timeout(Duration::from_secs(30))
        .expect("safe run should terminate")
        .unwrap();
    assert_eq!(report.counter, 20_000);
}
