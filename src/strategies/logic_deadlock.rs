/*!
 * Logical Deadlock via Busy-Wait Flags
 *
 * No locks at all. Each task spins until the other raises its flag, and only
 * raises its own flag afterwards. Neither flag ever goes up first, so both
 * tasks spin forever: a circular wait built from plain shared memory.
 *
 * The flags use relaxed loads, so even a raise that did happen carries no
 * ordering guarantee for the spinning reader.
 */

use super::types::TaskPair;
use crate::core::errors::HarnessResult;
use crate::state::SharedState;
use tracing::debug;

pub const PAIR: TaskPair = TaskPair {
    name: "logic_deadlock",
    first: await_flag2_then_raise_flag1,
    second: await_flag1_then_raise_flag2,
};

pub fn await_flag2_then_raise_flag1(state: &SharedState) -> HarnessResult<()> {
    debug!("spinning on flag2");
    state.flag2.spin_until_raised();
    state.flag1.raise();
    state.counter.increment();
    Ok(())
}

pub fn await_flag1_then_raise_flag2(state: &SharedState) -> HarnessResult<()> {
    debug!("spinning on flag1");
    state.flag1.spin_until_raised();
    state.flag2.raise();
    state.counter.increment();
    Ok(())
}
