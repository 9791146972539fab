/*!
 * Shared State
 * Counter, locks and flags contended by the two tasks of a run
 */

mod counter;
mod shared;

pub use counter::Counter;
pub use shared::SharedState;
