/*!
 * Coordination Strategies
 *
 * Four ways for two tasks to share one counter:
 * - `safe`: one lock around each increment
 * - `mutex_deadlock`: two locks taken in opposite orders
 * - `scoped`: two locks taken as one unit
 * - `logic_deadlock`: no locks, two flags each waiting on the other
 */

pub mod logic_deadlock;
pub mod mutex_deadlock;
pub mod safe;
pub mod scoped;
mod types;

pub use types::{TaskBody, TaskPair};
