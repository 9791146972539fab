/*!
 * Synchronization Primitives
 *
 * Building blocks the coordination strategies are made of:
 * - `ScopedLock`: all-or-nothing acquisition of a set of mutexes
 * - `SpinFlag`: relaxed boolean polled in a busy loop
 *
 * Plain single mutexes are `parking_lot::Mutex` and are used directly.
 */

mod flag;
mod scoped;

pub use flag::SpinFlag;
pub use scoped::ScopedLock;
