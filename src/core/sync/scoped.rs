/*!
 * Scoped Multi-Lock Acquisition
 *
 * Acquires a set of mutexes as one unit. A caller either holds every lock in
 * the set or none of them, so two callers can never end up each holding a
 * part of what the other needs.
 */

use crate::core::errors::{HarnessError, HarnessResult};
use parking_lot::{Mutex, MutexGuard};
use parking_lot_core::SpinWait;
use std::ptr;
use tracing::trace;

/// Guard over a whole set of locks
///
/// # Algorithm
///
/// Try-lock and back off:
/// 1. Block on one lock of the set
/// 2. `try_lock` every other lock
/// 3. If any is busy, release everything held so far and start over,
///    this time blocking on the lock that was busy
///
/// The caller never waits on a lock while holding another one, which rules out
/// circular wait no matter which order different callers list the locks in.
///
/// # Example
///
/// ```rust
/// use parking_lot::Mutex;
/// use sync_hazards::core::sync::ScopedLock;
///
/// let a = Mutex::new(1);
/// let b = Mutex::new(2);
/// let mut both = ScopedLock::acquire(&[&a, &b]).unwrap();
/// *both.get_mut(0).unwrap() += 10;
/// drop(both); // released in reverse input order
/// assert_eq!(*a.lock(), 11);
/// ```
pub struct ScopedLock<'a, T> {
    /// Guards in the order the locks were passed in
    guards: Vec<MutexGuard<'a, T>>,
}

impl<'a, T> ScopedLock<'a, T> {
    /// Acquire every lock in `locks`, blocking until all are held
    ///
    /// Fails only if the same lock appears twice in the set.
    pub fn acquire(locks: &[&'a Mutex<T>]) -> HarnessResult<Self> {
        reject_duplicates(locks)?;

        if locks.is_empty() {
            return Ok(Self { guards: Vec::new() });
        }

        let mut first = 0;
        let mut backoff = SpinWait::new();
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;
            match try_acquire_from(locks, first) {
                Ok(guards) => {
                    trace!(locks = locks.len(), attempts, "scoped lock acquired");
                    return Ok(Self { guards });
                }
                Err(busy) => {
                    trace!(busy, attempts, "scoped lock backing off");
                    first = busy;
                    if !backoff.spin() {
                        std::thread::yield_now();
                    }
                }
            }
        }
    }

    /// Number of locks held
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Check if the set was empty
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Access the data behind the lock at `index` (input order)
    pub fn get(&self, index: usize) -> Option<&T> {
        self.guards.get(index).map(|guard| &**guard)
    }

    /// Mutably access the data behind the lock at `index` (input order)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.guards.get_mut(index).map(|guard| &mut **guard)
    }
}

impl<T> Drop for ScopedLock<'_, T> {
    fn drop(&mut self) {
        // Release in reverse input order
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Block on `locks[first]`, then try the rest in ring order.
///
/// Returns the guards in input order, or the index of the first busy lock.
/// Everything acquired is dropped again before an `Err` is returned.
fn try_acquire_from<'a, T>(
    locks: &[&'a Mutex<T>],
    first: usize,
) -> Result<Vec<MutexGuard<'a, T>>, usize> {
    let count = locks.len();
    let mut held: Vec<Option<MutexGuard<'a, T>>> = (0..count).map(|_| None).collect();

    held[first] = Some(locks[first].lock());

    for offset in 1..count {
        let index = (first + offset) % count;
        match locks[index].try_lock() {
            Some(guard) => held[index] = Some(guard),
            None => return Err(index),
        }
    }

    Ok(held.into_iter().flatten().collect())
}

fn reject_duplicates<T>(locks: &[&Mutex<T>]) -> HarnessResult<()> {
    for (index, lock) in locks.iter().enumerate() {
        if locks[..index].iter().any(|other| ptr::eq(*other, *lock)) {
            return Err(HarnessError::DuplicateLock { index });
        }
    }
    Ok(())
}
