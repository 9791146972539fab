/*!
 * Spin Flags
 *
 * Bare boolean signal polled in a tight loop. No lock, no parking, no
 * happens-before edge between the writer and the reader.
 */

use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean flag with relaxed visibility
///
/// Every load and store is `Ordering::Relaxed`: the value itself is never torn,
/// but nothing written before `raise` is guaranteed visible to a reader that
/// sees the flag go up, and there is no bound on when the store is observed.
#[derive(Debug, Default)]
pub struct SpinFlag {
    raised: AtomicBool,
}

impl SpinFlag {
    /// Create a lowered flag
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raise the flag
    #[inline]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }

    /// Busy-poll until the flag is raised
    ///
    /// Never yields and never gives up. If nobody raises the flag, the caller
    /// spins for the life of the process.
    pub fn spin_until_raised(&self) {
        while !self.is_raised() {
            hint::spin_loop();
        }
    }
}
