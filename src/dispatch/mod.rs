/*!
 * Mode Dispatcher
 *
 * Maps the operator's mode number onto one coordination strategy. Resolution
 * happens once per run, before any task is spawned.
 */

use crate::core::errors::{HarnessError, HarnessResult};
use crate::strategies::{logic_deadlock, mutex_deadlock, safe, scoped, TaskPair};
use std::fmt;
use std::str::FromStr;

/// Strategy selector
///
/// Discriminants are the numbers the console menu shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    SafeMutex = 1,
    MutexDeadlock = 2,
    ScopedLock = 3,
    LogicDeadlock = 4,
}

/// Strategy table, indexed by `Mode as usize - 1`
const STRATEGIES: [TaskPair; 4] = [
    safe::PAIR,
    mutex_deadlock::PAIR,
    scoped::PAIR,
    logic_deadlock::PAIR,
];

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 4] = [
        Mode::SafeMutex,
        Mode::MutexDeadlock,
        Mode::ScopedLock,
        Mode::LogicDeadlock,
    ];

    /// Number the operator types to select this mode
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Short name used in logs
    pub const fn name(self) -> &'static str {
        self.task_pair().name
    }

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            Mode::LogicDeadlock => "logic_deadlock (no mutex)",
            other => other.name(),
        }
    }

    /// True for the modes that hang by design
    pub const fn deadlocks(self) -> bool {
        matches!(self, Mode::MutexDeadlock | Mode::LogicDeadlock)
    }

    /// Task bodies for this mode
    pub const fn task_pair(self) -> TaskPair {
        STRATEGIES[self as usize - 1]
    }
}

impl TryFrom<i64> for Mode {
    type Error = HarnessError;

    fn try_from(value: i64) -> HarnessResult<Self> {
        match value {
            1 => Ok(Mode::SafeMutex),
            2 => Ok(Mode::MutexDeadlock),
            3 => Ok(Mode::ScopedLock),
            4 => Ok(Mode::LogicDeadlock),
            other => Err(HarnessError::invalid_mode(other.to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = HarnessError;

    /// Parse one token of operator input
    ///
    /// Reads like stream extraction of an integer: surrounding whitespace is
    /// ignored and only the leading optional sign and digits count, so `3abc`
    /// selects mode 3. No leading integer at all is an invalid mode.
    fn from_str(s: &str) -> HarnessResult<Self> {
        let token = s.trim();
        leading_integer(token)
            .and_then(|digits| digits.parse::<i64>().ok())
            .ok_or_else(|| HarnessError::invalid_mode(token))
            .and_then(Mode::try_from)
    }
}

/// Optional sign followed by at least one ASCII digit, from the start of `token`
fn leading_integer(token: &str) -> Option<&str> {
    let sign = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    (digits > 0).then(|| &token[..sign + digits])
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a raw mode value into its task pair
pub fn resolve(value: i64) -> HarnessResult<TaskPair> {
    Mode::try_from(value).map(Mode::task_pair)
}
