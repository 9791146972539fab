/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the run harness
///
/// Deadlocked runs are not represented here: a run that never finishes
/// simply never returns.
#[derive(Error, Debug, Diagnostic)]
pub enum HarnessError {
    #[error("Invalid mode.")]
    #[diagnostic(
        code(harness::invalid_mode),
        help("Enter 1, 2, 3 or 4.")
    )]
    InvalidMode { input: String },

    #[error("Console I/O failed: {0}")]
    #[diagnostic(
        code(harness::input),
        help("Standard input or output was closed or unreadable.")
    )]
    Input(#[from] std::io::Error),

    #[error("Failed to spawn task thread {name}: {source}")]
    #[diagnostic(
        code(harness::spawn_failed),
        help("The OS refused to create a thread. Check process limits.")
    )]
    Spawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Task thread {name} panicked")]
    #[diagnostic(code(harness::task_panicked))]
    TaskPanicked { name: &'static str },

    #[error("Lock set contains the same lock twice (index {index})")]
    #[diagnostic(
        code(sync::duplicate_lock),
        help("Acquiring a lock twice in one set would block on itself.")
    )]
    DuplicateLock { index: usize },
}

impl HarnessError {
    /// Build an `InvalidMode` error from whatever the operator typed
    pub fn invalid_mode(input: impl Into<String>) -> Self {
        HarnessError::InvalidMode {
            input: input.into(),
        }
    }
}

/// Result alias used across the crate
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mode_message_matches_console_text() {
        let err = HarnessError::invalid_mode("7");
        assert_eq!(err.to_string(), "Invalid mode.");
        assert!(matches!(err, HarnessError::InvalidMode { ref input } if input == "7"));
    }

    #[test]
    fn test_io_error_converts_to_input() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: HarnessError = io.into();
        assert!(matches!(err, HarnessError::Input(_)));
    }
}
