/*!
 * Strategy Types
 */

use crate::core::errors::HarnessResult;
use crate::state::SharedState;

/// Body of one task: runs to completion against the shared state, or never
/// returns at all
pub type TaskBody = fn(&SharedState) -> HarnessResult<()>;

/// The two concurrent bodies that make up one coordination strategy
#[derive(Debug, Clone, Copy)]
pub struct TaskPair {
    /// Strategy name, as shown in the console menu
    pub name: &'static str,
    /// Body run on `task-a`
    pub first: TaskBody,
    /// Body run on `task-b`
    pub second: TaskBody,
}
