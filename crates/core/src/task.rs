//! Todo items as exchanged with the todo API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a todo, derived from the creation time in epoch seconds
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Task ID for a task created at `secs` since the Unix epoch
    #[must_use]
    pub fn from_epoch_secs(secs: i64) -> Self {
        Self(secs.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default)]
    pub user_id: String,
    pub task_id: TaskId,
    #[serde(default)]
    pub task_details: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// A fresh, incomplete todo
    pub fn new(
        user_id: impl Into<String>,
        task_id: TaskId,
        task_details: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            task_id,
            task_details: task_details.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let todo = Todo::new("alice", TaskId::from_epoch_secs(1_700_000_000), "buy milk");
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "userId": "alice",
                "taskId": "1700000000",
                "taskDetails": "buy milk",
                "completed": false
            })
        );
    }

    #[test]
    fn test_todo_tolerates_missing_fields() {
        let todo: Todo = serde_json::from_str(r#"{"taskId":"42","taskDetails":"x"}"#).unwrap();
        assert_eq!(todo.task_id.as_str(), "42");
        assert_eq!(todo.user_id, "");
        assert!(!todo.completed);
    }
}
