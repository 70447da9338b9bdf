//! Client-side todo board
//!
//! The server owns the todos; the board is a cache split into incomplete and
//! completed lists by the `completed` flag. Mutations are applied only after
//! the matching API call succeeded.
//!
//! Changes that land before the first fetch are kept and replayed onto the
//! fetched list, so a slow initial load never drops them.

use crate::task::{TaskId, Todo};
use std::collections::HashSet;

pub const NO_PENDING_MSG: &str = "Yay!! No pending tasks";
pub const ALL_DONE_MSG: &str = "Well done all tasks done!";
pub const NOTHING_COMPLETED_MSG: &str = "Nothing completed, keep going!";

/// A change confirmed by the todo API
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardChange {
    Added(Todo),
    Completed(TaskId),
    Edited(TaskId, String),
    Deleted { task_id: TaskId, completed: bool },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoBoard {
    incomplete: Vec<Todo>,
    completed: Vec<Todo>,
    /// Set once a fetched list has been loaded
    loaded: bool,
    /// Changes applied before the first load
    unloaded_changes: Vec<BoardChange>,
}

impl TodoBoard {
    /// Partition fetched todos by their completion flag, keeping server order
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        let (completed, incomplete) = todos.into_iter().partition(|todo| todo.completed);
        Self {
            incomplete,
            completed,
            loaded: true,
            unloaded_changes: Vec::new(),
        }
    }

    /// Replace the board with a fetched list, then replay changes that were
    /// confirmed before it arrived.
    pub fn load(&mut self, todos: Vec<Todo>) {
        let pending = std::mem::take(&mut self.unloaded_changes);
        *self = Self::from_todos(todos);
        for change in pending {
            self.apply_change(change);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Apply a confirmed change. Returns `false` when it had no effect.
    pub fn apply(&mut self, change: BoardChange) -> bool {
        if !self.loaded {
            self.unloaded_changes.push(change.clone());
        }
        self.apply_change(change)
    }

    fn apply_change(&mut self, change: BoardChange) -> bool {
        match change {
            BoardChange::Added(todo) => {
                if self.contains(&todo.task_id) {
                    return false;
                }
                self.insert(todo);
                true
            }
            BoardChange::Completed(task_id) => self.complete(&task_id),
            BoardChange::Edited(task_id, details) => self.edit(&task_id, &details),
            BoardChange::Deleted { task_id, completed } => self.delete(&task_id, completed),
        }
    }

    pub fn incomplete(&self) -> &[Todo] {
        &self.incomplete
    }

    pub fn completed(&self) -> &[Todo] {
        &self.completed
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.incomplete
            .iter()
            .chain(self.completed.iter())
            .any(|todo| &todo.task_id == task_id)
    }

    /// Task ID for a task created at `now`, moved forward past any second
    /// already taken on this board or held by an add still in flight.
    pub fn next_task_id(&self, now: i64, reserved: &HashSet<TaskId>) -> TaskId {
        let mut secs = now;
        loop {
            let candidate = TaskId::from_epoch_secs(secs);
            if !self.contains(&candidate) && !reserved.contains(&candidate) {
                return candidate;
            }
            secs = secs.saturating_add(1);
        }
    }

    /// Build the todo to submit for `text`, or `None` when there is nothing
    /// to add. `reserved` holds the ids of adds awaiting a response.
    pub fn draft(
        &self,
        user_id: &str,
        text: &str,
        now: i64,
        reserved: &HashSet<TaskId>,
    ) -> Option<Todo> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Todo::new(user_id, self.next_task_id(now, reserved), text))
    }

    /// Append a todo to the list matching its flag
    pub fn insert(&mut self, todo: Todo) {
        if todo.completed {
            self.completed.push(todo);
        } else {
            self.incomplete.push(todo);
        }
    }

    /// Move an incomplete task to the end of the completed list.
    ///
    /// Returns `false` when no incomplete task has that id.
    pub fn complete(&mut self, task_id: &TaskId) -> bool {
        let Some(index) = self
            .incomplete
            .iter()
            .position(|todo| &todo.task_id == task_id)
        else {
            return false;
        };

        let mut todo = self.incomplete.remove(index);
        todo.completed = true;
        self.completed.push(todo);
        true
    }

    /// Remove a task from the list selected by `completed` only
    pub fn delete(&mut self, task_id: &TaskId, completed: bool) -> bool {
        let list = if completed {
            &mut self.completed
        } else {
            &mut self.incomplete
        };
        let before = list.len();
        list.retain(|todo| &todo.task_id != task_id);
        list.len() != before
    }

    /// Replace the details of an incomplete task
    pub fn edit(&mut self, task_id: &TaskId, details: &str) -> bool {
        match self
            .incomplete
            .iter_mut()
            .find(|todo| &todo.task_id == task_id)
        {
            Some(todo) => {
                todo.task_details = details.to_string();
                true
            }
            None => false,
        }
    }

    /// Text shown in place of an empty incomplete list
    pub fn incomplete_placeholder(&self) -> Option<&'static str> {
        self.incomplete.is_empty().then_some(NO_PENDING_MSG)
    }

    /// Text shown in place of an empty completed list
    pub fn completed_placeholder(&self) -> Option<&'static str> {
        if !self.completed.is_empty() {
            None
        } else if self.incomplete.is_empty() {
            Some(ALL_DONE_MSG)
        } else {
            Some(NOTHING_COMPLETED_MSG)
        }
    }
}
