//! Todo API service bound to the current session

use crate::client::{create_todo_client, ClientError};
use todo_core::{Session, TaskId, Todo};
use todo_http::client::AuthenticatedTodoClient;

pub const ADD_FAILED_MSG: &str = "An error occurred while adding the todo. Please try again later.";
pub const UPDATE_FAILED_MSG: &str =
    "An error occurred while updating status of the todo. Please try again later.";
pub const EDIT_FAILED_MSG: &str =
    "An error occurred while updating the todo. Please try again later.";
pub const DELETE_FAILED_MSG: &str =
    "An error occurred while deleting the todo. Please try again later.";

#[derive(Clone)]
pub struct TodoService {
    client: AuthenticatedTodoClient,
    user_id: String,
}

impl TodoService {
    pub fn new(session: &Session) -> Result<Self, ClientError> {
        Ok(Self {
            client: create_todo_client(session)?,
            user_id: session.user_id.clone(),
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Todos of the session's user, `None` when the API returned no list
    pub async fn fetch(&self) -> Result<Option<Vec<Todo>>, ClientError> {
        self.client.fetch_todos(&self.user_id).await
    }

    pub async fn add(&self, todo: &Todo) -> Result<(), ClientError> {
        self.client.add_todo(todo).await
    }

    pub async fn complete(&self, task_id: &TaskId) -> Result<(), ClientError> {
        self.client
            .update_todo(&self.user_id, task_id, true, None)
            .await
    }

    /// Change the details of an incomplete todo
    pub async fn edit(&self, task_id: &TaskId, details: &str) -> Result<(), ClientError> {
        self.client
            .update_todo(&self.user_id, task_id, false, Some(details))
            .await
    }

    pub async fn delete(&self, task_id: &TaskId) -> Result<(), ClientError> {
        self.client.delete_todo(&self.user_id, task_id).await
    }
}
