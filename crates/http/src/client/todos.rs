//! Todo API endpoints

use super::{AuthenticatedTodoClient, ClientError};
use crate::types::{DeleteTodoRequest, FetchTodosRequest, FetchTodosResponse, UpdateTodoRequest};
use reqwest::Method;
use todo_core::{TaskId, Todo};

impl AuthenticatedTodoClient {
    /// All todos of `user_id`, or `None` when the API returned no `data`
    pub async fn fetch_todos(&self, user_id: &str) -> Result<Option<Vec<Todo>>, ClientError> {
        tracing::debug!(user_id, "Fetching todos");
        let request = self
            .request(Method::POST, "/fetchTodo")
            .json(&FetchTodosRequest {
                user_id: user_id.to_string(),
            });
        let response: FetchTodosResponse = self.execute(request).await?;
        Ok(response.data)
    }

    /// Store a new todo
    pub async fn add_todo(&self, todo: &Todo) -> Result<(), ClientError> {
        tracing::debug!(task_id = %todo.task_id, "Adding todo");
        let request = self.request(Method::POST, "/addTodo").json(todo);
        self.execute_unit(request).await
    }

    /// Update the completion flag and, when given, the details of a todo
    pub async fn update_todo(
        &self,
        user_id: &str,
        task_id: &TaskId,
        completed: bool,
        task_details: Option<&str>,
    ) -> Result<(), ClientError> {
        tracing::debug!(%task_id, completed, "Updating todo");
        let request = self
            .request(Method::POST, "/updateTodo")
            .json(&UpdateTodoRequest {
                user_id: user_id.to_string(),
                task_id: task_id.clone(),
                completed,
                task_details: task_details.map(str::to_string),
            });
        self.execute_unit(request).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, user_id: &str, task_id: &TaskId) -> Result<(), ClientError> {
        tracing::debug!(%task_id, "Deleting todo");
        let request = self
            .request(Method::POST, "/deleteTodo")
            .json(&DeleteTodoRequest {
                user_id: user_id.to_string(),
                task_id: task_id.clone(),
            });
        self.execute_unit(request).await
    }
}
