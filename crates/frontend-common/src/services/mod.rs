pub mod auth;
pub mod todos;

pub use auth::AuthApiService;
pub use todos::TodoService;
