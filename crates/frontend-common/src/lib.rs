pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod services;
pub mod time;
pub mod utils;

pub use auth::{use_current_session, use_session, SessionContext, SessionProvider};
pub use client::{create_identity_client, create_todo_client};
pub use components::ErrorMessage;
pub use config::AppConfig;
