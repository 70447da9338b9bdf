//! Todo client core types and logic

pub mod board;
pub mod config;
pub mod error;
pub mod gate;
pub mod session;
pub mod task;
pub mod token;
pub mod validation;

pub use board::{BoardChange, TodoBoard};
pub use config::{ClientConfig, IdentityConfig};
pub use error::{Error, Result};
pub use gate::{Access, AuthGate};
pub use session::{MemoryStorage, Session, SessionStorage, SessionStore, SESSION_KEY};
pub use task::{TaskId, Todo};
pub use token::AuthTokens;
