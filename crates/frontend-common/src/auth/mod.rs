//! Session handling

pub mod context;
pub mod storage;

pub use context::{
    use_current_session, use_session, SessionAction, SessionContext, SessionProvider,
    SessionState,
};
pub use storage::{browser_store, BrowserSessionStorage};
