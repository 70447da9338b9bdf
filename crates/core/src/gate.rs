//! Access decision for protected views

use crate::session::{Session, SessionStorage, SessionStore};

/// Outcome of an access check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted(Session),
    Denied,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// Guards protected views behind a valid session
pub struct AuthGate;

impl AuthGate {
    /// Grant access when the stored session is valid at `now`.
    ///
    /// A denied check removes whatever is stored, so an expired session does
    /// not linger after the redirect to login.
    pub fn check<S: SessionStorage>(store: &SessionStore<S>, now: i64) -> Access {
        match store.read() {
            Some(session) if session.is_valid(now) => Access::Granted(session),
            stale => {
                if stale.is_some() {
                    tracing::info!("Stored session is no longer valid, clearing it");
                }
                if let Err(e) = store.clear() {
                    tracing::warn!("Failed to clear session: {e}");
                }
                Access::Denied
            }
        }
    }
}
