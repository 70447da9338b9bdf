//! Session context and provider
//!
//! The session lives in a reducer provided at the root of the app and is
//! mirrored into session storage on every change, so a page reload picks it
//! back up.

use super::storage::browser_store;
use crate::time::now_secs;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use todo_core::{Access, AuthGate, Session};
use yew::prelude::*;

/// Longest delay a browser timer accepts, in milliseconds
const MAX_TIMER_MS: i64 = i32::MAX as i64;

/// Session context data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

/// Session lifecycle actions
pub enum SessionAction {
    /// Persist a freshly assembled session
    Login(Session),
    /// Drop the session and its stored copy
    Logout,
    /// Re-run the access check against storage, dropping an expired session
    Validate,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl SessionState {
    /// Load whatever session the tab has stored
    pub fn restore() -> Self {
        Self {
            session: browser_store().read(),
        }
    }

    /// Valid session at `now`
    pub fn valid_session(&self, now: i64) -> Option<&Session> {
        self.session.as_ref().filter(|session| session.is_valid(now))
    }

    pub fn is_valid(&self, now: i64) -> bool {
        self.valid_session(now).is_some()
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = browser_store();
        match action {
            SessionAction::Login(session) => {
                if let Err(e) = store.save(&session) {
                    tracing::error!("Failed to persist session: {e}");
                }
                tracing::info!(user_id = %session.user_id, "Session started");
                Rc::new(Self {
                    session: Some(session),
                })
            }
            SessionAction::Logout => {
                if let Err(e) = store.clear() {
                    tracing::warn!("Failed to clear session: {e}");
                }
                tracing::info!("Session ended");
                Rc::new(Self { session: None })
            }
            SessionAction::Validate => {
                let session = match AuthGate::check(&store, now_secs()) {
                    Access::Granted(session) => Some(session),
                    Access::Denied => None,
                };
                if session == self.session {
                    self
                } else {
                    Rc::new(Self { session })
                }
            }
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::restore);

    // Drop the session the moment it expires
    {
        let state = state.clone();
        use_effect_with(state.session.clone(), move |session| {
            let timeout = session
                .as_ref()
                .and_then(|session| session.remaining_secs(now_secs()))
                .map(|remaining| {
                    let delay_ms = remaining.saturating_mul(1000).min(MAX_TIMER_MS) as u32;
                    tracing::debug!(delay_ms, "Scheduling session expiry check");
                    Timeout::new(delay_ms, move || {
                        state.dispatch(SessionAction::Validate);
                    })
                });

            move || drop(timeout)
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current session
#[hook]
pub fn use_current_session() -> Option<Session> {
    let session = use_session();
    session.session.clone()
}
