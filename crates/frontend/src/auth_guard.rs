//! Authentication guard component for protected routes

use crate::app::{ReplaceRedirect, Route};
use todo_frontend_common::auth::{use_session, SessionAction};
use todo_frontend_common::time::now_secs;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only for a valid session, otherwise sends the user to
/// login without leaving the protected page in history
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let is_valid = session.is_valid(now_secs());

    // Clear an expired or partial session as soon as the guard mounts
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if !is_valid {
                session.dispatch(SessionAction::Validate);
            }
        });
    }

    if is_valid {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <ReplaceRedirect to={Route::Login} /> }
    }
}
