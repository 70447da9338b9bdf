use crate::auth_guard::RequireAuth;
use crate::pages::{Dashboard, Login, NotFound, Signup};
use todo_frontend_common::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <ReplaceRedirect to={Route::Login} /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <Dashboard />
            </RequireAuth>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <div class="App">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReplaceRedirectProps {
    pub to: Route,
}

/// Redirect that replaces the current history entry
#[function_component(ReplaceRedirect)]
pub fn replace_redirect(props: &ReplaceRedirectProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        if let Some(navigator) = navigator {
            navigator.replace(to);
        }
    });

    html! {}
}
