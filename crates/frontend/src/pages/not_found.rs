use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container text-center mt-5">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Login} classes={classes!("link-info")}>
                {"Back to login"}
            </Link<Route>>
        </div>
    }
}
