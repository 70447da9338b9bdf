use crate::app::Route;
use todo_core::validation::{LoginForm, INVALID_EMAIL_MSG, INVALID_FORM_MSG, SHORT_PASSWORD_MSG};
use todo_frontend_common::auth::{use_session, SessionAction};
use todo_frontend_common::services::AuthApiService;
use todo_frontend_common::utils::{alert, reload};
use todo_frontend_common::ErrorMessage;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_email(input.value());
            form.set(next);
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_password(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            if !form.can_submit() {
                alert(INVALID_FORM_MSG);
                reload();
                return;
            }

            let email = form.email.clone();
            let password = form.password.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(&email, &password).await {
                    Ok(new_session) => {
                        session.dispatch(SessionAction::Login(new_session));
                        if let Some(navigator) = navigator {
                            navigator.replace(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Login failed: {e}");
                        alert(&e.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <div class="container">
                <div class="row justify-content-center">
                    <div class="col-md-6">
                        <div class="card login-form mt-5">
                            <h3 class="card-title text-center mt-3">{"Log In"}</h3>
                            <form>
                                <div class="form-group m-3 px-5">
                                    <input
                                        type="text"
                                        class="form-control"
                                        id="emailInput"
                                        placeholder="Email"
                                        value={form.email.clone()}
                                        oninput={on_email_input}
                                    />
                                    if !form.email_valid {
                                        <ErrorMessage msg={INVALID_EMAIL_MSG} />
                                    }
                                </div>
                                <div class="form-group m-3 px-5">
                                    <input
                                        type="password"
                                        class="form-control"
                                        id="passwordInput"
                                        placeholder="Password"
                                        value={form.password.clone()}
                                        oninput={on_password_input}
                                    />
                                    if !form.password_valid {
                                        <ErrorMessage msg={SHORT_PASSWORD_MSG} />
                                    }
                                </div>
                            </form>
                            <Link<Route> to={Route::Signup} classes={classes!("text-center", "link-info")}>
                                {"Don't have an account? Sign Up"}
                            </Link<Route>>
                            <div class="text-center mb-3">
                                <button class="btn btn-primary m-3" onclick={on_submit}>{"Submit"}</button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
