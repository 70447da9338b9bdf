use crate::app::Route;
use todo_core::validation::{
    SignupForm, INVALID_EMAIL_MSG, INVALID_FORM_MSG, INVALID_NAME_MSG, PASSWORD_MISMATCH_MSG,
    SHORT_PASSWORD_MSG,
};
use todo_frontend_common::services::AuthApiService;
use todo_frontend_common::utils::{alert, reload};
use todo_frontend_common::ErrorMessage;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const SIGNUP_SUCCESS_MSG: &str = "User created successfully!";

/// Input handler applying `update` to a copy of the form
fn on_field(
    form: &UseStateHandle<SignupForm>,
    update: fn(&mut SignupForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let navigator = use_navigator();
    let form = use_state(SignupForm::default);

    let on_name_input = on_field(&form, SignupForm::set_name);
    let on_email_input = on_field(&form, SignupForm::set_email);
    let on_password_input = on_field(&form, SignupForm::set_password);
    let on_confirm_input = on_field(&form, SignupForm::set_confirm_password);

    let on_notifications_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.notifications = input.checked();
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

            let submitted = (*form).clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthApiService::new()
                    .sign_up(
                        &submitted.email,
                        &submitted.password,
                        &submitted.name,
                        submitted.notifications,
                    )
                    .await;
                match result {
                    Ok(_) => {
                        alert(SIGNUP_SUCCESS_MSG);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Sign-up failed: {e}");
                        alert(&e.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="signup-page">
            <div class="container">
                <div class="row justify-content-center">
                    <div class="col-md-6">
                        <div class="card signup-form mt-5">
                            <h3 class="card-title text-center mt-3">{"Sign up"}</h3>
                            <form>
                                <div class="form-group m-3 px-5">
                                    <input type="text" class="form-control" id="nameInput" placeholder="Name"
                                        value={form.name.clone()} oninput={on_name_input} />
                                    if !form.name_valid {
                                        <ErrorMessage msg={INVALID_NAME_MSG} />
                                    }
                                </div>
                                <div class="form-group m-3 px-5">
                                    <input type="text" class="form-control" id="emailInput" placeholder="Email"
                                        value={form.email.clone()} oninput={on_email_input} />
                                    if !form.email_valid {
                                        <ErrorMessage msg={INVALID_EMAIL_MSG} />
                                    }
                                </div>
                                <div class="form-group m-3 px-5">
                                    <input type="password" class="form-control" id="passwordInput" placeholder="Password"
                                        value={form.password.clone()} oninput={on_password_input} />
                                    if !form.password_valid {
                                        <ErrorMessage msg={SHORT_PASSWORD_MSG} />
                                    }
                                </div>
                                <div class="form-group m-3 px-5">
                                    <input type="password" class="form-control" id="confirmPasswordInput" placeholder="Confirm password"
                                        value={form.confirm_password.clone()} oninput={on_confirm_input} />
                                    if !form.passwords_match {
                                        <ErrorMessage msg={PASSWORD_MISMATCH_MSG} />
                                    }
                                </div>
                                <div class="form-group">
                                    <input class="form-check-input mx-3" type="checkbox" id="notificationsInput"
                                        checked={form.notifications} onchange={on_notifications_change} />
                                    <label class="form-check-label" for="notificationsInput">{"Enable notifications"}</label>
                                </div>
                            </form>
                            <Link<Route> to={Route::Login} classes={classes!("text-center", "link-info")}>
                                {"Already have an account? Login"}
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
