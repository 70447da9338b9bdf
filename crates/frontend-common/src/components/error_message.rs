//! Inline field error

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorMessageProps {
    pub msg: AttrValue,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <small class="error-msg d-block text-danger text-start">{props.msg.clone()}</small>
    }
}
