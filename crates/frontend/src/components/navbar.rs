use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar navbar-expand-lg navbar-light bg-light">
            <div class="container-fluid">
                <span class="navbar-brand">{"TodoApp"}</span>
                <button class="btn btn-outline-danger" onclick={props.on_logout.clone()}>
                    {"Logout"}
                </button>
            </div>
        </nav>
    }
}
