mod app;
mod auth_guard;
mod components;
mod pages;

use app::App;
use todo_frontend_common::{logging, AppConfig};

fn main() {
    logging::init();

    if let Err(e) = AppConfig::client_config().validate() {
        tracing::error!("Client configuration is incomplete: {e}");
    }

    yew::Renderer::<App>::new().render();
}
