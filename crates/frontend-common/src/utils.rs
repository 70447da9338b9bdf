//! Browser helpers shared by the views

use std::fmt::Display;

/// Show a blocking alert dialog
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Reload the current page, discarding form state
pub fn reload() {
    if let Err(e) = gloo::utils::window().location().reload() {
        tracing::warn!("Failed to reload page: {e:?}");
    }
}

/// Log a failed API call and tell the user with a generic message
pub fn report_failure(error: &impl Display, user_message: &str) {
    tracing::error!("{error}");
    alert(user_message);
}
