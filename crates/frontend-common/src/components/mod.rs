mod error_message;

pub use error_message::ErrorMessage;
