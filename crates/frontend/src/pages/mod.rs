mod dashboard;
mod login;
mod not_found;
mod signup;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
