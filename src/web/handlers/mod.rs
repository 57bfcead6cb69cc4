//! HTTP request handlers for web pages.

pub mod dashboard;
pub mod login;

pub use dashboard::dashboard_handler;
pub use login::login_handler;
