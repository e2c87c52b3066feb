// Presentation layer - HTTP routes over the template service
pub mod app_state;
pub mod handlers;
