//! HTTP request handlers for API endpoints.

pub mod health;
pub mod links;
pub mod shorten;

pub use health::health_handler;
pub use links::link_metadata_handler;
pub use shorten::shorten_handler;
