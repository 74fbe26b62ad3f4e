//! Browser-facing pages rendered with Askama.
//!
//! # Modules
//!
//! - [`error`] - [`PageError`], the HTML counterpart of [`crate::error::AppError`]
//! - [`form`] - Form body of the creation page
//! - [`handlers`] - Page handlers
//! - [`routes`] - Page route configuration

pub mod error;
pub mod form;
pub mod handlers;
pub mod routes;

pub use error::PageError;
